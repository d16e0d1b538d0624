use super::card::Card;
use std::fmt::{Display, Formatter, Result};

/// The 0..5 shared community cards. Street is tracked by the hand engine's
/// `Phase`, not here — a `Board` is just the cards dealt so far.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Board {
        Board(Vec::with_capacity(5))
    }
    pub fn extend(&mut self, cards: Vec<Card>) {
        self.0.extend(cards);
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result {
        for card in &self.0 {
            write!(f, "{card} ")?;
        }
        Ok(())
    }
}
