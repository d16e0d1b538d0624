use super::card::Card;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;

/// The 52-card universe, shuffled and drawn from the head.
///
/// Shuffling is seeded from [`OsRng`] rather than a PRNG like
/// `rand::thread_rng()` — fairness requires a cryptographically strong
/// source, since a predictable shuffle lets a player reconstruct the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A freshly shuffled 52-card deck.
    pub fn new() -> Deck {
        let mut cards: Vec<Card> = (0..52).map(Card::from).collect();
        cards.shuffle(&mut OsRng);
        Deck { cards }
    }

    /// Removes and returns the first `n` cards from the head of the deck.
    /// Panics if fewer than `n` cards remain; the engine only ever draws
    /// what the rules guarantee are still there.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        assert!(self.cards.len() >= n, "deck exhausted");
        self.cards.drain(..n).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_removes_from_head_and_shrinks() {
        let mut deck = Deck::new();
        assert_eq!(deck.remaining(), 52);
        let drawn = deck.draw(2);
        assert_eq!(drawn.len(), 2);
        assert_eq!(deck.remaining(), 50);
    }

    #[test]
    fn every_shuffle_is_a_full_52_card_permutation() {
        let deck = Deck::new();
        let mut seen = std::collections::HashSet::new();
        for card in deck.cards.iter() {
            assert!(seen.insert(u8::from(*card)), "duplicate card in deck");
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    #[should_panic(expected = "deck exhausted")]
    fn draw_more_than_remaining_panics() {
        let mut deck = Deck::new();
        deck.draw(53);
    }
}
