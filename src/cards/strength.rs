use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kickers::Kickers;
use super::ranking::Ranking;

/// A hand's total-ordered strength: category first, kickers break ties
/// within a category. Field declaration order matters for `derive(Ord)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<24}{}", self.value, self.kicks)
    }
}
