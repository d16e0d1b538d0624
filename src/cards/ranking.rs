use super::rank::Rank;

/// A poker hand's category and the rank(s) that decide it, ignoring
/// kickers. Declaration order is significant: `derive(Ord)` compares
/// variants by discriminant first, which is exactly the standard Hold'em
/// category order (high card weakest, straight flush strongest), so no
/// hand-rolled numeric encoding (`category * B^6 + ...`) is needed — the
/// type system already enforces it.
///
/// A straight flush whose high card is the ace is the royal flush; no
/// separate variant exists for it; see [`Ranking::is_royal`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, serde::Serialize)]
pub enum Ranking {
    HighCard(Rank),
    OnePair(Rank),
    TwoPair(Rank, Rank),
    ThreeOAK(Rank),
    Straight(Rank),
    Flush(Rank),
    FullHouse(Rank, Rank),
    FourOAK(Rank),
    StraightFlush(Rank),
}

impl Ranking {
    pub fn is_royal(&self) -> bool {
        matches!(self, Ranking::StraightFlush(Rank::Ace))
    }

    /// how many kicker cards (beyond the ranks named in this category)
    /// break a tie.
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// a 13-bit mask of ranks that are *not* part of this category's
    /// defining cards, i.e. the ranks eligible to be kickers.
    pub fn kicker_mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi) => !u16::from(hi),
            Ranking::FullHouse(..)
            | Ranking::StraightFlush(..)
            | Ranking::Straight(..)
            | Ranking::Flush(..) => unreachable!("category carries no kickers"),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::StraightFlush(Rank::Ace) => write!(f, "royal flush"),
            Ranking::StraightFlush(r) => write!(f, "straight flush, {r} high"),
            Ranking::FourOAK(r) => write!(f, "four of a kind, {r}s"),
            Ranking::FullHouse(r1, r2) => write!(f, "full house, {r1}s over {r2}s"),
            Ranking::Flush(r) => write!(f, "flush, {r} high"),
            Ranking::Straight(r) => write!(f, "straight, {r} high"),
            Ranking::ThreeOAK(r) => write!(f, "three of a kind, {r}s"),
            Ranking::TwoPair(r1, r2) => write!(f, "two pair, {r1}s and {r2}s"),
            Ranking::OnePair(r) => write!(f, "pair of {r}s"),
            Ranking::HighCard(r) => write!(f, "high card, {r}"),
        }
    }
}
