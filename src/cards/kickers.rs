use super::rank::Rank;
use std::fmt::{Display, Formatter, Result};

/// The kicker ranks that break a tie within one [`super::ranking::Ranking`]
/// category, packed as a 13-bit mask (bit i set means rank i is a kicker).
/// Ordering falls out for free: a mask with a higher bit set is numerically
/// larger, which is exactly "has a higher kicker", so `derive(Ord)` on the
/// wrapped `u16` gives the correct tie-break comparison without walking
/// the set bit by bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Kickers(u16);

impl From<u16> for Kickers {
    fn from(mask: u16) -> Self {
        Kickers(mask)
    }
}

impl From<Kickers> for u16 {
    fn from(k: Kickers) -> u16 {
        k.0
    }
}

impl Display for Kickers {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let mut bits = self.0;
        while bits != 0 {
            let i = 15 - bits.leading_zeros() as u8;
            write!(f, "{}", Rank::from(i))?;
            bits &= !(1 << i);
        }
        Ok(())
    }
}
