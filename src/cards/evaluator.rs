use super::card::Card;
use super::hand::Hand;
use super::kickers::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// Scores a hand of 5 to 7 cards by finding its best 5-card category via
/// bitwise scans over rank and suit masks, rather than building a lookup
/// table or enumerating every 5-card subset explicitly.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Evaluator {
    /// the best `Ranking` this hand contains, trying strongest categories
    /// first so the first hit wins.
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush_or_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("a hand of at least one card always has a high card")
    }

    /// the kicker ranks that break ties within `ranking`'s category.
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        let n = ranking.n_kickers();
        if n == 0 {
            return Kickers::from(0u16);
        }
        let mut bits = ranking.kicker_mask() & self.rank_masks();
        while bits.count_ones() as usize > n {
            bits &= !(1 << bits.trailing_zeros());
        }
        Kickers::from(bits)
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).and_then(|hi| {
            self.find_rank_of_n_oak_under(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .or(Some(Ranking::OnePair(hi)))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|trips| {
            self.find_rank_of_n_oak_under(2, Some(trips))
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(self.rank_masks()).map(Ranking::Straight)
    }
    fn find_straight_flush_or_flush(&self) -> Option<Ranking> {
        let suit = self.find_suit_of_flush()?;
        let masks = self.suit_masks();
        let bits = masks[suit as usize];
        if let Some(high) = Self::find_rank_of_straight(bits) {
            Some(Ranking::StraightFlush(high))
        } else {
            Some(Ranking::Flush(Self::highest_rank(bits)))
        }
    }

    fn find_rank_of_straight(mask: u16) -> Option<Rank> {
        const WHEEL: u16 = 0b_1_0000_0000_1111;
        let mut bits = mask;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Self::highest_rank(bits))
        } else if mask & WHEEL == WHEEL {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        self.suit_count()
            .iter()
            .position(|&n| n >= 5)
            .map(|i| Suit::from(i as u8))
    }
    fn find_rank_of_n_oak_under(&self, n: usize, below: Option<Rank>) -> Option<Rank> {
        let ceiling = below.map(|r| r as u8).unwrap_or(13);
        let mut rank = ceiling;
        while rank > 0 {
            rank -= 1;
            let count = self.count_of_rank(Rank::from(rank));
            if count as usize >= n {
                return Some(Rank::from(rank));
            }
        }
        None
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_under(n, None)
    }

    fn count_of_rank(&self, rank: Rank) -> u32 {
        Vec::<Card>::from(self.0)
            .iter()
            .filter(|c| c.rank() == rank)
            .count() as u32
    }

    /// the highest set bit in a 13-bit rank mask, as a `Rank`.
    fn highest_rank(mask: u16) -> Rank {
        Rank::from((15 - mask.leading_zeros()) as u8)
    }

    /// which ranks appear in the hand, ignoring suit.
    fn rank_masks(&self) -> u16 {
        Vec::<Card>::from(self.0)
            .iter()
            .map(|c| u16::from(c.rank()))
            .fold(0, |acc, r| acc | r)
    }
    /// how many cards of each suit the hand holds.
    fn suit_count(&self) -> [u8; 4] {
        Vec::<Card>::from(self.0)
            .iter()
            .map(|c| c.suit() as u8)
            .fold([0; 4], |mut counts, s| {
                counts[s as usize] += 1;
                counts
            })
    }
    /// which ranks appear in the hand, grouped by suit.
    fn suit_masks(&self) -> [u16; 4] {
        Vec::<Card>::from(self.0)
            .iter()
            .map(|c| (c.suit() as u8, u16::from(c.rank())))
            .fold([0; 4], |mut suits, (s, r)| {
                suits[s as usize] |= r;
                suits
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn evaluate(cards: Vec<(Rank, Suit)>) -> Ranking {
        let hand: Hand = cards
            .into_iter()
            .map(|(r, s)| Card::new(r, s))
            .collect();
        Evaluator::from(hand).find_ranking()
    }

    #[test]
    fn high_card() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::King, Suit::Heart),
            (Rank::Queen, Suit::Diamond),
            (Rank::Jack, Suit::Club),
            (Rank::Nine, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::HighCard(Rank::Ace));
    }

    #[test]
    fn one_pair() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::King, Suit::Diamond),
            (Rank::Queen, Suit::Club),
            (Rank::Jack, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::OnePair(Rank::Ace));
    }

    #[test]
    fn two_pair() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::King, Suit::Diamond),
            (Rank::King, Suit::Club),
            (Rank::Queen, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::TwoPair(Rank::Ace, Rank::King));
    }

    #[test]
    fn three_oak() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::Ace, Suit::Diamond),
            (Rank::King, Suit::Club),
            (Rank::Queen, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::ThreeOAK(Rank::Ace));
    }

    #[test]
    fn straight() {
        let hand = vec![
            (Rank::Ten, Suit::Spade),
            (Rank::Jack, Suit::Heart),
            (Rank::Queen, Suit::Diamond),
            (Rank::King, Suit::Club),
            (Rank::Ace, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::Straight(Rank::Ace));
    }

    #[test]
    fn wheel_straight() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::Two, Suit::Heart),
            (Rank::Three, Suit::Diamond),
            (Rank::Four, Suit::Club),
            (Rank::Five, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::Straight(Rank::Five));
    }

    #[test]
    fn flush() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::King, Suit::Spade),
            (Rank::Queen, Suit::Spade),
            (Rank::Jack, Suit::Spade),
            (Rank::Nine, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::Flush(Rank::Ace));
    }

    #[test]
    fn full_house() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::Ace, Suit::Diamond),
            (Rank::King, Suit::Club),
            (Rank::King, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::Ace, Suit::Diamond),
            (Rank::Ace, Suit::Club),
            (Rank::King, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::FourOAK(Rank::Ace));
    }

    #[test]
    fn straight_flush() {
        let hand = vec![
            (Rank::Ten, Suit::Spade),
            (Rank::Jack, Suit::Spade),
            (Rank::Queen, Suit::Spade),
            (Rank::King, Suit::Spade),
            (Rank::Ace, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn royal_flush_is_a_straight_flush_topped_by_the_ace() {
        let hand = vec![
            (Rank::Ten, Suit::Heart),
            (Rank::Jack, Suit::Heart),
            (Rank::Queen, Suit::Heart),
            (Rank::King, Suit::Heart),
            (Rank::Ace, Suit::Heart),
        ];
        let ranking = evaluate(hand);
        assert!(ranking.is_royal());
    }

    #[test]
    fn seven_card_hand_picks_best_five() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::King, Suit::Diamond),
            (Rank::King, Suit::Club),
            (Rank::Queen, Suit::Spade),
            (Rank::Jack, Suit::Heart),
            (Rank::Nine, Suit::Diamond),
        ];
        assert_eq!(evaluate(hand), Ranking::TwoPair(Rank::Ace, Rank::King));
    }

    #[test]
    fn full_house_beats_flush_in_seven_card_hand() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::Ace, Suit::Diamond),
            (Rank::King, Suit::Spade),
            (Rank::King, Suit::Heart),
            (Rank::Queen, Suit::Spade),
            (Rank::Jack, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak_beats_full_house_in_seven_card_hand() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::Ace, Suit::Heart),
            (Rank::Ace, Suit::Diamond),
            (Rank::Ace, Suit::Club),
            (Rank::King, Suit::Spade),
            (Rank::King, Suit::Heart),
            (Rank::Queen, Suit::Diamond),
        ];
        assert_eq!(evaluate(hand), Ranking::FourOAK(Rank::Ace));
    }

    #[test]
    fn low_straight_across_six_cards() {
        let hand = vec![
            (Rank::Ace, Suit::Spade),
            (Rank::Two, Suit::Spade),
            (Rank::Three, Suit::Heart),
            (Rank::Four, Suit::Diamond),
            (Rank::Five, Suit::Club),
            (Rank::Six, Suit::Spade),
        ];
        assert_eq!(evaluate(hand), Ranking::Straight(Rank::Six));
    }

    #[test]
    fn kickers_break_high_card_ties() {
        let winner = evaluate(vec![
            (Rank::Ace, Suit::Spade),
            (Rank::King, Suit::Heart),
            (Rank::Queen, Suit::Diamond),
            (Rank::Jack, Suit::Club),
            (Rank::Nine, Suit::Spade),
        ]);
        let loser = evaluate(vec![
            (Rank::Ace, Suit::Spade),
            (Rank::King, Suit::Heart),
            (Rank::Queen, Suit::Diamond),
            (Rank::Jack, Suit::Club),
            (Rank::Eight, Suit::Spade),
        ]);
        let hand_w: Hand = vec![
            Card::new(Rank::Ace, Suit::Spade),
            Card::new(Rank::King, Suit::Heart),
            Card::new(Rank::Queen, Suit::Diamond),
            Card::new(Rank::Jack, Suit::Club),
            Card::new(Rank::Nine, Suit::Spade),
        ]
        .into_iter()
        .collect();
        let hand_l: Hand = vec![
            Card::new(Rank::Ace, Suit::Spade),
            Card::new(Rank::King, Suit::Heart),
            Card::new(Rank::Queen, Suit::Diamond),
            Card::new(Rank::Jack, Suit::Club),
            Card::new(Rank::Eight, Suit::Spade),
        ]
        .into_iter()
        .collect();
        assert_eq!(winner, loser);
        let kicks_w = Evaluator::from(hand_w).find_kickers(winner);
        let kicks_l = Evaluator::from(hand_l).find_kickers(loser);
        assert!(kicks_w > kicks_l);
    }
}
