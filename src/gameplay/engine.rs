use super::action::Action;
use super::error::HandError;
use super::hand_state::HandState;
use super::phase::Phase;
use super::seat::{Seat, Status};
use super::settlement::Settlement;
use crate::cards::evaluator::Evaluator;
use crate::cards::hand::Hand as CardSet;
use crate::cards::strength::Strength;
use crate::pot;
use crate::{Chips, SeatId};
use std::collections::{HashMap, HashSet};

impl HandState {
    /// Deals a fresh hand to every `Active` seat, posts blinds (capping a
    /// short stack to an all-in blind rather than rejecting it), and sets
    /// up the first action of pre-flop. Heads-up seats follow the
    /// dealer-is-small-blind, dealer-acts-first convention; three or more
    /// seats follow the standard small-blind / big-blind / under-the-gun
    /// rotation.
    pub fn start(
        mut seats: Vec<Seat>,
        dealer: usize,
        small_blind: Chips,
        big_blind: Chips,
    ) -> Result<HandState, HandError> {
        for seat in seats.iter_mut() {
            seat.reset_for_new_hand();
        }
        let n = seats.len();
        let order: Vec<usize> = (0..n)
            .map(|step| (dealer + step) % n)
            .filter(|&i| seats[i].status == Status::Active)
            .collect();
        if order.len() < 2 {
            return Err(HandError::NotEnoughSeats);
        }

        let mut deck = crate::cards::deck::Deck::new();
        for &i in &order {
            let cards = deck.draw(2);
            seats[i].hole = Some(crate::cards::hole::Hole([cards[0], cards[1]]));
        }

        let (sb_idx, bb_idx, first_to_act) = if order.len() == 2 {
            (order[0], order[1], order[0])
        } else {
            (order[1], order[2], order[3 % order.len()])
        };

        let sb_amount = small_blind.min(seats[sb_idx].chips);
        seats[sb_idx].commit(sb_amount);
        let bb_amount = big_blind.min(seats[bb_idx].chips);
        seats[bb_idx].commit(bb_amount);

        let mut state = HandState {
            seats,
            board: crate::cards::board::Board::empty(),
            deck,
            phase: Phase::PreFlop,
            dealer,
            to_act: Some(first_to_act),
            // §4.D.1.6: the bet to match is the full big blind even when a
            // short stack could only post part of it as an all-in blind.
            current_bet: big_blind,
            min_raise: big_blind,
            last_aggressor: Some(bb_idx),
            small_blind,
            big_blind,
        };
        if !state.seats[first_to_act].can_act() {
            state.to_act = state.next_actable(first_to_act);
        }
        Ok(state)
    }

    /// the action types legal for the seat currently on the clock. Bet and
    /// raise entries carry only the *minimum* legal amount, expressed as
    /// the seat's resulting round total (not the chips added) per the
    /// wire protocol's amount convention — any total up to the seat's
    /// full stack is acceptable to [`HandState::apply`] as long as it
    /// clears that minimum or commits the whole stack.
    pub fn legal_actions(&self) -> Vec<Action> {
        let Some(idx) = self.to_act else {
            return Vec::new();
        };
        let seat = &self.seats[idx];
        if !seat.can_act() {
            return Vec::new();
        }
        let to_call = seat.to_call(self.current_bet);
        let mut actions = vec![Action::Fold];
        if to_call == Chips::ZERO {
            actions.push(Action::Check);
        } else if to_call < seat.chips {
            actions.push(Action::Call { amount: to_call });
        }
        if seat.chips > to_call {
            let min_total = if self.current_bet == Chips::ZERO {
                self.min_raise
            } else {
                self.current_bet + self.min_raise
            };
            let min_increment = min_total.saturating_sub(seat.round_contributed);
            if seat.chips >= min_increment {
                if self.current_bet == Chips::ZERO {
                    actions.push(Action::Bet { amount: min_total });
                } else {
                    actions.push(Action::Raise { amount: min_total });
                }
            }
        }
        if seat.chips > Chips::ZERO {
            actions.push(Action::AllIn { amount: seat.chips });
        }
        actions
    }

    /// Validates and applies one seat's action, then advances the turn —
    /// to the next seat, the next street, or to showdown. Never suspends;
    /// the room controller is the only thing that waits on a clock.
    pub fn apply(&mut self, seat_id: &str, action: Action) -> Result<(), HandError> {
        if self.phase == Phase::Showdown || self.phase == Phase::Complete {
            return Err(HandError::HandComplete);
        }
        let idx = self
            .seat_index(seat_id)
            .ok_or_else(|| HandError::NotYourTurn(seat_id.to_string()))?;
        if self.to_act != Some(idx) {
            return Err(HandError::NotYourTurn(seat_id.to_string()));
        }

        let chips = self.seats[idx].chips;
        let before = self.seats[idx].round_contributed;
        let to_call = self.current_bet.saturating_sub(before);

        if let Action::Fold = action {
            self.seats[idx].status = Status::Folded;
            self.seats[idx].acted_this_round = true;
            self.advance(idx);
            return Ok(());
        }

        let illegal = |reason: &str| {
            Err(HandError::IllegalAction {
                seat: seat_id.to_string(),
                action: action.to_string(),
                reason: reason.to_string(),
            })
        };

        let (put, reopens) = match action {
            Action::Fold => unreachable!("handled above"),
            Action::Check => {
                if to_call != Chips::ZERO {
                    return illegal("a bet is outstanding");
                }
                (Chips::ZERO, false)
            }
            Action::Call { .. } => {
                if to_call == Chips::ZERO {
                    return illegal("nothing to call");
                }
                // a call that can't be fully covered is silently promoted
                // to an all-in call rather than rejected.
                (to_call.min(chips), false)
            }
            Action::Bet { amount } => {
                if self.current_bet != Chips::ZERO {
                    return illegal("a bet is already outstanding, raise instead");
                }
                if amount <= before {
                    return illegal("must increase the round total");
                }
                let increment = amount - before;
                if increment > chips {
                    return illegal("exceeds the seat's stack");
                }
                if amount < self.min_raise && increment != chips {
                    return illegal("below the minimum bet");
                }
                (increment, true)
            }
            Action::Raise { amount } => {
                if self.current_bet == Chips::ZERO {
                    return illegal("nothing to raise, bet instead");
                }
                if amount <= before {
                    return illegal("must increase the round total");
                }
                let increment = amount - before;
                if increment > chips {
                    return illegal("exceeds the seat's stack");
                }
                let min_total = self.current_bet + self.min_raise;
                if amount < min_total && increment != chips {
                    return illegal("below the minimum raise");
                }
                (increment, amount >= min_total)
            }
            Action::AllIn { amount } => {
                if amount != chips {
                    return illegal("an all-in must commit the whole stack");
                }
                let increment = amount.saturating_sub(to_call);
                (amount, increment >= self.min_raise)
            }
            Action::Blind { .. } => {
                return illegal("blinds are posted automatically");
            }
        };

        self.seats[idx].commit(put);
        self.seats[idx].acted_this_round = true;
        let after = self.seats[idx].round_contributed;
        let prior_bet = self.current_bet;
        if after > prior_bet {
            self.current_bet = after;
            if reopens {
                self.min_raise = after - prior_bet;
                self.last_aggressor = Some(idx);
                for (i, seat) in self.seats.iter_mut().enumerate() {
                    if i != idx && seat.status == Status::Active {
                        seat.acted_this_round = false;
                    }
                }
            }
        }
        self.advance(idx);
        Ok(())
    }

    fn next_actable(&self, from: usize) -> Option<usize> {
        let n = self.seats.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&i| self.seats[i].can_act())
    }

    fn remaining_in_hand(&self) -> usize {
        self.seats.iter().filter(|s| s.is_in_hand()).count()
    }

    fn round_is_closed(&self) -> bool {
        self.seats.iter().all(|s| {
            s.status != Status::Active || (s.acted_this_round && s.round_contributed == self.current_bet)
        })
    }

    fn advance(&mut self, acted: usize) {
        if self.remaining_in_hand() <= 1 {
            self.to_act = None;
            self.phase = Phase::Showdown;
            return;
        }
        if self.round_is_closed() {
            self.open_next_street();
            return;
        }
        match self.next_actable(acted) {
            Some(i) => self.to_act = Some(i),
            None => self.open_next_street(),
        }
    }

    fn open_next_street(&mut self) {
        if self.phase == Phase::River || self.phase == Phase::Showdown {
            self.phase = Phase::Showdown;
            self.to_act = None;
            return;
        }
        self.phase = self.phase.next();
        for seat in self.seats.iter_mut() {
            seat.reset_for_new_round();
        }
        self.current_bet = Chips::ZERO;
        self.min_raise = self.big_blind;
        let n = self.phase.cards_to_deal();
        if n > 0 {
            let cards = self.deck.draw(n);
            self.board.extend(cards);
        }
        if self.remaining_in_hand() <= 1 {
            self.phase = Phase::Showdown;
            self.to_act = None;
            return;
        }
        let actable = self.seats.iter().filter(|s| s.can_act()).count();
        if actable < 2 {
            self.open_next_street();
            return;
        }
        self.to_act = self.next_actable(self.dealer);
    }

    /// Ends the hand: distributes every side pot to its best eligible
    /// hand, or — when everyone but one seat folded — to that seat
    /// uncontested without ever comparing hands.
    pub fn resolve(&mut self) -> Vec<Settlement> {
        while self.board.len() < 5 && self.remaining_in_hand() > 1 && self.phase != Phase::Showdown
        {
            self.open_next_street();
        }
        self.phase = Phase::Complete;

        let mut reward: HashMap<SeatId, Chips> = HashMap::new();
        let mut strength: HashMap<SeatId, Strength> = HashMap::new();
        for seat in &self.seats {
            reward.insert(seat.id.clone(), Chips::ZERO);
        }

        if self.remaining_in_hand() == 1 {
            let winner = self
                .seats
                .iter()
                .find(|s| s.is_in_hand())
                .expect("exactly one seat remains")
                .id
                .clone();
            *reward.get_mut(&winner).unwrap() = self.total_pot();
        } else {
            let contributions: HashMap<SeatId, Chips> = self
                .seats
                .iter()
                .filter(|s| s.hand_contributed > Chips::ZERO)
                .map(|s| (s.id.clone(), s.hand_contributed))
                .collect();
            let folded: HashSet<SeatId> = self
                .seats
                .iter()
                .filter(|s| s.status == Status::Folded)
                .map(|s| s.id.clone())
                .collect();
            for seat in self.seats.iter().filter(|s| s.is_in_hand()) {
                let hole = seat.hole.expect("a contesting seat was dealt a hole");
                let set: CardSet = hole.cards().into_iter().chain(self.board.cards().iter().copied()).collect();
                strength.insert(seat.id.clone(), Strength::from(Evaluator::from(set)));
            }

            let pots = pot::compute_side_pots(&contributions, &folded);
            let order: Vec<&String> = {
                let n = self.seats.len();
                let rotated: Vec<usize> = (1..=n).map(|step| (self.dealer + step) % n).collect();
                rotated.iter().map(|&i| &self.seats[i].id).collect()
            };
            for layer in pots {
                let best = layer
                    .eligible
                    .iter()
                    .filter_map(|id| strength.get(id).map(|s| (*s, id)))
                    .max_by_key(|(s, _)| *s);
                let Some((best_strength, _)) = best else {
                    continue;
                };
                let mut winners: Vec<&String> = layer
                    .eligible
                    .iter()
                    .filter(|id| strength.get(*id) == Some(&best_strength))
                    .collect();
                winners.sort_by_key(|id| order.iter().position(|o| o == id).unwrap_or(usize::MAX));
                let share = layer.amount.0 / winners.len() as u32;
                let remainder = layer.amount.0 % winners.len() as u32;
                for (i, id) in winners.iter().enumerate() {
                    let extra = if (i as u32) < remainder { 1 } else { 0 };
                    *reward.get_mut(*id).unwrap() += Chips(share + extra);
                }
            }
        }

        self.seats
            .iter()
            .map(|seat| Settlement {
                seat: seat.id.clone(),
                reward: reward.get(&seat.id).copied().unwrap_or(Chips::ZERO),
                risked: seat.hand_contributed,
                strength: strength.get(&seat.id).copied(),
            })
            .collect()
    }
}
