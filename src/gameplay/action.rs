use crate::Chips;
use std::fmt::{Display, Formatter, Result};

/// An action a seat takes on its turn. `Bet`/`Raise` carry the seat's
/// resulting *total* committed this round (not the chips added this
/// action) per the wire protocol's amount convention; `Call`/`AllIn`/
/// `Blind` carry the chips moved in that action, since there's no
/// round-total ambiguity for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    Fold,
    Check,
    Call { amount: Chips },
    Bet { amount: Chips },
    Raise { amount: Chips },
    AllIn { amount: Chips },
    Blind { amount: Chips },
}

impl Action {
    pub fn amount(&self) -> Chips {
        match self {
            Action::Fold | Action::Check => Chips::ZERO,
            Action::Call { amount }
            | Action::Bet { amount }
            | Action::Raise { amount }
            | Action::AllIn { amount }
            | Action::Blind { amount } => *amount,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Call { amount } => write!(f, "CALL  {amount}"),
            Action::Bet { amount } => write!(f, "BET   {amount}"),
            Action::Raise { amount } => write!(f, "RAISE {amount}"),
            Action::AllIn { amount } => write!(f, "ALLIN {amount}"),
            Action::Blind { amount } => write!(f, "BLIND {amount}"),
        }
    }
}
