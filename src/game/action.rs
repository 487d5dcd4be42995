use crate::ACTS;
use crate::B_BLIND;
use crate::Chips;
use crate::RAISE_MULTIPLES;
use crate::error::Error;
use colored::*;

/// Player decisions. Raise amounts are fixed multiples of the big
/// blind, so the whole action space collapses to ACTS discrete indices
/// for the estimators: 0 fold, 1 call, 2.. the raise sizes in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Call,
    Raise(Chips),
}

impl Action {
    /// the full discrete action space, in index order
    pub fn all() -> [Self; ACTS] {
        let mut actions = [Self::Fold; ACTS];
        actions[1] = Self::Call;
        for (i, multiple) in RAISE_MULTIPLES.iter().enumerate() {
            actions[2 + i] = Self::Raise(multiple * B_BLIND);
        }
        actions
    }

    /// position in the discrete action space.
    /// raises must come from the fixed size set, i.e. from ::all().
    pub fn index(&self) -> usize {
        match self {
            Self::Fold => 0,
            Self::Call => 1,
            Self::Raise(amount) => {
                2 + RAISE_MULTIPLES
                    .iter()
                    .position(|multiple| multiple * B_BLIND == *amount)
                    .expect("raise size from the fixed set")
            }
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = Error;
    fn try_from(n: usize) -> Result<Self, Error> {
        Action::all()
            .get(n)
            .copied()
            .ok_or_else(|| Error::InvalidAction(format!("index {} out of range", n)))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Call => write!(f, "{}", "CALL".yellow()),
            Action::Raise(amount) => write!(f, "{}", format!("RAISE {}", amount).green()),
        }
    }
}
