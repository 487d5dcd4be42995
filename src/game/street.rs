/// Leduc has two betting rounds: before and after the single
/// community card is revealed. Transitions only move forward.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
}

impl Street {
    pub const fn next(&self) -> Self {
        match self {
            Self::Pref => Self::Flop,
            Self::Flop => panic!("terminal street"),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_forward() {
        assert!(Street::Pref.next() == Street::Flop);
        assert!(Street::Pref < Street::Flop);
    }
}
