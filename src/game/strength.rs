use crate::cards::card::Card;
use crate::cards::rank::Rank;

/// Showdown hand strength. Derived ordering does all the work:
/// any Pair beats any High, pairs compare by rank, and high-card
/// hands compare by the better of hole and board rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    High(Rank),
    Pair(Rank),
}

impl From<(Card, Card)> for Strength {
    fn from((hole, board): (Card, Card)) -> Self {
        if hole.rank() == board.rank() {
            Self::Pair(hole.rank())
        } else {
            Self::High(std::cmp::max(hole.rank(), board.rank()))
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::High(rank) => write!(f, "{} high", rank),
            Self::Pair(rank) => write!(f, "pair of {}s", rank),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_beats_high() {
        let pair = Strength::from((Card::from(0u8), Card::from(3u8)));
        let high = Strength::from((Card::from(2u8), Card::from(4u8)));
        assert!(matches!(pair, Strength::Pair(Rank::Jack)));
        assert!(matches!(high, Strength::High(Rank::King)));
        assert!(pair > high);
    }

    #[test]
    fn high_by_better_rank() {
        let qj = Strength::from((Card::from(0u8), Card::from(4u8)));
        let kj = Strength::from((Card::from(0u8), Card::from(5u8)));
        assert!(kj > qj);
    }

    #[test]
    fn shared_board_ties() {
        // both holes below the board rank under the same max
        let a = Strength::from((Card::from(0u8), Card::from(5u8)));
        let b = Strength::from((Card::from(1u8), Card::from(5u8)));
        assert!(a == b);
    }

    #[test]
    fn pairs_by_rank() {
        let jacks = Strength::from((Card::from(0u8), Card::from(3u8)));
        let kings = Strength::from((Card::from(2u8), Card::from(5u8)));
        assert!(kings > jacks);
    }
}
