use super::rank::Rank;
use crate::DECK;
use crate::RANKS;

/// One of the 6 Leduc cards. Two copies of each rank, distinguished
/// only for dealing without replacement; copies are strategically identical.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % RANKS as u8)
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-5
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < DECK as u8, "Invalid card u8: {}", n);
        Self(n)
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

/// u8 injection
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << c.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            self.rank(),
            match self.0 as usize / RANKS {
                0 => "s",
                _ => "h",
            }
        )
    }
}
