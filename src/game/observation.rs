use super::street::Street;
use crate::Chips;
use crate::DECK;
use crate::OBS;
use crate::STACK;
use crate::cards::card::Card;

/// Fixed-length encoding of what one player can see. This is the sole
/// interface the estimators consume:
///
/// - 0..6   one-hot of the viewing player's hole card
/// - 6..12  one-hot of the board card, all zero before the flop
/// - 12     pot size normalized by twice the starting stack
/// - 13     street indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation([f32; OBS]);

impl Observation {
    pub fn vector(&self) -> &[f32; OBS] {
        &self.0
    }
}

impl From<(Card, Option<Card>, Chips, Street)> for Observation {
    fn from((hole, board, pot, street): (Card, Option<Card>, Chips, Street)) -> Self {
        let mut obs = [0f32; OBS];
        obs[u8::from(hole) as usize] = 1.;
        if let Some(board) = board {
            obs[DECK + u8::from(board) as usize] = 1.;
        }
        obs[OBS - 2] = pot as f32 / (2 * STACK) as f32;
        obs[OBS - 1] = street as isize as f32;
        Self(obs)
    }
}

impl From<[f32; OBS]> for Observation {
    fn from(vector: [f32; OBS]) -> Self {
        Self(vector)
    }
}
