use crate::Utility;
use crate::game::observation::Observation;

/// One reinforcement-learning transition from the acting player's
/// perspective. Reward is the signed chip delta and is zero except on
/// the transition that terminates the hand.
#[derive(Debug, Clone)]
pub struct Transition {
    pub obs: Observation,
    pub action: usize,
    pub reward: Utility,
    pub next: Observation,
    pub done: bool,
}

/// One supervised imitation pair. The action label is the one the
/// best-response estimator chose, which the average-strategy estimator
/// learns to reproduce.
#[derive(Debug, Clone)]
pub struct Imitation {
    pub obs: Observation,
    pub action: usize,
}
