use super::experience::Imitation;
use super::experience::Transition;
use crate::ACTS;
use crate::Probability;
use crate::Utility;
use crate::error::Error;
use crate::game::observation::Observation;

/// Capability contract for the best-response side of NFSP: a
/// Q-function over the discrete action space. Any learning backend
/// qualifies as long as it can evaluate an observation and run one
/// off-policy value update over a batch of transitions.
pub trait ValueEstimator {
    /// per-action value estimates for one observation
    fn evaluate(&self, obs: &Observation) -> [Utility; ACTS];
    /// one off-policy update toward r + γ max Q(s'); returns the loss
    fn fit(&mut self, batch: &[Transition], gamma: Utility) -> Result<Utility, Error>;
}

/// Capability contract for the average-strategy side of NFSP: a
/// distribution over actions trained by imitation of the best
/// response's historical choices.
pub trait PolicyEstimator {
    /// action distribution for one observation
    fn distribution(&self, obs: &Observation) -> [Probability; ACTS];
    /// one supervised classification update; returns the loss
    fn fit(&mut self, batch: &[Imitation]) -> Result<Utility, Error>;
}
