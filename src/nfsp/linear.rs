use super::estimator::PolicyEstimator;
use super::estimator::ValueEstimator;
use super::experience::Imitation;
use super::experience::Transition;
use crate::ACTS;
use crate::OBS;
use crate::Probability;
use crate::Utility;
use crate::error::Error;
use crate::game::observation::Observation;

/// Single-layer linear map from observations to per-action scores,
/// trained by plain SGD. Stands in for the neural backends behind the
/// estimator traits so the trainer runs end to end out of the box.
#[derive(Debug, Clone)]
struct Linear {
    weights: [[f32; OBS]; ACTS],
    bias: [f32; ACTS],
    rate: f32,
}

impl Linear {
    fn new(rate: f32) -> Self {
        Self {
            weights: [[0f32; OBS]; ACTS],
            bias: [0f32; ACTS],
            rate,
        }
    }

    fn forward(&self, obs: &Observation) -> [f32; ACTS] {
        let x = obs.vector();
        let mut scores = self.bias;
        for (score, row) in scores.iter_mut().zip(self.weights.iter()) {
            *score += row.iter().zip(x.iter()).map(|(w, x)| w * x).sum::<f32>();
        }
        scores
    }

    /// gradient step on one output row: score_a ← score_a - rate * grad
    fn descend(&mut self, action: usize, grad: f32, obs: &Observation) {
        for (w, x) in self.weights[action].iter_mut().zip(obs.vector().iter()) {
            *w -= self.rate * grad * x;
        }
        self.bias[action] -= self.rate * grad;
    }
}

/// Best-response backend: Q-learning with MSE on the taken action,
/// bootstrapped from max Q(s') on non-terminal transitions.
#[derive(Debug, Clone)]
pub struct LinearValue(Linear);

impl LinearValue {
    pub fn new(rate: f32) -> Self {
        Self(Linear::new(rate))
    }
}

impl ValueEstimator for LinearValue {
    fn evaluate(&self, obs: &Observation) -> [Utility; ACTS] {
        self.0.forward(obs)
    }

    fn fit(&mut self, batch: &[Transition], gamma: Utility) -> Result<Utility, Error> {
        if batch.is_empty() {
            return Err(Error::Estimator("empty value batch".to_string()));
        }
        let mut loss = 0f32;
        for transition in batch {
            let q = self.0.forward(&transition.obs);
            let bootstrap = match transition.done {
                true => 0.,
                false => self
                    .0
                    .forward(&transition.next)
                    .into_iter()
                    .fold(f32::MIN, f32::max),
            };
            let target = transition.reward + gamma * bootstrap;
            let delta = q[transition.action] - target;
            loss += delta * delta;
            self.0.descend(transition.action, delta, &transition.obs);
        }
        Ok(loss / batch.len() as f32)
    }
}

/// Average-strategy backend: softmax classification trained by
/// cross-entropy toward the imitation labels.
#[derive(Debug, Clone)]
pub struct LinearPolicy(Linear);

impl LinearPolicy {
    pub fn new(rate: f32) -> Self {
        Self(Linear::new(rate))
    }

    fn softmax(scores: [f32; ACTS]) -> [Probability; ACTS] {
        let max = scores.into_iter().fold(f32::MIN, f32::max);
        let mut probs = scores;
        let mut sum = 0f32;
        for p in probs.iter_mut() {
            *p = (*p - max).exp();
            sum += *p;
        }
        for p in probs.iter_mut() {
            *p /= sum;
        }
        probs
    }
}

impl PolicyEstimator for LinearPolicy {
    fn distribution(&self, obs: &Observation) -> [Probability; ACTS] {
        Self::softmax(self.0.forward(obs))
    }

    fn fit(&mut self, batch: &[Imitation]) -> Result<Utility, Error> {
        if batch.is_empty() {
            return Err(Error::Estimator("empty policy batch".to_string()));
        }
        let mut loss = 0f32;
        for imitation in batch {
            let probs = Self::softmax(self.0.forward(&imitation.obs));
            loss -= probs[imitation.action].max(f32::MIN_POSITIVE).ln();
            for action in 0..ACTS {
                let indicator = (action == imitation.action) as u8 as f32;
                let grad = probs[action] - indicator;
                self.0.descend(action, grad, &imitation.obs);
            }
        }
        Ok(loss / batch.len() as f32)
    }
}
