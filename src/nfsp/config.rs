use crate::Probability;
use crate::error::Error;

/// Training hyperparameters. Inconsistencies are fatal at startup,
/// before any episode runs; everything downstream assumes a validated
/// configuration.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Config {
    /// self-play episode budget
    pub episodes: usize,
    /// minibatch size sampled from each reservoir per update
    pub batch: usize,
    /// capacity of the reinforcement-learning reservoir
    pub rl_capacity: usize,
    /// capacity of the supervised-learning reservoir
    pub sl_capacity: usize,
    /// probability of acting on the best response during training
    pub anticipatory: Probability,
    /// probability of a uniform exploration override
    pub epsilon: Probability,
    /// SGD step size for the linear backends
    pub rate: f32,
    /// seed for the single training rng
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            episodes: crate::EPISODES,
            batch: crate::BATCH_SIZE,
            rl_capacity: crate::RL_BUFFER_SIZE,
            sl_capacity: crate::SL_BUFFER_SIZE,
            anticipatory: crate::ANTICIPATORY,
            epsilon: crate::EPSILON,
            rate: crate::LEARNING_RATE,
            seed: 0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.rl_capacity == 0 || self.sl_capacity == 0 {
            return Err(Error::Config("buffer capacity must be positive".to_string()));
        }
        if self.batch == 0 {
            return Err(Error::Config("batch size must be positive".to_string()));
        }
        if self.batch > self.rl_capacity || self.batch > self.sl_capacity {
            return Err(Error::Config(
                "batch size exceeds buffer capacity".to_string(),
            ));
        }
        if !(0. ..=1.).contains(&self.anticipatory) {
            return Err(Error::Config(
                "anticipatory parameter outside [0, 1]".to_string(),
            ));
        }
        if !(0. ..=1.).contains(&self.epsilon) {
            return Err(Error::Config("epsilon outside [0, 1]".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_fatal() {
        let config = Config {
            rl_capacity: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn batch_larger_than_buffer_is_fatal() {
        let config = Config {
            batch: 64,
            rl_capacity: 32,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn probabilities_bounded() {
        let config = Config {
            anticipatory: 1.5,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
