use super::estimator::PolicyEstimator;
use super::estimator::ValueEstimator;
use crate::ACTS;
use crate::Probability;
use crate::game::observation::Observation;
use rand::Rng;

/// Which branch of the anticipatory rule picked the action. The
/// orchestrator records an imitation pair only for Response picks,
/// since only those carry the best-response label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// greedy under the best-response estimator
    Response(usize),
    /// sampled from the average-strategy estimator
    Average(usize),
    /// uniform exploration override
    Explore(usize),
}

impl Selection {
    pub fn action(&self) -> usize {
        match self {
            Self::Response(a) | Self::Average(a) | Self::Explore(a) => *a,
        }
    }
    pub fn is_response(&self) -> bool {
        matches!(self, Self::Response(_))
    }
}

/// Anticipatory dynamics. Holds no state of its own: a pure function
/// of the two estimator outputs and the configured probabilities.
///
/// During training, each decision acts greedily on the best-response
/// estimator with probability `anticipatory` and otherwise samples the
/// average strategy; an epsilon-uniform override guarantees coverage.
/// Outside training, the Nash-approximating average strategy is always
/// sampled and exploration is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Mixer {
    pub anticipatory: Probability,
    pub epsilon: Probability,
    pub training: bool,
}

impl Mixer {
    /// pick an action index from the legal subset of the action space.
    /// every branch is restricted to `legal`: exploration draws from
    /// it uniformly, the greedy branch takes the argmax over it, and
    /// the average strategy renormalizes onto it.
    pub fn select<V, P>(
        &self,
        value: &V,
        policy: &P,
        obs: &Observation,
        legal: &[usize],
        rng: &mut impl Rng,
    ) -> Selection
    where
        V: ValueEstimator,
        P: PolicyEstimator,
    {
        debug_assert!(!legal.is_empty());
        if self.training && rng.random::<f32>() < self.epsilon {
            Selection::Explore(legal[rng.random_range(0..legal.len())])
        } else if self.training && rng.random::<f32>() < self.anticipatory {
            let values = value.evaluate(obs);
            let best = legal
                .iter()
                .copied()
                .fold(legal[0], |best, i| if values[i] > values[best] { i } else { best });
            Selection::Response(best)
        } else {
            Selection::Average(Self::categorical(policy.distribution(obs), legal, rng))
        }
    }

    /// sample a legal index proportional to its weight, not argmax.
    /// falls back to uniform-over-legal when no mass lands in bounds.
    fn categorical(dist: [Probability; ACTS], legal: &[usize], rng: &mut impl Rng) -> usize {
        let total = legal.iter().map(|i| dist[*i]).sum::<f32>();
        if total <= 0. {
            return legal[rng.random_range(0..legal.len())];
        }
        let mut draw = rng.random::<f32>() * total;
        for i in legal.iter().copied() {
            draw -= dist[i];
            if draw <= 0. {
                return i;
            }
        }
        legal[legal.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OBS;
    use crate::Utility;
    use crate::error::Error;
    use crate::nfsp::experience::Imitation;
    use crate::nfsp::experience::Transition;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    struct StubValue;
    impl ValueEstimator for StubValue {
        fn evaluate(&self, _: &Observation) -> [Utility; ACTS] {
            let mut values = [0.; ACTS];
            values[1] = 1.;
            values
        }
        fn fit(&mut self, _: &[Transition], _: Utility) -> Result<Utility, Error> {
            Ok(0.)
        }
    }

    struct StubPolicy;
    impl PolicyEstimator for StubPolicy {
        fn distribution(&self, _: &Observation) -> [Probability; ACTS] {
            let mut dist = [0.; ACTS];
            dist[3] = 1.;
            dist
        }
        fn fit(&mut self, _: &[Imitation]) -> Result<Utility, Error> {
            Ok(0.)
        }
    }

    fn obs() -> Observation {
        Observation::from([0f32; OBS])
    }

    const FULL: [usize; ACTS] = [0, 1, 2, 3, 4];

    #[test]
    fn evaluation_always_uses_average() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mixer = Mixer {
            anticipatory: 1.,
            epsilon: 1.,
            training: false,
        };
        for _ in 0..50 {
            let selection = mixer.select(&StubValue, &StubPolicy, &obs(), &FULL, rng);
            assert!(selection == Selection::Average(3));
        }
    }

    #[test]
    fn full_anticipation_is_greedy() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mixer = Mixer {
            anticipatory: 1.,
            epsilon: 0.,
            training: true,
        };
        for _ in 0..50 {
            let selection = mixer.select(&StubValue, &StubPolicy, &obs(), &FULL, rng);
            assert!(selection == Selection::Response(1));
        }
    }

    #[test]
    fn full_epsilon_explores_uniformly() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mixer = Mixer {
            anticipatory: 1.,
            epsilon: 1.,
            training: true,
        };
        let mut seen = [false; ACTS];
        for _ in 0..200 {
            seen[mixer.select(&StubValue, &StubPolicy, &obs(), &FULL, rng).action()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn selection_never_leaves_legal_set() {
        // restricted to fold/call: exploration stays inside, greedy
        // takes the in-set argmax, and average-strategy mass sitting
        // on an excluded action falls back to uniform over the set
        let ref mut rng = SmallRng::seed_from_u64(0);
        let legal = [0usize, 1];
        for (anticipatory, epsilon) in [(0., 0.), (1., 0.), (0., 1.)] {
            let mixer = Mixer {
                anticipatory,
                epsilon,
                training: true,
            };
            for _ in 0..100 {
                let selection = mixer.select(&StubValue, &StubPolicy, &obs(), &legal, rng);
                assert!(legal.contains(&selection.action()));
            }
        }
    }

    #[test]
    fn categorical_respects_support() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut dist = [0.; ACTS];
        dist[0] = 0.5;
        dist[4] = 0.5;
        for _ in 0..200 {
            let i = Mixer::categorical(dist, &FULL, rng);
            assert!(i == 0 || i == 4);
        }
    }
}
