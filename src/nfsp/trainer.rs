use super::config::Config;
use super::estimator::PolicyEstimator;
use super::estimator::ValueEstimator;
use super::experience::Imitation;
use super::experience::Transition;
use super::explain::Explain;
use super::policy::Mixer;
use super::reservoir::Reservoir;
use super::session::Episode;
use super::session::Session;
use crate::GAMMA;
use crate::Probability;
use crate::Utility;
use crate::error::Error;
use crate::game::action::Action;
use crate::game::game::Game;
use crate::game::turn::Turn;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Optional persistence of estimator parameters keyed by episode.
/// Training proceeds identically when no sink is attached.
pub trait Checkpoint<V, P> {
    fn save(&mut self, episode: usize, value: &V, policy: &P) -> Result<(), Error>;
}

/// The NFSP orchestrator. Owns the two estimators, the two
/// reservoirs, and the single rng; drives self-play one episode at a
/// time and one transition at a time within an episode.
///
/// Each decision flows through the anticipatory Mixer. Every
/// transition lands in the RL reservoir; imitation pairs land in the
/// SL reservoir only when the best-response branch chose the action.
/// After each episode at most one fit runs per store, and only once
/// both stores hold a full batch. Estimator failures are logged and
/// skipped so the episode's experience is never lost.
pub struct Trainer<V, P>
where
    V: ValueEstimator,
    P: PolicyEstimator,
{
    config: Config,
    value: V,
    policy: P,
    rl: Reservoir<Transition>,
    sl: Reservoir<Imitation>,
    rng: SmallRng,
    game: Game,
    episodes: usize,
    anticipatory: Probability,
    explain: Option<Box<dyn Explain>>,
    checkpoint: Option<Box<dyn Checkpoint<V, P>>>,
}

impl<V, P> Trainer<V, P>
where
    V: ValueEstimator,
    P: PolicyEstimator,
{
    pub fn new(config: Config, value: V, policy: P) -> Result<Self, Error> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let game = Game::root(&mut rng);
        Ok(Self {
            rl: Reservoir::new(config.rl_capacity),
            sl: Reservoir::new(config.sl_capacity),
            anticipatory: config.anticipatory,
            episodes: 0,
            explain: None,
            checkpoint: None,
            config,
            value,
            policy,
            rng,
            game,
        })
    }

    pub fn with_explain(mut self, explain: Box<dyn Explain>) -> Self {
        self.explain = Some(explain);
        self
    }

    pub fn with_checkpoint(mut self, checkpoint: Box<dyn Checkpoint<V, P>>) -> Self {
        self.checkpoint = Some(checkpoint);
        self
    }

    /// runtime control surface for the host: mixing probability in [0, 1]
    pub fn set_anticipatory(&mut self, anticipatory: Probability) {
        self.anticipatory = anticipatory.clamp(0., 1.);
    }
    pub fn anticipatory(&self) -> Probability {
        self.anticipatory
    }

    /// the hand to render: a fresh deal before the first episode,
    /// thereafter the most recently completed hand, which once settled
    /// is never mutated again.
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn value(&self) -> &V {
        &self.value
    }
    pub fn policy(&self) -> &P {
        &self.policy
    }
    pub fn rl(&self) -> &Reservoir<Transition> {
        &self.rl
    }
    pub fn sl(&self) -> &Reservoir<Imitation> {
        &self.sl
    }

    /// one hand of self-play plus at most one update per store.
    pub fn episode(&mut self) -> Result<Episode, Error> {
        let mixer = Mixer {
            anticipatory: self.anticipatory,
            epsilon: self.config.epsilon,
            training: true,
        };
        let mut game = Game::root(&mut self.rng);
        let mut steps = 0;
        loop {
            let player = match game.turn() {
                Turn::Choice(player) => player,
                Turn::Terminal => break,
            };
            let obs = game.observe(player);
            let legal = game.legal().iter().map(Action::index).collect::<Vec<_>>();
            let selection = mixer.select(&self.value, &self.policy, &obs, &legal, &mut self.rng);
            let action = Action::try_from(selection.action())?;
            let next = game.apply(action)?;
            let done = next.turn().is_terminal();
            let reward = match done {
                true => next.settlement()[player],
                false => 0.,
            };
            self.rl.add(
                Transition {
                    obs,
                    action: selection.action(),
                    reward,
                    next: next.observe(player),
                    done,
                },
                &mut self.rng,
            );
            if selection.is_response() {
                self.sl.add(
                    Imitation {
                        obs,
                        action: selection.action(),
                    },
                    &mut self.rng,
                );
            }
            steps += 1;
            game = next;
        }
        self.game = game;
        let reward = game.settlement()[0];
        let (rl_loss, sl_loss) = self.update();
        let index = self.episodes;
        self.episodes += 1;
        self.persist();
        Ok(Episode {
            index,
            reward,
            steps,
            rl_loss,
            sl_loss,
        })
    }

    /// drive a full training run, feeding metrics into the
    /// caller-owned session. an aborted episode is logged and skipped;
    /// it does not end the run.
    pub fn run(&mut self, session: &mut Session) {
        log::info!("beginning training loop ({})", self.config.episodes);
        for _ in 0..self.config.episodes {
            match self.episode() {
                Ok(episode) => session.record(&episode),
                Err(e) => {
                    log::error!("episode aborted: {}", e);
                    continue;
                }
            }
            if self.episodes % crate::LOG_EVERY == 0 {
                log::info!("{}", session.format());
                if let Some(line) = self.narrate() {
                    log::info!("{}", line);
                }
            }
        }
        log::info!("{}", session.summary());
    }

    /// narrate the average strategy at the last settled hand, from
    /// player 0's view. decorative only.
    pub fn narrate(&self) -> Option<String> {
        self.explain
            .as_ref()
            .map(|explain| explain.explain(&self.policy.distribution(&self.game.observe(0))))
    }

    /// at most one fit per store per trigger. sizes are checked first
    /// so undersized buffers skip the update instead of failing the
    /// episode; estimator errors are logged and skipped likewise.
    fn update(&mut self) -> (Option<Utility>, Option<Utility>) {
        let batch = self.config.batch;
        if self.rl.len() < batch || self.sl.len() < batch {
            return (None, None);
        }
        let rl_loss = self
            .rl
            .sample(batch, &mut self.rng)
            .and_then(|batch| self.value.fit(&batch, GAMMA))
            .map_err(|e| log::warn!("value update skipped: {}", e))
            .ok();
        let sl_loss = self
            .sl
            .sample(batch, &mut self.rng)
            .and_then(|batch| self.policy.fit(&batch))
            .map_err(|e| log::warn!("policy update skipped: {}", e))
            .ok();
        (rl_loss, sl_loss)
    }

    fn persist(&mut self) {
        if self.episodes % crate::CHECKPOINT_EVERY != 0 {
            return;
        }
        if let Some(checkpoint) = self.checkpoint.as_mut() {
            if let Err(e) = checkpoint.save(self.episodes, &self.value, &self.policy) {
                log::warn!("checkpoint skipped: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ACTS;
    use crate::game::observation::Observation;

    /// deterministic stand-ins: zero values, uniform distribution
    struct StubValue;
    impl ValueEstimator for StubValue {
        fn evaluate(&self, _: &Observation) -> [Utility; ACTS] {
            [0.; ACTS]
        }
        fn fit(&mut self, _: &[Transition], _: Utility) -> Result<Utility, Error> {
            Ok(0.)
        }
    }
    /// values strictly increasing with index: greedy play always
    /// takes the largest raise on offer
    struct Raiser;
    impl ValueEstimator for Raiser {
        fn evaluate(&self, _: &Observation) -> [Utility; ACTS] {
            let mut values = [0.; ACTS];
            for (i, v) in values.iter_mut().enumerate() {
                *v = i as Utility;
            }
            values
        }
        fn fit(&mut self, _: &[Transition], _: Utility) -> Result<Utility, Error> {
            Ok(0.)
        }
    }

    struct StubPolicy;
    impl PolicyEstimator for StubPolicy {
        fn distribution(&self, _: &Observation) -> [Probability; ACTS] {
            [1. / ACTS as f32; ACTS]
        }
        fn fit(&mut self, _: &[Imitation]) -> Result<Utility, Error> {
            Ok(0.)
        }
    }

    fn trainer(config: Config) -> Trainer<StubValue, StubPolicy> {
        Trainer::new(config, StubValue, StubPolicy).unwrap()
    }

    #[test]
    fn invalid_config_is_fatal() {
        let config = Config {
            batch: 0,
            ..Config::default()
        };
        assert!(Trainer::new(config, StubValue, StubPolicy).is_err());
    }

    #[test]
    fn rl_store_sees_every_step() {
        let config = Config {
            episodes: 1000,
            batch: 32,
            rl_capacity: 1 << 20,
            sl_capacity: 1 << 20,
            seed: 42,
            ..Config::default()
        };
        let mut trainer = trainer(config);
        let mut steps = 0;
        for _ in 0..1000 {
            steps += trainer.episode().unwrap().steps;
        }
        assert!(trainer.rl().count() == steps);
        assert!(trainer.rl().len() == steps.min(1 << 20));
    }

    #[test]
    fn rl_store_caps_at_capacity() {
        let config = Config {
            episodes: 200,
            batch: 8,
            rl_capacity: 64,
            sl_capacity: 64,
            seed: 7,
            ..Config::default()
        };
        let mut trainer = trainer(config);
        let mut steps = 0;
        for _ in 0..200 {
            steps += trainer.episode().unwrap().steps;
        }
        assert!(steps > 64);
        assert!(trainer.rl().count() == steps);
        assert!(trainer.rl().len() == 64);
    }

    #[test]
    fn updates_wait_for_full_batch() {
        let config = Config {
            batch: 1 << 14,
            rl_capacity: 1 << 15,
            sl_capacity: 1 << 15,
            ..Config::default()
        };
        let mut trainer = trainer(config);
        let episode = trainer.episode().unwrap();
        assert!(episode.rl_loss.is_none());
        assert!(episode.sl_loss.is_none());
    }

    #[test]
    fn updates_fire_once_buffered() {
        let config = Config {
            batch: 4,
            rl_capacity: 256,
            sl_capacity: 256,
            epsilon: 0.,
            anticipatory: 1., // every pick is best-response, so SL fills too
            seed: 3,
            ..Config::default()
        };
        let mut trainer = trainer(config);
        let mut updated = false;
        for _ in 0..50 {
            let episode = trainer.episode().unwrap();
            if episode.rl_loss.is_some() {
                assert!(episode.sl_loss.is_some());
                updated = true;
                break;
            }
        }
        assert!(updated);
    }

    #[test]
    fn raise_happy_best_response_keeps_pot_bounded() {
        // a Q-function that always prefers the largest raise must
        // still land every hand on a terminal state with the pot
        // inside the stacks, because the engine caps raises per round
        let config = Config {
            epsilon: 0.,
            anticipatory: 1.,
            seed: 5,
            ..Config::default()
        };
        let mut trainer = Trainer::new(config, Raiser, StubPolicy).unwrap();
        for _ in 0..100 {
            let episode = trainer.episode().unwrap();
            assert!(episode.steps <= 12);
            assert!(trainer.game().pot() <= 2 * crate::STACK);
        }
    }

    #[test]
    fn sl_store_only_records_best_response_picks() {
        let config = Config {
            anticipatory: 0.,
            epsilon: 0.,
            seed: 11,
            ..Config::default()
        };
        let mut trainer = trainer(config);
        for _ in 0..20 {
            trainer.episode().unwrap();
        }
        assert!(trainer.sl().count() == 0);
        assert!(trainer.rl().count() > 0);
    }

    #[test]
    fn fixed_seed_reproduces() {
        let config = Config {
            seed: 9,
            ..Config::default()
        };
        let mut a = trainer(config.clone());
        let mut b = trainer(config);
        for _ in 0..100 {
            let x = a.episode().unwrap();
            let y = b.episode().unwrap();
            assert!(x.reward == y.reward);
            assert!(x.steps == y.steps);
        }
    }

    #[test]
    fn anticipatory_is_adjustable_and_clamped() {
        let mut trainer = trainer(Config::default());
        trainer.set_anticipatory(2.);
        assert!(trainer.anticipatory() == 1.);
        trainer.set_anticipatory(0.25);
        assert!(trainer.anticipatory() == 0.25);
    }

    #[test]
    fn completed_hand_is_exposed_terminal() {
        let mut trainer = trainer(Config::default());
        trainer.episode().unwrap();
        assert!(trainer.game().turn().is_terminal());
    }

    #[test]
    fn fresh_trainer_exposes_a_live_deal() {
        let trainer = trainer(Config::default());
        assert!(!trainer.game().turn().is_terminal());
        assert!(trainer.game().board().is_none());
    }
}
