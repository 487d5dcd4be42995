use crate::Utility;
use std::time::Duration;
use std::time::Instant;

/// What one completed episode reports back: total reward from player
/// 0's seat, step count, and the losses of any updates that ran.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Episode {
    pub index: usize,
    pub reward: Utility,
    pub steps: usize,
    pub rl_loss: Option<Utility>,
    pub sl_loss: Option<Utility>,
}

/// Host-facing accumulation of training metrics. Owned by the caller
/// and fed by the orchestrator, so a dashboard or notebook can hold it
/// without reaching into training state.
#[derive(Debug, serde::Serialize)]
pub struct Session {
    episodes: usize,
    steps: usize,
    rewards: Vec<Utility>,
    rl_losses: Vec<Utility>,
    sl_losses: Vec<Utility>,
    #[serde(skip)]
    started: Instant,
}

impl Session {
    pub fn new() -> Self {
        Self {
            episodes: 0,
            steps: 0,
            rewards: Vec::new(),
            rl_losses: Vec::new(),
            sl_losses: Vec::new(),
            started: Instant::now(),
        }
    }

    pub fn record(&mut self, episode: &Episode) {
        self.episodes += 1;
        self.steps += episode.steps;
        self.rewards.push(episode.reward);
        if let Some(loss) = episode.rl_loss {
            self.rl_losses.push(loss);
        }
        if let Some(loss) = episode.sl_loss {
            self.sl_losses.push(loss);
        }
    }

    pub fn episodes(&self) -> usize {
        self.episodes
    }
    pub fn steps(&self) -> usize {
        self.steps
    }
    pub fn rewards(&self) -> &[Utility] {
        &self.rewards
    }
    pub fn losses(&self) -> (Option<Utility>, Option<Utility>) {
        (self.rl_losses.last().copied(), self.sl_losses.last().copied())
    }
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// True best-response exploitability of the average strategy is
    /// not computed; callers must treat convergence as unmeasured
    /// rather than trust a stand-in number.
    pub fn exploitability(&self) -> Option<Utility> {
        None
    }

    /// mean reward over the most recent window of episodes
    pub fn recent_reward(&self, window: usize) -> Utility {
        let tail = &self.rewards[self.rewards.len().saturating_sub(window)..];
        match tail.len() {
            0 => 0.,
            n => tail.iter().sum::<Utility>() / n as Utility,
        }
    }

    /// Formats stats as aligned columns with throughput calculation.
    pub fn format(&self) -> String {
        let rate = self.episodes as f64 / self.elapsed().as_secs().max(1) as f64;
        format!(
            "{:<20}{:<20}{:<20}{:<20}",
            format!("episode {}", self.episodes),
            format!("steps {}", self.steps),
            format!("reward {:+.2}", self.recent_reward(crate::LOG_EVERY)),
            format!("E/sec {:.1}", rate),
        )
    }

    pub fn summary(&self) -> String {
        format!("training stopped\n{}", self.format())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
