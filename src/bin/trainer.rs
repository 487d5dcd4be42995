//! NFSP Trainer Binary
//!
//! Self-play training of a Leduc Hold'em agent with the linear
//! estimator backends. Metrics optionally land in a JSON file for
//! downstream visualization.

use clap::Parser;
use nfspoker::nfsp::config::Config;
use nfspoker::nfsp::explain::Commentary;
use nfspoker::nfsp::linear::LinearPolicy;
use nfspoker::nfsp::linear::LinearValue;
use nfspoker::nfsp::session::Session;
use nfspoker::nfsp::trainer::Trainer;

#[derive(Parser)]
#[command(about = "train a Leduc Hold'em agent via neural fictitious self-play")]
struct Args {
    /// self-play episode budget
    #[arg(long, default_value_t = nfspoker::EPISODES)]
    episodes: usize,
    /// rng seed for reproducible runs
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// minibatch size per update
    #[arg(long, default_value_t = nfspoker::BATCH_SIZE)]
    batch: usize,
    /// reinforcement-learning buffer capacity
    #[arg(long, default_value_t = nfspoker::RL_BUFFER_SIZE)]
    rl_buffer: usize,
    /// supervised-learning buffer capacity
    #[arg(long, default_value_t = nfspoker::SL_BUFFER_SIZE)]
    sl_buffer: usize,
    /// anticipatory mixing probability
    #[arg(long, default_value_t = nfspoker::ANTICIPATORY)]
    anticipatory: f32,
    /// uniform exploration probability
    #[arg(long, default_value_t = nfspoker::EPSILON)]
    epsilon: f32,
    /// SGD step size for the linear backends
    #[arg(long, default_value_t = nfspoker::LEARNING_RATE)]
    rate: f32,
    /// where to write the session metrics as JSON
    #[arg(long)]
    metrics: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    nfspoker::log();
    let args = Args::parse();
    let config = Config {
        episodes: args.episodes,
        batch: args.batch,
        rl_capacity: args.rl_buffer,
        sl_capacity: args.sl_buffer,
        anticipatory: args.anticipatory,
        epsilon: args.epsilon,
        rate: args.rate,
        seed: args.seed,
    };
    let value = LinearValue::new(config.rate);
    let policy = LinearPolicy::new(config.rate);
    let mut trainer =
        Trainer::new(config, value, policy)?.with_explain(Box::new(Commentary));
    let mut session = Session::new();
    trainer.run(&mut session);
    if let Some(path) = args.metrics {
        std::fs::write(&path, serde_json::to_string_pretty(&session)?)?;
        log::info!("metrics written to {}", path.display());
    }
    Ok(())
}
