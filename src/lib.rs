pub mod cards;
pub mod error;
pub mod game;
pub mod nfsp;

/// Chip counts for pots, blinds, and raise sizes.
pub type Chips = i16;
/// Rewards, value estimates, and losses.
pub type Utility = f32;
/// Strategy weights and mixing parameters.
pub type Probability = f32;

/// Number of players at the table.
pub const N: usize = 2;
/// Starting stack size in chips.
pub const STACK: Chips = 100;
/// Big blind amount.
pub const B_BLIND: Chips = 2;
/// Small blind amount.
pub const S_BLIND: Chips = 1;

/// Distinct card ranks in the Leduc deck (J, Q, K).
pub const RANKS: usize = 3;
/// Copies of each rank in the deck.
pub const COPIES: usize = 2;
/// Total deck size.
pub const DECK: usize = RANKS * COPIES;

/// Raise sizes as multiples of the big blind.
pub const RAISE_MULTIPLES: [Chips; 3] = [2, 3, 4];
/// Maximum raises per betting round (standard Leduc allows two).
/// Keeps every hand finite and the pot bounded by the stacks.
pub const MAX_RAISES: usize = 2;
/// Size of the discrete action space: fold, call, and one slot per raise size.
pub const ACTS: usize = 2 + RAISE_MULTIPLES.len();
/// Length of the observation vector handed to estimators:
/// own card one-hot, board one-hot, normalized pot, street indicator.
pub const OBS: usize = 2 * DECK + 2;

/// Discount factor for off-policy value learning.
pub const GAMMA: Utility = 0.99;
/// Default anticipatory mixing probability.
pub const ANTICIPATORY: Probability = 0.5;
/// Default epsilon for uniform exploration during training.
pub const EPSILON: Probability = 0.1;
/// Default SGD step size for the linear estimator backends.
pub const LEARNING_RATE: f32 = 0.01;

/// Default reinforcement-learning reservoir capacity.
pub const RL_BUFFER_SIZE: usize = 0x10000;
/// Default supervised-learning reservoir capacity.
pub const SL_BUFFER_SIZE: usize = 0x40000;
/// Default minibatch size sampled from each reservoir.
pub const BATCH_SIZE: usize = 128;
/// Default self-play episode budget.
pub const EPISODES: usize = 10_000;
/// Interval between progress log lines, in episodes.
pub const LOG_EVERY: usize = 100;
/// Interval between checkpoint saves, in episodes.
pub const CHECKPOINT_EVERY: usize = 100;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
