/// Everything that can go wrong during a training run.
///
/// None of these are fatal to the run except `Config`, which is raised
/// once at startup before any episode begins.
#[derive(Debug)]
pub enum Error {
    /// An action outside the legal set was applied to a game state.
    /// Programming error: the episode is aborted, never coerced.
    InvalidAction(String),
    /// A reservoir was sampled for more items than it holds.
    InsufficientData { need: usize, have: usize },
    /// An external estimator failed to fit or evaluate.
    /// The update cycle is skipped; the episode's experience is kept.
    Estimator(String),
    /// Inconsistent configuration detected at startup.
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidAction(action) => {
                write!(f, "illegal action {} for current state", action)
            }
            Error::InsufficientData { need, have } => {
                write!(f, "buffer holds {} items, {} requested", have, need)
            }
            Error::Estimator(reason) => {
                write!(f, "estimator failure: {}", reason)
            }
            Error::Config(reason) => {
                write!(f, "invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {}
