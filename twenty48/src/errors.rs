/// The error type for operations on a [`Board`](crate::Board).
///
/// None of these are fatal: the board is left untouched whenever one is returned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoardError {
    /// The row or column is outside of `[0, size)`.
    InvalidPosition { row: usize, col: usize },
    /// A tile was requested on a board without any empty slot.
    NoEmptySlot,
    /// A direction code that does not name one of the four directions.
    InvalidDirection { code: u32 },
    /// An explicit grid did not contain exactly `size * size` values.
    GridLength { expected: usize, actual: usize },
    InvalidConfig(ConfigError),
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        BoardError::InvalidConfig(err)
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidPosition { row, col } => {
                write!(f, "Position ({}, {}) is outside of the board", row, col)
            }
            BoardError::NoEmptySlot => write!(f, "There is no empty slot left on the board"),
            BoardError::InvalidDirection { code } => {
                write!(f, "Code {} does not correspond to a direction", code)
            }
            BoardError::GridLength { expected, actual } => write!(
                f,
                "Expected a grid of {} values, but got {}",
                expected, actual
            ),
            BoardError::InvalidConfig(_) => write!(f, "The board config is invalid"),
        }
    }
}

/// The error type for [`GameConfig::validate()`](crate::GameConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    SizeTooSmall { size: usize },
    SizeTooLarge { size: usize },
    TileValueTooSmall { value: u32 },
    ProbabilityOutOfRange { probability: f64 },
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::SizeTooSmall { size } => {
                write!(f, "The board needs to be at least 2x2, but the size is {}", size)
            }
            ConfigError::SizeTooLarge { size } => write!(
                f,
                "The board can be at most {}x{}, but the size is {}",
                crate::MAX_SIZE,
                crate::MAX_SIZE,
                size
            ),
            ConfigError::TileValueTooSmall { value } => {
                write!(f, "Spawned tiles must have a value of at least 2, not {}", value)
            }
            ConfigError::ProbabilityOutOfRange { probability } => write!(
                f,
                "The rare tile probability must be between 0 and 1, but is {}",
                probability
            ),
        }
    }
}
