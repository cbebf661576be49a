mod position;
mod shift;

pub use position::*;
pub use shift::Shift;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::{
    visualize_grid, BoardError, ConfigError, Direction, GameConfig, GameState, MoveResult, Slot,
};

/// An N x N grid of tiles, plus the random source that spawns new ones.
///
/// Values are stored row-major. Zero marks an empty slot, anything else is a tile.
#[derive(Clone, Debug)]
pub struct Board {
    config: GameConfig,
    values: Vec<u32>,
    state: GameState,
    rng: StdRng,
}

impl Board {
    /// Creates a board and starts a game on it, i.e. spawns the first two tiles.
    pub fn new(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut board = Self {
            config,
            values: Vec::new(),
            state: GameState::Playing,
            rng,
        };
        board.init();
        Ok(board)
    }

    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a board with the given row-major tile values, without spawning anything.
    pub fn from_values(config: GameConfig, values: &[u32], rng: StdRng) -> Result<Self, BoardError> {
        config.validate()?;
        let expected = config.size * config.size;
        if values.len() != expected {
            return Err(BoardError::GridLength {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            config,
            values: values.to_vec(),
            state: GameState::Playing,
            rng,
        })
    }

    /// Clears the grid and spawns two tiles. This is also how a game is restarted.
    pub fn init(&mut self) {
        self.values = vec![0; self.config.size * self.config.size];
        self.state = GameState::Playing;
        for _ in 0..2 {
            let spawned = self.insert_new_tile();
            debug_assert!(spawned.is_ok(), "a valid board has at least four slots");
        }
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// The tile values in row-major order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// The row-major index of a position, or `None` if it is not on the board.
    pub fn to_absolute_position(&self, row: usize, col: usize) -> Option<usize> {
        Position::new(row, col).to_index(self.config.size)
    }

    /// Returns the value at the given position, zero meaning empty.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.to_absolute_position(row, col).map(|idx| self.values[idx])
    }

    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.checked_get(row, col)? == 0)
    }

    /// Whether both positions hold the same tile value. Two empty slots are not equal.
    pub fn values_equal(
        &self,
        row1: usize,
        col1: usize,
        row2: usize,
        col2: usize,
    ) -> Result<bool, BoardError> {
        let v1 = self.checked_get(row1, col1)?;
        let v2 = self.checked_get(row2, col2)?;
        Ok(v1 != 0 && v1 == v2)
    }

    pub fn is_full(&self) -> bool {
        self.values.iter().all(|&v| v != 0)
    }

    pub fn occupied_count(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Every slot with its position, row by row.
    pub fn snapshot(&self) -> Vec<Slot> {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, &value)| Slot {
                position: Position::from_index(idx, self.config.size),
                value,
            })
            .collect()
    }

    /// Places a new tile on a random empty slot and returns where it went.
    ///
    /// The board is left alone if it is full.
    pub fn insert_new_tile(&mut self) -> Result<Position, BoardError> {
        let empty_slots: Vec<usize> = self
            .values
            .iter()
            .enumerate()
            .filter_map(|(idx, &v)| (v == 0).then_some(idx))
            .collect();
        let idx = *empty_slots
            .choose(&mut self.rng)
            .ok_or(BoardError::NoEmptySlot)?;

        let spawn = self.config.spawn;
        let value = if self.rng.gen_bool(spawn.rare_probability) {
            spawn.rare_value.resolve(self.config.size)
        } else {
            spawn.common_value
        };
        self.values[idx] = value;

        let position = Position::from_index(idx, self.config.size);
        trace!(row = position.row, col = position.col, value, "Spawned tile");
        Ok(position)
    }

    /// Computes what a move would do, without changing the board.
    pub fn preview(&self, direction: Direction) -> Shift {
        let mut values = self.values.clone();
        let stats = shift::shift_in_place(&mut values, self.config.size, direction);
        Shift {
            values,
            changed: stats.changed,
            merged_values: stats.merged_values,
        }
    }

    /// Slides and merges all tiles in the given direction.
    ///
    /// If anything changed, a new tile is spawned. If nothing changed and the
    /// board is full, the game is over. Once the game is over, moves have no
    /// effect until [`Self::init()`] is called.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if self.is_game_over() {
            return MoveResult {
                changed: false,
                game_over: true,
            };
        }

        let shift = shift::shift_in_place(&mut self.values, self.config.size, direction);
        debug!(
            %direction,
            changed = shift.changed,
            merges = shift.merged_values.len(),
            "Applied move"
        );

        if shift.changed {
            let spawned = self.insert_new_tile();
            debug_assert!(spawned.is_ok(), "a changed board always has an empty slot");
        } else if self.is_full() {
            self.state = GameState::GameOver;
            info!(max_tile = self.max_tile(), "Game over");
        }

        MoveResult {
            changed: shift.changed,
            game_over: self.is_game_over(),
        }
    }

    /// Like [`Self::apply_move()`], but for a raw key code.
    ///
    /// Unknown codes are rejected without touching the board.
    pub fn apply_code(&mut self, code: u32) -> Result<MoveResult, BoardError> {
        let direction = Direction::try_from(code)?;
        Ok(self.apply_move(direction))
    }

    fn checked_get(&self, row: usize, col: usize) -> Result<u32, BoardError> {
        self.get(row, col)
            .ok_or(BoardError::InvalidPosition { row, col })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_grid(self.config.size, &self.values))
    }
}
