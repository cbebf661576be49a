use serde::{Deserialize, Serialize};

use crate::Position;

/// The answer to a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Whether any tile moved or merged. A new tile has been spawned iff this is true.
    pub changed: bool,
    /// Whether the board is in its terminal state after this move.
    pub game_over: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    Playing,
    /// A move changed nothing on a full board. Only a restart leaves this state.
    GameOver,
}

/// A single slot of the board, as handed out to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub position: Position,
    /// Zero means the slot is empty.
    pub value: u32,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}
