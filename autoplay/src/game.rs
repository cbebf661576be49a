use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use twenty48::Board;

use crate::strategy::Strategy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    GameOver,
    /// The game was cut off after the maximum number of moves.
    MoveLimit,
}

/// What is left of a game once it has been played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    /// Moves that changed the board.
    pub moves: usize,
    pub max_tile: u32,
    pub occupied: usize,
}

/// Plays a game from the current state of the board until it is over, or until
/// `max_moves` move requests have been made.
pub fn play_game(
    board: &mut Board,
    strategy: &mut dyn Strategy,
    max_moves: Option<usize>,
) -> GameSummary {
    let mut moves = 0;
    let mut requests = 0;
    let outcome = loop {
        if board.is_game_over() {
            break GameOutcome::GameOver;
        }
        if max_moves.is_some_and(|max| requests >= max) {
            break GameOutcome::MoveLimit;
        }
        let direction = strategy.choose(board);
        let result = board.apply_move(direction);
        trace!(%direction, changed = result.changed, "Move requested");
        requests += 1;
        if result.changed {
            moves += 1;
        }
    };

    let summary = GameSummary {
        outcome,
        moves,
        max_tile: board.max_tile(),
        occupied: board.occupied_count(),
    };
    debug!(?summary, "Game finished\n{}", board);
    summary
}
