use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use twenty48::{Board, Direction};

/// A trait to simplify writing automatic players.
pub trait Strategy {
    /// Picks the next direction.
    ///
    /// This is called even when no direction would change the board, so that
    /// the board can notice that the game is over.
    fn choose(&mut self, board: &Board) -> Direction;
}

/// The strategies that can be selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    Greedy,
}

impl StrategyKind {
    pub fn build(self, rng: StdRng) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy { rng }),
            StrategyKind::Greedy => Box::new(GreedyStrategy),
        }
    }
}

/// The directions that would change the board, in the order of [`Direction::ALL`].
pub fn useful_directions(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| board.preview(direction).changed)
        .collect()
}

/// Picks uniformly among the directions that do something.
pub struct RandomStrategy {
    pub rng: StdRng,
}

impl Strategy for RandomStrategy {
    fn choose(&mut self, board: &Board) -> Direction {
        useful_directions(board)
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Direction::Left)
    }
}

/// Picks the direction that leaves the most empty slots behind.
///
/// Ties go to the direction with more merges, then to the earlier direction in
/// [`Direction::ALL`].
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn choose(&mut self, board: &Board) -> Direction {
        let mut best: Option<(Direction, (usize, usize))> = None;
        for direction in Direction::ALL {
            let shift = board.preview(direction);
            if !shift.changed {
                continue;
            }
            let key = (shift.empty_slots(), shift.merged_values.len());
            if best.map_or(true, |(_, best_key)| key > best_key) {
                best = Some((direction, key));
            }
        }
        best.map_or(Direction::Left, |(direction, _)| direction)
    }
}
