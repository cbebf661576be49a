use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{BoardError, Position};

/// Key codes for the arrow keys, as delivered by the input layer.
pub const KEY_CODE_LEFT: u32 = 37;
pub const KEY_CODE_UP: u32 = 38;
pub const KEY_CODE_RIGHT: u32 = 39;
pub const KEY_CODE_DOWN: u32 = 40;

/// The direction in which tiles are pushed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The row and column offset of one step towards the destination edge.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    /// Horizontal moves work on rows, vertical moves on columns.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// The slots of line `line_idx`, starting at the destination edge.
    ///
    /// A line is a row for horizontal moves and a column for vertical moves.
    /// Tiles have to be resolved in this order, so that a tile only ever moves
    /// into slots that are already settled.
    pub fn scan_line(self, size: usize, line_idx: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |k| {
            let along = match self {
                Direction::Left | Direction::Up => k,
                Direction::Right | Direction::Down => size - 1 - k,
            };
            if self.is_horizontal() {
                Position::new(line_idx, along)
            } else {
                Position::new(along, line_idx)
            }
        })
    }

    pub fn key_code(self) -> u32 {
        match self {
            Direction::Left => KEY_CODE_LEFT,
            Direction::Right => KEY_CODE_RIGHT,
            Direction::Up => KEY_CODE_UP,
            Direction::Down => KEY_CODE_DOWN,
        }
    }
}

impl TryFrom<u32> for Direction {
    type Error = BoardError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            KEY_CODE_LEFT => Ok(Direction::Left),
            KEY_CODE_UP => Ok(Direction::Up),
            KEY_CODE_RIGHT => Ok(Direction::Right),
            KEY_CODE_DOWN => Ok(Direction::Down),
            _ => Err(BoardError::InvalidDirection { code }),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{}", name)
    }
}

/// The error type for the [`FromStr`] instance of [`Direction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl std::error::Error for UnknownDirection {}

impl std::fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not one of left, right, up or down", self.0)
    }
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(UnknownDirection(String::from(s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(direction: Direction, size: usize, line_idx: usize) -> Vec<(usize, usize)> {
        direction
            .scan_line(size, line_idx)
            .map(|p| (p.row, p.col))
            .collect()
    }

    #[test]
    fn scan_order_starts_at_the_destination_edge() {
        assert_eq!(line(Direction::Left, 3, 1), [(1, 0), (1, 1), (1, 2)]);
        assert_eq!(line(Direction::Right, 3, 1), [(1, 2), (1, 1), (1, 0)]);
        assert_eq!(line(Direction::Up, 3, 2), [(0, 2), (1, 2), (2, 2)]);
        assert_eq!(line(Direction::Down, 3, 2), [(2, 2), (1, 2), (0, 2)]);
    }

    #[test]
    fn key_codes() {
        for direction in Direction::ALL {
            assert_eq!(Direction::try_from(direction.key_code()), Ok(direction));
        }
        assert_eq!(
            Direction::try_from(41),
            Err(BoardError::InvalidDirection { code: 41 })
        );
        assert_eq!(
            Direction::try_from(0),
            Err(BoardError::InvalidDirection { code: 0 })
        );
    }

    #[test]
    fn parse_and_display() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse(), Ok(direction));
        }
        assert_eq!("UP".parse(), Ok(Direction::Up));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
        let direction: Direction = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(direction, Direction::Left);
    }
}
