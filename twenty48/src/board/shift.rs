use crate::{Direction, Position};

/// The result of sliding and merging a grid in one direction, without spawning a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shift {
    /// The grid after the move, row-major.
    pub values: Vec<u32>,
    /// Whether any tile moved or merged.
    pub changed: bool,
    /// The value produced by each merge, in the order the merges happened.
    pub merged_values: Vec<u32>,
}

impl Shift {
    pub fn empty_slots(&self) -> usize {
        self.values.iter().filter(|&&v| v == 0).count()
    }
}

/// What happened during an in-place shift.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ShiftStats {
    pub changed: bool,
    pub merged_values: Vec<u32>,
}

/// Slides and merges all tiles of a `size` x `size` grid in place.
///
/// Every line is resolved starting from the destination edge. Each tile first
/// looks for a merge partner (the first occupied slot towards the edge, which must
/// hold the same value and must not have merged during this move), then slides
/// through empty slots until it is blocked.
///
/// Two tiles whose sum does not fit into a `u32` do not merge.
pub(crate) fn shift_in_place(values: &mut [u32], size: usize, direction: Direction) -> ShiftStats {
    debug_assert_eq!(values.len(), size * size);
    let step = direction.step();
    // Per-move scratch: has the tile in this slot absorbed another tile already?
    let mut merged = vec![false; values.len()];
    let mut changed = false;
    let mut merged_values = Vec::new();

    for line_idx in 0..size {
        for start in direction.scan_line(size, line_idx) {
            let Some(mut current) = start.to_index(size) else {
                continue;
            };
            if values[current] == 0 {
                continue;
            }

            if let Some((target, doubled)) = merge_partner(values, &merged, size, start, step) {
                values[target] = doubled;
                merged[target] = true;
                values[current] = 0;
                merged_values.push(doubled);
                changed = true;
                continue;
            }

            let mut position = start;
            while let Some(next) = position.offset(step, size) {
                let Some(next_idx) = next.to_index(size) else {
                    break;
                };
                if values[next_idx] != 0 {
                    break;
                }
                values.swap(current, next_idx);
                merged.swap(current, next_idx);
                position = next;
                current = next_idx;
                changed = true;
            }
        }
    }

    ShiftStats {
        changed,
        merged_values,
    }
}

// Walks from `start` towards the destination edge, skipping empty slots, and
// returns the index of the first occupied slot and the merged value, if the tile
// at `start` may merge into it.
fn merge_partner(
    values: &[u32],
    merged: &[bool],
    size: usize,
    start: Position,
    step: (isize, isize),
) -> Option<(usize, u32)> {
    let start_idx = start.to_index(size)?;
    if merged[start_idx] {
        return None;
    }
    let mut position = start;
    // At most size - 1 steps until the edge is reached.
    for _ in 1..size {
        position = position.offset(step, size)?;
        let idx = position.to_index(size)?;
        match values[idx] {
            0 => continue,
            v if v == values[start_idx] && !merged[idx] => {
                return v.checked_mul(2).map(|doubled| (idx, doubled))
            }
            _ => return None,
        }
    }
    None
}
