use quickcheck::{Arbitrary, Gen};

use crate::Direction;

/// A square grid of tile values, with a fair share of empty slots.
#[derive(Clone, Debug)]
pub struct ArbitraryGrid {
    pub size: usize,
    pub values: Vec<u32>,
}

/// A full grid in which no two neighbours hold the same value, so nothing can move.
#[derive(Clone, Debug)]
pub struct StuckGrid {
    pub size: usize,
    pub values: Vec<u32>,
}

fn arbitrary_size(g: &mut Gen) -> usize {
    2 + usize::arbitrary(g) % 5
}

impl Arbitrary for ArbitraryGrid {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = arbitrary_size(g);
        let values = (0..size * size)
            .map(|_| {
                // Small exponents make merges likely
                let exponent = u8::arbitrary(g) % 5;
                if exponent == 0 {
                    0
                } else {
                    1 << exponent
                }
            })
            .collect();
        ArbitraryGrid { size, values }
    }
}

impl Arbitrary for StuckGrid {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = arbitrary_size(g);
        let values = (0..size * size)
            .map(|idx| {
                let (row, col) = (idx / size, idx % size);
                // Neighbours always differ in parity, and the two parities draw from disjoint sets.
                let choices: &[u32] = if (row + col) % 2 == 0 {
                    &[2, 8, 32]
                } else {
                    &[4, 16, 64]
                };
                *g.choose(choices).unwrap()
            })
            .collect();
        StuckGrid { size, values }
    }
}

impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Direction::ALL).unwrap()
    }
}
