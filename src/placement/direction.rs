//! Cardinal facing used for both coordinates and block orientation

use std::fmt;
use std::str::FromStr;

use crate::placement::error::PlacementError;

/// One of the four horizontal facings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Column index into the rotation tables
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Map a sign's rotation value (0-15) to the facing it reads from
    ///
    /// Values outside 0-15 fall back to north.
    pub fn from_sign_rotation(rotation: u8) -> Self {
        match rotation {
            0..=3 => Direction::South,
            4..=7 => Direction::West,
            8..=11 => Direction::North,
            12..=15 => Direction::East,
            _ => Direction::North,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlacementError::unknown_direction(s))
    }
}
