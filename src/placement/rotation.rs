//! Orientation remapping for blocks whose tile-data encodes a facing
//!
//! Every table maps an authored tile-data value (written for a north
//! facing) to the value that looks the same once the structure is turned
//! toward another direction. Columns are ordered north, south, east, west.

use std::fmt;

use crate::placement::direction::Direction;

/// Blocks with a dedicated rotation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrientableKind {
    Stairs,
    Bed,
    Chest,
    Torch,
    FenceGate,
    Vine,
}

impl OrientableKind {
    pub const ALL: [OrientableKind; 6] = [
        OrientableKind::Stairs,
        OrientableKind::Bed,
        OrientableKind::Chest,
        OrientableKind::Torch,
        OrientableKind::FenceGate,
        OrientableKind::Vine,
    ];

    /// Pick the kind for a block identifier (without tile-data)
    ///
    /// Any identifier containing `stairs` counts as stairs; the others must
    /// match exactly.
    pub fn of(block: &str) -> Option<Self> {
        if block.contains("stairs") {
            return Some(OrientableKind::Stairs);
        }
        match block {
            "bed" => Some(OrientableKind::Bed),
            "chest" => Some(OrientableKind::Chest),
            "torch" => Some(OrientableKind::Torch),
            "fence_gate" => Some(OrientableKind::FenceGate),
            "vine" => Some(OrientableKind::Vine),
            _ => None,
        }
    }

    pub fn table(self) -> &'static RotationTable {
        match self {
            OrientableKind::Stairs => &STAIRS,
            OrientableKind::Bed => &BED,
            OrientableKind::Chest => &CHEST,
            OrientableKind::Torch => &TORCH,
            OrientableKind::FenceGate => &FENCE_GATE,
            OrientableKind::Vine => &VINE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrientableKind::Stairs => "stairs",
            OrientableKind::Bed => "bed",
            OrientableKind::Chest => "chest",
            OrientableKind::Torch => "torch",
            OrientableKind::FenceGate => "fence_gate",
            OrientableKind::Vine => "vine",
        }
    }
}

impl fmt::Display for OrientableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup from (tile-data, direction) to tile-data
#[derive(Debug)]
pub struct RotationTable {
    rows: &'static [(&'static str, [&'static str; 4])],
    /// Returned for tile-data the table does not know
    pub default: &'static str,
}

impl RotationTable {
    /// Tile-data values with a row in this table
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.rows.iter().map(|(key, _)| *key)
    }

    /// Rotated value, or `None` when `tile_data` has no row
    pub fn lookup(&self, tile_data: &str, direction: Direction) -> Option<&'static str> {
        self.rows
            .iter()
            .find(|(key, _)| *key == tile_data)
            .map(|(_, row)| row[direction.index()])
    }

    /// Rotated value, falling back to the table default
    pub fn rotate(&self, tile_data: &str, direction: Direction) -> &'static str {
        self.lookup(tile_data, direction).unwrap_or(self.default)
    }
}

static STAIRS: RotationTable = RotationTable {
    rows: &[
        ("0", ["0", "1", "3", "2"]),
        ("1", ["1", "0", "2", "3"]),
        ("2", ["2", "3", "1", "0"]),
        ("3", ["3", "2", "0", "1"]),
    ],
    default: "2",
};

static BED: RotationTable = RotationTable {
    rows: &[
        ("0", ["0", "2", "3", "1"]),
        ("1", ["1", "3", "0", "2"]),
        ("2", ["2", "0", "1", "3"]),
        ("3", ["3", "1", "2", "0"]),
    ],
    default: "2",
};

static CHEST: RotationTable = RotationTable {
    rows: &[
        ("2", ["2", "3", "5", "4"]),
        ("3", ["3", "2", "4", "5"]),
        ("4", ["4", "5", "3", "2"]),
        ("5", ["5", "4", "2", "3"]),
    ],
    default: "2",
};

static TORCH: RotationTable = RotationTable {
    rows: &[
        ("1", ["1", "2", "4", "4"]),
        ("2", ["2", "1", "3", "3"]),
        ("3", ["3", "4", "2", "1"]),
        ("4", ["4", "3", "1", "2"]),
    ],
    default: "2",
};

static FENCE_GATE: RotationTable = RotationTable {
    rows: &[("0", ["0", "0", "1", "1"]), ("1", ["1", "1", "0", "0"])],
    default: "0",
};

static VINE: RotationTable = RotationTable {
    rows: &[
        ("1", ["1", "4", "2", "3"]),
        ("2", ["2", "3", "1", "4"]),
        ("3", ["3", "2", "4", "1"]),
        ("4", ["4", "1", "3", "2"]),
    ],
    default: "2",
};
