//! Error and diagnostic types for the placement engine

use std::fmt;

use thiserror::Error;

use crate::placement::rotation::OrientableKind;
use crate::placement::types::CellIndex;

/// Errors that stop a placement before it starts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Facing outside north/south/east/west
    #[error("unknown direction '{value}' (expected north, south, east or west)")]
    UnknownDirection { value: String },
}

impl PlacementError {
    pub fn unknown_direction(value: impl Into<String>) -> Self {
        Self::UnknownDirection {
            value: value.into(),
        }
    }
}

/// Recoverable problems found while resolving cells
///
/// Each one is reported through the world's log and replaced by a
/// visible substitute; placement always continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Layer cell refers to a key with no token definition
    MissingToken { key: String, cell: CellIndex },

    /// Tile-data not present in the rotation table for the block
    UnknownRotationValue {
        kind: OrientableKind,
        tile_data: String,
        fallback: &'static str,
    },

    /// `count:` qualifier that is not a non-negative integer
    InvalidCount { token: String, value: String },

    /// Base `margin` property that is not an integer
    InvalidMargin { value: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingToken { key, cell } => write!(
                f,
                "Missing key {} at layer {}, row {}, column {}",
                key, cell.i, cell.j, cell.k
            ),
            Diagnostic::UnknownRotationValue {
                kind,
                tile_data,
                fallback,
            } => write!(
                f,
                "Unknown {} tile data '{}', using {}",
                kind, tile_data, fallback
            ),
            Diagnostic::InvalidCount { token, value } => {
                write!(f, "Invalid count '{}' in '{}', summoning once", value, token)
            }
            Diagnostic::InvalidMargin { value } => {
                write!(f, "Invalid base margin '{}', using 0", value)
            }
        }
    }
}
