//! Core types for placement output

use std::fmt;

use crate::placement::direction::Direction;
use crate::placement::error::Diagnostic;

/// Absolute block coordinate in the world
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Translate by a delta on each axis, clamping at the world's integer limits
    pub fn translated(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.z.saturating_add(dz),
        )
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Grid index of a template cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellIndex {
    /// Layer (depth) index
    pub i: usize,
    /// Row (height) index
    pub j: usize,
    /// Column (width) index
    pub k: usize,
}

impl CellIndex {
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }
}

/// Placement pass; attachments go after every solid block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pass {
    Solid,
    Attachment,
}

/// What to do at a coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place a static block; the identifier may carry a tile-data suffix
    Create(String),
    /// Spawn an entity `count` times at the same spot
    Summon { entity: String, count: u32 },
}

/// A single resolved cell, ready to be sent to a world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub cell: CellIndex,
    pub pos: BlockPos,
    pub action: Action,
    pub pass: Pass,
}

/// Region fill beneath the structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseFill {
    pub block: String,
    /// Minimum corner
    pub from: BlockPos,
    /// Maximum corner
    pub to: BlockPos,
}

/// Everything a fill will do, computed before touching the world
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Anchor after the template offset was applied
    pub origin: BlockPos,
    pub direction: Direction,
    pub base: Option<BaseFill>,
    /// Solid placements first, then attachments, each in grid order
    pub placements: Vec<Placement>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Plan {
    /// Placements of a single pass
    pub fn pass(&self, pass: Pass) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.pass == pass)
    }

    /// Number of world calls the plan issues (create, summon and fill)
    pub fn call_count(&self) -> usize {
        let cells: usize = self
            .placements
            .iter()
            .map(|p| match &p.action {
                Action::Create(_) => 1,
                Action::Summon { count, .. } => *count as usize,
            })
            .sum();
        cells + usize::from(self.base.is_some())
    }
}
