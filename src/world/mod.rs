//! The world a template is built into
//!
//! The engine never mutates anything itself; it calls into a [`World`].

pub mod commands;

pub use commands::{Command, CommandConfig, CommandWorld};

use crate::placement::BlockPos;

/// Block-level capabilities the placement engine depends on
pub trait World {
    /// Place a static block; `block` may carry a tile-data suffix (`oak_stairs 3`)
    fn create(&mut self, block: &str, pos: BlockPos);

    /// Spawn one entity
    fn summon(&mut self, entity: &str, pos: BlockPos);

    /// Fill the axis-aligned region between two corners
    fn fill(&mut self, block: &str, from: BlockPos, to: BlockPos);

    /// Report a diagnostic; has no effect on placement
    fn log(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}
