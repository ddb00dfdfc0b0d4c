//! Placement engine for materializing templates into a world
//!
//! This module takes a parsed [`Template`](crate::parser::Template), an
//! anchor and a facing, and produces the world calls that build it.

pub mod block;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod rotation;
pub mod transform;
pub mod types;

pub use block::{BlockSpec, SpecKind};
pub use config::PlacementConfig;
pub use direction::Direction;
pub use engine::{execute, fill_template, plan};
pub use error::{Diagnostic, PlacementError};
pub use rotation::{OrientableKind, RotationTable};
pub use types::*;
