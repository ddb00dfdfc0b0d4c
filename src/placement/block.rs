//! Resolution of raw token specifications into block specs
//!
//! A raw spec is one of:
//! - `stone`                   plain block
//! - `oak_stairs 3`            block with tile-data
//! - `$chicken`                entity summon
//! - `$chicken count:3`        entity summoned three times

use crate::placement::config::PlacementConfig;
use crate::placement::direction::Direction;
use crate::placement::error::Diagnostic;
use crate::placement::rotation::OrientableKind;
use crate::placement::types::{Action, Pass};

const SUMMON_PREFIX: char = '$';
const COUNT_PREFIX: &str = "count:";

/// Tile-data assumed when a spec ends in a bare space
const DEFAULT_TILE_DATA: &str = "2";

/// Whether a spec places a block or spawns an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecKind {
    Block,
    Entity { count: u32 },
}

/// A token resolved for one facing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    /// Block or entity identifier without tile-data
    pub id: String,
    /// Orientation or variant suffix, already rotated when the block is orientable
    pub tile_data: Option<String>,
    pub kind: SpecKind,
    /// Needs a solid neighbour; placed in the second pass
    pub attachment: bool,
}

impl BlockSpec {
    /// Resolve a raw spec for `direction`, pushing any recoverable problem to `diagnostics`
    pub fn resolve(
        raw: &str,
        direction: Direction,
        config: &PlacementConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let attachment = config.is_attachment(raw);

        let (summon, rest) = match raw.strip_prefix(SUMMON_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let mut parts: Vec<&str> = rest.split(' ').collect();
        let mut count = 1;
        if summon && parts.len() > 1 && parts[1].starts_with(COUNT_PREFIX) {
            let value = &parts[1][COUNT_PREFIX.len()..];
            count = match value.parse::<u32>() {
                Ok(n) => n,
                Err(_) => {
                    diagnostics.push(Diagnostic::InvalidCount {
                        token: raw.to_string(),
                        value: value.to_string(),
                    });
                    1
                }
            };
            parts.remove(1);
        }

        let id = parts[0].to_string();
        let tile_data = if parts.len() > 1 {
            match OrientableKind::of(&id) {
                Some(kind) => {
                    let authored = match parts[1] {
                        "" => DEFAULT_TILE_DATA,
                        data => data,
                    };
                    Some(rotate(kind, authored, direction, diagnostics).to_string())
                }
                None => Some(parts[1..].join(" ")),
            }
        } else {
            None
        };

        let kind = if summon {
            SpecKind::Entity { count }
        } else {
            SpecKind::Block
        };

        Self {
            id,
            tile_data,
            kind,
            attachment,
        }
    }

    /// Identifier with tile-data, as handed to the world
    pub fn identifier(&self) -> String {
        match &self.tile_data {
            Some(data) => format!("{} {}", self.id, data),
            None => self.id.clone(),
        }
    }

    pub fn pass(&self) -> Pass {
        if self.attachment {
            Pass::Attachment
        } else {
            Pass::Solid
        }
    }

    pub fn action(&self) -> Action {
        match self.kind {
            SpecKind::Block => Action::Create(self.identifier()),
            SpecKind::Entity { count } => Action::Summon {
                entity: self.identifier(),
                count,
            },
        }
    }
}

fn rotate(
    kind: OrientableKind,
    tile_data: &str,
    direction: Direction,
    diagnostics: &mut Vec<Diagnostic>,
) -> &'static str {
    let table = kind.table();
    match table.lookup(tile_data, direction) {
        Some(rotated) => rotated,
        None => {
            diagnostics.push(Diagnostic::UnknownRotationValue {
                kind,
                tile_data: tile_data.to_string(),
                fallback: table.default,
            });
            table.default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(raw: &str, direction: Direction) -> (BlockSpec, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let spec = BlockSpec::resolve(raw, direction, &PlacementConfig::default(), &mut diagnostics);
        (spec, diagnostics)
    }

    #[test]
    fn test_plain_block() {
        let (spec, diags) = resolve("stone", Direction::North);
        assert_eq!(spec.identifier(), "stone");
        assert_eq!(spec.kind, SpecKind::Block);
        assert!(!spec.attachment);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_stairs_are_rotated() {
        let (spec, _) = resolve("oak_stairs 0", Direction::East);
        assert_eq!(spec.identifier(), "oak_stairs 3");
    }

    #[test]
    fn test_non_orientable_keeps_tile_data() {
        let (spec, _) = resolve("wool 14", Direction::West);
        assert_eq!(spec.identifier(), "wool 14");
    }

    #[test]
    fn test_orientable_without_space_is_untouched() {
        let (spec, _) = resolve("torch", Direction::South);
        assert_eq!(spec.identifier(), "torch");
        assert!(spec.attachment);
    }

    #[test]
    fn test_attachment_keywords_match_substrings() {
        assert!(resolve("soul_lantern", Direction::North).0.attachment);
        assert!(resolve("vine 1", Direction::North).0.attachment);
        assert!(resolve("bell", Direction::North).0.attachment);
        assert!(!resolve("oak_planks", Direction::North).0.attachment);
    }

    #[test]
    fn test_summon_with_count() {
        let (spec, diags) = resolve("$chicken count:3", Direction::North);
        assert_eq!(spec.id, "chicken");
        assert_eq!(spec.tile_data, None);
        assert_eq!(spec.kind, SpecKind::Entity { count: 3 });
        assert_eq!(
            spec.action(),
            Action::Summon {
                entity: "chicken".to_string(),
                count: 3
            }
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn test_summon_without_count() {
        let (spec, _) = resolve("$villager", Direction::North);
        assert_eq!(spec.kind, SpecKind::Entity { count: 1 });
        assert_eq!(spec.identifier(), "villager");
    }

    #[test]
    fn test_invalid_count_summons_once() {
        let (spec, diags) = resolve("$cow count:many", Direction::North);
        assert_eq!(spec.kind, SpecKind::Entity { count: 1 });
        assert_eq!(spec.id, "cow");
        assert!(matches!(diags[0], Diagnostic::InvalidCount { .. }));
    }

    #[test]
    fn test_unknown_rotation_value_falls_back() {
        let (spec, diags) = resolve("chest 9", Direction::South);
        assert_eq!(spec.identifier(), "chest 2");
        assert_eq!(
            diags,
            vec![Diagnostic::UnknownRotationValue {
                kind: OrientableKind::Chest,
                tile_data: "9".to_string(),
                fallback: "2",
            }]
        );
    }

    #[test]
    fn test_fence_gate_fallback_is_zero() {
        let (spec, _) = resolve("fence_gate 5", Direction::East);
        assert_eq!(spec.identifier(), "fence_gate 0");
    }
}
