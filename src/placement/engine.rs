//! Placement engine: turns a template into an ordered list of world calls
//!
//! Placement runs in two steps. [`plan`] resolves every cell (tokens,
//! rotation, coordinates) and collects diagnostics without side effects.
//! [`execute`] then replays the plan against a [`World`]: diagnostics
//! first, then the base fill, then solid blocks, then attachments.

use crate::parser::ast::{Base, Template};
use crate::placement::block::BlockSpec;
use crate::placement::config::PlacementConfig;
use crate::placement::direction::Direction;
use crate::placement::error::Diagnostic;
use crate::placement::transform::{apply_offset, base_footprint, cell_position};
use crate::placement::types::{Action, BaseFill, BlockPos, CellIndex, Pass, Placement, Plan};
use crate::world::World;

/// Resolve every cell of `template` for the given anchor and facing
pub fn plan(
    template: &Template,
    anchor: BlockPos,
    direction: Direction,
    config: &PlacementConfig,
) -> Plan {
    let dims = template.dimensions();
    let origin = apply_offset(anchor, direction, template.offset());
    let mut diagnostics = Vec::new();

    let base = template.base().map(|base| {
        let margin = base_margin(base, &mut diagnostics);
        let (from, to) = base_footprint(origin, direction, dims, margin);
        BaseFill {
            block: base.block.clone(),
            from,
            to,
        }
    });

    let mut solids = Vec::new();
    let mut attachments = Vec::new();
    for i in 0..dims.depth {
        for j in 0..dims.height {
            for k in 0..dims.width {
                let cell = CellIndex::new(i, j, k);
                let key = template.key_at(i, j, k);
                let raw = match template.token(key) {
                    Some(raw) => raw,
                    None => {
                        diagnostics.push(Diagnostic::MissingToken {
                            key: key.to_string(),
                            cell,
                        });
                        config.missing_block.as_str()
                    }
                };

                let spec = BlockSpec::resolve(raw, direction, config, &mut diagnostics);
                let placement = Placement {
                    cell,
                    pos: cell_position(origin, direction, dims, cell),
                    action: spec.action(),
                    pass: spec.pass(),
                };
                match placement.pass {
                    Pass::Solid => solids.push(placement),
                    Pass::Attachment => attachments.push(placement),
                }
            }
        }
    }

    log::debug!(
        "planned {} solid and {} attachment cells facing {} from {}",
        solids.len(),
        attachments.len(),
        direction,
        origin
    );

    solids.append(&mut attachments);
    Plan {
        origin,
        direction,
        base,
        placements: solids,
        diagnostics,
    }
}

/// Issue the calls described by `plan`, in order
pub fn execute<W: World + ?Sized>(plan: &Plan, world: &mut W) {
    for diagnostic in &plan.diagnostics {
        world.log(&diagnostic.to_string());
    }

    if let Some(base) = &plan.base {
        world.fill(&base.block, base.from, base.to);
    }

    for placement in &plan.placements {
        match &placement.action {
            Action::Create(block) => world.create(block, placement.pos),
            Action::Summon { entity, count } => {
                for _ in 0..*count {
                    world.summon(entity, placement.pos);
                }
            }
        }
    }
}

/// Plan and execute in one go
pub fn fill_template<W: World + ?Sized>(
    template: &Template,
    anchor: BlockPos,
    direction: Direction,
    config: &PlacementConfig,
    world: &mut W,
) -> Plan {
    let plan = plan(template, anchor, direction, config);
    execute(&plan, world);
    plan
}

fn base_margin(base: &Base, diagnostics: &mut Vec<Diagnostic>) -> i32 {
    match base.property("margin") {
        None => 0,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            diagnostics.push(Diagnostic::InvalidMargin {
                value: value.to_string(),
            });
            0
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn plan_of(source: &str, direction: Direction) -> Plan {
        let template = parse(source).unwrap();
        plan(
            &template,
            BlockPos::new(0, 64, 0),
            direction,
            &PlacementConfig::default(),
        )
    }

    #[test]
    fn test_attachments_follow_solids() {
        let plan = plan_of("s=stone\nt=torch 1\n t s\n", Direction::North);
        let passes: Vec<Pass> = plan.placements.iter().map(|p| p.pass).collect();
        assert_eq!(passes, vec![Pass::Solid, Pass::Attachment]);
        assert_eq!(plan.placements[0].action, Action::Create("stone".to_string()));
        assert_eq!(plan.placements[1].action, Action::Create("torch 1".to_string()));
    }

    #[test]
    fn test_missing_token_uses_sentinel() {
        let plan = plan_of("a=stone\n a z\n", Direction::North);
        assert_eq!(
            plan.placements[1].action,
            Action::Create("magenta_glazed_terracotta".to_string())
        );
        assert_eq!(plan.diagnostics.len(), 1);
    }

    #[test]
    fn test_invalid_margin_defaults_to_zero() {
        let plan = plan_of("a=stone\n a\n> base dirt margin:wide\n", Direction::North);
        let base = plan.base.unwrap();
        assert_eq!(base.from, base.to);
        assert_eq!(
            plan.diagnostics,
            vec![Diagnostic::InvalidMargin {
                value: "wide".to_string()
            }]
        );
    }

    #[test]
    fn test_margin_is_read_from_raw_text() {
        let plan = plan_of("a=stone\n a\n> base dirt margin:007\n", Direction::North);
        let base = plan.base.unwrap();
        assert_eq!(base.to.x - base.from.x, 14);
        assert!(plan.diagnostics.is_empty());
    }

    #[test]
    fn test_offset_moves_origin() {
        let plan = plan_of("a=stone\n a\n> offset 0 -1 2\n", Direction::South);
        assert_eq!(plan.origin, BlockPos::new(0, 63, -2));
    }

    #[test]
    fn test_call_count_includes_summons_and_base() {
        let plan = plan_of("c=$cow count:4\na=stone\n c a\n> base dirt\n", Direction::North);
        assert_eq!(plan.call_count(), 4 + 1 + 1);
    }
}
