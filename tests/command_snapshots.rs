//! Snapshot tests for rendered command streams

use block_templater::{
    parse, placement, BlockPos, CommandConfig, CommandWorld, Direction, PlacementConfig,
};

fn render(source: &str, anchor: BlockPos, direction: Direction, config: CommandConfig) -> String {
    let template = parse(source).expect("Should parse");
    let mut world = CommandWorld::with_config(config);
    placement::fill_template(
        &template,
        anchor,
        direction,
        &PlacementConfig::default(),
        &mut world,
    );
    world.render()
}

#[test]
fn test_base_solid_then_attachment() {
    let source = r#"
a=stone
t=torch 1
> base dirt
 a t
"#;
    let rendered = render(
        source,
        BlockPos::new(10, 64, 10),
        Direction::South,
        CommandConfig::default(),
    );
    insta::assert_snapshot!(rendered, @r"
    /fill 9 63 9 10 63 9 dirt
    /setblock 9 64 9 stone
    /setblock 10 64 9 torch 2
    ");
}

#[test]
fn test_summons_and_gate_facing_east() {
    let source = r#"
c=$cow count:2
g=fence_gate 0
 g c
"#;
    let rendered = render(
        source,
        BlockPos::new(0, 70, 0),
        Direction::East,
        CommandConfig::new().with_slash_prefix(false),
    );
    insta::assert_snapshot!(rendered, @r"
    setblock -1 70 -1 fence_gate 1
    summon cow -1 70 0
    summon cow -1 70 0
    ");
}
