//! Coordinate transforms from template space to world space
//!
//! A template is authored facing north: layer `i` runs away from the
//! anchor, row `j` goes up and column `k` runs right to left across the
//! structure's centerline. Each facing is a quarter turn of that frame.
//!
//! | facing | x                         | z                         |
//! |--------|---------------------------|---------------------------|
//! | north  | floor(x0 + width/2 - k)   | z0 + depth - i            |
//! | south  | ceil(x0 - width/2 + k)    | z0 - depth + i            |
//! | east   | x0 - depth + i            | ceil(z0 - width/2 + k)    |
//! | west   | x0 + depth - i            | floor(z0 + width/2 - k)   |
//!
//! The floor/ceil split keeps even-width templates on the same centerline
//! for all four facings.

use crate::parser::ast::{Dimensions, Offset};
use crate::placement::direction::Direction;
use crate::placement::types::{BlockPos, CellIndex};

/// Project the authored offset onto the facing and add it to the anchor
pub fn apply_offset(anchor: BlockPos, direction: Direction, offset: Offset) -> BlockPos {
    let (dx, dz) = match direction {
        Direction::North => (offset.x, offset.z),
        Direction::South => (offset.x.saturating_neg(), offset.z.saturating_neg()),
        Direction::East => (offset.z, offset.x),
        Direction::West => (offset.z.saturating_neg(), offset.x.saturating_neg()),
    };
    anchor.translated(dx, offset.y, dz)
}

/// World position of a template cell
///
/// Positions past the `i32` range clamp to its limits.
pub fn cell_position(
    origin: BlockPos,
    direction: Direction,
    dims: Dimensions,
    cell: CellIndex,
) -> BlockPos {
    let half = dims.width as f64 / 2.0;
    // Distance from the anchor along the depth axis, never zero
    let reach = (dims.depth - cell.i) as i32;
    let k = cell.k as f64;
    let y = origin.y.saturating_add(cell.j as i32);

    match direction {
        Direction::North => BlockPos::new(
            (origin.x as f64 + half - k).floor() as i32,
            y,
            origin.z.saturating_add(reach),
        ),
        Direction::South => BlockPos::new(
            (origin.x as f64 - half + k).ceil() as i32,
            y,
            origin.z.saturating_sub(reach),
        ),
        Direction::East => BlockPos::new(
            origin.x.saturating_sub(reach),
            y,
            (origin.z as f64 - half + k).ceil() as i32,
        ),
        Direction::West => BlockPos::new(
            origin.x.saturating_add(reach),
            y,
            (origin.z as f64 + half - k).floor() as i32,
        ),
    }
}

/// Corners (min, max) of the foundation one block below the origin
///
/// The footprint is the bounding box of the structure's ground cells, taken
/// from [`cell_position`] so it always sits under the structure, grown by
/// `margin` on every horizontal side.
pub fn base_footprint(
    origin: BlockPos,
    direction: Direction,
    dims: Dimensions,
    margin: i32,
) -> (BlockPos, BlockPos) {
    let near = cell_position(origin, direction, dims, CellIndex::new(0, 0, 0));
    let far = cell_position(
        origin,
        direction,
        dims,
        CellIndex::new(dims.depth.saturating_sub(1), 0, dims.width.saturating_sub(1)),
    );
    let y = origin.y.saturating_sub(1);

    let from = BlockPos::new(
        near.x.min(far.x).saturating_sub(margin),
        y,
        near.z.min(far.z).saturating_sub(margin),
    );
    let to = BlockPos::new(
        near.x.max(far.x).saturating_add(margin),
        y,
        near.z.max(far.z).saturating_add(margin),
    );
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(depth: usize, height: usize, width: usize) -> Dimensions {
        Dimensions {
            depth,
            height,
            width,
        }
    }

    #[test]
    fn test_offset_projection() {
        let anchor = BlockPos::new(10, 64, 10);
        let offset = Offset::new(1, 2, 3);
        assert_eq!(
            apply_offset(anchor, Direction::North, offset),
            BlockPos::new(11, 66, 13)
        );
        assert_eq!(
            apply_offset(anchor, Direction::South, offset),
            BlockPos::new(9, 66, 7)
        );
        assert_eq!(
            apply_offset(anchor, Direction::East, offset),
            BlockPos::new(13, 66, 11)
        );
        assert_eq!(
            apply_offset(anchor, Direction::West, offset),
            BlockPos::new(7, 66, 9)
        );
    }

    #[test]
    fn test_north_row_of_three() {
        let origin = BlockPos::new(0, 64, 0);
        let xs: Vec<i32> = (0..3)
            .map(|k| cell_position(origin, Direction::North, dims(1, 1, 3), CellIndex::new(0, 0, k)).x)
            .collect();
        assert_eq!(xs, vec![1, 0, -1]);
        let pos = cell_position(origin, Direction::North, dims(1, 1, 3), CellIndex::new(0, 0, 0));
        assert_eq!((pos.y, pos.z), (64, 1));
    }

    #[test]
    fn test_even_width_rounding() {
        let origin = BlockPos::new(0, 0, 0);
        let d = dims(1, 1, 4);
        let north: Vec<i32> = (0..4)
            .map(|k| cell_position(origin, Direction::North, d, CellIndex::new(0, 0, k)).x)
            .collect();
        let south: Vec<i32> = (0..4)
            .map(|k| cell_position(origin, Direction::South, d, CellIndex::new(0, 0, k)).x)
            .collect();
        let east: Vec<i32> = (0..4)
            .map(|k| cell_position(origin, Direction::East, d, CellIndex::new(0, 0, k)).z)
            .collect();
        let west: Vec<i32> = (0..4)
            .map(|k| cell_position(origin, Direction::West, d, CellIndex::new(0, 0, k)).z)
            .collect();
        assert_eq!(north, vec![2, 1, 0, -1]);
        assert_eq!(south, vec![-2, -1, 0, 1]);
        assert_eq!(east, vec![-2, -1, 0, 1]);
        assert_eq!(west, vec![2, 1, 0, -1]);
    }

    #[test]
    fn test_depth_axis_per_facing() {
        let origin = BlockPos::new(0, 0, 0);
        let d = dims(3, 1, 1);
        let first = CellIndex::new(0, 0, 0);
        let last = CellIndex::new(2, 0, 0);
        assert_eq!(cell_position(origin, Direction::North, d, first).z, 3);
        assert_eq!(cell_position(origin, Direction::North, d, last).z, 1);
        assert_eq!(cell_position(origin, Direction::South, d, first).z, -3);
        assert_eq!(cell_position(origin, Direction::South, d, last).z, -1);
        assert_eq!(cell_position(origin, Direction::East, d, first).x, -3);
        assert_eq!(cell_position(origin, Direction::East, d, last).x, -1);
        assert_eq!(cell_position(origin, Direction::West, d, first).x, 3);
        assert_eq!(cell_position(origin, Direction::West, d, last).x, 1);
    }

    #[test]
    fn test_base_footprint_without_margin() {
        let origin = BlockPos::new(0, 64, 0);
        let (from, to) = base_footprint(origin, Direction::North, dims(2, 3, 3), 0);
        assert_eq!(from, BlockPos::new(-1, 63, 1));
        assert_eq!(to, BlockPos::new(1, 63, 2));
    }

    #[test]
    fn test_base_footprint_with_margin() {
        let origin = BlockPos::new(0, 64, 0);
        let (from, to) = base_footprint(origin, Direction::East, dims(2, 1, 4), 1);
        // Structure spans x -2..=-1 and z -2..=1
        assert_eq!(from, BlockPos::new(-3, 63, -3));
        assert_eq!(to, BlockPos::new(0, 63, 2));
    }

    #[test]
    fn test_positions_clamp_at_world_limits() {
        let d = dims(2, 3, 3);
        let top = CellIndex::new(0, 2, 0);
        let north = cell_position(BlockPos::new(0, 64, i32::MAX), Direction::North, d, top);
        assert_eq!(north, BlockPos::new(1, 66, i32::MAX));
        let west = cell_position(BlockPos::new(i32::MAX, i32::MAX, 0), Direction::West, d, top);
        assert_eq!(west, BlockPos::new(i32::MAX, i32::MAX, 1));
        let east = cell_position(BlockPos::new(i32::MIN, 0, 0), Direction::East, d, top);
        assert_eq!(east.x, i32::MIN);

        let (from, to) = base_footprint(BlockPos::new(i32::MIN, i32::MIN, 0), Direction::South, d, 5);
        assert_eq!((from.x, from.y), (i32::MIN, i32::MIN));
        assert_eq!(to.z, -1 + 5);
    }

    #[test]
    fn test_offset_clamps_at_world_limits() {
        let anchor = BlockPos::new(i32::MAX, 0, 0);
        let moved = apply_offset(anchor, Direction::West, Offset::new(0, 0, i32::MIN));
        assert_eq!(moved.x, i32::MAX);
    }
}
