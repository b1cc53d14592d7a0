//! Flood-filled regions of equal-valued cells and their shape metrics.

use std::collections::HashSet;

use nalgebra::Point2;

use crate::grid::{Direction, Grid};
use crate::search::flood_fill;

/// The 2x2 corner-patch occupancy patterns where a region edge runs straight
/// through the patch, continuing an edge already counted in the perimeter:
/// the patch's occupied pair sits side by side along one row or column.
///
/// Patch cells take bits `1 << 0` through `1 << 3` in row-major order.
const STRAIGHT_EDGE_PATCHES: [u8; 4] = [0b1100, 0b0011, 0b1010, 0b0101];

/// A maximal set of cardinally connected coordinates sharing one cell value.
///
/// Regions are computed on demand from a seed and usually discarded once
/// their metrics have been read; they hold no reference to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    cells: HashSet<Point2<i32>>,
}

impl Region {
    /// Flood-fill the region containing `seed`: every cell reachable from
    /// it by cardinal steps across cells equal to the seed's value.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is outside the grid.
    #[must_use]
    pub fn fill<T: PartialEq>(grid: &Grid<T>, seed: Point2<i32>) -> Self {
        let value = grid.get(seed);
        let cells = flood_fill(seed, |point| {
            Direction::CARDINALS
                .into_iter()
                .map(move |direction| point + direction.to_vector2())
                .filter(move |&next| grid.is_inside(next) && grid.get(next) == value)
        });
        Self { cells }
    }

    /// Check whether the region contains a coordinate.
    #[must_use]
    pub fn contains(&self, point: Point2<i32>) -> bool {
        self.cells.contains(&point)
    }

    /// Iterate the region's coordinates, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Point2<i32>> + '_ {
        self.cells.iter().copied()
    }

    /// The number of cells in the region.
    #[must_use]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// The number of cell edges bordering a cell outside the region.
    ///
    /// Each same-region adjacency hides one edge on both of its cells, so
    /// this is `4 * area` minus the adjacencies counted from each side.
    #[must_use]
    pub fn perimeter(&self) -> usize {
        let internal_edges: usize = self
            .cells
            .iter()
            .map(|&cell| {
                Direction::CARDINALS
                    .into_iter()
                    .filter(|&direction| self.contains(cell + direction.to_vector2()))
                    .count()
            })
            .sum();
        4 * self.area() - internal_edges
    }

    /// The number of distinct straight edge segments around the region,
    /// counting inner boundaries.
    ///
    /// Scans every 2x2 patch across the region's bounding box inflated by
    /// one cell; each [`STRAIGHT_EDGE_PATCHES`] match continues an edge
    /// rather than ending one, and is subtracted from the perimeter.
    #[must_use]
    pub fn side_count(&self) -> usize {
        self.perimeter() - self.straight_edge_patch_count()
    }

    /// The 4-bit occupancy of the 2x2 patch whose northwest cell is
    /// `top_left`.
    fn patch(&self, top_left: Point2<i32>) -> u8 {
        let mut bits = 0u8;
        for (bit, (dx, dy)) in [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().enumerate() {
            if self.contains(Point2::new(top_left.x + dx, top_left.y + dy)) {
                bits |= 1 << bit;
            }
        }
        bits
    }

    fn straight_edge_patch_count(&self) -> usize {
        let mut cells = self.cells.iter();
        let Some(&first) = cells.next() else {
            return 0;
        };
        let (mut min, mut max) = (first, first);
        for &cell in cells {
            min = Point2::new(min.x.min(cell.x), min.y.min(cell.y));
            max = Point2::new(max.x.max(cell.x), max.y.max(cell.y));
        }

        let mut count = 0;
        for y in (min.y - 1)..=max.y {
            for x in (min.x - 1)..=max.x {
                if STRAIGHT_EDGE_PATCHES.contains(&self.patch(Point2::new(x, y))) {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridFromTextError;

    #[test]
    fn uniform_grid_is_one_region() -> Result<(), GridFromTextError> {
        let grid = Grid::from_text("aaa\naaa\n")?;
        let region = Region::fill(&grid, Point2::new(1, 1));
        assert_eq!(region.area(), 6);
        assert_eq!(region.perimeter(), 2 * (3 + 2));
        assert_eq!(region.side_count(), 4);
        Ok(())
    }

    #[test]
    fn isolated_cell_has_unit_metrics() -> Result<(), GridFromTextError> {
        let grid = Grid::from_text("bbb\nbab\nbbb\n")?;
        let region = Region::fill(&grid, Point2::new(1, 1));
        assert_eq!(region.area(), 1);
        assert_eq!(region.perimeter(), 4);
        assert_eq!(region.side_count(), 4);
        Ok(())
    }

    #[test]
    fn ring_counts_its_inner_boundary() -> Result<(), GridFromTextError> {
        // the `b` ring around the isolated cell has 8 sides: 4 out, 4 in
        let grid = Grid::from_text("bbb\nbab\nbbb\n")?;
        let region = Region::fill(&grid, Point2::new(0, 0));
        assert_eq!(region.area(), 8);
        assert_eq!(region.perimeter(), 12 + 4);
        assert_eq!(region.side_count(), 8);
        Ok(())
    }

    #[test]
    fn fill_stops_at_differing_values() -> Result<(), GridFromTextError> {
        let grid = Grid::from_text("aab\naba\n")?;
        let region = Region::fill(&grid, Point2::new(0, 0));
        assert_eq!(region.area(), 3);
        assert!(region.contains(Point2::new(1, 0)));
        assert!(!region.contains(Point2::new(2, 0)));
        Ok(())
    }
}
