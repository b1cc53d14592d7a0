//! Bounds-checked two-dimensional grid storage and traversal.
//!
//! [`Grid`] is the shared substrate of the character-grid puzzles: an owned,
//! rectangular, row-major collection of cells addressed by `Point2<i32>`
//! coordinates, with `x` growing east and `y` growing south. All access goes
//! through [`Grid::is_inside`]; indexing outside the grid is a contract
//! violation and panics rather than wrapping or silently defaulting.

use std::fmt::{self, Display};

use nalgebra::{Point2, Vector2};
use thiserror::Error;

/// The four cardinal directions, in clockwise rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions, in rotation order.
    pub const CARDINALS: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Get the direction after a 90 degree clockwise turn.
    #[must_use]
    pub fn to_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Get the direction after a 90 degree counterclockwise turn.
    #[must_use]
    pub fn to_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// Get the unit offset for one step in this direction.
    ///
    /// North is negative `y`: text grids grow downward.
    #[must_use]
    pub fn to_vector2(self) -> Vector2<i32> {
        match self {
            Self::North => Vector2::y() * -1,
            Self::East => Vector2::x(),
            Self::South => Vector2::y(),
            Self::West => Vector2::x() * -1,
        }
    }
}

/// Offsets to all eight neighboring cells, diagonals included, in row-major
/// order starting from the northwest neighbor.
#[must_use]
pub fn neighbor_offsets() -> [Vector2<i32>; 8] {
    [
        Vector2::new(-1, -1),
        Vector2::new(0, -1),
        Vector2::new(1, -1),
        Vector2::new(-1, 0),
        Vector2::new(1, 0),
        Vector2::new(-1, 1),
        Vector2::new(0, 1),
        Vector2::new(1, 1),
    ]
}

/// A position paired with a facing direction, used as search state.
///
/// Equality and hashing cover both fields, so a visited-state set can tell
/// reaching a cell apart from reaching it while facing the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pose {
    pub position: Point2<i32>,
    pub direction: Direction,
}

/// An error parsing a character grid from line-oriented text.
#[derive(Error, Debug)]
pub enum GridFromTextError {
    #[error("expected grid width to be {expected} across rows, but found row width {found}")]
    UnequalRowWidth { expected: usize, found: usize },

    #[error("grid of {width} by {height} is too large to address")]
    DimensionOverflow { width: usize, height: usize },
}

/// An owned, rectangular, row-major grid of cells.
///
/// Dimensions are fixed at construction; cells mutate in place through
/// [`Grid::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl Grid<char> {
    /// Parse a grid from text, one row per line.
    ///
    /// # Errors
    ///
    /// Returns an error if rows differ in length, or if the dimensions
    /// cannot be represented as coordinates.
    pub fn from_text(input: &str) -> Result<Self, GridFromTextError> {
        let mut cells = Vec::with_capacity(input.len());
        let mut width = None;
        let mut height = 0usize;

        for line in input.lines() {
            let row_width = line.chars().count();
            match width {
                Some(expected) if expected != row_width => {
                    return Err(GridFromTextError::UnequalRowWidth {
                        expected,
                        found: row_width,
                    });
                }
                Some(_) => {}
                None => width = Some(row_width),
            }
            cells.extend(line.chars());
            height += 1;
        }

        // there'd be no width if there were no lines to parse; default to 0
        let width = width.unwrap_or(0);
        let (Ok(width_coord), Ok(height_coord)) = (i32::try_from(width), i32::try_from(height))
        else {
            return Err(GridFromTextError::DimensionOverflow { width, height });
        };

        Ok(Self {
            width: width_coord,
            height: height_coord,
            cells,
        })
    }
}

impl<T: Clone> Grid<T> {
    /// Allocate a `width` by `height` grid with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is negative.
    #[must_use]
    pub fn filled(width: i32, height: i32, fill: T) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "grid dimensions must not be negative: {width} by {height}"
        );
        let area = usize::try_from(width).unwrap_or(0) * usize::try_from(height).unwrap_or(0);
        Self {
            width,
            height,
            cells: vec![fill; area],
        }
    }
}

impl<T> Grid<T> {
    /// The number of columns.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The number of rows.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check whether a coordinate addresses a cell of the grid.
    ///
    /// This is the single source of truth for boundary checks; traversals
    /// consult it before dereferencing a coordinate.
    #[must_use]
    pub fn is_inside(&self, point: Point2<i32>) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    fn cell_index(&self, point: Point2<i32>) -> usize {
        assert!(
            self.is_inside(point),
            "coordinate ({}, {}) is outside the {} by {} grid",
            point.x,
            point.y,
            self.width,
            self.height
        );
        // both components are non-negative once inside the grid
        usize::try_from(point.y * self.width + point.x).unwrap_or(0)
    }

    /// Get a reference to the cell at `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside the grid; call sites either check
    /// [`Grid::is_inside`] first or guarantee validity by construction.
    #[must_use]
    pub fn get(&self, point: Point2<i32>) -> &T {
        &self.cells[self.cell_index(point)]
    }

    /// Replace the cell at `point` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside the grid, like [`Grid::get`].
    pub fn set(&mut self, point: Point2<i32>, value: T) {
        let index = self.cell_index(point);
        self.cells[index] = value;
    }

    /// Iterate every coordinate in row-major order (`y` outer, `x` inner).
    ///
    /// The iterator is lazy, finite, and detached from the grid's borrow, so
    /// it can be restarted freely or held across mutation.
    pub fn points(&self) -> impl Iterator<Item = Point2<i32>> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point2::new(x, y)))
    }

    /// Find the first cell equal to `value`, scanning row-major.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<Point2<i32>>
    where
        T: PartialEq,
    {
        self.points().find(|&point| self.get(point) == value)
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.get(Point2::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_the_value() {
        let mut grid = Grid::filled(3, 2, '.');
        let point = Point2::new(2, 1);
        grid.set(point, '#');
        assert_eq!(*grid.get(point), '#');
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn get_outside_the_grid_panics() {
        let grid = Grid::filled(2, 2, 0u8);
        let _ = grid.get(Point2::new(2, 0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn get_at_negative_coordinate_panics() {
        let grid = Grid::filled(2, 2, '.');
        let _ = grid.get(Point2::new(0, -1));
    }

    #[test]
    fn from_text_rejects_unequal_rows() {
        let result = Grid::from_text("ab\nabc\n");
        assert!(matches!(
            result,
            Err(GridFromTextError::UnequalRowWidth {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn points_iterate_row_major() -> Result<(), GridFromTextError> {
        let grid = Grid::from_text("ab\ncd\n")?;
        let cells: Vec<char> = grid.points().map(|point| *grid.get(point)).collect();
        assert_eq!(cells, vec!['a', 'b', 'c', 'd']);
        Ok(())
    }

    #[test]
    fn text_round_trips_through_display() -> Result<(), GridFromTextError> {
        let text = "ab#\n.cd\n";
        let grid = Grid::from_text(text)?;
        assert_eq!(grid.to_string(), text);
        Ok(())
    }

    #[test]
    fn turns_rotate_through_all_cardinals() {
        let mut direction = Direction::North;
        for expected in [
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::North,
        ] {
            direction = direction.to_right();
            assert_eq!(direction, expected);
        }
        assert_eq!(Direction::North.to_left(), Direction::West);
    }

    #[test]
    fn opposite_turns_cancel() {
        for direction in Direction::CARDINALS {
            assert_eq!(direction.to_left().to_right(), direction);
            assert_eq!(direction.to_vector2() + direction.to_left().to_left().to_vector2(), Vector2::zeros());
        }
    }
}
