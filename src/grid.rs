//! Rectangular grid geometry and a dense row-major cell container.
//!
//! `Dimensions` carries the static rules of a board (bounds checking, random
//! cells, ship footprints). `Grid<T>` stores one value per cell and is sized at
//! construction, so tests can exercise boards of any shape up to the configured
//! maximum.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::config::{MAX_COLS, MAX_ROWS};

/// Errors returned by grid indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is outside `[0, rows) x [0, cols)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// A cell coordinate. Rows grow downward, columns grow rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub r: usize,
    pub c: usize,
}

impl Point {
    pub const fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.r, self.c)
    }
}

/// Direction a ship extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Extends to the right of the origin.
    Horizontal,
    /// Extends downward from the origin.
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];
}

/// Immutable size of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Returns `None` unless `1 <= rows <= MAX_ROWS` and `1 <= cols <= MAX_COLS`.
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        if (1..=MAX_ROWS).contains(&rows) && (1..=MAX_COLS).contains(&cols) {
            Some(Self { rows, cols })
        } else {
            None
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// True iff the point lies on the grid.
    pub fn is_valid(&self, p: Point) -> bool {
        p.r < self.rows && p.c < self.cols
    }

    /// Uniformly distributed cell; successive calls are independent.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(0..self.rows),
            rng.random_range(0..self.cols),
        )
    }

    /// Every cell in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let cols = self.cols;
        (0..self.area()).map(move |i| Point::new(i / cols, i % cols))
    }

    /// Cells covered by a run of `len` starting at `origin`, or `None` if any
    /// of them would fall off the grid.
    pub fn footprint(
        &self,
        origin: Point,
        dir: Direction,
        len: usize,
    ) -> Option<impl Iterator<Item = Point>> {
        if !self.is_valid(origin) || len == 0 {
            return None;
        }
        let fits = match dir {
            Direction::Horizontal => origin.c + len <= self.cols,
            Direction::Vertical => origin.r + len <= self.rows,
        };
        if !fits {
            return None;
        }
        Some((0..len).map(move |k| match dir {
            Direction::Horizontal => Point::new(origin.r, origin.c + k),
            Direction::Vertical => Point::new(origin.r + k, origin.c),
        }))
    }

    /// The pursuit neighbourhood of `center`: the same row within `reach`
    /// columns, then the same column within `reach` rows, clipped to the grid.
    /// The center itself appears in both portions.
    pub fn cross(&self, center: Point, reach: usize) -> impl Iterator<Item = Point> {
        let row_span = center.c.saturating_sub(reach)..=(center.c + reach).min(self.cols - 1);
        let col_span = center.r.saturating_sub(reach)..=(center.r + reach).min(self.rows - 1);
        let across = row_span.map(move |c| Point::new(center.r, c));
        let down = col_span.map(move |r| Point::new(r, center.c));
        across.chain(down)
    }
}

/// Dense `rows x cols` storage, one `T` per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    dims: Dimensions,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(dims: Dimensions, fill: T) -> Self {
        Self {
            dims,
            cells: vec![fill; dims.area()],
        }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        for cell in self.cells.iter_mut() {
            *cell = value.clone();
        }
    }
}

impl<T> Grid<T> {
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Cell at `p`.
    pub fn get(&self, p: Point) -> Result<&T, GridError> {
        let idx = self.index(p)?;
        Ok(&self.cells[idx])
    }

    /// Replace the cell at `p`.
    pub fn set(&mut self, p: Point, value: T) -> Result<(), GridError> {
        let idx = self.index(p)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Mutable access to the cell at `p`.
    pub fn get_mut(&mut self, p: Point) -> Result<&mut T, GridError> {
        let idx = self.index(p)?;
        Ok(&mut self.cells[idx])
    }

    /// Cells paired with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        let cols = self.dims.cols();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Point::new(i / cols, i % cols), v))
    }

    /// Mutable cell values, row-major.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Number of cells satisfying `pred`.
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.cells.iter().filter(|v| pred(v)).count()
    }

    #[inline]
    fn index(&self, p: Point) -> Result<usize, GridError> {
        if self.dims.is_valid(p) {
            Ok(p.r * self.dims.cols() + p.c)
        } else {
            Err(GridError::IndexOutOfBounds { row: p.r, col: p.c })
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}> [", self.dims.rows(), self.dims.cols())?;
        for row in self.cells.chunks(self.dims.cols()) {
            writeln!(f, "  {:?}", row)?;
        }
        write!(f, "]")
    }
}
