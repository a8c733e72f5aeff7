//! Responsive project tile grid.
//!
//! Project cards occupy whole grid cells: each has a span in columns and
//! rows, and the grid's column count follows the container width. Cards are
//! placed first-fit in input order, so a small card later in the list can
//! backfill a hole left by a large one.
//!
//! # Example
//!
//! ```
//! use zengallery::{ProjectGrid, TileSpan};
//!
//! let spans = [TileSpan::new(2, 1), TileSpan::new(1, 2), TileSpan::new(1, 1)];
//! let layout = ProjectGrid::new(1200.0).place(&spans).unwrap();
//!
//! assert_eq!(layout.columns, 4);
//! let third = layout.tiles[2].unwrap();
//! // Fills the gap to the right of the first two cards.
//! assert_eq!((third.cell.row, third.cell.column), (0, 3));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::geometry::Placement;

/// Spacing between tiles when none is given.
pub const DEFAULT_TILE_GAP: f64 = 20.0;

/// Rows available for placement when none is given.
pub const DEFAULT_MAX_ROWS: u32 = 50;

/// How many columns the grid has at a given container width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Breakpoints {
    /// Widths below `thresholds[i]` get `i + 1` columns; wider gets 4.
    /// Thresholds must be ascending.
    Responsive([f64; 3]),
    /// Always this many columns.
    Fixed(u32),
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Breakpoints {
    /// Phone, tablet, small desktop, desktop.
    pub const STANDARD: Self = Self::Responsive([576.0, 768.0, 992.0]);

    /// Column count for a container of `width` pixels.
    pub fn columns_for(&self, width: f64) -> u32 {
        match self {
            Self::Responsive(thresholds) => {
                thresholds.iter().position(|&t| width < t).unwrap_or(3) as u32 + 1
            }
            Self::Fixed(n) => *n,
        }
    }
}

/// Size of a tile in grid cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileSpan {
    pub columns: u32,
    pub rows: u32,
}

impl TileSpan {
    /// Create a span.
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Narrow the span for small grids.
    ///
    /// A one-column grid makes every tile one column wide; a two-column grid
    /// makes every multi-column tile exactly two wide. Wider grids keep the
    /// span as authored, even when it does not fit.
    pub fn adjusted(self, grid_columns: u32) -> Self {
        match grid_columns {
            1 => Self::new(1, self.rows),
            2 if self.columns > 1 => Self::new(2, self.rows),
            _ => self,
        }
    }
}

/// Top-left cell of a placed tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: u32,
    pub column: u32,
}

/// A tile that found a spot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridTile {
    /// Top-left cell.
    pub cell: GridCell,
    /// Span after [`TileSpan::adjusted`].
    pub span: TileSpan,
    /// Pixel rectangle relative to the grid's top-left corner.
    pub rect: Placement,
}

/// Result of [`ProjectGrid::place`].
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    /// Column count chosen for the container width.
    pub columns: u32,
    /// Side length of one square cell in pixels.
    pub unit: f64,
    /// One entry per input span. `None` for tiles that could not be placed.
    pub tiles: Vec<Option<GridTile>>,
    /// Rows touched by any placed tile.
    pub rows_used: u32,
    /// Height the grid container needs, including one trailing gap.
    pub total_height: f64,
}

impl GridLayout {
    /// Placed tiles with their input index.
    pub fn placed(&self) -> impl Iterator<Item = (usize, &GridTile)> {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.as_ref().map(|t| (i, t)))
    }
}

/// Tile grid layout error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Container width is zero, negative, or not finite.
    InvalidWidth,
    /// Breakpoints produced a zero-column grid.
    ZeroColumns,
    /// The gaps between `columns` columns take up the whole width.
    NoRoomForColumns { columns: u32 },
    /// The span at `index` has zero columns or rows.
    ZeroSpan { index: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidWidth => f.write_str("grid container width must be positive"),
            Self::ZeroColumns => f.write_str("breakpoints produced zero columns"),
            Self::NoRoomForColumns { columns } => {
                write!(f, "gaps leave no room for {columns} columns")
            }
            Self::ZeroSpan { index } => write!(f, "tile {index} has an empty span"),
        }
    }
}

impl core::error::Error for GridError {}

/// Tile grid specification.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectGrid {
    width: f64,
    gap: f64,
    max_rows: u32,
    breakpoints: Breakpoints,
}

impl ProjectGrid {
    /// Grid for a container `width` pixels wide, with default gap, rows, and breakpoints.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            gap: DEFAULT_TILE_GAP,
            max_rows: DEFAULT_MAX_ROWS,
            breakpoints: Breakpoints::STANDARD,
        }
    }

    /// Set the spacing between tiles.
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
        self
    }

    /// Set how many rows the grid may grow to.
    pub fn max_rows(mut self, rows: u32) -> Self {
        self.max_rows = rows;
        self
    }

    /// Set the column breakpoints.
    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Place `spans` first-fit, in order.
    pub fn place(&self, spans: &[TileSpan]) -> Result<GridLayout, GridError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(GridError::InvalidWidth);
        }
        if let Some(index) = spans.iter().position(|s| s.columns == 0 || s.rows == 0) {
            return Err(GridError::ZeroSpan { index });
        }
        let columns = self.breakpoints.columns_for(self.width);
        if columns == 0 {
            return Err(GridError::ZeroColumns);
        }

        let unit = (self.width - (columns - 1) as f64 * self.gap) / columns as f64;
        if unit <= 0.0 {
            return Err(GridError::NoRoomForColumns { columns });
        }
        let pitch = unit + self.gap;
        let mut occupancy = Occupancy::for_spans(columns, self.max_rows, spans);
        let mut rows_used = 0;

        let tiles = spans
            .iter()
            .map(|span| {
                let span = span.adjusted(columns);
                let cell = occupancy.first_fit(span)?;
                occupancy.mark(cell, span);
                rows_used = rows_used.max(cell.row + span.rows);
                Some(GridTile {
                    cell,
                    span,
                    rect: Placement {
                        x: cell.column as f64 * pitch,
                        y: cell.row as f64 * pitch,
                        width: span.columns as f64 * pitch - self.gap,
                        height: span.rows as f64 * pitch - self.gap,
                    },
                })
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(columns, rows_used, tiles = spans.len(), "placed project grid");

        Ok(GridLayout {
            columns,
            unit,
            tiles,
            rows_used,
            total_height: rows_used as f64 * pitch,
        })
    }
}

/// Row-major map of taken cells.
///
/// Only the part of the grid the tiles can reach is tracked: laid side by
/// side they span at most the sum of their widths, and stacked at most the
/// sum of their heights, so first-fit never looks past either.
struct Occupancy {
    columns: u32,
    rows: u32,
    taken: Vec<bool>,
}

impl Occupancy {
    fn for_spans(columns: u32, max_rows: u32, spans: &[TileSpan]) -> Self {
        let adjusted = || spans.iter().map(|s| s.adjusted(columns));
        let reach = |total: u64, limit: u32| total.min(u64::from(limit)) as u32;
        let width = reach(adjusted().map(|s| u64::from(s.columns)).sum(), columns);
        let height = reach(adjusted().map(|s| u64::from(s.rows)).sum(), max_rows);
        Self::new(width, height)
    }

    fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            taken: vec![false; columns as usize * rows as usize],
        }
    }

    fn index(&self, row: u32, column: u32) -> usize {
        row as usize * self.columns as usize + column as usize
    }

    fn is_taken(&self, row: u32, column: u32) -> bool {
        self.taken[self.index(row, column)]
    }

    fn is_free(&self, at: GridCell, span: TileSpan) -> bool {
        (at.row..at.row + span.rows)
            .all(|r| (at.column..at.column + span.columns).all(|c| !self.is_taken(r, c)))
    }

    fn first_fit(&self, span: TileSpan) -> Option<GridCell> {
        if span.columns > self.columns || span.rows > self.rows {
            return None;
        }
        (0..=self.rows - span.rows)
            .flat_map(|row| (0..=self.columns - span.columns).map(move |column| GridCell { row, column }))
            .find(|&cell| self.is_free(cell, span))
    }

    fn mark(&mut self, at: GridCell, span: TileSpan) {
        for r in at.row..at.row + span.rows {
            for c in at.column..at.column + span.columns {
                let i = self.index(r, c);
                self.taken[i] = true;
            }
        }
    }
}
