//! Pure layout math: where the grid sits on the canvas.

use super::pattern::GRID;
use super::raster::Rect;

/// Pixel layout of the 5×5 grid on a square canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub size: u32,
    /// `floor(size * margin)`
    pub base_margin: u32,
    /// Side of one cell.
    pub cell: u32,
    /// Offset of the grid's top-left corner, centering it on the canvas.
    pub outer_margin: u32,
}

impl Geometry {
    /// Lay out the grid for a canvas of `size` pixels with a fractional `margin`.
    ///
    /// `margin` is expected in `[0, 0.5)`; anything that leaves no room for the
    /// grid yields a zero `cell`.
    pub fn new(size: u32, margin: f64) -> Self {
        let base_margin = (f64::from(size) * margin).floor().max(0.0) as u32;
        let inner = size.saturating_sub(base_margin.saturating_mul(2));
        let cell = inner / GRID as u32;
        let outer_margin = (size - cell * GRID as u32) / 2;
        Self {
            size,
            base_margin,
            cell,
            outer_margin,
        }
    }

    /// True when the canvas is too small to hold a single pixel per cell.
    pub fn is_degenerate(&self) -> bool {
        self.cell == 0
    }

    /// Pixel rectangle of cell `(row, col)`, before any stroke expansion.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect {
            x: col as u32 * self.cell + self.outer_margin,
            y: row as u32 * self.cell + self.outer_margin,
            width: self.cell,
            height: self.cell,
        }
    }
}
