//! The display lattice rasterized primitives are drawn on.
//!
//! A [`Grid`] is a square mesh of `lines × lines` grid lines spanning `[-extent, extent]` on both
//! axes. Integer lattice coordinates run from `-half_span()` to `half_span()`, and the distance
//! between neighbouring grid lines, [`Grid::cell_size`], is the `scale` handed to the rasterizers.

use vek::*;

use crate::{buffer::Buffer2d, rasterizer::LatticePoint, Error, Result, Target};

/// A square display lattice.
///
/// `lines` is always odd, so the lattice origin sits on the middle grid line and every integer
/// coordinate in `-half_span()..=half_span()` lands on a grid line intersection.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    lines: u32,
    extent: f32,
}

impl Grid {
    pub const DEFAULT_LINES: u32 = 21;
    pub const DEFAULT_EXTENT: f32 = 0.9;

    pub fn new(lines: u32, extent: f32) -> Result<Self> {
        if lines < 3 || lines % 2 == 0 {
            return Err(Error::InvalidGeometry(format!(
                "a grid needs an odd number of lines, at least 3, got {}",
                lines
            )));
        }
        if !(extent.is_finite() && extent > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "grid extent must be positive and finite, got {}",
                extent
            )));
        }
        Ok(Self { lines, extent })
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Distance between neighbouring grid lines; pass this as the rasterizer `scale`.
    pub fn cell_size(&self) -> f32 {
        self.extent * 2.0 / (self.lines - 1) as f32
    }

    /// The largest integer coordinate (in either direction) that still lies on the grid.
    pub fn half_span(&self) -> i32 {
        (self.lines / 2) as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        let h = self.half_span();
        (-h..=h).contains(&x) && (-h..=h).contains(&y)
    }

    /// The mesh geometry: `lines` horizontal segments from bottom to top, followed by `lines`
    /// vertical segments from left to right.
    pub fn grid_lines(&self) -> Vec<[Vec2<f32>; 2]> {
        let e = self.extent;
        let offsets = (0..self.lines).map(|i| i as f32 * self.cell_size() - e);

        let rows = offsets
            .clone()
            .map(|y| [Vec2::new(-e, y), Vec2::new(e, y)]);
        let cols = offsets.map(|x| [Vec2::new(x, -e), Vec2::new(x, e)]);

        rows.chain(cols).collect()
    }

    /// Map a scaled lattice point back to its integer lattice coordinate.
    pub fn to_lattice(&self, point: LatticePoint) -> Vec2<i32> {
        (point / self.cell_size()).map(|e| e.round() as i32)
    }

    /// Mark every lattice point that falls on the grid in a `lines × lines` occupancy buffer.
    ///
    /// Row 0 of the buffer is the top of the grid (the highest y). Points off the grid are
    /// skipped.
    pub fn plot(&self, points: &[LatticePoint]) -> Buffer2d<bool> {
        let n = self.lines as usize;
        let mut cells = Buffer2d::fill([n, n], false);
        let h = self.half_span();

        let mut plotted = 0;
        for cell in points.iter().map(|p| self.to_lattice(*p)) {
            if self.contains(cell.x, cell.y)
                && cells.set([(cell.x + h) as usize, (h - cell.y) as usize], true)
            {
                plotted += 1;
            }
        }

        if plotted < points.len() {
            log::debug!("{} of {} points fell outside the grid", points.len() - plotted, points.len());
        }
        cells
    }

    /// Render [`Grid::plot`] as text, one line per row: `#` for set cells and `.` for clear ones.
    pub fn render_ascii(&self, points: &[LatticePoint]) -> String {
        self.plot(points)
            .rows()
            .map(|row| row.iter().map(|&set| if set { '#' } else { '.' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            lines: Self::DEFAULT_LINES,
            extent: Self::DEFAULT_EXTENT,
        }
    }
}
