//! Discrete geometry for teaching renderers.
//!
//! `lattice` contains the algorithmic pieces of a small rasterization course, kept separate from
//! any windowing, GPU or GUI library:
//!
//! - [`rasterizer`]: Bresenham line and midpoint circle rasterization onto an integer lattice.
//! - [`bezier`]: Bezier curves, evaluated both directly (Bernstein basis) and by de Casteljau
//!   subdivision.
//! - [`camera`]: a first-person yaw/pitch camera producing view and projection matrices.
//!
//! Outputs are plain [`vek`] vectors and matrices. Assembling vertex buffers (interleaving
//! colours, uploading, drawing) is left to the caller:
//!
//! ```
//! use lattice::{grid::Grid, rasterizer::rasterize_line};
//!
//! let grid = Grid::default();
//! let points = rasterize_line(-3, -1, 4, 2, grid.cell_size());
//! let vertices: Vec<[f32; 6]> = points
//!     .iter()
//!     .map(|p| [p.x, p.y, 0.0, 1.0, 0.0, 0.0])
//!     .collect();
//! assert_eq!(vertices.len(), 8);
//! ```

pub mod bezier;
pub mod buffer;
pub mod camera;
pub mod error;
pub mod grid;
pub mod interpolate;
pub mod math;
pub mod rasterizer;
pub mod viewport;

// Reexports
pub use self::{
    bezier::{BezierSample, Construction, ControlPolygon, CurveAnimation},
    buffer::Buffer2d,
    camera::{Camera, CameraConfig, CursorTracker, Movement},
    error::{Error, Result},
    grid::Grid,
    interpolate::Interpolate,
    rasterizer::{LatticePoint, Rasterizer},
    viewport::Viewport,
};

/// Represents a 2-dimensional surface that cells can be read from and written to.
pub trait Target {
    /// The type of items contained within this target.
    type Item: Clone;

    /// Get the dimensions of the target.
    fn size(&self) -> [usize; 2];

    /// Get the item at the specified location, or `None` if the location is out of bounds.
    fn get(&self, pos: [usize; 2]) -> Option<&Self::Item>;

    /// Set the item at the specified location. Returns `false`, leaving the target unchanged, if
    /// the location is out of bounds.
    fn set(&mut self, pos: [usize; 2], item: Self::Item) -> bool;

    /// Clear the target with copies of the specified item.
    fn clear(&mut self, fill: Self::Item);
}
