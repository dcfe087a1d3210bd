pub mod circles;
pub mod lines;

pub use self::{
    circles::{rasterize_circle, Circle},
    lines::{rasterize_line, Line, Triangle},
};

use vek::*;

/// A rasterized point: integer lattice coordinates multiplied by the caller's scale.
pub type LatticePoint = Vec2<f32>;

/// A primitive that can be discretized onto the integer lattice.
///
/// Implementors work entirely in integer arithmetic and only apply `scale` when emitting each
/// point, so no floating-point error accumulates along the primitive.
pub trait Rasterizer {
    /// Rasterize the primitive, multiplying each emitted lattice coordinate by `scale`.
    fn rasterize(&self, scale: f32) -> Vec<LatticePoint>;

    /// The number of points [`Rasterizer::rasterize`] will emit.
    fn point_count(&self) -> usize {
        self.rasterize(1.0).len()
    }
}

#[inline(always)]
pub(crate) fn emit(x: i64, y: i64, scale: f32) -> LatticePoint {
    Vec2::new(x as f32 * scale, y as f32 * scale)
}
