use vek::*;

use crate::{Error, Result};

/// The pixel dimensions of the window the lattice is displayed in.
///
/// Converts cursor positions (pixels, origin top-left, y down) into the normalized `[-1, 1]`
/// space that control points and rasterizer output live in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidGeometry(format!(
                "viewport must have a non-zero area, got {}x{}",
                width, height,
            )));
        }
        Ok(Self {
            width: width as f32,
            height: height as f32,
        })
    }

    pub fn size(&self) -> Extent2<f32> {
        Extent2::new(self.width, self.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Map a cursor position in pixels to normalized device coordinates.
    ///
    /// The window centre maps to the origin, the left/right edges to x = -1/1 and the
    /// bottom/top edges to y = -1/1.
    pub fn to_ndc(&self, x: f64, y: f64) -> Vec2<f32> {
        let (w, h) = (self.width as f64, self.height as f64);
        Vec2::new(
            ((x - w / 2.0) / w * 2.0) as f32,
            (-(y - h / 2.0) / h * 2.0) as f32,
        )
    }
}
