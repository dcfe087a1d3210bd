use super::*;

/// Rasterize a circle centred on the origin with the midpoint (Bresenham) circle algorithm.
///
/// One octant is walked from `(radius, 0)` until `x < y`; every octant point is emitted together
/// with its seven reflections `(±x, ±y)` and `(±y, ±x)`, so the output length is always a
/// multiple of 8. A radius of zero yields the origin eight times.
pub fn rasterize_circle(radius: u32, scale: f32) -> Vec<LatticePoint> {
    let radius = radius as i64;

    let mut points = Vec::with_capacity(octant_steps(radius) * 8);

    let mut x = radius;
    let mut y = 0;
    let mut x_change = 1 - 2 * radius;
    let mut y_change = 1;
    let mut radius_error = 0;

    while x >= y {
        points.extend_from_slice(&mirror_octants(x, y, scale));

        y += 1;
        radius_error += y_change;
        y_change += 2;
        if 2 * radius_error + x_change > 0 {
            x -= 1;
            radius_error += x_change;
            x_change += 2;
        }
    }

    log::trace!("rasterized circle of radius {} into {} points", radius, points.len());
    points
}

// Upper bound on the number of octant iterations: the octant ends at y = r / sqrt(2).
fn octant_steps(radius: i64) -> usize {
    (radius as f64 * core::f64::consts::FRAC_1_SQRT_2) as usize + 2
}

fn mirror_octants(x: i64, y: i64, scale: f32) -> [LatticePoint; 8] {
    [
        emit(x, y, scale),
        emit(-x, y, scale),
        emit(-x, -y, scale),
        emit(x, -y, scale),
        emit(y, x, scale),
        emit(-y, x, scale),
        emit(-y, -x, scale),
        emit(y, -x, scale),
    ]
}

/// A circle of integer radius centred on the lattice origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Circle {
    pub radius: u32,
}

impl Circle {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }
}

impl Rasterizer for Circle {
    fn rasterize(&self, scale: f32) -> Vec<LatticePoint> {
        rasterize_circle(self.radius, scale)
    }
}
