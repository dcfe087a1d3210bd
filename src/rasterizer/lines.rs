use super::*;

/// Rasterize the segment between two integer endpoints with Bresenham's algorithm.
///
/// The segment is walked along its driving axis (x for shallow slopes, y for steep ones) from the
/// endpoint with the lower coordinate on that axis, so the first point returned may be either
/// `(x0, y0)` or `(x1, y1)`. Exactly `max(|dx|, |dy|) + 1` points are produced, each multiplied
/// by `scale`. Coincident endpoints yield a single point.
pub fn rasterize_line(x0: i32, y0: i32, x1: i32, y1: i32, scale: f32) -> Vec<LatticePoint> {
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);

    let points = if (y1 - y0).abs() < (x1 - x0).abs() {
        if x0 > x1 {
            plot_shallow(x1, y1, x0, y0, scale)
        } else {
            plot_shallow(x0, y0, x1, y1, scale)
        }
    } else if y0 > y1 {
        plot_steep(x1, y1, x0, y0, scale)
    } else {
        plot_steep(x0, y0, x1, y1, scale)
    };

    log::trace!(
        "rasterized line ({}, {}) -> ({}, {}) into {} points",
        x0, y0, x1, y1, points.len(),
    );
    points
}

// |dy| < |dx|, x0 <= x1
fn plot_shallow(x0: i64, y0: i64, x1: i64, y1: i64, scale: f32) -> Vec<LatticePoint> {
    let dx = x1 - x0;
    let (dy, yi) = if y1 < y0 { (y0 - y1, -1) } else { (y1 - y0, 1) };

    let mut d = 2 * dy - dx;
    let mut y = y0;
    (x0..=x1)
        .map(|x| {
            let p = emit(x, y, scale);
            if d > 0 {
                y += yi;
                d -= 2 * dx;
            }
            d += 2 * dy;
            p
        })
        .collect()
}

// |dy| >= |dx|, y0 <= y1
fn plot_steep(x0: i64, y0: i64, x1: i64, y1: i64, scale: f32) -> Vec<LatticePoint> {
    let dy = y1 - y0;
    let (dx, xi) = if x1 < x0 { (x0 - x1, -1) } else { (x1 - x0, 1) };

    let mut d = 2 * dx - dy;
    let mut x = x0;
    (y0..=y1)
        .map(|y| {
            let p = emit(x, y, scale);
            if d > 0 {
                x += xi;
                d -= 2 * dy;
            }
            d += 2 * dx;
            p
        })
        .collect()
}

/// A line segment between two integer lattice points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    pub from: Vec2<i32>,
    pub to: Vec2<i32>,
}

impl Line {
    pub fn new(from: impl Into<Vec2<i32>>, to: impl Into<Vec2<i32>>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

impl Rasterizer for Line {
    fn rasterize(&self, scale: f32) -> Vec<LatticePoint> {
        rasterize_line(self.from.x, self.from.y, self.to.x, self.to.y, scale)
    }

    fn point_count(&self) -> usize {
        let d = (self.to.as_::<i64>() - self.from.as_::<i64>()).map(i64::abs);
        d.x.max(d.y) as usize + 1
    }
}

/// The outline of a triangle, drawn as its three edges `a-b`, `a-c` and `b-c` in that order.
///
/// Vertices shared by two edges appear once per edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: Vec2<i32>,
    pub b: Vec2<i32>,
    pub c: Vec2<i32>,
}

impl Triangle {
    pub fn new(
        a: impl Into<Vec2<i32>>,
        b: impl Into<Vec2<i32>>,
        c: impl Into<Vec2<i32>>,
    ) -> Self {
        Self { a: a.into(), b: b.into(), c: c.into() }
    }

    /// The three edges in rasterization order.
    pub fn edges(&self) -> [Line; 3] {
        [
            Line::new(self.a, self.b),
            Line::new(self.a, self.c),
            Line::new(self.b, self.c),
        ]
    }
}

impl Rasterizer for Triangle {
    fn rasterize(&self, scale: f32) -> Vec<LatticePoint> {
        self.edges()
            .iter()
            .flat_map(|edge| edge.rasterize(scale))
            .collect()
    }

    fn point_count(&self) -> usize {
        self.edges().iter().map(Line::point_count).sum()
    }
}
