//! Bezier curve evaluation.
//!
//! Two evaluators are provided over the same control points:
//!
//! - [`evaluate`] computes a point directly as a Bernstein-weighted sum of the control points.
//! - [`subdivide`] runs de Casteljau's algorithm, repeatedly interpolating between consecutive
//!   points until one remains, and keeps every intermediate level so the construction can be
//!   drawn.
//!
//! Both agree (up to floating-point error) for every `t`. Neither restricts `t` to `[0, 1]`:
//! values outside it extrapolate the curve.

use core::{ops::RangeInclusive, time::Duration};

use vek::*;

use crate::{
    interpolate::Interpolate,
    math::{bernstein, MAX_BERNSTEIN_DEGREE},
    Error, Result,
};

/// A curve parameter mapped to the point it evaluates to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BezierSample<P = Vec2<f32>> {
    pub t: f32,
    pub point: P,
}

/// One generation of de Casteljau's algorithm.
pub type SubdivisionLevel<P = Vec2<f32>> = Vec<P>;

fn check_degree<P>(points: &[P]) -> Result<()> {
    if points.len() < 2 {
        Err(Error::InsufficientControlPoints { found: points.len() })
    } else {
        Ok(())
    }
}

// Callers guarantee at least two points.
fn bernstein_sum<P: Interpolate + Copy>(points: &[P], t: f32) -> P {
    let n = match u32::try_from(points.len() - 1) {
        Ok(n) if n <= MAX_BERNSTEIN_DEGREE => n,
        _ => return de_casteljau_point(points, t),
    };
    points[1..]
        .iter()
        .zip(1..)
        .fold(P::scale(points[0], bernstein(t, 0, n)), |acc, (p, i)| {
            P::sum(acc, P::scale(*p, bernstein(t, i, n)))
        })
}

// Same result as `subdivide(points, t)?.point()` without keeping the levels.
fn de_casteljau_point<P: Interpolate + Copy>(points: &[P], t: f32) -> P {
    let mut level = points.to_vec();
    for len in (1..level.len()).rev() {
        for i in 0..len {
            level[i] = P::lerp2(level[i], level[i + 1], 1.0 - t, t);
        }
    }
    level[0]
}

/// Evaluate the Bezier curve defined by `points` at `t` using the Bernstein basis.
///
/// Returns the first control point at `t = 0` and the last one at `t = 1`. Curves with a degree
/// above [`MAX_BERNSTEIN_DEGREE`] are evaluated by subdivision.
pub fn evaluate<P: Interpolate + Copy>(points: &[P], t: f32) -> Result<P> {
    check_degree(points)?;
    Ok(bernstein_sum(points, t))
}

/// Run de Casteljau's algorithm at `t`, keeping every intermediate level.
pub fn subdivide<P: Interpolate + Copy>(points: &[P], t: f32) -> Result<Construction<P>> {
    check_degree(points)?;

    let mut levels = Vec::with_capacity(points.len());
    let mut current = points.to_vec();
    while current.len() > 1 {
        let next = current
            .windows(2)
            .map(|pair| P::lerp2(pair[0], pair[1], 1.0 - t, t))
            .collect();
        levels.push(core::mem::replace(&mut current, next));
    }
    levels.push(current);

    Ok(Construction { levels, t })
}

/// The full de Casteljau construction at a fixed `t`: the control polygon (level 0) followed by
/// each interpolated level, down to a single point.
#[derive(Clone, Debug, PartialEq)]
pub struct Construction<P = Vec2<f32>> {
    levels: Vec<SubdivisionLevel<P>>,
    t: f32,
}

impl<P: Copy> Construction<P> {
    pub fn t(&self) -> f32 {
        self.t
    }

    pub fn levels(&self) -> &[SubdivisionLevel<P>] {
        &self.levels
    }

    /// The number of interpolation steps, i.e. the degree of the curve.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// The interpolated levels only, without the control polygon itself.
    pub fn intermediate_levels(&self) -> &[SubdivisionLevel<P>] {
        &self.levels[1..]
    }

    /// The point on the curve at [`Construction::t`].
    pub fn point(&self) -> P {
        // The final level always holds exactly one point.
        self.levels[self.levels.len() - 1][0]
    }
}

/// Sample the curve at `resolution + 1` evenly spaced parameters `t = j / resolution`,
/// `j` in `0..=resolution`, so the samples start and end on the curve's endpoints.
///
/// A `resolution` of zero is treated as one.
pub fn samples<P: Interpolate + Copy>(points: &[P], resolution: u32) -> Result<Samples<'_, P>> {
    check_degree(points)?;
    let resolution = resolution.max(1);
    Ok(Samples { points, steps: 0..=resolution, resolution })
}

/// Like [`samples`], but stops at the last sample whose parameter does not exceed `t`.
///
/// Used to draw a curve progressively while its construction is animated. `t` is clamped to
/// `[0, 1]`.
pub fn samples_until<P: Interpolate + Copy>(
    points: &[P],
    t: f32,
    resolution: u32,
) -> Result<Samples<'_, P>> {
    let mut samples = samples(points, resolution)?;
    let last = (t.clamp(0.0, 1.0) * samples.resolution as f32).floor() as u32;
    samples.steps = 0..=last.min(samples.resolution);
    Ok(samples)
}

/// An iterator over evenly spaced [`BezierSample`]s, created by [`samples`].
#[derive(Clone, Debug)]
pub struct Samples<'a, P> {
    points: &'a [P],
    steps: RangeInclusive<u32>,
    resolution: u32,
}

impl<'a, P: Interpolate + Copy> Samples<'a, P> {
    fn sample(&self, j: u32) -> BezierSample<P> {
        let t = j as f32 / self.resolution as f32;
        BezierSample { t, point: bernstein_sum(self.points, t) }
    }
}

impl<'a, P: Interpolate + Copy> Iterator for Samples<'a, P> {
    type Item = BezierSample<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let j = self.steps.next()?;
        Some(self.sample(j))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let j = self.steps.nth(n)?;
        Some(self.sample(j))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl<'a, P: Interpolate + Copy> ExactSizeIterator for Samples<'a, P> {}

/// An ordered, editable list of 2D control points.
///
/// Points are appended as the user places them and removed from the end to undo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlPolygon {
    points: Vec<Vec2<f32>>,
}

impl ControlPolygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: impl Into<Vec2<f32>>) {
        let point = point.into();
        self.points.push(point);
        log::debug!("added control point {:?} ({} total)", point, self.points.len());
    }

    /// Remove the most recently added point. Returns `None` if the polygon is empty.
    pub fn pop(&mut self) -> Option<Vec2<f32>> {
        let point = self.points.pop();
        if let Some(p) = point {
            log::debug!("removed control point {:?} ({} left)", p, self.points.len());
        }
        point
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2<f32>] {
        &self.points
    }

    /// The degree of the curve these points define, if they define one.
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1).filter(|&n| n > 0)
    }

    pub fn evaluate(&self, t: f32) -> Result<Vec2<f32>> {
        evaluate(&self.points, t)
    }

    pub fn subdivide(&self, t: f32) -> Result<Construction> {
        subdivide(&self.points, t)
    }

    pub fn samples(&self, resolution: u32) -> Result<Samples<'_, Vec2<f32>>> {
        samples(&self.points, resolution)
    }

    pub fn samples_until(&self, t: f32, resolution: u32) -> Result<Samples<'_, Vec2<f32>>> {
        samples_until(&self.points, t, resolution)
    }
}

impl From<Vec<Vec2<f32>>> for ControlPolygon {
    fn from(points: Vec<Vec2<f32>>) -> Self {
        Self { points }
    }
}

impl<P: Into<Vec2<f32>>> FromIterator<P> for ControlPolygon {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self { points: iter.into_iter().map(Into::into).collect() }
    }
}

impl AsRef<[Vec2<f32>]> for ControlPolygon {
    fn as_ref(&self) -> &[Vec2<f32>] {
        &self.points
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Drives the parameter of an animated curve construction from elapsed time.
///
/// `t` sweeps from 0 to 1 once per `period` and then starts over.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveAnimation {
    period: Duration,
    elapsed: Duration,
}

impl CurveAnimation {
    pub fn new(period: Duration) -> Self {
        Self { period, elapsed: Duration::ZERO }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// The current curve parameter, in `[0, 1]`.
    pub fn t(&self) -> f32 {
        if self.period.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.period.as_secs_f32()).min(1.0)
        }
    }

    /// Advance the animation by `delta` and return the new curve parameter.
    pub fn advance(&mut self, delta: Duration) -> f32 {
        if !self.period.is_zero() {
            // Two durations summed as nanoseconds always fit in a u128.
            let period = self.period.as_nanos();
            let mut elapsed = self.elapsed.as_nanos() + delta.as_nanos();
            if elapsed > period {
                elapsed %= period;
            }
            self.elapsed = Duration::new(
                (elapsed / NANOS_PER_SEC) as u64,
                (elapsed % NANOS_PER_SEC) as u32,
            );
        }
        self.t()
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
