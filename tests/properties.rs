//! Property tests for the rasterizers, the curve evaluators and the camera.

use approx::assert_abs_diff_eq;
use lattice::{
    bezier::{evaluate, subdivide},
    rasterizer::{rasterize_circle, rasterize_line, Circle, Line, Rasterizer},
    Camera, ControlPolygon, Error, Grid,
};
use proptest::prelude::*;
use vek::*;

fn unscaled(p: Vec2<f32>) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

fn control_points(min: usize) -> impl Strategy<Value = Vec<Vec2<f32>>> {
    prop::collection::vec((-1.0f32..1.0, -1.0f32..1.0), min..12)
        .prop_map(|v| v.into_iter().map(Vec2::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_line_length_is_driving_axis_span(
        x0 in -500i32..500, y0 in -500i32..500,
        x1 in -500i32..500, y1 in -500i32..500,
    ) {
        let points = rasterize_line(x0, y0, x1, y1, 1.0);
        let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
        prop_assert_eq!(points.len(), expected);
        prop_assert_eq!(Line::new((x0, y0), (x1, y1)).point_count(), expected);
    }

    #[test]
    fn prop_line_endpoints_are_the_inputs(
        x0 in -500i32..500, y0 in -500i32..500,
        x1 in -500i32..500, y1 in -500i32..500,
    ) {
        let points = rasterize_line(x0, y0, x1, y1, 1.0);
        let first = unscaled(points[0]);
        let last = unscaled(points[points.len() - 1]);
        prop_assert!(
            (first, last) == ((x0, y0), (x1, y1)) || (first, last) == ((x1, y1), (x0, y0)),
            "path {:?} -> {:?} does not join ({}, {}) and ({}, {})", first, last, x0, y0, x1, y1,
        );
    }

    #[test]
    fn prop_line_is_a_connected_path(
        x0 in -200i32..200, y0 in -200i32..200,
        x1 in -200i32..200, y1 in -200i32..200,
    ) {
        let points = rasterize_line(x0, y0, x1, y1, 1.0);
        for w in points.windows(2) {
            let (a, b) = (unscaled(w[0]), unscaled(w[1]));
            let step = ((b.0 - a.0).abs(), (b.1 - a.1).abs());
            prop_assert!(step.0 <= 1 && step.1 <= 1 && step != (0, 0));
        }
    }

    #[test]
    fn prop_line_scale_is_linear(
        x0 in -50i32..50, y0 in -50i32..50,
        x1 in -50i32..50, y1 in -50i32..50,
        scale in 0.01f32..4.0,
    ) {
        let unit = rasterize_line(x0, y0, x1, y1, 1.0);
        let scaled = rasterize_line(x0, y0, x1, y1, scale);
        for (u, s) in unit.iter().zip(&scaled) {
            prop_assert_eq!(*u * scale, *s);
        }
    }

    #[test]
    fn prop_circle_points_near_radius(radius in 0u32..400) {
        let points = Circle::new(radius).rasterize(1.0);
        prop_assert_eq!(points.len() % 8, 0);
        for p in points {
            let r = p.magnitude();
            prop_assert!((r - radius as f32).abs() <= 1.0, "{:?} at distance {}", p, r);
        }
    }

    #[test]
    fn prop_subdivision_agrees_with_bernstein(points in control_points(2), t in 0.0f32..=1.0) {
        let direct = evaluate(&points, t).unwrap();
        let construction = subdivide(&points, t).unwrap();
        prop_assert_eq!(construction.levels().len(), points.len());
        let p = construction.point();
        prop_assert!((p - direct).map(f32::abs).reduce_partial_max() < 1e-4,
            "subdivision {:?} vs direct {:?}", p, direct);
    }

    #[test]
    fn prop_curve_endpoints_are_control_endpoints(points in control_points(2)) {
        let poly = ControlPolygon::from(points.clone());
        let start = poly.evaluate(0.0).unwrap();
        let end = poly.evaluate(1.0).unwrap();
        prop_assert!((start - points[0]).magnitude() <= f32::EPSILON);
        prop_assert!((end - points[points.len() - 1]).magnitude() <= f32::EPSILON);
    }

    #[test]
    fn prop_segment_is_linear_interpolation(
        a in (-1.0f32..1.0, -1.0f32..1.0),
        b in (-1.0f32..1.0, -1.0f32..1.0),
        t in -2.0f32..3.0,
    ) {
        let (a, b) = (Vec2::from(a), Vec2::from(b));
        let p = evaluate(&[a, b], t).unwrap();
        let expected = a * (1.0 - t) + b * t;
        prop_assert!((p - expected).magnitude() < 1e-5);
    }

    #[test]
    fn prop_pitch_stays_clamped(offsets in prop::collection::vec((-5000.0f32..5000.0, -5000.0f32..5000.0), 1..50)) {
        let mut camera = Camera::default();
        for (x, y) in offsets {
            camera.look(x, y);
            prop_assert!((-89.0..=89.0).contains(&camera.pitch()));
        }
    }

    #[test]
    fn prop_camera_basis_is_orthonormal(offsets in prop::collection::vec((-5000.0f32..5000.0, -5000.0f32..5000.0), 1..50)) {
        let mut camera = Camera::default();
        for (x, y) in offsets {
            camera.look(x, y);
        }
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        for v in [f, r, u] {
            prop_assert!((v.magnitude() - 1.0).abs() < 1e-5);
        }
        prop_assert!(f.dot(r).abs() < 1e-5);
        prop_assert!(f.dot(u).abs() < 1e-5);
        prop_assert!(r.dot(u).abs() < 1e-5);
    }

    #[test]
    fn prop_zoom_stays_in_range(offsets in prop::collection::vec(-100.0f32..100.0, 1..50)) {
        let mut camera = Camera::default();
        for y in offsets {
            camera.zoom_by(y);
            prop_assert!((1.0..=60.0).contains(&camera.zoom()));
        }
    }
}

#[test]
fn horizontal_and_vertical_lines() {
    let horizontal: Vec<_> = rasterize_line(0, 0, 5, 0, 1.0).into_iter().map(unscaled).collect();
    assert_eq!(horizontal, (0..=5).map(|x| (x, 0)).collect::<Vec<_>>());

    let vertical: Vec<_> = rasterize_line(0, 0, 0, 5, 1.0).into_iter().map(unscaled).collect();
    assert_eq!(vertical, (0..=5).map(|y| (0, y)).collect::<Vec<_>>());
}

#[test]
fn degenerate_circle() {
    let points = rasterize_circle(0, 0.09);
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| *p == Vec2::zero()));
}

#[test]
fn curve_needs_two_points() {
    let single = [Vec2::new(0.3f32, 0.3)];
    assert_eq!(evaluate(&single, 0.5), Err(Error::InsufficientControlPoints { found: 1 }));
    assert!(subdivide::<Vec2<f32>>(&[], 0.5).is_err());
}

#[test]
fn lines_fill_the_default_grid_diagonal() {
    let grid = Grid::default();
    let points = rasterize_line(-10, 10, 10, -10, grid.cell_size());
    let art = grid.render_ascii(&points);
    let rows: Vec<_> = art.lines().collect();
    assert_eq!(rows.len(), 21);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().nth(i), Some('#'));
        assert_eq!(row.matches('#').count(), 1);
    }
}

#[test]
fn construction_point_matches_midpoint_formula() {
    let points = [Vec2::new(0.0f32, 0.0), Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0)];
    let construction = subdivide(&points, 0.5).unwrap();
    assert_abs_diff_eq!(construction.point().x, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(construction.point().y, 1.0, epsilon = 1e-6);
    assert_eq!(construction.levels()[1], vec![Vec2::new(0.5, 1.0), Vec2::new(1.5, 1.0)]);
}
