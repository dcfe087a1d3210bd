//! Rasterizes a few primitives onto the default 21x21 grid and prints them, then walks a Bezier
//! construction and a camera through a handful of frames.
//!
//! Run with `RUST_LOG=debug cargo run --example ascii_plot` to see the library's diagnostics.

use std::time::Duration;

use lattice::{
    rasterizer::{Circle, Line, Rasterizer, Triangle},
    Camera, ControlPolygon, CurveAnimation, Grid, Movement, Viewport,
};
use vek::*;

fn main() -> lattice::Result<()> {
    env_logger::init();

    let grid = Grid::default();
    let scale = grid.cell_size();

    let primitives: [(&str, Box<dyn Rasterizer>); 3] = [
        ("line", Box::new(Line::new((-8, -3), (9, 6)))),
        ("triangle", Box::new(Triangle::new((-9, -9), (8, -4), (-2, 9)))),
        ("circle", Box::new(Circle::new(7))),
    ];
    for (name, primitive) in &primitives {
        let points = primitive.rasterize(scale);
        println!("{} ({} points)\n{}\n", name, points.len(), grid.render_ascii(&points));
    }

    // Control points as they would arrive from mouse clicks in an 800x600 window.
    let viewport = Viewport::new(800, 600)?;
    let polygon: ControlPolygon = [(100.0, 500.0), (250.0, 80.0), (550.0, 80.0), (700.0, 500.0)]
        .iter()
        .map(|&(x, y)| viewport.to_ndc(x, y))
        .collect();

    let mut animation = CurveAnimation::new(Duration::from_secs(2));
    for _ in 0..5 {
        let t = animation.advance(Duration::from_millis(400));
        let construction = polygon.subdivide(t)?;
        let drawn = polygon.samples_until(t, 100)?.count();
        println!(
            "t = {:.2}: curve point {:?}, {} construction levels, {} curve samples drawn",
            t,
            construction.point(),
            construction.depth(),
            drawn,
        );
    }

    let mut camera = Camera::at(Vec3::new(0.0, 0.0, 10.0));
    for frame in 0..3 {
        camera.move_in(Movement::Forward, 1.0 / 60.0);
        camera.look(40.0, 10.0);
        camera.zoom_by(5.0);
        let view_proj = camera.projection_matrix(viewport.aspect_ratio()) * camera.view_matrix();
        let origin = view_proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        println!(
            "frame {}: yaw {:.1} pitch {:.1} fov {:.0}, origin in clip space {:?}",
            frame,
            camera.yaw(),
            camera.pitch(),
            camera.zoom(),
            origin,
        );
    }

    Ok(())
}
