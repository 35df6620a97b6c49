//! Draw a few shapes after a handful of transforms.
//!
//! Usage:
//!   cargo run -p polygons --example gallery -- [width]

use polygons::prelude::*;

fn main() {
    let width = std::env::args()
        .nth(1)
        .and_then(|w| w.parse().ok())
        .unwrap_or(79);

    let mut scene = Scene::new();
    let rect = scene.add_rectangle(4.0, 2.0).unwrap();
    let tri = scene.add_isosceles(3.0, 4.0).unwrap();
    let hex = scene.add_hexagon(1.5).unwrap();

    scene.rotate(rect, 30f64.to_radians()).unwrap();
    scene.rescale(rect, 1.5, 1.0).unwrap();
    scene.translate(tri, Vector::new(-4.0, 2.0)).unwrap();
    scene.translate(hex, Vector::new(3.5, -2.5)).unwrap();

    print!("{}", scene.list_info());
    match scene.set_draw_width(width).and_then(|_| scene.draw()) {
        Ok(frame) => print!("{frame}"),
        Err(e) => eprintln!("cannot draw: {e}"),
    }
}
