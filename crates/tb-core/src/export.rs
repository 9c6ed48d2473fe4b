//! SVG path data
//!
//! Formats primitives as the `d` attribute of an SVG `<path>` element.
//! Writing a full document is left to the caller.

use std::fmt::Write;

use tb_joint::{Circle, Path, Primitive};

/// `M x,y L x,y ...` for an open polyline
///
/// An empty path yields an empty string.
pub fn path_data(path: &Path) -> String {
    let mut data = String::new();
    for (i, point) in path.points.iter().enumerate() {
        if i > 0 {
            data.push(' ');
        }
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(data, "{command} {},{}", point.x, point.y);
    }
    data
}

/// A closed circle drawn as two half arcs
pub fn circle_data(circle: &Circle) -> String {
    let Circle { center, radius } = *circle;
    let left = center.x - radius;
    let right = center.x + radius;
    format!(
        "M {left},{y} A {radius},{radius} 0 1,0 {right},{y} A {radius},{radius} 0 1,0 {left},{y} Z",
        y = center.y
    )
}

pub fn primitive_data(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Path(path) => path_data(path),
        Primitive::Circle(circle) => circle_data(circle),
    }
}
