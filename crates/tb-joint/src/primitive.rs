//! Drawing primitives
//!
//! Everything the generator emits is one of these two shapes. Coordinates
//! are absolute layout coordinates in the caller's length unit.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An open polyline: the first point is a move, every later point a line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Points in drawing order
    pub points: Vec<DVec2>,
}

impl Path {
    /// Start a new path at the given point
    pub fn new(start: DVec2) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Create a path from an explicit point list
    pub fn from_points(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Trace a rectangle starting at `origin`, first along `along`, then
    /// across `across`, back, and home again (five points)
    pub fn rectangle(origin: DVec2, along: DVec2, across: DVec2) -> Self {
        let mut path = Self::new(origin);
        let mut corner = origin + along;
        path.line_to(corner);
        corner += across;
        path.line_to(corner);
        corner -= along;
        path.line_to(corner);
        corner -= across;
        path.line_to(corner);
        path
    }

    /// Append a line segment ending at `point`
    pub fn line_to(&mut self, point: DVec2) {
        self.points.push(point);
    }

    /// First point of the path
    pub fn start(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    /// Last point of the path
    pub fn end(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check whether the path returns to its starting point
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) if self.points.len() > 2 => {
                start.abs_diff_eq(end, tolerance)
            }
            _ => false,
        }
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = self.start()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }
}

/// A circle, used for mounting holes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// One emitted drawing unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Path(Path),
    Circle(Circle),
}

impl Primitive {
    /// Get the path, if this is one
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Primitive::Path(path) => Some(path),
            Primitive::Circle(_) => None,
        }
    }

    /// Get the circle, if this is one
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Primitive::Circle(circle) => Some(circle),
            Primitive::Path(_) => None,
        }
    }
}

impl From<Path> for Primitive {
    fn from(path: Path) -> Self {
        Primitive::Path(path)
    }
}

impl From<Circle> for Primitive {
    fn from(circle: Circle) -> Self {
        Primitive::Circle(circle)
    }
}
