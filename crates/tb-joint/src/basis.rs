//! Edge basis
//!
//! Panel edges run along one of the four axis directions. The basis turns
//! "along the edge" and "across the edge" into vector operations so the
//! generator never has to branch on which axis an edge follows.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Orientation of one panel edge in layout space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeBasis {
    direction: DVec2,
}

impl EdgeBasis {
    /// Edge running towards +x (top side, traced left to right)
    pub const POS_X: Self = Self::new(DVec2::X);
    /// Edge running towards +y (right side, traced downwards)
    pub const POS_Y: Self = Self::new(DVec2::Y);
    /// Edge running towards -x (bottom side, traced right to left)
    pub const NEG_X: Self = Self::new(DVec2::NEG_X);
    /// Edge running towards -y (left side, traced upwards)
    pub const NEG_Y: Self = Self::new(DVec2::NEG_Y);

    /// Create a basis from an axis-aligned unit direction
    pub const fn new(direction: DVec2) -> Self {
        Self { direction }
    }

    /// Unit direction of travel
    pub fn direction(&self) -> DVec2 {
        self.direction
    }

    /// Displacement of `distance` along the edge
    pub fn along(&self, distance: f64) -> DVec2 {
        self.direction * distance
    }

    /// Unit normal pointing into the panel (direction turned a quarter turn
    /// counter-clockwise, which is inwards for a clockwise panel outline)
    pub fn inward(&self) -> DVec2 {
        self.direction.perp()
    }

    /// Unit normal pointing out of the panel
    pub fn outward(&self) -> DVec2 {
        -self.inward()
    }

    /// Unsigned unit axis across the edge
    pub fn across_axis(&self) -> DVec2 {
        let d = self.direction.abs();
        DVec2::new(d.y, d.x)
    }

    /// Keep only the across-edge component of `v`
    pub fn across(&self, v: DVec2) -> DVec2 {
        v * self.across_axis()
    }

    /// Displacement of a divider-into-divider slot: `distance` into the
    /// panel, with `offset` pulling the slot back across the edge
    pub fn slot_shift(&self, distance: f64, offset: f64) -> DVec2 {
        let d = self.direction;
        DVec2::new(-d.y * (distance + offset), d.x * (distance - offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inward_points_into_clockwise_outline() {
        // Top edge runs +x, interior is below it (+y in layout space)
        assert_eq!(EdgeBasis::POS_X.inward(), DVec2::Y);
        assert_eq!(EdgeBasis::POS_Y.inward(), DVec2::NEG_X);
        assert_eq!(EdgeBasis::NEG_X.inward(), DVec2::NEG_Y);
        assert_eq!(EdgeBasis::NEG_Y.inward(), DVec2::X);
        assert_eq!(EdgeBasis::POS_X.outward(), DVec2::NEG_Y);
    }

    #[test]
    fn test_across_keeps_perpendicular_component() {
        let v = DVec2::new(3.0, -7.0);
        assert_eq!(EdgeBasis::POS_X.across(v), DVec2::new(0.0, -7.0));
        assert_eq!(EdgeBasis::NEG_X.across(v), DVec2::new(0.0, -7.0));
        assert_eq!(EdgeBasis::NEG_Y.across(v), DVec2::new(3.0, 0.0));
        assert_eq!(EdgeBasis::POS_Y.across_axis(), DVec2::X);
    }

    #[test]
    fn test_slot_shift() {
        assert_eq!(EdgeBasis::POS_X.slot_shift(10.0, 3.0), DVec2::new(0.0, 7.0));
        assert_eq!(
            EdgeBasis::POS_Y.slot_shift(10.0, 3.0),
            DVec2::new(-13.0, 0.0)
        );
    }
}
