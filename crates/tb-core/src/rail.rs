//! Rail mounting holes for rack-style boxes
//!
//! The two short walls carry the equipment rails. Each rack row gets a pair
//! of bolt holes, one per rail, spaced by the standard 3U hole pitch.

use glam::DVec2;
use tb_joint::Circle;

use crate::constants::ROW_CENTRE_SPACING;
use crate::params::RailMount;

/// Which of the two rail-bearing walls is being drilled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailWall {
    /// Holes measured from the panel's left edge
    Near,
    /// Holes measured from the panel's right edge
    Far,
}

/// Hole centres for one rail-bearing wall
///
/// `root` is the panel's layout corner and `panel_width` its extent along
/// layout x.
pub fn rail_holes(
    mount: &RailMount,
    thickness: f64,
    root: DVec2,
    panel_width: f64,
    wall: RailWall,
) -> Vec<Circle> {
    let inset = mount.mount_depth + thickness;
    let x = match wall {
        RailWall::Near => root.x + inset,
        RailWall::Far => root.x - inset + panel_width,
    };

    let mut holes = Vec::with_capacity(mount.rows as usize * 2);
    let mut row_start = root.y + mount.rail_height / 2.0 + thickness;
    for row in 0..mount.rows {
        // Offset holes lean towards the row centreline
        let first = row_start + mount.mount_centre_offset;
        let second = first + (ROW_CENTRE_SPACING - mount.mount_centre_offset);
        tracing::trace!(row, x, first, second, "rail holes");
        holes.push(Circle::new(DVec2::new(x, first), mount.mount_radius));
        holes.push(Circle::new(DVec2::new(x, second), mount.mount_radius));
        row_start += ROW_CENTRE_SPACING + mount.row_spacing + mount.rail_height;
    }
    holes
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mount(rows: u32, centre_offset: f64) -> RailMount {
        RailMount {
            rows,
            rail_height: 10.0,
            row_spacing: 6.0,
            mount_depth: 17.4,
            mount_centre_offset: centre_offset,
            mount_radius: 2.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_row_pair() {
        let holes = rail_holes(&mount(1, 0.0), 3.0, DVec2::new(10.0, 20.0), 80.0, RailWall::Near);
        assert_eq!(holes.len(), 2);
        assert_relative_eq!(holes[0].center.x, 10.0 + 17.4 + 3.0, epsilon = 1e-12);
        assert_relative_eq!(holes[0].center.y, 20.0 + 5.0 + 3.0);
        assert_relative_eq!(holes[1].center.y - holes[0].center.y, ROW_CENTRE_SPACING);
        assert_eq!(holes[0].radius, 2.5);
    }

    #[test]
    fn test_far_wall_is_mirrored() {
        let near = rail_holes(&mount(1, 0.0), 3.0, DVec2::new(10.0, 0.0), 80.0, RailWall::Near);
        let far = rail_holes(&mount(1, 0.0), 3.0, DVec2::new(10.0, 0.0), 80.0, RailWall::Far);
        assert_relative_eq!(far[0].center.x, 10.0 + 80.0 - 17.4 - 3.0, epsilon = 1e-12);
        assert_relative_eq!(near[0].center.x - 10.0, 90.0 - far[0].center.x, epsilon = 1e-12);
        assert_eq!(near[0].center.y, far[0].center.y);
    }

    #[test]
    fn test_rows_advance_by_pitch() {
        let holes = rail_holes(&mount(3, 4.0), 3.0, DVec2::ZERO, 80.0, RailWall::Near);
        assert_eq!(holes.len(), 6);
        let pitch = ROW_CENTRE_SPACING + 6.0 + 10.0;
        assert_relative_eq!(holes[2].center.y - holes[0].center.y, pitch, epsilon = 1e-12);
        assert_relative_eq!(holes[4].center.y - holes[2].center.y, pitch, epsilon = 1e-12);
        // centre offset pulls the pair together
        assert_relative_eq!(
            holes[1].center.y - holes[0].center.y,
            ROW_CENTRE_SPACING - 4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_no_rows_no_holes() {
        assert!(rail_holes(&mount(0, 0.0), 3.0, DVec2::ZERO, 80.0, RailWall::Far).is_empty());
    }
}
