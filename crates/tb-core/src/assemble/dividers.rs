//! Internal divider panels
//!
//! Dividers are cut from the first two pieces of a layout, which act as
//! templates. They are placed in two extra rows below the main layout.

use glam::DVec2;
use tb_joint::{Crossing, Primitive};

use super::{PanelAssembler, SidePlan};
use crate::layout::{Edge, Joint, PieceDescriptor, SideSpec, Sides};
use crate::params::{BoxParameters, Dimensions, KeyingMode};

/// Divider counts and keying for one box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DividerSpec {
    /// Dividers along the length axis
    pub length_count: u32,
    /// Dividers along the width axis
    pub width_count: u32,
    pub keying: KeyingMode,
}

impl DividerSpec {
    pub fn from_params(params: &BoxParameters) -> Self {
        Self {
            length_count: params.dividers_length,
            width_count: params.dividers_width,
            keying: params.keying,
        }
    }

    /// Distance between width-axis dividers, measured along X
    pub fn x_spacing(&self, dims: &Dimensions, thickness: f64) -> f64 {
        (dims.x - thickness) / (self.width_count + 1) as f64
    }

    /// Distance between length-axis dividers, measured along Y
    pub fn y_spacing(&self, dims: &Dimensions, thickness: f64) -> f64 {
        (dims.y - thickness) / (self.length_count + 1) as f64
    }

    /// Slot offset for length-axis dividers
    pub fn slot_offset(&self, thickness: f64) -> f64 {
        if self.keying.keys_walls() {
            thickness
        } else {
            0.0
        }
    }
}

impl PanelAssembler {
    /// Emit the length-axis dividers, shaped like `template`
    pub(super) fn emit_length_dividers(
        &self,
        template: &PieceDescriptor,
        out: &mut Vec<Primitive>,
    ) {
        let thickness = self.settings.thickness;
        let floor = self.dividers.keying.keys_floor();
        let walls = self.dividers.keying.keys_walls();
        let width = template.width.extent(&self.dims);
        let height = template.height.extent(&self.dims);

        // Unkeyed into the walls, every side is a plain inset edge
        let sides = if walls {
            template.sides
        } else {
            Sides::uniform(SideSpec::new(Joint::Tab, Edge::Plain))
        };

        let slots = if template.role.meets_width_dividers() {
            self.dividers.width_count
        } else {
            0
        };
        let crossing = Crossing::new(
            slots,
            self.dividers.x_spacing(&self.dims, thickness),
            self.dividers.slot_offset(thickness),
        );
        let plan = [
            SidePlan::new(sides.top, floor && sides.top.is_jointed(), Crossing::NONE),
            SidePlan::new(sides.right, walls && sides.right.is_jointed(), crossing),
            SidePlan::new(
                sides.bottom,
                floor && sides.bottom.is_jointed(),
                Crossing::NONE,
            ),
            SidePlan::new(sides.left, walls && sides.left.is_jointed(), Crossing::NONE),
        ];

        let y = 4.0 * self.spacing + self.dims.y + 2.0 * self.dims.z;
        for n in 0..self.dividers.length_count {
            let x = n as f64 * (self.spacing + self.dims.x);
            tracing::debug!(n, x, y, "placing length divider");
            self.emit_panel(DVec2::new(x, y), width, height, plan, true, out);
        }
    }

    /// Emit the width-axis dividers, shaped like `template`
    pub(super) fn emit_width_dividers(&self, template: &PieceDescriptor, out: &mut Vec<Primitive>) {
        let thickness = self.settings.thickness;
        let floor = self.dividers.keying.keys_floor();
        let walls = self.dividers.keying.keys_walls();
        let width = template.width.extent(&self.dims);
        let height = template.height.extent(&self.dims);
        let sides = template.sides;

        let slots = if template.role.meets_length_dividers() {
            self.dividers.length_count
        } else {
            0
        };
        let crossing = Crossing::new(
            slots,
            self.dividers.y_spacing(&self.dims, thickness),
            thickness,
        );
        let plan = [
            SidePlan::new(sides.top, walls && sides.top.is_jointed(), crossing),
            SidePlan::new(
                sides.right,
                floor && sides.right.is_jointed(),
                Crossing::NONE,
            ),
            SidePlan::new(
                sides.bottom,
                walls && sides.bottom.is_jointed(),
                Crossing::NONE,
            ),
            SidePlan::new(sides.left, floor && sides.left.is_jointed(), Crossing::NONE),
        ];

        let y = 5.0 * self.spacing + self.dims.y + 3.0 * self.dims.z;
        for n in 0..self.dividers.width_count {
            let x = n as f64 * (self.spacing + self.dims.z);
            tracing::debug!(n, x, y, "placing width divider");
            self.emit_panel(DVec2::new(x, y), width, height, plan, true, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spacing_splits_inner_extent() {
        let spec = DividerSpec {
            length_count: 2,
            width_count: 3,
            keying: KeyingMode::Both,
        };
        let dims = Dimensions::new(103.0, 63.0, 40.0);
        assert_relative_eq!(spec.x_spacing(&dims, 3.0), 25.0);
        assert_relative_eq!(spec.y_spacing(&dims, 3.0), 20.0);
        assert_eq!(spec.slot_offset(3.0), 3.0);
    }

    #[test]
    fn test_slot_offset_only_when_keyed_into_walls() {
        let spec = DividerSpec {
            keying: KeyingMode::Floor,
            ..Default::default()
        };
        assert_eq!(spec.slot_offset(3.0), 0.0);
    }
}
