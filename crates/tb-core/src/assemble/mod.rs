//! Panel assembly
//!
//! Turns a piece table into concrete primitives: places every panel on the
//! sheet, works out which sides take divider cutouts, and traces the four
//! sides in rotation so consecutive sides share their corner points.

mod dividers;

use glam::DVec2;
use tb_joint::{Crossing, EdgeBasis, EdgeRequest, JointSettings, Primitive, generate_edge};

use crate::layout::{PieceDescriptor, PieceRole, SideSpec};
use crate::params::{BoxParameters, Dimensions, RailMount};
use crate::rail::{RailWall, rail_holes};

pub use dividers::DividerSpec;

/// Joint plan for one side of a concrete panel
#[derive(Debug, Clone, Copy, PartialEq)]
struct SidePlan {
    is_tab: bool,
    jointed: bool,
    crossing: Crossing,
}

impl SidePlan {
    fn new(spec: SideSpec, jointed: bool, crossing: Crossing) -> Self {
        Self {
            is_tab: spec.is_tab(),
            jointed,
            crossing,
        }
    }

    /// Corner inset contributed by this side, in thicknesses
    fn inset(&self) -> f64 {
        if self.is_tab { 1.0 } else { 0.0 }
    }
}

/// Lays out and traces every panel of one box
#[derive(Debug, Clone)]
pub struct PanelAssembler {
    settings: JointSettings,
    dims: Dimensions,
    spacing: f64,
    dividers: DividerSpec,
    rail: Option<RailMount>,
}

impl PanelAssembler {
    /// Create an assembler for already resolved dimensions
    pub fn new(params: &BoxParameters, dims: Dimensions) -> Self {
        Self {
            settings: params.joint_settings(),
            dims,
            spacing: params.spacing,
            dividers: DividerSpec::from_params(params),
            rail: params.rail,
        }
    }

    /// Emit all primitives for the given pieces, in table order
    pub fn assemble(&self, pieces: &[PieceDescriptor]) -> Vec<Primitive> {
        let mut out = Vec::new();
        let mut short_walls = 0;

        for (index, piece) in pieces.iter().enumerate() {
            let root = DVec2::new(
                piece.origin[0].resolve(self.spacing, &self.dims),
                piece.origin[1].resolve(self.spacing, &self.dims),
            );
            let width = piece.width.extent(&self.dims);
            let height = piece.height.extent(&self.dims);
            tracing::debug!(
                index,
                role = ?piece.role,
                x = root.x,
                y = root.y,
                width,
                height,
                "placing piece"
            );

            if piece.role == PieceRole::ShortWall {
                if let Some(mount) = &self.rail {
                    self.emit_rail_holes(short_walls, mount, root, width, &mut out);
                }
                short_walls += 1;
            }

            let plan = self.piece_plan(piece);
            self.emit_panel(root, width, height, plan, false, &mut out);

            match index {
                0 => self.emit_length_dividers(piece, &mut out),
                1 => self.emit_width_dividers(piece, &mut out),
                _ => {}
            }
        }

        out
    }

    /// Rail holes for the `ordinal`-th short wall of the layout
    fn emit_rail_holes(
        &self,
        ordinal: usize,
        mount: &RailMount,
        root: DVec2,
        width: f64,
        out: &mut Vec<Primitive>,
    ) {
        let wall = match ordinal {
            0 => RailWall::Near,
            1 => RailWall::Far,
            _ => {
                tracing::warn!(ordinal, "layout has more than two short walls");
                return;
            }
        };
        let holes = rail_holes(mount, self.settings.thickness, root, width, wall);
        out.extend(holes.into_iter().map(Primitive::Circle));
    }

    /// Work out jointing and divider crossings for a box panel
    fn piece_plan(&self, piece: &PieceDescriptor) -> [SidePlan; 4] {
        let role = piece.role;
        let sides = &piece.sides;
        let keying = self.dividers.keying;
        let keyed =
            (keying.keys_floor() || role.is_wall()) && (keying.keys_walls() || role.is_floor());
        let offset = self.dividers.slot_offset(self.settings.thickness);

        let length_count = if role.meets_length_dividers() {
            self.dividers.length_count
        } else {
            0
        };
        let width_count = if role.meets_width_dividers() {
            self.dividers.width_count
        } else {
            0
        };
        let y_spacing = self.dividers.y_spacing(&self.dims, self.settings.thickness);
        let x_spacing = self.dividers.x_spacing(&self.dims, self.settings.thickness);

        let crossing = |spec: SideSpec, count: u32, spacing: f64| {
            if keyed && spec.is_jointed() && count > 0 {
                Crossing::new(count, spacing, offset)
            } else {
                Crossing::NONE
            }
        };

        // Bottom and left only carry crossings when the opposite side is
        // plain, so a divider is never slotted twice.
        let bottom = if sides.top.is_jointed() {
            Crossing::NONE
        } else {
            crossing(sides.bottom, length_count, y_spacing)
        };
        let left = if sides.right.is_jointed() {
            Crossing::NONE
        } else {
            crossing(sides.left, width_count, x_spacing)
        };

        [
            SidePlan::new(
                sides.top,
                sides.top.is_jointed(),
                crossing(sides.top, length_count, y_spacing),
            ),
            SidePlan::new(
                sides.right,
                sides.right.is_jointed(),
                crossing(sides.right, width_count, x_spacing),
            ),
            SidePlan::new(sides.bottom, sides.bottom.is_jointed(), bottom),
            SidePlan::new(sides.left, sides.left.is_jointed(), left),
        ]
    }

    /// Trace the four sides of a panel clockwise from its top-left corner
    fn emit_panel(
        &self,
        root: DVec2,
        width: f64,
        height: f64,
        plan: [SidePlan; 4],
        is_divider: bool,
        out: &mut Vec<Primitive>,
    ) {
        let thickness = self.settings.thickness;
        let [a, b, c, d] = plan.map(|side| side.inset());

        let corners = [
            (root, DVec2::new(d, a), DVec2::new(-b, a), width, EdgeBasis::POS_X),
            (
                root + DVec2::new(width, 0.0),
                DVec2::new(-b, a),
                DVec2::new(-b, -c),
                height,
                EdgeBasis::POS_Y,
            ),
            (
                root + DVec2::new(width, height),
                DVec2::new(-b, -c),
                DVec2::new(d, -c),
                width,
                EdgeBasis::NEG_X,
            ),
            (
                root + DVec2::new(0.0, height),
                DVec2::new(d, -c),
                DVec2::new(d, a),
                height,
                EdgeBasis::NEG_Y,
            ),
        ];

        for (side, (start, start_offset, end_offset, length, basis)) in plan.iter().zip(corners) {
            let extrusion = match (side.jointed, side.is_tab) {
                (false, _) => DVec2::ZERO,
                (true, true) => basis.outward() * thickness,
                (true, false) => basis.inward() * thickness,
            };
            let request = EdgeRequest {
                root: start,
                start_offset,
                end_offset,
                extrusion,
                length,
                basis,
                is_tab: side.is_tab,
                is_divider,
                crossing: side.crossing,
            };
            out.extend(generate_edge(&self.settings, &request).into_primitives());
        }
    }
}
