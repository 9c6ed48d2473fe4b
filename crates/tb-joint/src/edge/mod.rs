//! Edge Generation
//!
//! Traces one side of a panel as a run of alternating gap and tab segments,
//! stepping across the edge by the material thickness at every boundary.
//! Along the way it emits the rectangular cutouts that let internal dividers
//! pass through walls and floors, and the half-length slots that let two
//! dividers interlock.

mod division;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::basis::EdgeBasis;
use crate::primitive::{Path, Primitive};

pub use division::{KerfCorrected, TabDivision};

/// Material and tab settings shared by every edge of one box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointSettings {
    /// Material thickness
    pub thickness: f64,
    /// Kerf minus clearance
    pub correction: f64,
    /// Nominal tab width
    pub nominal_tab: f64,
    /// Equal-width tabs and gaps instead of fixed-width tabs
    pub equal_tabs: bool,
}

impl JointSettings {
    /// Create settings from raw kerf and clearance
    pub fn new(
        thickness: f64,
        kerf: f64,
        clearance: f64,
        nominal_tab: f64,
        equal_tabs: bool,
    ) -> Self {
        Self {
            thickness,
            correction: kerf - clearance,
            nominal_tab,
            equal_tabs,
        }
    }
}

/// Dividers crossing an edge
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Crossing {
    /// Number of dividers
    pub count: u32,
    /// Distance between neighbouring dividers
    pub spacing: f64,
    /// Slot offset for divider-to-divider slots
    pub offset: f64,
}

impl Crossing {
    /// No dividers cross this edge
    pub const NONE: Self = Self {
        count: 0,
        spacing: 0.0,
        offset: 0.0,
    };

    pub fn new(count: u32, spacing: f64, offset: f64) -> Self {
        Self {
            count,
            spacing,
            offset,
        }
    }

    /// Distances of each divider from the edge, in emission order
    fn distances(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.count).map(|m| self.spacing * m as f64)
    }
}

/// Everything needed to trace one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRequest {
    /// Panel corner the edge starts from
    pub root: DVec2,
    /// Start corner offset in multiples of thickness
    pub start_offset: DVec2,
    /// End corner offset in multiples of thickness
    pub end_offset: DVec2,
    /// Step taken across the edge after the first segment; flips sign at
    /// every boundary. Zero for a plain (unjointed) side.
    pub extrusion: DVec2,
    /// Edge length
    pub length: f64,
    /// Edge orientation
    pub basis: EdgeBasis,
    /// Whether this edge carries tabs (otherwise holes)
    pub is_tab: bool,
    /// Whether this edge belongs to a divider panel
    pub is_divider: bool,
    /// Dividers crossing this edge
    pub crossing: Crossing,
}

/// The traced edge and the cutouts generated alongside it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeOutput {
    pub path: Path,
    pub cutouts: Vec<Path>,
}

impl EdgeOutput {
    /// Cutouts in generation order, then the edge path
    pub fn into_primitives(self) -> impl Iterator<Item = Primitive> {
        self.cutouts
            .into_iter()
            .chain(std::iter::once(self.path))
            .map(Primitive::Path)
    }
}

/// Trace one panel edge
pub fn generate_edge(settings: &JointSettings, request: &EdgeRequest) -> EdgeOutput {
    let thickness = settings.thickness;
    let basis = request.basis;
    let crossing = request.crossing;

    let division = TabDivision::new(request.length, settings.nominal_tab, settings.equal_tabs);
    let KerfCorrected {
        tab_width,
        gap_width,
        mut lead,
    } = division.kerf_corrected(settings.correction, request.is_tab);

    tracing::trace!(
        length = request.length,
        divisions = division.divisions,
        tab_width,
        gap_width,
        "tracing edge"
    );

    let mut path = Path::new(request.root + request.start_offset * thickness);
    // The walk measures along the edge from the root corner; only the
    // across-edge part of the start offset applies to it.
    let mut cursor = request.root + basis.across(request.start_offset * thickness);
    let mut extrusion = request.extrusion;
    let mut cutouts = Vec::new();

    let crosses_walls = crossing.count > 0 && !request.is_divider;

    for n in 1..division.divisions {
        let odd = n % 2 == 1;

        // Holes where a divider's tabs pass through this wall
        if crosses_walls && odd == request.is_tab {
            let mut width = if request.is_tab { gap_width } else { tab_width };
            // x component regardless of edge orientation
            let start_shift = request.start_offset.x * thickness;
            if n == 1 {
                width -= start_shift;
            }
            let along = basis.along(width + lead);
            for distance in crossing.distances() {
                let mut corner = cursor + basis.inward() * distance;
                if n == 1 {
                    corner.x += start_shift;
                }
                cutouts.push(Path::rectangle(corner, along, extrusion));
            }
        }

        if odd {
            if n == 1 && crossing.count > 0 && request.is_divider {
                // Half-length slots so crossing dividers interlock
                let along = basis.along(lead + request.length / 2.0);
                let depth = basis.across_axis() * thickness;
                for distance in crossing.distances() {
                    let corner = cursor + basis.slot_shift(distance, crossing.offset);
                    cutouts.push(Path::rectangle(corner, along, depth));
                }
            }
            cursor += basis.along(gap_width + lead);
        } else {
            cursor += basis.along(tab_width);
        }
        path.line_to(cursor);
        cursor += extrusion;
        path.line_to(cursor);

        extrusion = -extrusion;
        lead = 0.0;
    }

    let direction = basis.direction();
    let end = request.root + request.end_offset * thickness + direction * request.length;
    path.line_to(end);

    // The walk never visits the final tab, so close its divider holes here.
    // These are laid out in absolute x/y: from the cursor to the end corner
    // in x, rising by the tab width in y.
    if request.is_tab && crosses_walls {
        let rise = direction.y * (tab_width + lead);
        for distance in crossing.distances() {
            let start = DVec2::new(cursor.x, cursor.y + direction.x * distance);
            let mut hole = Path::new(start);
            let mut corner = DVec2::new(end.x, start.y + rise);
            hole.line_to(corner);
            corner += extrusion;
            hole.line_to(corner);
            corner = DVec2::new(cursor.x, corner.y - rise);
            hole.line_to(corner);
            corner -= extrusion;
            hole.line_to(corner);
            cutouts.push(hole);
        }
    }

    EdgeOutput { path, cutouts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn settings(correction: f64) -> JointSettings {
        JointSettings {
            thickness: 3.0,
            correction,
            nominal_tab: 10.0,
            equal_tabs: true,
        }
    }

    fn top_edge(is_tab: bool, crossing: Crossing) -> EdgeRequest {
        let basis = EdgeBasis::POS_X;
        let flag = if is_tab { 1.0 } else { 0.0 };
        EdgeRequest {
            root: DVec2::new(20.0, 40.0),
            start_offset: DVec2::new(0.0, flag),
            end_offset: DVec2::new(0.0, flag),
            extrusion: if is_tab {
                basis.outward() * 3.0
            } else {
                basis.inward() * 3.0
            },
            length: 100.0,
            basis,
            is_tab,
            is_divider: false,
            crossing,
        }
    }

    #[test]
    fn test_hole_edge_alternates_inwards() {
        let output = generate_edge(&settings(0.0), &top_edge(false, Crossing::NONE));
        let path = &output.path;
        assert!(output.cutouts.is_empty());
        // move + two points per internal boundary + closing point
        assert_eq!(path.len(), 1 + 2 * 8 + 1);

        let ys: Vec<f64> = path.points.iter().map(|p| p.y).collect();
        assert_eq!(&ys[..5], &[40.0, 40.0, 43.0, 43.0, 40.0]);
        assert_relative_eq!(path.points[1].x, 20.0 + 100.0 / 9.0);
        assert_eq!(path.end(), Some(DVec2::new(120.0, 40.0)));
    }

    #[test]
    fn test_tab_edge_starts_inset_and_steps_out() {
        let output = generate_edge(&settings(0.0), &top_edge(true, Crossing::NONE));
        let path = &output.path;
        assert_eq!(path.start(), Some(DVec2::new(20.0, 43.0)));
        assert_eq!(path.points[1].y, 43.0);
        assert_eq!(path.points[2].y, 40.0);
        assert_eq!(path.end(), Some(DVec2::new(120.0, 43.0)));
    }

    #[test]
    fn test_kerf_shifts_first_segment() {
        let division = TabDivision::new(100.0, 10.0, true);
        let tab = generate_edge(&settings(0.2), &top_edge(true, Crossing::NONE));
        let first = tab.path.points[1].x - 20.0;
        assert_relative_eq!(first, division.gap_width - 0.2 + 0.1, epsilon = 1e-12);

        let hole = generate_edge(&settings(0.2), &top_edge(false, Crossing::NONE));
        let first = hole.path.points[1].x - 20.0;
        assert_relative_eq!(first, division.gap_width + 0.2 - 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_plain_edge_is_straight() {
        let mut request = top_edge(false, Crossing::NONE);
        request.extrusion = DVec2::ZERO;
        let output = generate_edge(&settings(0.1), &request);
        assert!(output.path.points.iter().all(|p| p.y == 40.0));
        assert_abs_diff_eq!(output.path.end().unwrap().x, 120.0);
    }

    #[test]
    fn test_wall_cutouts_on_tab_edge() {
        let crossing = Crossing::new(2, 25.0, 0.0);
        let output = generate_edge(&settings(0.0), &top_edge(true, crossing));
        // odd boundaries 1, 3, 5, 7 plus the closing tab, two dividers each
        assert_eq!(output.cutouts.len(), 4 * 2 + 2);
        for cutout in &output.cutouts {
            assert_eq!(cutout.len(), 5);
            assert!(cutout.is_closed(1e-9));
        }
        // first divider row sits one spacing into the panel
        assert_relative_eq!(output.cutouts[0].points[0].y, 43.0 + 25.0);
        assert_relative_eq!(output.cutouts[1].points[0].y, 43.0 + 50.0);
    }

    #[test]
    fn test_closing_holes_span_final_tab() {
        let crossing = Crossing::new(2, 25.0, 0.0);
        let output = generate_edge(&settings(0.0), &top_edge(true, crossing));
        let path = &output.path;
        // last walked point, just before the line to the end corner
        let last = path.points[path.len() - 2];
        assert_eq!(last.y, 43.0);

        let hole = &output.cutouts[8];
        assert_eq!(hole.len(), 5);
        assert_eq!(hole.points[0], DVec2::new(last.x, 43.0 + 25.0));
        assert_eq!(hole.points[1], DVec2::new(120.0, 68.0));
        assert_eq!(hole.points[2], DVec2::new(120.0, 65.0));
        assert_eq!(hole.points[3], DVec2::new(last.x, 65.0));
        assert!(hole.is_closed(1e-12));
        assert_relative_eq!(120.0 - last.x, 100.0 / 9.0, epsilon = 1e-9);

        // second divider is one more spacing into the panel
        assert_eq!(output.cutouts[9].points[0].y, 43.0 + 50.0);
    }

    #[test]
    fn test_closing_holes_on_vertical_edge_ignore_divider_distance() {
        let basis = EdgeBasis::POS_Y;
        let request = EdgeRequest {
            root: DVec2::new(50.0, 0.0),
            start_offset: DVec2::new(-1.0, 0.0),
            end_offset: DVec2::new(-1.0, 0.0),
            extrusion: basis.outward() * 3.0,
            length: 60.0,
            basis,
            is_tab: true,
            is_divider: false,
            crossing: Crossing::new(2, 10.0, 0.0),
        };
        let output = generate_edge(&settings(0.0), &request);
        // boundaries 1 and 3, then the closing tab, two dividers each
        assert_eq!(output.cutouts.len(), 6);

        // laid out in absolute x/y: no shift per divider, rising by the tab
        let expected = vec![
            DVec2::new(47.0, 48.0),
            DVec2::new(47.0, 60.0),
            DVec2::new(50.0, 60.0),
            DVec2::new(47.0, 48.0),
            DVec2::new(44.0, 48.0),
        ];
        assert_eq!(output.cutouts[4].points, expected);
        assert_eq!(output.cutouts[5].points, expected);
    }

    #[test]
    fn test_wall_cutouts_on_hole_edge() {
        let crossing = Crossing::new(3, 20.0, 0.0);
        let output = generate_edge(&settings(0.0), &top_edge(false, crossing));
        // even boundaries 2, 4, 6, 8, no closing holes
        assert_eq!(output.cutouts.len(), 4 * 3);
        let width = 100.0 / 9.0;
        let hole = &output.cutouts[0];
        assert_relative_eq!(hole.points[1].x - hole.points[0].x, width, epsilon = 1e-12);
    }

    #[test]
    fn test_divider_edge_gets_interlock_slots() {
        let mut request = top_edge(false, Crossing::new(2, 30.0, 3.0));
        request.is_divider = true;
        let output = generate_edge(&settings(0.0), &request);
        assert_eq!(output.cutouts.len(), 2);
        let slot = &output.cutouts[0];
        assert_relative_eq!(slot.points[0].y, 40.0 + 30.0 - 3.0);
        assert_relative_eq!(slot.points[1].x - slot.points[0].x, 50.0);
        assert_relative_eq!(slot.points[2].y - slot.points[1].y, 3.0);
        assert!(slot.is_closed(1e-9));
    }

    #[test]
    fn test_primitives_emit_cutouts_first() {
        let output = generate_edge(&settings(0.0), &top_edge(false, Crossing::new(1, 20.0, 0.0)));
        let cutouts = output.cutouts.len();
        let primitives: Vec<Primitive> = output.clone().into_primitives().collect();
        assert_eq!(primitives.len(), cutouts + 1);
        assert_eq!(primitives.last().and_then(Primitive::as_path), Some(&output.path));
    }

    #[test]
    fn test_vertical_edge_uses_x_for_extrusion() {
        let basis = EdgeBasis::POS_Y;
        let request = EdgeRequest {
            root: DVec2::new(50.0, 0.0),
            start_offset: DVec2::new(-1.0, 0.0),
            end_offset: DVec2::new(-1.0, 0.0),
            extrusion: basis.outward() * 3.0,
            length: 60.0,
            basis,
            is_tab: true,
            is_divider: false,
            crossing: Crossing::NONE,
        };
        let output = generate_edge(&settings(0.0), &request);
        let path = &output.path;
        assert_eq!(path.start(), Some(DVec2::new(47.0, 0.0)));
        assert_eq!(path.points[2], DVec2::new(50.0, path.points[1].y));
        assert_eq!(path.end(), Some(DVec2::new(47.0, 60.0)));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let request = top_edge(true, Crossing::new(2, 17.0, 3.0));
        assert_eq!(
            generate_edge(&settings(0.15), &request),
            generate_edge(&settings(0.15), &request)
        );
    }
}
