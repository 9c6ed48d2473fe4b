//! Piece layout tables
//!
//! Each (box type, layout style) pair selects a fixed list of panels. A
//! descriptor says where the panel sits on the cutting sheet, which box
//! extents it spans, and which of its sides carry tabs or holes. Adjoining
//! panels always present complementary tabs and holes on a shared edge.
//!
//! By convention the first descriptor of every list is the template for
//! dividers running along the length axis and the second the template for
//! dividers running along the width axis.

mod tables;

use serde::{Deserialize, Serialize};

use crate::params::Dimensions;

/// How many (and which) faces of the box are left open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoxType {
    /// All six faces
    #[default]
    FullyEnclosed,
    /// Top open
    OneOpen,
    /// Top and front open
    TwoOpenAdjacent,
    /// Top, front and one end open
    ThreeOpen,
    /// Both ends open (a sleeve)
    OppositeOpen,
    /// Two panels joined along one edge
    TwoJoined,
}

impl BoxType {
    /// All box types, in code order
    pub const ALL: [BoxType; 6] = [
        BoxType::FullyEnclosed,
        BoxType::OneOpen,
        BoxType::TwoOpenAdjacent,
        BoxType::ThreeOpen,
        BoxType::OppositeOpen,
        BoxType::TwoJoined,
    ];
}

impl TryFrom<u8> for BoxType {
    type Error = ConfigurationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(BoxType::FullyEnclosed),
            2 => Ok(BoxType::OneOpen),
            3 => Ok(BoxType::TwoOpenAdjacent),
            4 => Ok(BoxType::ThreeOpen),
            5 => Ok(BoxType::OppositeOpen),
            6 => Ok(BoxType::TwoJoined),
            _ => Err(ConfigurationError::UnknownBoxType(code)),
        }
    }
}

/// Arrangement of panels on the cutting sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutStyle {
    /// Unfolded-box diagram
    #[default]
    Diagrammatic,
    /// One of each distinct panel
    ThreePiece,
    /// All panels in a single row
    InlineCompact,
    /// Diagram with an alternate tab arrangement
    DiagrammaticAlt,
}

impl LayoutStyle {
    /// All layout styles, in code order
    pub const ALL: [LayoutStyle; 4] = [
        LayoutStyle::Diagrammatic,
        LayoutStyle::ThreePiece,
        LayoutStyle::InlineCompact,
        LayoutStyle::DiagrammaticAlt,
    ];
}

impl TryFrom<u8> for LayoutStyle {
    type Error = ConfigurationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(LayoutStyle::Diagrammatic),
            2 => Ok(LayoutStyle::ThreePiece),
            3 => Ok(LayoutStyle::InlineCompact),
            4 => Ok(LayoutStyle::DiagrammaticAlt),
            _ => Err(ConfigurationError::UnknownLayoutStyle(code)),
        }
    }
}

/// Layout table errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Unknown box type code: {0}")]
    UnknownBoxType(u8),
    #[error("Unknown layout style code: {0}")]
    UnknownLayoutStyle(u8),
    #[error("Unknown divider keying code: {0}")]
    UnknownKeyingMode(u8),
    #[error("No piece layout for {box_type:?} with {layout:?}")]
    MissingLayout {
        box_type: BoxType,
        layout: LayoutStyle,
    },
    #[error("Piece layout for {box_type:?} with {layout:?} lacks divider templates")]
    MissingDividerTemplates {
        box_type: BoxType,
        layout: LayoutStyle,
    },
}

/// Box extent a panel dimension is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Length of this axis for the given box
    pub fn extent(self, dims: &Dimensions) -> f64 {
        match self {
            Axis::X => dims.x,
            Axis::Y => dims.y,
            Axis::Z => dims.z,
        }
    }
}

/// Linear position formula over (spacing, X, Y, Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub spacing: i8,
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Placement {
    pub const fn new(coefficients: [i8; 4]) -> Self {
        let [spacing, x, y, z] = coefficients;
        Self { spacing, x, y, z }
    }

    /// Evaluate the formula for a concrete box
    pub fn resolve(&self, spacing: f64, dims: &Dimensions) -> f64 {
        self.spacing as f64 * spacing
            + self.x as f64 * dims.x
            + self.y as f64 * dims.y
            + self.z as f64 * dims.z
    }
}

/// What a panel is in the assembled box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceRole {
    /// Floor or lid, spanning X by Y
    Floor,
    /// Long wall, spanning X by Z
    LongWall,
    /// Short wall, spanning Z by Y
    ShortWall,
}

impl PieceRole {
    /// Whether length-axis dividers meet this panel
    pub fn meets_length_dividers(self) -> bool {
        matches!(self, PieceRole::Floor | PieceRole::ShortWall)
    }

    /// Whether width-axis dividers meet this panel
    pub fn meets_width_dividers(self) -> bool {
        matches!(self, PieceRole::Floor | PieceRole::LongWall)
    }

    pub fn is_wall(self) -> bool {
        !self.is_floor()
    }

    pub fn is_floor(self) -> bool {
        self == PieceRole::Floor
    }
}

/// One of the four panel sides, in tracing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Whether a side cuts tabs outwards or holes inwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    Tab,
    Hole,
}

/// Whether a side takes part in jointing at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Jointed,
    Plain,
}

/// Joint behaviour of one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideSpec {
    pub joint: Joint,
    pub edge: Edge,
}

impl SideSpec {
    pub const fn new(joint: Joint, edge: Edge) -> Self {
        Self { joint, edge }
    }

    pub fn is_tab(&self) -> bool {
        self.joint == Joint::Tab
    }

    pub fn is_jointed(&self) -> bool {
        self.edge == Edge::Jointed
    }
}

/// Joint behaviour of all four sides of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sides {
    pub top: SideSpec,
    pub right: SideSpec,
    pub bottom: SideSpec,
    pub left: SideSpec,
}

impl Sides {
    pub const fn new(sides: [SideSpec; 4]) -> Self {
        let [top, right, bottom, left] = sides;
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Every side set to the same spec
    pub const fn uniform(spec: SideSpec) -> Self {
        Self::new([spec; 4])
    }

    pub fn get(&self, side: Side) -> SideSpec {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }
}

/// Static description of one panel in a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDescriptor {
    /// Position formula for the panel's top-left corner
    pub origin: [Placement; 2],
    /// Extent along layout x
    pub width: Axis,
    /// Extent along layout y
    pub height: Axis,
    pub sides: Sides,
    pub role: PieceRole,
}

/// Look up the panels for a box type and layout style
pub fn piece_layout(
    box_type: BoxType,
    layout: LayoutStyle,
) -> Result<&'static [PieceDescriptor], ConfigurationError> {
    let pieces = tables::lookup(box_type, layout);
    if pieces.is_empty() {
        return Err(ConfigurationError::MissingLayout { box_type, layout });
    }
    Ok(pieces)
}

/// Check that every box type and layout style pair resolves to a usable list
pub fn validate_tables() -> Result<(), ConfigurationError> {
    for box_type in BoxType::ALL {
        for layout in LayoutStyle::ALL {
            let pieces = piece_layout(box_type, layout)?;
            if pieces.len() < 2 {
                return Err(ConfigurationError::MissingDividerTemplates { box_type, layout });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_valid() {
        validate_tables().unwrap();
    }

    #[test]
    fn test_codes_round_trip_through_tables() {
        for code in 1..=6 {
            let box_type = BoxType::try_from(code).unwrap();
            for style in 1..=4 {
                let layout = LayoutStyle::try_from(style).unwrap();
                assert!(!piece_layout(box_type, layout).unwrap().is_empty());
            }
        }
        assert_eq!(
            BoxType::try_from(7),
            Err(ConfigurationError::UnknownBoxType(7))
        );
        assert_eq!(
            LayoutStyle::try_from(0),
            Err(ConfigurationError::UnknownLayoutStyle(0))
        );
    }

    #[test]
    fn test_fully_enclosed_piece_counts() {
        let counts: Vec<usize> = LayoutStyle::ALL
            .iter()
            .map(|&layout| piece_layout(BoxType::FullyEnclosed, layout).unwrap().len())
            .collect();
        assert_eq!(counts, vec![6, 3, 6, 6]);
    }

    #[test]
    fn test_shared_tables() {
        let three_piece = piece_layout(BoxType::ThreeOpen, LayoutStyle::ThreePiece).unwrap();
        let diagram = piece_layout(BoxType::ThreeOpen, LayoutStyle::Diagrammatic).unwrap();
        let inline = piece_layout(BoxType::ThreeOpen, LayoutStyle::InlineCompact).unwrap();
        assert_ne!(three_piece, diagram);
        assert_eq!(diagram, inline);

        let joined = piece_layout(BoxType::TwoJoined, LayoutStyle::Diagrammatic).unwrap();
        for layout in LayoutStyle::ALL {
            assert_eq!(piece_layout(BoxType::TwoJoined, layout).unwrap(), joined);
        }
    }

    #[test]
    fn test_floor_faces_are_all_holes_when_enclosed() {
        let pieces = piece_layout(BoxType::FullyEnclosed, LayoutStyle::ThreePiece).unwrap();
        let floor = pieces.iter().find(|p| p.role == PieceRole::Floor).unwrap();
        for side in Side::ALL {
            let spec = floor.sides.get(side);
            assert!(!spec.is_tab());
            assert!(spec.is_jointed());
        }
        assert_eq!(floor.width, Axis::X);
        assert_eq!(floor.height, Axis::Y);
    }

    #[test]
    fn test_placement_resolves_linear_formula() {
        let dims = Dimensions::new(100.0, 80.0, 50.0);
        let placement = Placement::new([4, 1, 0, 2]);
        assert_eq!(placement.resolve(10.0, &dims), 40.0 + 100.0 + 100.0);
    }

    #[test]
    fn test_role_divider_contacts() {
        assert!(PieceRole::Floor.meets_length_dividers());
        assert!(PieceRole::Floor.meets_width_dividers());
        assert!(!PieceRole::LongWall.meets_length_dividers());
        assert!(!PieceRole::ShortWall.meets_width_dividers());
        assert!(PieceRole::ShortWall.is_wall());
    }
}
