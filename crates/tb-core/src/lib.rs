//! Tabbed Box Model
//!
//! This crate provides:
//! - Box parameters with RON configuration files
//! - Parameter validation
//! - Static piece layout tables for every box type and layout style
//! - Panel assembly, including internal dividers and rail mounting holes
//! - SVG path data formatting for the emitted primitives

pub mod assemble;
pub mod constants;
pub mod export;
pub mod layout;
pub mod params;
pub mod rail;
pub mod validate;

use tb_joint::{Circle, Path, Primitive};

// Re-exports for convenience
pub use assemble::{DividerSpec, PanelAssembler};
pub use export::{circle_data, path_data, primitive_data};
pub use layout::{
    Axis, BoxType, ConfigurationError, Edge, Joint, LayoutStyle, PieceDescriptor, PieceRole,
    Placement, Side, SideSpec, Sides, piece_layout, validate_tables,
};
pub use params::{BoxParameters, ConfigError, Dimensions, KeyingMode, RailMount};
pub use rail::{RailWall, rail_holes};
pub use validate::{ValidationError, ValidationIssue, validate};

/// Everything generated for one box
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGeometry {
    /// Outer extents the panels were cut for
    pub dimensions: Dimensions,
    /// Primitives in emission order
    pub primitives: Vec<Primitive>,
}

impl BoxGeometry {
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.primitives.iter().filter_map(Primitive::as_path)
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.primitives.iter().filter_map(Primitive::as_circle)
    }

    /// SVG path data for every primitive, in emission order
    pub fn path_data(&self) -> Vec<String> {
        self.primitives.iter().map(primitive_data).collect()
    }
}

/// Errors from box generation
#[derive(Debug, thiserror::Error)]
pub enum BoxError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Config file error: {0}")]
    Config(#[from] ConfigError),
}

/// Generate every panel of a box
pub fn generate_box(params: &BoxParameters) -> Result<BoxGeometry, BoxError> {
    let dimensions = params.resolved_dimensions();
    tracing::debug!(
        x = dimensions.x,
        y = dimensions.y,
        z = dimensions.z,
        box_type = ?params.box_type,
        layout = ?params.layout,
        "generating box"
    );

    validate(&dimensions, params)?;
    let pieces = piece_layout(params.box_type, params.layout)?;
    let primitives = PanelAssembler::new(params, dimensions).assemble(pieces);
    tracing::debug!(count = primitives.len(), "box generated");

    Ok(BoxGeometry {
        dimensions,
        primitives,
    })
}

/// Load parameters from a RON file and generate the box
pub fn generate_from_file(path: impl AsRef<std::path::Path>) -> Result<BoxGeometry, BoxError> {
    let params = BoxParameters::load(path)?;
    generate_box(&params)
}
