//! Box parameters and configuration loading
//!
//! All lengths are in one unit chosen by the caller. Parameters are stored
//! in RON files; every field has a default so partial files are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tb_joint::JointSettings;

use crate::constants::{DEFAULT_MOUNT_RADIUS, HP_PITCH, ROW_CENTRE_SPACING};
use crate::layout::{BoxType, ConfigurationError, LayoutStyle};

/// Outer box extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length
    pub x: f64,
    /// Width
    pub y: f64,
    /// Height
    pub z: f64,
}

impl Dimensions {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Smallest extent
    pub fn min(&self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    /// Largest extent
    pub fn max(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Grow every extent by `amount`
    pub fn grown(&self, amount: f64) -> Self {
        Self::new(self.x + amount, self.y + amount, self.z + amount)
    }
}

/// Which surfaces internal dividers slot into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyingMode {
    /// Free-standing dividers
    #[default]
    None,
    /// Keyed into the walls only
    Walls,
    /// Keyed into the floor (and lid) only
    Floor,
    /// Keyed into walls and floor
    Both,
}

impl KeyingMode {
    pub fn keys_walls(self) -> bool {
        matches!(self, KeyingMode::Walls | KeyingMode::Both)
    }

    pub fn keys_floor(self) -> bool {
        matches!(self, KeyingMode::Floor | KeyingMode::Both)
    }
}

impl TryFrom<u8> for KeyingMode {
    type Error = ConfigurationError;

    /// Codes as used by the box maker's option dialog
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(KeyingMode::Both),
            1 => Ok(KeyingMode::Floor),
            2 => Ok(KeyingMode::Walls),
            3 => Ok(KeyingMode::None),
            _ => Err(ConfigurationError::UnknownKeyingMode(code)),
        }
    }
}

/// 19-inch equipment rail settings
///
/// In rail mode the box length and width come from the rack geometry
/// instead of the plain dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RailMount {
    /// Rack width in HP units
    pub hp: u32,
    /// Number of rack rows
    pub rows: u32,
    /// Height of one rail
    pub rail_height: f64,
    /// Gap between neighbouring rows
    pub row_spacing: f64,
    /// Depth of the mounting bolt hole from the panel edge
    pub mount_depth: f64,
    /// Offset of the bolt towards the row centreline
    pub mount_centre_offset: f64,
    /// Bolt hole radius
    pub mount_radius: f64,
}

impl Default for RailMount {
    fn default() -> Self {
        Self {
            hp: 84,
            rows: 1,
            rail_height: 10.0,
            row_spacing: 10.0,
            mount_depth: 17.4,
            mount_centre_offset: 0.0,
            mount_radius: DEFAULT_MOUNT_RADIUS,
        }
    }
}

impl RailMount {
    /// Box length needed for the rack width
    pub fn panel_width(&self) -> f64 {
        self.hp as f64 * HP_PITCH
    }

    /// Box width needed for all rows; rows are separated by `row_spacing`
    /// but never spaced from the case panels
    pub fn panel_height(&self) -> f64 {
        let rows = self.rows as f64 * (ROW_CENTRE_SPACING + self.rail_height);
        rows + self.rows.saturating_sub(1) as f64 * self.row_spacing
    }
}

/// Full input for one generated box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParameters {
    /// Box length (X)
    pub length: f64,
    /// Box width (Y)
    pub width: f64,
    /// Box height (Z)
    pub height: f64,
    /// Dimensions are inside measurements
    pub inside: bool,
    /// Material thickness
    pub thickness: f64,
    /// Width of material removed by the cut
    pub kerf: f64,
    /// Extra looseness for joints
    pub clearance: f64,
    /// Nominal tab width
    pub tab: f64,
    /// Equal-width tabs and gaps
    pub equal_tabs: bool,
    pub box_type: BoxType,
    pub layout: LayoutStyle,
    /// Dividers along the length axis
    pub dividers_length: u32,
    /// Dividers along the width axis
    pub dividers_width: u32,
    pub keying: KeyingMode,
    /// Gap between panels on the sheet
    pub spacing: f64,
    /// Canvas size for the plausibility check
    pub canvas: Option<[f64; 2]>,
    /// Rail mode settings; `None` for a plain box
    pub rail: Option<RailMount>,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            length: 180.0,
            width: 240.0,
            height: 50.0,
            inside: false,
            thickness: 3.0,
            kerf: 0.5,
            clearance: 0.01,
            tab: 6.0,
            equal_tabs: false,
            box_type: BoxType::default(),
            layout: LayoutStyle::default(),
            dividers_length: 2,
            dividers_width: 3,
            keying: KeyingMode::default(),
            spacing: 25.0,
            canvas: None,
            rail: None,
        }
    }
}

impl BoxParameters {
    /// Kerf minus clearance
    pub fn correction(&self) -> f64 {
        self.kerf - self.clearance
    }

    /// Settings shared by every edge of this box
    pub fn joint_settings(&self) -> JointSettings {
        JointSettings::new(
            self.thickness,
            self.kerf,
            self.clearance,
            self.tab,
            self.equal_tabs,
        )
    }

    /// Outer extents after rail sizing and inside correction
    pub fn resolved_dimensions(&self) -> Dimensions {
        let (x, y) = match &self.rail {
            Some(rail) => (rail.panel_width(), rail.panel_height()),
            None => (self.length, self.width),
        };
        let dims = Dimensions::new(x, y, self.height);
        if self.inside {
            dims.grown(self.thickness * 2.0)
        } else {
            dims
        }
    }

    /// Parse parameters from a RON string
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Serialize parameters to a pretty RON string
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load parameters from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Save parameters to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_ron_string()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))
    }
}

/// Parameter file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inside_dimensions_grow_by_two_thicknesses() {
        let params = BoxParameters {
            length: 100.0,
            width: 80.0,
            height: 40.0,
            inside: true,
            thickness: 4.0,
            ..Default::default()
        };
        assert_eq!(
            params.resolved_dimensions(),
            Dimensions::new(108.0, 88.0, 48.0)
        );
    }

    #[test]
    fn test_rail_mode_sizes_from_rack() {
        let params = BoxParameters {
            height: 200.0,
            rail: Some(RailMount {
                hp: 42,
                rows: 2,
                rail_height: 10.0,
                row_spacing: 5.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        let dims = params.resolved_dimensions();
        assert_relative_eq!(dims.x, 42.0 * 5.08);
        assert_relative_eq!(dims.y, 2.0 * (122.5 + 10.0) + 5.0);
        assert_eq!(dims.z, 200.0);
    }

    #[test]
    fn test_keying_codes() {
        assert_eq!(KeyingMode::try_from(0).unwrap(), KeyingMode::Both);
        assert_eq!(KeyingMode::try_from(1).unwrap(), KeyingMode::Floor);
        assert_eq!(KeyingMode::try_from(2).unwrap(), KeyingMode::Walls);
        assert_eq!(KeyingMode::try_from(3).unwrap(), KeyingMode::None);
        assert!(KeyingMode::try_from(4).is_err());
        assert!(KeyingMode::Both.keys_walls() && KeyingMode::Both.keys_floor());
        assert!(!KeyingMode::Floor.keys_walls());
        assert!(!KeyingMode::Walls.keys_floor());
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let params = BoxParameters::from_ron_str(
            "(length: 120.0, box_type: OneOpen, keying: Both, rail: Some((hp: 21)))",
        )
        .unwrap();
        assert_eq!(params.length, 120.0);
        assert_eq!(params.box_type, BoxType::OneOpen);
        assert_eq!(params.keying, KeyingMode::Both);
        assert_eq!(params.thickness, 3.0);
        let rail = params.rail.unwrap();
        assert_eq!(rail.hp, 21);
        assert_eq!(rail.mount_radius, DEFAULT_MOUNT_RADIUS);
    }

    #[test]
    fn test_ron_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.ron");
        let params = BoxParameters {
            layout: LayoutStyle::InlineCompact,
            canvas: Some([210.0, 297.0]),
            ..Default::default()
        };
        params.save(&path).unwrap();
        assert_eq!(BoxParameters::load(&path).unwrap(), params);
    }

    #[test]
    fn test_malformed_ron_is_an_error() {
        let err = BoxParameters::from_ron_str("(length: \"long\")").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize(_)));
    }
}
