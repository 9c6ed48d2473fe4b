//! Parameter plausibility checks
//!
//! Every check runs so that all problems are reported together.

use crate::constants::{
    CANVAS_SCALE_LIMIT, MAX_TABS_PER_EDGE, MAX_THICKNESS_FRACTION, MIN_TABS_PER_EXTENT,
    SPACING_SCALE_LIMIT,
};
use crate::params::{BoxParameters, Dimensions};

/// A single failed check
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("Parameters must be finite numbers")]
    NonFinite,
    #[error("Dimensions must be non zero")]
    ZeroDimension,
    #[error("Dimensions too large")]
    DimensionsTooLarge,
    #[error("Tab size too large")]
    TabTooLarge,
    #[error("Tab size too small")]
    TabTooSmall,
    #[error("Thickness is zero")]
    ZeroThickness,
    #[error("Material too thick")]
    MaterialTooThick,
    #[error("Kerf/clearance too large")]
    CorrectionTooLarge,
    #[error("Spacing too large")]
    SpacingTooLarge,
    #[error("Spacing too small")]
    SpacingTooSmall,
    #[error("Too many tabs for the box size")]
    TooManyTabs,
}

/// All failed checks for one parameter set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid box parameters: {}", describe(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn contains(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }
}

fn describe(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check resolved dimensions and parameters before generation
///
/// Each check is phrased as the condition that must hold, so NaN inputs fail
/// it instead of slipping through.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn validate(dims: &Dimensions, params: &BoxParameters) -> Result<(), ValidationError> {
    let smallest = dims.min();
    let largest = dims.max();
    let correction = params.correction();
    let mut issues = Vec::new();

    let values = [
        dims.x,
        dims.y,
        dims.z,
        params.thickness,
        params.tab,
        params.kerf,
        params.clearance,
        params.spacing,
    ];
    if !values.iter().all(|v| v.is_finite()) {
        issues.push(ValidationIssue::NonFinite);
    }
    if !(smallest > 0.0) {
        issues.push(ValidationIssue::ZeroDimension);
    }
    if let Some([width, height]) = params.canvas
        && !(largest <= width.max(height) * CANVAS_SCALE_LIMIT)
    {
        issues.push(ValidationIssue::DimensionsTooLarge);
    }
    if !(smallest >= MIN_TABS_PER_EXTENT * params.tab) {
        issues.push(ValidationIssue::TabTooLarge);
    }
    if !(params.tab >= params.thickness) {
        issues.push(ValidationIssue::TabTooSmall);
    }
    if !(params.thickness > 0.0) {
        issues.push(ValidationIssue::ZeroThickness);
    }
    if !(params.thickness <= smallest * MAX_THICKNESS_FRACTION) {
        issues.push(ValidationIssue::MaterialTooThick);
    }
    if !(correction <= smallest * MAX_THICKNESS_FRACTION) {
        issues.push(ValidationIssue::CorrectionTooLarge);
    }
    if !(params.spacing <= largest * SPACING_SCALE_LIMIT) {
        issues.push(ValidationIssue::SpacingTooLarge);
    }
    if !(params.spacing >= params.kerf) {
        issues.push(ValidationIssue::SpacingTooSmall);
    }
    if !(largest <= MAX_TABS_PER_EDGE * params.tab) {
        issues.push(ValidationIssue::TooManyTabs);
    }

    if issues.is_empty() {
        return Ok(());
    }
    for issue in &issues {
        tracing::warn!("{}", issue);
    }
    Err(ValidationError { issues })
}
