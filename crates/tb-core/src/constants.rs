//! Global constants for tb-core

/// Width of one horizontal pitch unit (HP/TE) of a 19-inch rack
pub const HP_PITCH: f64 = 5.08;

/// Vertical distance between mounting hole centres of a 3U rack row
pub const ROW_CENTRE_SPACING: f64 = 122.5;

/// Default rail mounting hole radius
pub const DEFAULT_MOUNT_RADIUS: f64 = 2.5;

/// A box may be at most this many times larger than the canvas
pub const CANVAS_SCALE_LIMIT: f64 = 10.0;

/// Panel spacing may be at most this many times the largest box extent
pub const SPACING_SCALE_LIMIT: f64 = 10.0;

/// The smallest box extent must hold at least this many nominal tabs
pub const MIN_TABS_PER_EXTENT: f64 = 3.0;

/// Material may take up at most this fraction of the smallest box extent
pub const MAX_THICKNESS_FRACTION: f64 = 1.0 / 3.0;

/// The largest box extent may hold at most this many nominal tabs
pub const MAX_TABS_PER_EDGE: f64 = 10_000.0;
