//! Tab/gap division of an edge length

use serde::{Deserialize, Serialize};

/// How an edge length is split into alternating gaps and tabs
///
/// Odd-numbered segments (including both end segments) use `gap_width`,
/// even-numbered segments use `tab_width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabDivision {
    /// Number of segments, always odd
    pub divisions: u32,
    /// Number of tab segments, `(divisions - 1) / 2`
    pub tabs: u32,
    /// Width of each tab segment before kerf correction
    pub tab_width: f64,
    /// Width of each gap segment before kerf correction
    pub gap_width: f64,
}

/// Segment widths after kerf correction for one side of a joint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KerfCorrected {
    pub tab_width: f64,
    pub gap_width: f64,
    /// Extra shift applied to the first segment only
    pub lead: f64,
}

impl TabDivision {
    /// Divide `length` into segments close to `nominal` wide
    ///
    /// With `equal` every segment has the same width. Otherwise tabs are
    /// exactly `nominal` wide and the gaps absorb the remainder.
    pub fn new(length: f64, nominal: f64, equal: bool) -> Self {
        let mut divisions = (length / nominal) as u32;
        if divisions % 2 == 0 {
            divisions = divisions.saturating_sub(1);
        }
        let divisions = divisions.max(1);
        let tabs = (divisions - 1) / 2;

        let (tab_width, gap_width) = if equal {
            let width = length / divisions as f64;
            (width, width)
        } else {
            let gap = (length - tabs as f64 * nominal) / (divisions - tabs) as f64;
            (nominal, gap)
        };

        Self {
            divisions,
            tabs,
            tab_width,
            gap_width,
        }
    }

    /// Number of gap segments
    pub fn gaps(&self) -> u32 {
        self.divisions - self.tabs
    }

    /// Widen or narrow the segments by `correction` (kerf minus clearance)
    ///
    /// A tab edge keeps `correction` more material on each tab; a hole edge
    /// removes `correction` more, so the two sides of a joint cancel out.
    pub fn kerf_corrected(&self, correction: f64, is_tab: bool) -> KerfCorrected {
        if is_tab {
            KerfCorrected {
                tab_width: self.tab_width + correction,
                gap_width: self.gap_width - correction,
                lead: correction / 2.0,
            }
        } else {
            KerfCorrected {
                tab_width: self.tab_width - correction,
                gap_width: self.gap_width + correction,
                lead: -correction / 2.0,
            }
        }
    }
}
