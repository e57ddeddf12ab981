//! Feedback marker placement.
//!
//! The marker position is always derived from the stored percentage point
//! and the current wrapper size, never from the previous pixel position, so
//! repeated resizes cannot accumulate drift.

use serde::{Deserialize, Serialize};

use crate::geometry::{PercentPoint, PixelSize};
use crate::selection::Selection;

/// How the marker box treats the wrapper edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Centre the marker on the click even if it overhangs the image.
    #[default]
    Free,
    /// Keep the whole marker box inside the wrapper.
    Clamp,
}

/// Top-left pixel position of the marker inside the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkerPlacement {
    pub left: f64,
    pub top: f64,
}

impl MarkerPlacement {
    /// Percentage position of the marker centre for the given sizes.
    pub fn center_percent(&self, wrapper: PixelSize, marker: PixelSize) -> PercentPoint {
        PercentPoint::new(
            (self.left + marker.width / 2.0) / (wrapper.width / 100.0),
            (self.top + marker.height / 2.0) / (wrapper.height / 100.0),
        )
    }
}

/// Places the marker for `selection` in a wrapper of the given size.
///
/// Returns `None` without a selection.
pub fn place(
    selection: Option<&Selection>,
    wrapper: PixelSize,
    marker: PixelSize,
    policy: EdgePolicy,
) -> Option<MarkerPlacement> {
    let selection = selection?;
    let point = selection.point;

    let mut left = point.x * wrapper.width / 100.0 - marker.width / 2.0;
    let mut top = point.y * wrapper.height / 100.0 - marker.height / 2.0;

    if policy == EdgePolicy::Clamp {
        // min before max: a marker wider than the wrapper pins to 0
        left = left.min(wrapper.width - marker.width).max(0.0);
        top = top.min(wrapper.height - marker.height).max(0.0);
    }

    tracing::trace!(left, top, ?policy, "Placed feedback marker");
    Some(MarkerPlacement { left, top })
}
