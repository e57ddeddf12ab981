//! Pointer click to percentage-of-image conversion.

use crate::geometry::{PercentPoint, PixelSize};

/// The element a click was reported on.
///
/// Nested elements (hotspot regions) report offsets relative to themselves,
/// so their own position inside the wrapper has to be added back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickTarget {
    /// The image wrapper itself.
    Wrapper,
    /// An element positioned inside the wrapper.
    Nested {
        /// Element `left` relative to the wrapper, in pixels.
        offset_left: f64,
        /// Element `top` relative to the wrapper, in pixels.
        offset_top: f64,
    },
}

/// Converts a click offset on `target` into wrapper percentages.
///
/// No clamping happens here; an edge click may land slightly outside 0-100.
/// Returns `None` when the wrapper has no usable size (not laid out yet),
/// since there is no meaningful percentage to report.
pub fn resolve(
    target: ClickTarget,
    offset_x: f64,
    offset_y: f64,
    wrapper: PixelSize,
) -> Option<PercentPoint> {
    if !wrapper.is_usable() {
        return None;
    }

    let (pixel_x, pixel_y) = match target {
        ClickTarget::Wrapper => (offset_x, offset_y),
        ClickTarget::Nested {
            offset_left,
            offset_top,
        } => (offset_x + offset_left, offset_y + offset_top),
    };

    Some(PercentPoint::new(
        pixel_x / (wrapper.width / 100.0),
        pixel_y / (wrapper.height / 100.0),
    ))
}
