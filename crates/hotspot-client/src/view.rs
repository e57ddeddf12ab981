//! Inline style and class helpers for the rendered question.

use hotspot_core::{MarkerPlacement, OutcomeKind, PercentPoint, PercentRect, PixelSize};

/// Absolute position of a hotspot region, in percent of the wrapper.
pub fn percent_rect_style(rect: PercentRect) -> String {
    format!(
        "left: {}%; top: {}%; width: {}%; height: {}%;",
        rect.x, rect.y, rect.width, rect.height
    )
}

pub fn pixel_size_style(size: PixelSize) -> String {
    format!("width: {}px; height: {}px;", size.width, size.height)
}

pub fn pixel_height_style(size: PixelSize) -> String {
    format!("height: {}px;", size.height)
}

/// Popup feedback anchored at the click point.
pub fn anchor_style(point: PercentPoint) -> String {
    format!("left: {}%; top: {}%;", point.x, point.y)
}

/// Marker `left`/`top` values in pixels.
pub fn marker_position(placement: MarkerPlacement) -> (String, String) {
    (
        format!("{}px", placement.left),
        format!("{}px", placement.top),
    )
}

/// Marker classes for an outcome.
pub fn marker_classes(kind: Option<OutcomeKind>) -> Vec<&'static str> {
    let mut classes = vec!["hotspot-feedback"];
    if kind == Some(OutcomeKind::Correct) {
        classes.push("correct");
    }
    if kind.is_some() {
        classes.push("fade-in");
    }
    classes
}
