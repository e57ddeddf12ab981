//! Hotspot geometry in percentage-of-image units.

use serde::{Deserialize, Serialize};

use crate::config::HotspotParams;

/// A point in percentage-of-image units (0-100 on both axes).
///
/// Independent of the current render size. Values slightly outside 0-100
/// are legal (edge clicks, rounding).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentPoint {
    pub x: f64,
    pub y: f64,
}

impl PercentPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A pixel size of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both sides are finite and strictly positive.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle in percentage-of-image units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PercentRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: `[x, x + width) x [y, y + height)`.
    pub fn contains(&self, point: PercentPoint) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> PercentPoint {
        PercentPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A configured hotspot. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    shape: PercentRect,
    is_correct: bool,
    feedback_text: Option<String>,
    figure: String,
}

impl Hotspot {
    pub fn new(shape: PercentRect, is_correct: bool, feedback_text: Option<String>) -> Self {
        Self {
            shape,
            is_correct,
            feedback_text,
            figure: "rectangle".to_string(),
        }
    }

    pub fn shape(&self) -> PercentRect {
        self.shape
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn feedback_text(&self) -> Option<&str> {
        self.feedback_text.as_deref().filter(|text| !text.is_empty())
    }

    /// CSS class the renderer puts on the region.
    pub fn figure(&self) -> &str {
        &self.figure
    }
}

impl From<&HotspotParams> for Hotspot {
    fn from(params: &HotspotParams) -> Self {
        let s = &params.computed_settings;
        Self {
            shape: PercentRect::new(s.x, s.y, s.width, s.height),
            is_correct: params.user_settings.correct,
            feedback_text: params.user_settings.feedback_text.clone(),
            figure: s.figure.clone(),
        }
    }
}

/// The fixed, ordered set of hotspots of one question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryModel {
    hotspots: Vec<Hotspot>,
}

impl GeometryModel {
    pub fn new(hotspots: Vec<Hotspot>) -> Self {
        Self { hotspots }
    }

    pub fn from_params(params: &[HotspotParams]) -> Self {
        Self::new(params.iter().map(Hotspot::from).collect())
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn get(&self, index: usize) -> Option<&Hotspot> {
        self.hotspots.get(index)
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    /// Index of the first hotspot containing `point`, in configuration order.
    pub fn hit_test(&self, point: PercentPoint) -> Option<usize> {
        self.hotspots.iter().position(|h| h.shape.contains(point))
    }

    /// First correct hotspot in configuration order.
    pub fn first_correct(&self) -> Option<(usize, &Hotspot)> {
        self.hotspots.iter().enumerate().find(|(_, h)| h.is_correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = PercentRect::new(50.0, 50.0, 10.0, 10.0);

        assert!(rect.contains(PercentPoint::new(50.0, 50.0)));
        assert!(rect.contains(PercentPoint::new(59.999, 59.999)));
        assert!(!rect.contains(PercentPoint::new(60.0, 55.0)));
        assert!(!rect.contains(PercentPoint::new(55.0, 60.0)));
        assert!(!rect.contains(PercentPoint::new(49.9, 55.0)));
    }

    #[test]
    fn test_center() {
        let rect = PercentRect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), PercentPoint::new(25.0, 40.0));
    }

    #[test]
    fn test_hit_test_prefers_configuration_order() {
        let model = GeometryModel::new(vec![
            Hotspot::new(PercentRect::new(0.0, 0.0, 50.0, 50.0), true, None),
            Hotspot::new(PercentRect::new(0.0, 0.0, 50.0, 50.0), false, None),
        ]);

        assert_eq!(model.hit_test(PercentPoint::new(25.0, 25.0)), Some(0));
        assert_eq!(model.hit_test(PercentPoint::new(75.0, 75.0)), None);
    }

    #[test]
    fn test_first_correct_skips_wrong_hotspots() {
        let model = GeometryModel::new(vec![
            Hotspot::new(PercentRect::new(0.0, 0.0, 10.0, 10.0), false, None),
            Hotspot::new(PercentRect::new(20.0, 0.0, 10.0, 10.0), true, None),
            Hotspot::new(PercentRect::new(40.0, 0.0, 10.0, 10.0), true, None),
        ]);

        let (index, _) = model.first_correct().unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_empty_feedback_text_is_absent() {
        let hotspot = Hotspot::new(PercentRect::default(), false, Some(String::new()));
        assert_eq!(hotspot.feedback_text(), None);
    }

    #[test]
    fn test_usable_pixel_size() {
        assert!(PixelSize::new(10.0, 10.0).is_usable());
        assert!(!PixelSize::new(0.0, 10.0).is_usable());
        assert!(!PixelSize::new(10.0, f64::NAN).is_usable());
    }
}
