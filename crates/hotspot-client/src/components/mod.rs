//! UI components for the image hotspot question.

mod button_bar;
mod feedback_panel;
mod hotspot_region;
mod question;

pub use button_bar::ButtonBar;
pub use feedback_panel::FeedbackPanel;
pub use hotspot_region::HotspotRegion;
pub use question::ImageHotspotQuestion;
