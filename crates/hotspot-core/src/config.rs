//! Question parameters as delivered by the host.
//!
//! Every field carries a default so that sparse or older content still
//! parses; content written before `l10n` existed picks up the English labels.

use serde::{Deserialize, Serialize};

use crate::anchor::EdgePolicy;

/// Error type for loading question parameters.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Hotspot #{index} is invalid: {reason}")]
    InvalidHotspot { index: usize, reason: &'static str },
}

/// Root of the question parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionParams {
    pub image_hotspot_question: ImageHotspotSettings,
    pub behaviour: Behaviour,
    /// Score bar label with `:num` and `:total` placeholders.
    pub score_bar_label: String,
    /// Accessible label of the retry button.
    pub a11y_retry: String,
}

impl Default for QuestionParams {
    fn default() -> Self {
        Self {
            image_hotspot_question: ImageHotspotSettings::default(),
            behaviour: Behaviour::default(),
            score_bar_label: "You got :num out of :total points".to_string(),
            a11y_retry: "Retry the task. Reset all responses and start the task over again."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageHotspotSettings {
    pub background_image_settings: BackgroundImageSettings,
    pub hotspot_settings: HotspotSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundImageSettings {
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotspotSettings {
    pub task_description: Option<String>,
    /// Hotspots in configuration order. Order is the hit-test tie-break.
    pub hotspot: Vec<HotspotParams>,
    pub none_selected_feedback: Option<String>,
    pub show_feedback_as_popup: bool,
    pub l10n: L10n,
}

impl Default for HotspotSettings {
    fn default() -> Self {
        Self {
            task_description: None,
            hotspot: Vec::new(),
            none_selected_feedback: None,
            show_feedback_as_popup: true,
            l10n: L10n::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct L10n {
    pub retry_text: String,
    pub close_text: String,
}

impl Default for L10n {
    fn default() -> Self {
        Self {
            retry_text: "Retry".to_string(),
            close_text: "Close".to_string(),
        }
    }
}

/// A single configured hotspot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotParams {
    pub computed_settings: ComputedSettings,
    #[serde(default)]
    pub user_settings: UserSettings,
}

/// Rectangle in percentage-of-image units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedSettings {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Presentation class only; hit-testing is always rectangular.
    #[serde(default = "default_figure")]
    pub figure: String,
}

fn default_figure() -> String {
    "rectangle".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub correct: bool,
    pub feedback_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Behaviour {
    pub enable_retry: bool,
    /// Keep the feedback marker fully inside the image.
    pub clamp_feedback_marker: bool,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            enable_retry: true,
            clamp_feedback_marker: false,
        }
    }
}

impl QuestionParams {
    /// Parses and validates parameters from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Serializes the parameters to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rejects rectangles that cannot be hit-tested.
    ///
    /// Rectangles reaching past the image edge are accepted; they are only
    /// clipped visually.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, hotspot) in self.hotspots().iter().enumerate() {
            let s = &hotspot.computed_settings;
            if ![s.x, s.y, s.width, s.height].iter().all(|v| v.is_finite()) {
                return Err(ConfigError::InvalidHotspot {
                    index,
                    reason: "coordinates must be finite",
                });
            }
            if s.width < 0.0 || s.height < 0.0 {
                return Err(ConfigError::InvalidHotspot {
                    index,
                    reason: "width and height must not be negative",
                });
            }
        }
        Ok(())
    }

    pub fn hotspots(&self) -> &[HotspotParams] {
        &self.image_hotspot_question.hotspot_settings.hotspot
    }

    /// Background image path, if one is configured.
    pub fn background_image(&self) -> Option<&str> {
        self.image_hotspot_question
            .background_image_settings
            .path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
    }

    pub fn task_description(&self) -> Option<&str> {
        self.image_hotspot_question
            .hotspot_settings
            .task_description
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    pub fn none_selected_feedback(&self) -> Option<&str> {
        self.image_hotspot_question
            .hotspot_settings
            .none_selected_feedback
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    pub fn l10n(&self) -> &L10n {
        &self.image_hotspot_question.hotspot_settings.l10n
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        if self.behaviour.clamp_feedback_marker {
            EdgePolicy::Clamp
        } else {
            EdgePolicy::Free
        }
    }
}
