//! Serializable records handed to the host.

use serde::{Deserialize, Serialize};

use crate::outcome::MAX_SCORE;

/// Description of an answer, consumed by the host's analytics layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredEvent {
    pub verb: String,
    pub title: String,
    pub hotspot_index: Option<usize>,
    pub correct: bool,
    pub score: u32,
    pub max_score: u32,
    pub success: bool,
    pub completion: bool,
}

impl AnsweredEvent {
    pub fn new(title: &str, hotspot_index: Option<usize>, correct: bool, score: u32) -> Self {
        Self {
            verb: "answered".to_string(),
            title: title.to_string(),
            hotspot_index,
            correct,
            score,
            max_score: MAX_SCORE,
            success: score == MAX_SCORE,
            completion: true,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Authoring-time summary stored alongside the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresaveSummary {
    pub max_score: u32,
}

/// Summary the authoring tool saves with the content.
pub fn presave() -> PresaveSummary {
    PresaveSummary {
        max_score: MAX_SCORE,
    }
}
