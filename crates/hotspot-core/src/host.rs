//! Boundary between the question and the host framework.
//!
//! The host owns the button bar, the feedback/score display and analytics.
//! The question drives them through [`QuestionHost`] and exposes its scoring
//! contract through [`ScoredTask`].

use serde::{Deserialize, Serialize};

use crate::event::AnsweredEvent;
use crate::geometry::PercentPoint;

/// Buttons the question asks the host to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonId {
    RetryButton,
}

/// How the host should present feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupSettings {
    pub show_as_popup: bool,
    pub close_text: String,
    /// Point the popup is anchored to.
    pub anchor: PercentPoint,
}

/// Feedback text plus score, handed to the host display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub text: String,
    pub score: u32,
    pub max_score: u32,
    /// Label template with `:num` and `:total` placeholders.
    pub score_bar_label: String,
    pub popup: PopupSettings,
}

impl Feedback {
    /// Score bar label with the placeholders filled in.
    pub fn score_label(&self) -> String {
        self.score_bar_label
            .replace(":num", &self.score.to_string())
            .replace(":total", &self.max_score.to_string())
    }
}

/// Primitives the host framework provides.
pub trait QuestionHost {
    fn show_button(&mut self, button: ButtonId);
    fn hide_button(&mut self, button: ButtonId);
    fn set_feedback(&mut self, feedback: &Feedback);
    fn remove_feedback(&mut self);
    /// Called once per accepted answer.
    fn answered(&mut self, event: &AnsweredEvent);
}

/// Scoring contract exposed to the host framework.
pub trait ScoredTask {
    /// Whether an answer was given.
    fn answer_given(&self) -> bool;
    fn score(&self) -> u32;
    fn max_score(&self) -> u32;
    /// Clears the answer so the task can be attempted again.
    fn reset_task(&mut self, host: &mut dyn QuestionHost);
    /// Answers the task with its solution.
    fn show_solutions(&mut self, host: &mut dyn QuestionHost);
    /// Description of the current answer for analytics.
    fn answered_event(&self) -> AnsweredEvent;
}
