//! The image hotspot question.
//!
//! Composes the geometry, resolver, evaluator, selection machine and marker
//! anchor. The rendering adapter calls into this type on pointer, load and
//! resize events; the host framework talks to it through [`ScoredTask`].

use tracing::{debug, warn};

use crate::anchor::{self, EdgePolicy, MarkerPlacement};
use crate::config::QuestionParams;
use crate::event::AnsweredEvent;
use crate::geometry::{GeometryModel, PercentPoint, PixelSize};
use crate::host::{ButtonId, Feedback, PopupSettings, QuestionHost, ScoredTask};
use crate::outcome::{self, MAX_SCORE, Outcome, OutcomeKind};
use crate::resolver::{self, ClickTarget};
use crate::scale::ImageScale;
use crate::selection::{Selection, SelectionMachine};

/// Shown instead of the image when none is configured.
pub const PLACEHOLDER_MESSAGE: &str = "No background image was added!";

/// Title used when the content carries none.
pub const DEFAULT_TITLE: &str = "Image Hotspot Question";

/// Feedback text when neither the hotspot nor the settings provide one.
const EMPTY_FEEDBACK: &str = "\u{a0}";

/// What the question renders as its interactive surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface {
    /// A background image with hotspots over it.
    Image { path: String },
    /// No image configured; a message instead, no interaction.
    Placeholder,
}

/// One question instance.
#[derive(Debug, Clone)]
pub struct HotspotQuestion {
    params: QuestionParams,
    title: String,
    surface: Surface,
    geometry: GeometryModel,
    selection: SelectionMachine,
    outcome: Option<Outcome>,
    scale: ImageScale,
    edge_policy: EdgePolicy,
}

impl HotspotQuestion {
    pub fn new(params: QuestionParams) -> Self {
        let surface = match params.background_image() {
            Some(path) => Surface::Image {
                path: path.to_string(),
            },
            None => {
                warn!("No background image configured; rendering placeholder");
                Surface::Placeholder
            }
        };
        let geometry = GeometryModel::from_params(params.hotspots());
        let edge_policy = params.edge_policy();

        Self {
            params,
            title: DEFAULT_TITLE.to_string(),
            surface,
            geometry,
            selection: SelectionMachine::new(),
            outcome: None,
            scale: ImageScale::new(),
            edge_policy,
        }
    }

    /// Sets the title from content metadata. Blank titles keep the default.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.title = title;
        }
        self
    }

    pub fn params(&self) -> &QuestionParams {
        &self.params
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn geometry(&self) -> &GeometryModel {
        &self.geometry
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.current()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.surface, Surface::Image { .. })
    }

    /// Whether the retry button may be shown at all.
    pub fn retry_enabled(&self) -> bool {
        self.params.behaviour.enable_retry
    }

    /// Records the natural image size from the load event.
    pub fn image_loaded(&mut self, natural: PixelSize) {
        self.scale.on_load(natural);
    }

    pub fn is_image_loaded(&self) -> bool {
        self.scale.is_loaded()
    }

    /// Rendered image and wrapper size for a container width.
    ///
    /// `None` until the image has loaded.
    pub fn layout(&self, container_width: f64) -> Option<PixelSize> {
        self.scale.resolve(container_width)
    }

    /// Handles a pointer click on the wrapper or one of its hotspots.
    ///
    /// Returns the outcome when the click was accepted as the answer.
    pub fn click(
        &mut self,
        host: &mut dyn QuestionHost,
        target: ClickTarget,
        offset_x: f64,
        offset_y: f64,
        wrapper: PixelSize,
    ) -> Option<Outcome> {
        if !self.is_interactive() {
            return None;
        }
        if self.selection.is_answered() {
            debug!("Click ignored: question already answered");
            return None;
        }

        let Some(point) = resolver::resolve(target, offset_x, offset_y, wrapper) else {
            warn!(?wrapper, "Click dropped: wrapper has no usable size");
            return None;
        };
        self.submit_point(host, point)
    }

    /// Marker position for the current selection in a wrapper of `wrapper`
    /// size. Call on every resize; `None` without a selection.
    pub fn marker_placement(&self, wrapper: PixelSize, marker: PixelSize) -> Option<MarkerPlacement> {
        anchor::place(self.selection.current(), wrapper, marker, self.edge_policy)
    }

    fn submit_point(&mut self, host: &mut dyn QuestionHost, point: PercentPoint) -> Option<Outcome> {
        let outcome = outcome::evaluate(point, &self.geometry);
        self.submit_outcome(host, point, outcome)
    }

    /// Records an already decided outcome, bypassing the hit-test.
    fn submit_outcome(
        &mut self,
        host: &mut dyn QuestionHost,
        point: PercentPoint,
        outcome: Outcome,
    ) -> Option<Outcome> {
        self.selection.submit(point, outcome.matched_hotspot)?;
        self.outcome = Some(outcome);

        debug!(
            x = point.x,
            y = point.y,
            hotspot = ?outcome.matched_hotspot,
            kind = ?outcome.kind,
            "Answer accepted"
        );

        if outcome.is_correct() {
            host.hide_button(ButtonId::RetryButton);
        } else if self.retry_enabled() {
            host.show_button(ButtonId::RetryButton);
        }

        host.set_feedback(&self.feedback_for(point, &outcome));
        host.answered(&self.answered_event());

        Some(outcome)
    }

    fn feedback_text(&self, outcome: &Outcome) -> String {
        outcome
            .matched_hotspot
            .and_then(|index| self.geometry.get(index))
            .and_then(|hotspot| hotspot.feedback_text())
            .or_else(|| self.params.none_selected_feedback())
            .unwrap_or(EMPTY_FEEDBACK)
            .to_string()
    }

    fn feedback_for(&self, point: PercentPoint, outcome: &Outcome) -> Feedback {
        let settings = &self.params.image_hotspot_question.hotspot_settings;
        Feedback {
            text: self.feedback_text(outcome),
            score: outcome.score,
            max_score: MAX_SCORE,
            score_bar_label: self.params.score_bar_label.clone(),
            popup: PopupSettings {
                show_as_popup: settings.show_feedback_as_popup,
                close_text: settings.l10n.close_text.clone(),
                anchor: point,
            },
        }
    }
}

impl ScoredTask for HotspotQuestion {
    fn answer_given(&self) -> bool {
        self.selection.is_answered()
    }

    fn score(&self) -> u32 {
        self.outcome.map_or(0, |outcome| outcome.score)
    }

    fn max_score(&self) -> u32 {
        MAX_SCORE
    }

    fn reset_task(&mut self, host: &mut dyn QuestionHost) {
        self.selection.reset();
        self.outcome = None;
        host.hide_button(ButtonId::RetryButton);
        host.remove_feedback();
        debug!("Task reset");
    }

    fn show_solutions(&mut self, host: &mut dyn QuestionHost) {
        if !self.is_interactive() || self.selection.is_answered() {
            return;
        }
        let Some((index, hotspot)) = self.geometry.first_correct() else {
            debug!("No correct hotspot configured; nothing to show");
            return;
        };
        let center = hotspot.shape().center();
        debug!(index, "Showing solution");
        // Overlapping or zero-size regions would defeat a hit-test here.
        let solution = Outcome {
            matched_hotspot: Some(index),
            kind: OutcomeKind::Correct,
            score: MAX_SCORE,
        };
        self.submit_outcome(host, center, solution);
    }

    fn answered_event(&self) -> AnsweredEvent {
        let outcome = self.outcome.as_ref();
        AnsweredEvent::new(
            &self.title,
            outcome.and_then(|o| o.matched_hotspot),
            outcome.is_some_and(Outcome::is_correct),
            self.score(),
        )
    }
}
