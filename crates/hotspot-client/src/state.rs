//! Question state management.

use std::rc::Rc;

use hotspot_core::{ClickTarget, HotspotQuestion, PixelSize, ScoredTask};
use yew::prelude::*;

use crate::host::ViewHost;

/// Question core plus everything the host primitives have been told.
#[derive(Debug, Clone)]
pub struct QuestionState {
    pub question: HotspotQuestion,
    pub view: ViewHost,
    /// Rendered image/wrapper size, `None` until the image has loaded.
    pub rendered: Option<PixelSize>,
}

impl QuestionState {
    pub fn new(question: HotspotQuestion) -> Self {
        Self {
            question,
            view: ViewHost::default(),
            rendered: None,
        }
    }
}

/// Events forwarded from the rendered question.
#[derive(Debug, Clone)]
pub enum QuestionAction {
    /// The background image finished loading.
    ImageLoaded(PixelSize),
    /// The container was laid out or resized.
    Layout { container_width: f64 },
    /// A pointer click inside the image wrapper.
    Click {
        target: ClickTarget,
        offset_x: f64,
        offset_y: f64,
        wrapper: PixelSize,
    },
    /// The retry button was pressed.
    Retry,
    /// The host asked for the solution.
    ShowSolutions,
}

impl Reducible for QuestionState {
    type Action = QuestionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            QuestionAction::ImageLoaded(natural) => {
                let mut new_state = (*self).clone();
                new_state.question.image_loaded(natural);
                Rc::new(new_state)
            }
            QuestionAction::Layout { container_width } => {
                // Before the image has loaded there is nothing to size.
                let Some(rendered) = self.question.layout(container_width) else {
                    return self;
                };
                if self.rendered == Some(rendered) {
                    return self;
                }
                let mut new_state = (*self).clone();
                new_state.rendered = Some(rendered);
                Rc::new(new_state)
            }
            QuestionAction::Click {
                target,
                offset_x,
                offset_y,
                wrapper,
            } => {
                if self.question.answer_given() {
                    return self;
                }
                let mut new_state = (*self).clone();
                let state = &mut new_state;
                let accepted =
                    state
                        .question
                        .click(&mut state.view, target, offset_x, offset_y, wrapper);
                if accepted.is_none() {
                    return self;
                }
                Rc::new(new_state)
            }
            QuestionAction::Retry => {
                let mut new_state = (*self).clone();
                let state = &mut new_state;
                state.question.reset_task(&mut state.view);
                Rc::new(new_state)
            }
            QuestionAction::ShowSolutions => {
                if self.question.answer_given() {
                    return self;
                }
                let mut new_state = (*self).clone();
                let state = &mut new_state;
                state.question.show_solutions(&mut state.view);
                // No correct hotspot or no image: nothing was selected.
                if !state.question.answer_given() {
                    return self;
                }
                Rc::new(new_state)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotspot_core::QuestionParams;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn state(hotspots: &str) -> Rc<QuestionState> {
        let json = format!(
            r#"{{
                "imageHotspotQuestion": {{
                    "backgroundImageSettings": {{ "path": "harbour.jpg" }},
                    "hotspotSettings": {{ "hotspot": [{hotspots}] }}
                }}
            }}"#
        );
        let params = QuestionParams::from_json(&json).unwrap();
        Rc::new(QuestionState::new(HotspotQuestion::new(params)))
    }

    const CORRECT: &str = r#"{
        "computedSettings": { "x": 40, "y": 40, "width": 20, "height": 20 },
        "userSettings": { "correct": true }
    }"#;

    const WRONG: &str = r#"{
        "computedSettings": { "x": 0, "y": 0, "width": 20, "height": 20 },
        "userSettings": { "correct": false }
    }"#;

    #[wasm_bindgen_test]
    fn test_show_solutions_without_correct_hotspot_keeps_state() {
        let before = state(WRONG);
        let after = before.clone().reduce(QuestionAction::ShowSolutions);
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[wasm_bindgen_test]
    fn test_show_solutions_when_answered_keeps_state() {
        let answered = state(CORRECT).reduce(QuestionAction::ShowSolutions);
        assert!(answered.question.answer_given());
        assert!(answered.view.feedback.is_some());

        let again = answered.clone().reduce(QuestionAction::ShowSolutions);
        assert!(Rc::ptr_eq(&answered, &again));
    }

    #[wasm_bindgen_test]
    fn test_layout_before_load_keeps_state() {
        let before = state(CORRECT);
        let after = before.clone().reduce(QuestionAction::Layout {
            container_width: 0.0,
        });
        assert!(Rc::ptr_eq(&before, &after));
    }
}
