//! Host primitives backed by view state.
//!
//! The question core drives these; the components read them back to render
//! the button bar and the feedback panel.

use hotspot_core::{AnsweredEvent, ButtonId, Feedback, QuestionHost};
use wasm_bindgen::JsValue;

/// DOM event dispatched on `window` for every accepted answer.
pub const ANSWERED_EVENT: &str = "hotspot-answered";

/// Button bar and feedback display state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewHost {
    pub retry_visible: bool,
    pub feedback: Option<Feedback>,
}

impl QuestionHost for ViewHost {
    fn show_button(&mut self, button: ButtonId) {
        match button {
            ButtonId::RetryButton => self.retry_visible = true,
        }
    }

    fn hide_button(&mut self, button: ButtonId) {
        match button {
            ButtonId::RetryButton => self.retry_visible = false,
        }
    }

    fn set_feedback(&mut self, feedback: &Feedback) {
        self.feedback = Some(feedback.clone());
    }

    fn remove_feedback(&mut self) {
        self.feedback = None;
    }

    fn answered(&mut self, event: &AnsweredEvent) {
        tracing::info!(
            hotspot = ?event.hotspot_index,
            score = event.score,
            max_score = event.max_score,
            "Question answered"
        );
        if let Err(e) = dispatch_answered(event) {
            tracing::error!("Failed to dispatch answered event: {:?}", e);
        }
    }
}

/// Forwards the answer record to whoever collects analytics on the page.
fn dispatch_answered(event: &AnsweredEvent) -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };

    let detail = serde_wasm_bindgen::to_value(event)?;
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);
    let dom_event = web_sys::CustomEvent::new_with_event_init_dict(ANSWERED_EVENT, &init)?;
    window.dispatch_event(&dom_event)?;
    Ok(())
}
