//! Hook for requests the host page sends to the question.

use gloo::events::EventListener;
use yew::prelude::*;

use crate::state::{QuestionAction, QuestionState};

/// Window event asking the question to reset itself.
pub const RESET_TASK_EVENT: &str = "hotspot-reset-task";
/// Window event asking the question to reveal its solution.
pub const SHOW_SOLUTIONS_EVENT: &str = "hotspot-show-solutions";
/// Window event the host fires after changing the question's container,
/// e.g. when a hidden slide becomes visible.
pub const RESIZE_EVENT: &str = "hotspot-resize";

fn host_resize_listener(target: &web_sys::EventTarget, on_resize: Callback<()>) -> EventListener {
    EventListener::new(target, RESIZE_EVENT, move |_| {
        tracing::trace!("Host requested resize");
        on_resize.emit(());
    })
}

/// Maps host window events onto question actions. Host resizes run
/// `on_resize`, the same re-layout as a window resize.
#[hook]
pub fn use_host_requests(dispatcher: UseReducerDispatcher<QuestionState>, on_resize: Callback<()>) {
    use_effect_with((dispatcher, on_resize), move |(dispatcher, on_resize)| {
        let window = gloo::utils::window();

        let reset = {
            let dispatcher = dispatcher.clone();
            EventListener::new(&window, RESET_TASK_EVENT, move |_| {
                tracing::debug!("Host requested reset");
                dispatcher.dispatch(QuestionAction::Retry);
            })
        };
        let solutions = {
            let dispatcher = dispatcher.clone();
            EventListener::new(&window, SHOW_SOLUTIONS_EVENT, move |_| {
                tracing::debug!("Host requested solution");
                dispatcher.dispatch(QuestionAction::ShowSolutions);
            })
        };

        let resize = host_resize_listener(&window, on_resize.clone());

        move || drop((reset, solutions, resize))
    });
}
