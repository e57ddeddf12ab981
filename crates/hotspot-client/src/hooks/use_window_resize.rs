//! Hook for window resize notifications.

use gloo::events::EventListener;
use yew::prelude::*;

/// Window events that can change the question's available width.
const RESIZE_EVENTS: [&str; 2] = ["resize", "orientationchange"];

/// Emits `on_resize` whenever the window is resized or rotated.
///
/// Pass a memoized callback; a new callback re-registers the listeners.
#[hook]
pub fn use_window_resize(on_resize: Callback<()>) {
    use_effect_with(on_resize, move |on_resize| {
        let window = gloo::utils::window();
        let listeners: Vec<EventListener> = RESIZE_EVENTS
            .iter()
            .map(|&event_type| {
                let on_resize = on_resize.clone();
                EventListener::new(&window, event_type, move |_| on_resize.emit(()))
            })
            .collect();

        // Keep listeners alive until cleanup
        move || drop(listeners)
    });
}
