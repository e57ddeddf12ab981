//! Feedback text and score bar.

use hotspot_core::Feedback;
use yew::prelude::*;

use crate::view::anchor_style;

#[derive(Properties, PartialEq)]
pub struct FeedbackPanelProps {
    pub feedback: Option<Feedback>,
}

/// Shows the feedback of the current answer, either inline or as a popup
/// anchored at the click point.
#[function_component(FeedbackPanel)]
pub fn feedback_panel(props: &FeedbackPanelProps) -> Html {
    let popup_open = use_state(|| true);

    // Reopen the popup for each new answer.
    {
        let popup_open = popup_open.clone();
        use_effect_with(props.feedback.clone(), move |_| {
            popup_open.set(true);
        });
    }

    let Some(feedback) = &props.feedback else {
        return html! {};
    };

    let on_close = {
        let popup_open = popup_open.clone();
        Callback::from(move |_: MouseEvent| popup_open.set(false))
    };

    // Feedback texts are authored HTML.
    let text = Html::from_html_unchecked(AttrValue::from(feedback.text.clone()));
    let score_label = feedback.score_label();

    if feedback.popup.show_as_popup {
        if !*popup_open {
            return html! {
                <div class="h5p-question-scorebar">{ score_label }</div>
            };
        }
        html! {
            <>
                <div class="h5p-question-feedback popup" style={anchor_style(feedback.popup.anchor)}>
                    <div class="h5p-question-feedback-content-text">{ text }</div>
                    <button class="h5p-question-feedback-close" onclick={on_close}>
                        { feedback.popup.close_text.clone() }
                    </button>
                </div>
                <div class="h5p-question-scorebar">{ score_label }</div>
            </>
        }
    } else {
        html! {
            <>
                <div class="h5p-question-feedback">
                    <div class="h5p-question-feedback-content-text">{ text }</div>
                </div>
                <div class="h5p-question-scorebar">{ score_label }</div>
            </>
        }
    }
}
