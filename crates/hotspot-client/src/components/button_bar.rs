//! Button bar with the retry button.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonBarProps {
    pub retry_visible: bool,
    pub retry_text: AttrValue,
    pub retry_aria_label: AttrValue,
    pub on_retry: Callback<()>,
}

#[function_component(ButtonBar)]
pub fn button_bar(props: &ButtonBarProps) -> Html {
    let on_click = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    html! {
        <div class="h5p-question-buttons">
            if props.retry_visible {
                <button
                    class="h5p-joubelui-button retry-button"
                    aria-label={props.retry_aria_label.clone()}
                    onclick={on_click}
                >
                    { props.retry_text.clone() }
                </button>
            }
        </div>
    }
}
