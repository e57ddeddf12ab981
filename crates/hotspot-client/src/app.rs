//! Main application component.

use yew::prelude::*;

use crate::components::ImageHotspotQuestion;
use crate::params::load_params;

/// Root component: loads the host parameters and mounts the question.
#[function_component(App)]
pub fn app() -> Html {
    let params = use_memo((), |_| load_params());
    let title = use_memo((), |_| gloo::utils::document().title());

    html! {
        <ImageHotspotQuestion
            params={(*params).clone()}
            title={AttrValue::from((*title).clone())}
        />
    }
}
