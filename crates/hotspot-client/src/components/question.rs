//! The image hotspot question component.
//!
//! Translates DOM events into [`QuestionAction`]s and core outputs back into
//! elements. All answer logic lives in `hotspot-core`.

use hotspot_core::{
    ClickTarget, HotspotQuestion, PLACEHOLDER_MESSAGE, PixelSize, QuestionParams, Surface,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlImageElement};
use yew::prelude::*;

use crate::components::{ButtonBar, FeedbackPanel, HotspotRegion};
use crate::hooks::{use_host_requests, use_window_resize};
use crate::state::{QuestionAction, QuestionState};
use crate::view::{marker_classes, marker_position, pixel_height_style, pixel_size_style};

#[derive(Properties, PartialEq)]
pub struct ImageHotspotQuestionProps {
    pub params: QuestionParams,
    #[prop_or_default]
    pub title: AttrValue,
}

fn offset_size(element: &HtmlElement) -> PixelSize {
    PixelSize::new(
        f64::from(element.offset_width()),
        f64::from(element.offset_height()),
    )
}

#[function_component(ImageHotspotQuestion)]
pub fn image_hotspot_question(props: &ImageHotspotQuestionProps) -> Html {
    let state = {
        let params = props.params.clone();
        let title = props.title.to_string();
        use_reducer(move || QuestionState::new(HotspotQuestion::new(params).with_title(title)))
    };
    let root_ref = use_node_ref();
    let wrapper_ref = use_node_ref();
    let marker_ref = use_node_ref();

    // Re-layout on window resize and on host resize requests
    let on_resize = {
        let dispatcher = state.dispatcher();
        let root_ref = root_ref.clone();
        use_callback((), move |(), _| {
            if let Some(root) = root_ref.cast::<HtmlElement>() {
                dispatcher.dispatch(QuestionAction::Layout {
                    container_width: f64::from(root.offset_width()),
                });
            }
        })
    };
    use_window_resize(on_resize.clone());
    use_host_requests(state.dispatcher(), on_resize.clone());

    // Re-anchor the marker from the stored percentages whenever the
    // selection or the rendered size changes.
    {
        let state = state.clone();
        let wrapper_ref = wrapper_ref.clone();
        let marker_ref = marker_ref.clone();
        let deps = (state.question.selection().copied(), state.rendered);
        use_effect_with(deps, move |_| {
            let (Some(wrapper), Some(marker)) = (
                wrapper_ref.cast::<HtmlElement>(),
                marker_ref.cast::<HtmlElement>(),
            ) else {
                return;
            };
            let Some(placement) = state
                .question
                .marker_placement(offset_size(&wrapper), offset_size(&marker))
            else {
                return;
            };
            let (left, top) = marker_position(placement);
            let style = marker.style();
            for (property, value) in [("left", &left), ("top", &top)] {
                if let Err(e) = style.set_property(property, value) {
                    tracing::warn!("Failed to position feedback marker: {:?}", e);
                }
            }
        });
    }

    let on_image_load = {
        let dispatcher = state.dispatcher();
        let on_resize = on_resize.clone();
        Callback::from(move |e: Event| {
            let Some(image) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
            else {
                return;
            };
            dispatcher.dispatch(QuestionAction::ImageLoaded(PixelSize::new(
                f64::from(image.natural_width()),
                f64::from(image.natural_height()),
            )));
            on_resize.emit(());
        })
    };

    let on_wrapper_click = {
        let dispatcher = state.dispatcher();
        let wrapper_ref = wrapper_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(wrapper) = wrapper_ref.cast::<HtmlElement>() else {
                return;
            };
            let target = match e.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) {
                Some(element) if element != wrapper => ClickTarget::Nested {
                    offset_left: f64::from(element.offset_left()),
                    offset_top: f64::from(element.offset_top()),
                },
                _ => ClickTarget::Wrapper,
            };
            dispatcher.dispatch(QuestionAction::Click {
                target,
                offset_x: f64::from(e.offset_x()),
                offset_y: f64::from(e.offset_y()),
                wrapper: offset_size(&wrapper),
            });
        })
    };

    let on_retry = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(QuestionAction::Retry))
    };

    let question = &state.question;
    let params = question.params();
    let intro = params.task_description().map(|text| {
        html! {
            <div class="h5p-question-introduction">
                { Html::from_html_unchecked(AttrValue::from(text.to_string())) }
            </div>
        }
    });

    let content = match question.surface() {
        Surface::Placeholder => html! {
            <div class="h5p-image-hotspot-question">{ PLACEHOLDER_MESSAGE }</div>
        },
        Surface::Image { path } => {
            let size_style = state.rendered.map(pixel_size_style).unwrap_or_default();
            // The root keeps its fluid width so resizes can measure the container.
            let root_style = state.rendered.map(pixel_height_style).unwrap_or_default();
            let loader = (!question.is_image_loaded()).then(|| {
                html! { <div class="image-loader loading" /> }
            });
            let hotspots = question.geometry().hotspots().iter().map(|hotspot| {
                html! {
                    <HotspotRegion
                        rect={hotspot.shape()}
                        figure={AttrValue::from(hotspot.figure().to_string())}
                    />
                }
            });
            let marker = question.selection().map(|_| {
                let kind = question.outcome().map(|o| o.kind);
                html! { <div ref={marker_ref.clone()} class={classes!(marker_classes(kind))} /> }
            });

            html! {
                <div ref={root_ref.clone()} class="h5p-image-hotspot-question" style={root_style}>
                    <div
                        ref={wrapper_ref.clone()}
                        class="image-wrapper"
                        style={size_style.clone()}
                        onclick={on_wrapper_click}
                    >
                        { for loader }
                        <img
                            class="hotspot-image"
                            src={path.clone()}
                            style={size_style}
                            hidden={!question.is_image_loaded()}
                            onload={on_image_load}
                        />
                        { for hotspots }
                        { for marker }
                    </div>
                    <FeedbackPanel feedback={state.view.feedback.clone()} />
                </div>
            }
        }
    };

    html! {
        <>
            { for intro }
            { content }
            <ButtonBar
                retry_visible={state.view.retry_visible && question.retry_enabled()}
                retry_text={AttrValue::from(params.l10n().retry_text.clone())}
                retry_aria_label={AttrValue::from(params.a11y_retry.clone())}
                on_retry={on_retry}
            />
        </>
    }
}
