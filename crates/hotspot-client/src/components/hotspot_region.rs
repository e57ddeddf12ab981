//! A single clickable hotspot region.

use hotspot_core::PercentRect;
use yew::prelude::*;

use crate::view::percent_rect_style;

#[derive(Properties, PartialEq)]
pub struct HotspotRegionProps {
    pub rect: PercentRect,
    /// Shape class, e.g. `rectangle` or `ellipse`.
    pub figure: AttrValue,
}

/// Invisible region positioned in percent of the image wrapper.
///
/// Clicks bubble to the wrapper, which resolves them against this element's
/// offset.
#[function_component(HotspotRegion)]
pub fn hotspot_region(props: &HotspotRegionProps) -> Html {
    html! {
        <div
            class={classes!("image-hotspot", props.figure.to_string())}
            style={percent_rect_style(props.rect)}
        />
    }
}
