//! Question parameters embedded in the host page.

use hotspot_core::QuestionParams;

/// Id of the `<script type="application/json">` element holding the parameters.
pub const PARAMS_ELEMENT_ID: &str = "hotspot-params";

/// Reads the parameters from the page.
///
/// Missing or invalid parameters fall back to the defaults, which render the
/// "no background image" placeholder.
pub fn load_params() -> QuestionParams {
    let Some(json) = gloo::utils::document()
        .get_element_by_id(PARAMS_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        tracing::warn!("No #{} element found; using defaults", PARAMS_ELEMENT_ID);
        return QuestionParams::default();
    };

    match QuestionParams::from_json(&json) {
        Ok(params) => {
            tracing::info!(hotspots = params.hotspots().len(), "Loaded question parameters");
            params
        }
        Err(e) => {
            tracing::error!("Failed to load question parameters: {}", e);
            QuestionParams::default()
        }
    }
}
