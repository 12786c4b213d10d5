// ============================================================================
// INCREMENTAL UPDATES - patch specific elements without a full re-render
// ============================================================================
// Each updater finds its target elements by id. If a target is missing
// (view not mounted yet), it returns Err so the caller can fall back to
// a full render.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{append_child, get_element_by_id, set_class_name, set_inner_html, set_text_content};
use crate::state::AppState;
use crate::views::check_in_out::{check_in_class, check_out_class};
use crate::views::render_search_results;

/// Patch the check-in/check-out boxes and the status line in place.
pub fn update_check_in_out(state: &AppState) -> Result<(), JsValue> {
    let check_in_box = get_element_by_id("check-in-box")
        .ok_or_else(|| JsValue::from_str("check-in-box not found, needs full render"))?;
    let check_out_box = get_element_by_id("check-out-box")
        .ok_or_else(|| JsValue::from_str("check-out-box not found, needs full render"))?;

    let actions = state.check_in_out.get_actions();
    let pending = state.check_in_out.get_pending();

    let check_in_allowed = actions.as_ref().map(|a| a.check_in_allowed).unwrap_or(false);
    let check_out_allowed = actions.as_ref().map(|a| a.check_out_allowed).unwrap_or(false);

    set_class_name(&check_in_box, check_in_class(check_in_allowed, pending));
    set_class_name(&check_out_box, check_out_class(check_out_allowed, pending));

    if let Some(label_el) = get_element_by_id("check-status-label") {
        let label = actions
            .as_ref()
            .and_then(|a| a.status_label.clone())
            .unwrap_or_default();
        set_text_content(&label_el, &label);
    }

    if let Some(value_el) = get_element_by_id("check-status-value") {
        let value = actions
            .as_ref()
            .and_then(|a| a.status_value.clone())
            .unwrap_or_default();
        set_text_content(&value_el, &value);
    }

    if let Some(error_el) = get_element_by_id("check-error") {
        let error = state.check_in_out.get_error().unwrap_or_default();
        set_text_content(&error_el, &error);
    }

    Ok(())
}

/// Re-render only the search results block.
pub fn update_search_results(state: &AppState) -> Result<(), JsValue> {
    let container = get_element_by_id("search-results")
        .ok_or_else(|| JsValue::from_str("search-results not found, needs full render"))?;

    set_inner_html(&container, "");
    if state.search.result_count() > 0 {
        let results_view = render_search_results(state)?;
        append_child(&container, &results_view)?;
    }

    Ok(())
}
