// ============================================================================
// APP VIEW - top-level page layout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::views::{render_detail_grid, render_search_bar, render_search_results, render_top_details};

/// Render the whole trail detail page.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("trailDetailPg").build();

    if state.trail.get_loading() {
        let loading = ElementBuilder::new("div")?
            .class("pageLoading")
            .text("Loading ...")
            .build();
        append_child(&page, &loading)?;
        return Ok(page);
    }

    if let Some(error) = state.trail.get_error() {
        log::error!("❌ Trail page error: {}", error);
        let error_el = ElementBuilder::new("div")?
            .class("pageError")
            .text("Error")
            .build();
        append_child(&page, &error_el)?;
        return Ok(page);
    }

    let trail = match state.trail.get_trail() {
        Some(trail) => trail,
        None => {
            let error_el = ElementBuilder::new("div")?
                .class("pageError")
                .text("Error")
                .build();
            append_child(&page, &error_el)?;
            return Ok(page);
        }
    };

    append_child(&page, &render_top_details(state, &trail)?)?;
    append_child(&page, &render_search_bar(state)?)?;

    // Fixed container so search results can be patched in place
    let results_container = ElementBuilder::new("div")?.id("search-results")?.build();
    if state.search.result_count() > 0 {
        let results = render_search_results(state)?;
        append_child(&results_container, &results)?;
    }
    append_child(&page, &results_container)?;

    append_child(&page, &render_detail_grid(state, &trail)?)?;

    Ok(page)
}
