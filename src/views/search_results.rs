// ============================================================================
// SEARCH RESULTS VIEW - paged result list
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::app_state::{IncrementalUpdate, UpdateType};
use crate::state::AppState;
use crate::viewmodels::{next_result_idx, page_window, prev_result_idx};

/// Render the current page of search results with the pager.
pub fn render_search_results(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("trailSearchResultsList")
        .build();

    let results = state.search.get_results();
    let idx = state.search.get_result_idx();
    let total = results.len();

    let page = page_window(&results, idx);

    let summary = ElementBuilder::new("div")?
        .class("resultCount")
        .text(&format!(
            "{} - {} of {}",
            idx + 1,
            idx + page.len(),
            total
        ))
        .build();
    append_child(&container, &summary)?;

    for result in page {
        let row = ElementBuilder::new("div")?
            .class("searchResult")
            .child(
                ElementBuilder::new("div")?
                    .class("resultName")
                    .text(&result.name)
                    .build(),
            )?
            .child(
                ElementBuilder::new("div")?
                    .class("resultLocation")
                    .text(&format!(
                        "{} - {}, {}",
                        result.prop, result.city, result.state
                    ))
                    .build(),
            )?
            .build();

        // Selecting a result swaps the page to that trail
        {
            let state = state.clone();
            let trail_id = result.id.clone();
            on_click(&row, move |_| {
                let parsed = match trail_id.parse::<i32>() {
                    Ok(id) => id,
                    Err(_) => {
                        log::error!("❌ Bad trail id in search result: {}", trail_id);
                        return;
                    }
                };
                log::info!("🥾 Trail selected: {}", parsed);

                *state.trail_id.borrow_mut() = parsed;
                state.search.clear();
                crate::app::load_trail_data(&state);
                crate::rerender_app();
            })?;
        }

        append_child(&container, &row)?;
    }

    // Pager
    let pager = ElementBuilder::new("div")?.class("resultPager").build();

    let prev = ElementBuilder::new("div")?
        .class("pagerArrow")
        .text("<")
        .build();
    {
        let state = state.clone();
        on_click(&prev, move |_| {
            state
                .search
                .set_result_idx(prev_result_idx(state.search.get_result_idx()));
            crate::rerender_app_with_type(UpdateType::Incremental(
                IncrementalUpdate::SearchResults,
            ));
        })?;
    }

    let next = ElementBuilder::new("div")?
        .class("pagerArrow")
        .text(">")
        .build();
    {
        let state = state.clone();
        on_click(&next, move |_| {
            state.search.set_result_idx(next_result_idx(
                state.search.get_result_idx(),
                state.search.result_count(),
            ));
            crate::rerender_app_with_type(UpdateType::Incremental(
                IncrementalUpdate::SearchResults,
            ));
        })?;
    }

    append_child(&pager, &prev)?;
    append_child(&pager, &next)?;
    append_child(&container, &pager)?;

    Ok(container)
}
