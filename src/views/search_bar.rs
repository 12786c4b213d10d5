// ============================================================================
// SEARCH BAR VIEW - search form with clear button
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_click, on_submit, ElementBuilder};
use crate::state::app_state::{IncrementalUpdate, UpdateType};
use crate::state::AppState;
use crate::viewmodels::SearchViewModel;

pub fn render_search_bar(state: &AppState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?.class("searchBar").build();

    let input = ElementBuilder::new("input")?
        .class("searchField")
        .attr("type", "text")?
        .attr("placeholder", "Search for trails")?
        .build();

    let clear = ElementBuilder::new("div")?.class("searchClear").text("X").build();

    // Clear button wipes the field and the result list
    {
        let state = state.clone();
        let input = input.clone();
        on_click(&clear, move |_| {
            if let Ok(field) = input.clone().dyn_into::<HtmlInputElement>() {
                field.set_value("");
            }
            state.search.clear();
            crate::rerender_app_with_type(UpdateType::Incremental(
                IncrementalUpdate::SearchResults,
            ));
        })?;
    }

    let submit = ElementBuilder::new("button")?
        .class("searchSubmit")
        .attr("type", "submit")?
        .text("Search")
        .build();

    {
        let state = state.clone();
        let input = input.clone();
        on_submit(&form, move |event| {
            event.prevent_default();

            let query = input
                .clone()
                .dyn_into::<HtmlInputElement>()
                .map(|field| field.value())
                .unwrap_or_default();
            if query.trim().is_empty() {
                return;
            }

            log::info!("🔍 Searching trails: {}", query);

            let state = state.clone();
            spawn_local(async move {
                let vm = SearchViewModel::new();
                match vm.search(query.trim()).await {
                    Ok(results) => {
                        log::info!("📋 {} trails found", results.len());
                        state.search.set_results(results);
                    }
                    Err(e) => {
                        log::error!("❌ Trail search failed: {}", e);
                        state.search.clear();
                    }
                }
                crate::rerender_app_with_type(UpdateType::Incremental(
                    IncrementalUpdate::SearchResults,
                ));
            });
        })?;
    }

    append_child(&form, &clear)?;
    append_child(&form, &input)?;
    append_child(&form, &submit)?;

    Ok(form)
}
