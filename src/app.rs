// ============================================================================
// APP - application shell, data loading and render orchestration
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html, window};
use crate::state::app_state::IncrementalUpdate;
use crate::state::AppState;
use crate::viewmodels::{CheckInOutViewModel, TrailViewModel};
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("Mount point #app not found"))?;

        let trail_id = initial_trail_id();
        log::info!("🥾 Opening trail {}", trail_id);

        let state = AppState::new(trail_id);

        // Re-renders are batched through a zero-delay timeout so several
        // state writes in one task collapse into a single render
        state.subscribe_to_changes(move || {
            Timeout::new(0, crate::rerender_app).forget();
        });

        load_trail_data(&state);

        Ok(Self { state, root })
    }

    /// Full render: rebuild the page under the mount point.
    pub fn render(&self) -> Result<(), JsValue> {
        let page = render_app(&self.state)?;
        set_inner_html(&self.root, "");
        append_child(&self.root, &page)
    }

    /// Incremental render: patch one region in place. Err means the
    /// target is not mounted and a full render is needed.
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        match update {
            IncrementalUpdate::CheckInOut => crate::dom::update_check_in_out(&self.state),
            IncrementalUpdate::SearchResults => crate::dom::update_search_results(&self.state),
        }
    }
}

/// Kick off the trail detail and hike record fetches for the current
/// trail, then notify subscribers once both settle.
pub fn load_trail_data(state: &AppState) {
    state.trail.set_loading(true);
    state.trail.set_error(None);
    state.check_in_out.set_loading(true);
    state.check_in_out.set_actions(None);
    state.check_in_out.set_error(None);

    let state = state.clone();
    spawn_local(async move {
        let trail_id = state.get_trail_id();

        let trail_vm = TrailViewModel::new();
        match trail_vm.load_trail(trail_id).await {
            Ok(data) => {
                state.trail.set_trail(data.trail_details.into_iter().next());
                state.trail.set_reviews(data.expert_reviews);
                state.trail.set_recent_hikers(data.recent_hikers);
            }
            Err(e) => {
                log::error!("❌ Trail fetch failed: {}", e);
                state.trail.set_error(Some(e));
            }
        }
        state.trail.set_loading(false);

        let check_vm = CheckInOutViewModel::new();
        match check_vm.load_action_state(trail_id).await {
            Ok(actions) => {
                state.check_in_out.set_actions(Some(actions));
            }
            Err(e) => {
                log::error!("❌ Hike record fetch failed: {}", e);
                state.check_in_out.set_error(Some("Error".to_string()));
            }
        }
        state.check_in_out.set_loading(false);

        state.notify_subscribers();
    });
}

/// Trail id from the URL: `?trail=<id>` wins, then a
/// `/traildetail/<id>` path segment, then trail 1.
fn initial_trail_id() -> i32 {
    let location = match window().map(|w| w.location()) {
        Some(location) => location,
        None => return 1,
    };
    let search = location.search().unwrap_or_default();
    let pathname = location.pathname().unwrap_or_default();
    parse_trail_id(&search, &pathname)
}

fn parse_trail_id(search: &str, pathname: &str) -> i32 {
    for pair in search.trim_start_matches('?').split('&') {
        if let Some(value) = pair.strip_prefix("trail=") {
            if let Ok(id) = value.parse() {
                return id;
            }
        }
    }

    if let Some(rest) = pathname.split("/traildetail/").nth(1) {
        let segment = rest.split('/').next().unwrap_or("");
        if let Ok(id) = segment.parse() {
            return id;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_id_from_query_string() {
        assert_eq!(parse_trail_id("?trail=7", "/"), 7);
        assert_eq!(parse_trail_id("?page=2&trail=12", "/"), 12);
    }

    #[test]
    fn trail_id_from_path() {
        assert_eq!(parse_trail_id("", "/traildetail/5"), 5);
        assert_eq!(parse_trail_id("", "/traildetail/5/"), 5);
    }

    #[test]
    fn query_string_wins_over_path() {
        assert_eq!(parse_trail_id("?trail=3", "/traildetail/9"), 3);
    }

    #[test]
    fn defaults_to_trail_one() {
        assert_eq!(parse_trail_id("", "/"), 1);
        assert_eq!(parse_trail_id("?trail=abc", "/traildetail/xyz"), 1);
    }
}
