// ============================================================================
// CHECK-IN/OUT VIEW - the two action boxes and the status line
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::app_state::{IncrementalUpdate, UpdateType};
use crate::state::AppState;
use crate::viewmodels::{gate_check_in, gate_check_out, CheckInOutViewModel};

/// CSS class for the check-in box. Grayed out while disallowed or while
/// a mutation is in flight.
pub fn check_in_class(allowed: bool, pending: bool) -> &'static str {
    if allowed && !pending {
        "checkInOutBox chIn"
    } else {
        "checkInOutBox gray"
    }
}

/// CSS class for the check-out box.
pub fn check_out_class(allowed: bool, pending: bool) -> &'static str {
    if allowed && !pending {
        "checkInOutBox chOut"
    } else {
        "checkInOutBox gray"
    }
}

/// Render the check-in/check-out controls for the current trail.
pub fn render_check_in_out(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.build();

    if state.check_in_out.get_loading() {
        let loading = ElementBuilder::new("div")?
            .class("checkInOutStatus")
            .text("Loading ...")
            .build();
        append_child(&container, &loading)?;
        return Ok(container);
    }

    let actions = state.check_in_out.get_actions();
    let pending = state.check_in_out.get_pending();

    // Record fetch failed: no action state, show a generic error instead
    // of guessing permissions
    if actions.is_none() {
        let error_box = ElementBuilder::new("div")?
            .class("checkInOutError")
            .text("Error")
            .build();
        append_child(&container, &error_box)?;
        return Ok(container);
    }

    let check_in_allowed = actions.as_ref().map(|a| a.check_in_allowed).unwrap_or(false);
    let check_out_allowed = actions.as_ref().map(|a| a.check_out_allowed).unwrap_or(false);

    // CHECK IN box
    let check_in_box = ElementBuilder::new("div")?
        .id("check-in-box")?
        .class(check_in_class(check_in_allowed, pending))
        .text("CHECK IN")
        .build();

    {
        let state = state.clone();
        on_click(&check_in_box, move |_| {
            handle_check_in(&state);
        })?;
    }

    // CHECK OUT box
    let check_out_box = ElementBuilder::new("div")?
        .id("check-out-box")?
        .class(check_out_class(check_out_allowed, pending))
        .text("CHECK OUT")
        .build();

    {
        let state = state.clone();
        on_click(&check_out_box, move |_| {
            handle_check_out(&state);
        })?;
    }

    append_child(&container, &check_in_box)?;
    append_child(&container, &check_out_box)?;

    // Status line ("Checked In:" + date while a hike is open)
    let status_space = ElementBuilder::new("div")?
        .class("topDetailsSpace")
        .build();
    let status = ElementBuilder::new("div")?
        .class("checkInOutStatus")
        .build();

    let label = actions
        .as_ref()
        .and_then(|a| a.status_label.clone())
        .unwrap_or_default();
    let value = actions
        .as_ref()
        .and_then(|a| a.status_value.clone())
        .unwrap_or_default();

    let label_el = ElementBuilder::new("div")?
        .id("check-status-label")?
        .text(&label)
        .build();
    let value_el = ElementBuilder::new("div")?
        .id("check-status-value")?
        .text(&value)
        .build();

    append_child(&status, &label_el)?;
    append_child(&status, &value_el)?;
    append_child(&status_space, &status)?;
    append_child(&container, &status_space)?;

    // Generic error indicator for failed mutations
    let error_el = ElementBuilder::new("div")?
        .id("check-error")?
        .class("checkInOutError")
        .text(&state.check_in_out.get_error().unwrap_or_default())
        .build();
    append_child(&container, &error_el)?;

    Ok(container)
}

/// Click handler for CHECK IN. Gated locally: a disallowed or pending
/// action never reaches the network.
fn handle_check_in(state: &AppState) {
    let actions = state.check_in_out.get_actions();
    let pending = state.check_in_out.get_pending();

    if let Err(e) = gate_check_in(actions.as_ref(), pending) {
        log::info!("⛔ Check-in ignored: {}", e);
        return;
    }

    state.check_in_out.set_pending(true);
    crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CheckInOut));

    let state = state.clone();
    let trail_id = state.get_trail_id();

    spawn_local(async move {
        let vm = CheckInOutViewModel::new();

        match vm.check_in(trail_id).await {
            Ok(next) => {
                log::info!("✅ Checked in on trail {}", trail_id);
                state.check_in_out.set_error(None);
                state.check_in_out.set_actions(Some(next));

                // Refetch before any further resolution: the optimistic
                // transition is replaced by the server-confirmed answer
                match vm.load_action_state(trail_id).await {
                    Ok(confirmed) => {
                        state.check_in_out.set_actions(Some(confirmed));
                    }
                    Err(e) => {
                        log::error!("❌ Refetch after check-in failed: {}", e);
                        state.check_in_out.set_actions(None);
                        state.check_in_out.set_error(Some("Error".to_string()));
                    }
                }
            }
            Err(e) => {
                // Prior action state stays untouched
                log::error!("❌ Check-in failed: {}", e);
                state.check_in_out.set_error(Some("Error".to_string()));
            }
        }

        state.check_in_out.set_pending(false);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CheckInOut));
    });
}

/// Click handler for CHECK OUT.
fn handle_check_out(state: &AppState) {
    let actions = state.check_in_out.get_actions();
    let pending = state.check_in_out.get_pending();

    if let Err(e) = gate_check_out(actions.as_ref(), pending) {
        log::info!("⛔ Check-out ignored: {}", e);
        return;
    }

    state.check_in_out.set_pending(true);
    crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CheckInOut));

    let state = state.clone();
    let trail_id = state.get_trail_id();

    spawn_local(async move {
        let vm = CheckInOutViewModel::new();

        match vm.check_out(trail_id).await {
            Ok(next) => {
                log::info!("✅ Checked out of trail {}", trail_id);
                state.check_in_out.set_error(None);
                state.check_in_out.set_actions(Some(next));

                match vm.load_action_state(trail_id).await {
                    Ok(confirmed) => {
                        state.check_in_out.set_actions(Some(confirmed));
                    }
                    Err(e) => {
                        log::error!("❌ Refetch after check-out failed: {}", e);
                        state.check_in_out.set_actions(None);
                        state.check_in_out.set_error(Some("Error".to_string()));
                    }
                }
            }
            Err(e) => {
                log::error!("❌ Check-out failed: {}", e);
                state.check_in_out.set_error(Some("Error".to_string()));
            }
        }

        state.check_in_out.set_pending(false);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CheckInOut));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_classes_follow_allowed_and_pending() {
        assert_eq!(check_in_class(true, false), "checkInOutBox chIn");
        assert_eq!(check_in_class(false, false), "checkInOutBox gray");
        assert_eq!(check_in_class(true, true), "checkInOutBox gray");

        assert_eq!(check_out_class(true, false), "checkInOutBox chOut");
        assert_eq!(check_out_class(false, true), "checkInOutBox gray");
    }
}
