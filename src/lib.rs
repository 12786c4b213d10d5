// ============================================================================
// UHG WEB - trail detail single-page client
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub mod app;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use app::App;
use state::app_state::UpdateType;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("🥾 UHG web client starting");

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the mounted app.
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Re-render with the requested granularity. A failed incremental update
/// falls back to a full render.
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|cell| {
        let needs_full = match update_type {
            UpdateType::FullRender => true,
            UpdateType::Incremental(update) => match cell.borrow().as_ref() {
                Some(app) => app.update_incremental(update).is_err(),
                None => false,
            },
        };

        if needs_full {
            if let Some(app) = cell.borrow().as_ref() {
                if let Err(e) = app.render() {
                    log::error!("❌ Render failed: {:?}", e);
                }
            }
        }
    });
}
