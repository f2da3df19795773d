// ============================================================================
// CAR TRACKER - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Router: tabla de rutas inmutable (hash mode), construida en el arranque
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica UI
// - Services: persistencia en localStorage
// - State: State Management con Rc<RefCell>
// ============================================================================

pub mod config;
pub mod models;
pub mod router;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::app_state::UpdateType;

// La instancia de App vive aquí para que los callbacks del DOM puedan re-renderizar
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} - Rust Puro + MVVM", CONFIG.app_title);

    let routes = router::routes().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let app = App::new(routes)?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listener global: se registra UNA sola vez aquí
    if let Some(win) = web_sys::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::HashChangeEvent| {
            handle_navigation();
        }) as Box<dyn FnMut(web_sys::HashChangeEvent)>);

        win.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Re-render completo
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let app_ref = app_cell.borrow();
        let Some(app) = app_ref.as_ref() else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
            return;
        };

        let result = match update_type {
            UpdateType::Incremental(inc_type) => {
                log::debug!("🔄 [UPDATE] Actualización incremental: {:?}", inc_type);
                app.update_incremental(inc_type)
            }
            UpdateType::FullRender => {
                log::debug!("🔄 [RERENDER] Re-render completo");
                app.render()
            }
        };

        if let Err(e) = result {
            log::error!("❌ Error actualizando la app ({:?}): {:?}", update_type, e);
        }
    });
}

fn handle_navigation() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow().as_ref() {
            if let Err(e) = app.handle_navigation() {
                log::error!("❌ [ROUTER] Error navegando: {:?}", e);
            }
        }
    });
}

/// Re-render completo llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
