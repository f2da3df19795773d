// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{get_element_by_id, set_inner_html, append_child, apply_incremental_update};
use crate::router::{current_location, RouteTable, View};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::utils::ROOT_ELEMENT_ID;
use crate::viewmodels::CarViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    routes: Rc<RouteTable<View>>,
    root: Element,
}

impl App {
    /// Crear aplicación con la tabla de rutas ya construida
    pub fn new(routes: RouteTable<View>) -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        CarViewModel::new(&state).load();
        state.set_current_path(current_location()?.path());
        log::info!("🧭 [APP] Ruta inicial: {}", state.current_path());

        // Batchear los updates del mismo tick con un timeout de 0ms
        state.subscribe_to_changes(move |update_type| {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update_type);
            }).forget();
        });

        Ok(Self {
            state,
            routes: Rc::new(routes),
            root,
        })
    }

    /// Renderizar aplicación completa
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state, &self.routes)?;
        append_child(&self.root, &app_view)
    }

    /// Actualizar solo la parte afectada
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        apply_incremental_update(update, &self.state)
    }

    /// Manejar `hashchange`: leer el nuevo path y re-renderizar
    pub fn handle_navigation(&self) -> Result<(), JsValue> {
        let location = current_location()?;
        let previous = self.state.current_path();
        if previous == location.path() {
            return Ok(());
        }

        log::info!("🧭 [APP] {} -> {}", previous, location.path());
        self.state.set_current_path(location.path());
        self.render()
    }
}
