// ============================================================================
// APP VIEW - Shell (header + outlet del router)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, set_attribute};
use crate::router::{RouteTable, View};
use crate::state::app_state::AppState;
use crate::utils::OUTLET_ELEMENT_ID;
use crate::views::{render_header, render_car_list, render_add_car};

/// Renderizar aplicación completa
pub fn render_app(state: &AppState, routes: &RouteTable<View>) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?
        .class("app-shell")
        .build();

    append_child(&shell, &render_header(state, routes)?)?;
    append_child(&shell, &render_outlet(state, routes)?)?;

    Ok(shell)
}

/// Renderizar la vista que corresponde al path actual.
/// Sin ruta para el path, el outlet queda vacío (no hay ruta por defecto).
pub fn render_outlet(state: &AppState, routes: &RouteTable<View>) -> Result<Element, JsValue> {
    let path = state.current_path();
    let outlet = ElementBuilder::new("main")?
        .id(OUTLET_ELEMENT_ID)?
        .class("router-outlet")
        .build();

    match routes.resolve(&path) {
        Some(view) => {
            set_attribute(&outlet, "data-route", &path)?;
            append_child(&outlet, &render_view(*view, state)?)?;
        }
        None => {
            log::warn!("⚠️ [ROUTER] Ninguna ruta para '{}'", path);
            set_attribute(&outlet, "data-route", "unmatched")?;
        }
    }

    Ok(outlet)
}

fn render_view(view: View, state: &AppState) -> Result<Element, JsValue> {
    match view {
        View::CarList => render_car_list(state),
        View::AddCar => render_add_car(state),
    }
}
