use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{ElementBuilder, append_child};
use crate::router::{href_for, RouteTable, View};
use crate::state::app_state::AppState;

/// Header con título, navegación (un link por ruta) y error de storage si lo hay
pub fn render_header(state: &AppState, routes: &RouteTable<View>) -> Result<Element, JsValue> {
    let current_path = state.current_path();

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .build();

    let title = ElementBuilder::new("h1")?
        .class("app-title")
        .text(&CONFIG.app_title)
        .build();
    append_child(&header, &title)?;

    let nav = ElementBuilder::new("nav")?
        .class("app-nav")
        .build();

    for route in routes.iter() {
        let class = if route.path == current_path { "nav-link active" } else { "nav-link" };
        let link = ElementBuilder::new("a")?
            .class(class)
            .attr("href", &href_for(route.path))?
            .text(route.view.label())
            .build();
        append_child(&nav, &link)?;
    }
    append_child(&header, &nav)?;

    if let Some(error) = state.storage_error.borrow().as_ref() {
        let banner = ElementBuilder::new("div")?
            .class("storage-error")
            .attr("role", "alert")?
            .text(&format!("Changes could not be saved: {}", error))
            .build();
        append_child(&header, &banner)?;
    }

    Ok(header)
}
