// ============================================================================
// CAR LIST VIEW - Ruta "/"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, on_click, on_input};
use crate::models::{Car, CarField};
use crate::router::{href_for, ADD_PATH};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::CAR_TABLE_ELEMENT_ID;
use crate::viewmodels::CarViewModel;

/// Renderizar la vista de lista: buscador + tabla
pub fn render_car_list(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .class("car-list-view")
        .build();

    let toolbar = ElementBuilder::new("div")?
        .class("car-list-toolbar")
        .build();

    let search = ElementBuilder::new("input")?
        .id("car-search")?
        .class("car-search")
        .attr("type", "search")?
        .attr("placeholder", "Search by model")?
        .attr("value", &state.search_query.borrow())?
        .build();
    {
        let state_clone = state.clone();
        on_input(&search, move |value| state_clone.set_search_query(&value))?;
    }
    append_child(&toolbar, &search)?;

    let add_link = ElementBuilder::new("a")?
        .class("btn-add-car")
        .attr("href", &href_for(ADD_PATH))?
        .text("Add a car")
        .build();
    append_child(&toolbar, &add_link)?;
    append_child(&section, &toolbar)?;

    let table_container = ElementBuilder::new("div")?
        .id(CAR_TABLE_ELEMENT_ID)?
        .child(render_car_table(state)?)?
        .build();
    append_child(&section, &table_container)?;

    Ok(section)
}

/// Renderizar la tabla de coches filtrada por la búsqueda actual
pub fn render_car_table(state: &AppState) -> Result<Element, JsValue> {
    let vm = CarViewModel::new(state);
    let cars = vm.visible_cars();

    if cars.is_empty() {
        let message = if state.cars.borrow().is_empty() {
            "No cars yet.".to_string()
        } else {
            format!("No cars match \"{}\".", state.search_query.borrow().trim())
        };
        return Ok(ElementBuilder::new("p")?
            .class("empty-state")
            .text(&message)
            .build());
    }

    let table = ElementBuilder::new("table")?
        .class("car-table")
        .build();

    let head_row = ElementBuilder::new("tr")?.build();
    for field in CarField::ALL {
        append_child(&head_row, &ElementBuilder::new("th")?.text(field.label()).build())?;
    }
    append_child(&head_row, &ElementBuilder::new("th")?.build())?;
    let thead = ElementBuilder::new("thead")?.child(head_row)?.build();
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for car in &cars {
        append_child(&tbody, &render_car_row(car, state)?)?;
    }
    append_child(&table, &tbody)?;

    Ok(table)
}

fn render_car_row(car: &Car, state: &AppState) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?
        .attr("data-car-id", &car.id)?
        .build();

    for field in CarField::ALL {
        let cell = ElementBuilder::new("td")?
            .attr("data-field", field.name())?
            .build();
        if field == CarField::Info && car.info_is_link() {
            let link = ElementBuilder::new("a")?
                .attr("href", &car.info)?
                .attr("target", "_blank")?
                .attr("rel", "noopener noreferrer")?
                .text(&car.info)
                .build();
            append_child(&cell, &link)?;
        } else {
            cell.set_text_content(Some(field.get(car)));
        }
        append_child(&row, &cell)?;
    }

    let remove_btn = ElementBuilder::new("button")?
        .class("btn-remove-car")
        .attr("type", "button")?
        .attr("title", "Remove")?
        .text("✕")
        .build();
    {
        let state_clone = state.clone();
        let car_id = car.id.clone();
        on_click(&remove_btn, move |_e| {
            if CarViewModel::new(&state_clone).remove_car(&car_id) {
                state_clone.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::CarTable));
            }
        })?;
    }
    let actions = ElementBuilder::new("td")?
        .class("car-actions")
        .child(remove_btn)?
        .build();
    append_child(&row, &actions)?;

    Ok(row)
}
