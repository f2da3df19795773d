// ============================================================================
// ADD CAR VIEW - Ruta "/add"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, on_input, on_submit};
use crate::models::CarField;
use crate::router::{href_for, navigate, LIST_PATH};
use crate::state::app_state::AppState;
use crate::utils::FORM_ERRORS_ELEMENT_ID;
use crate::viewmodels::CarViewModel;

/// Renderizar formulario de alta. Los valores salen del borrador del estado.
pub fn render_add_car(state: &AppState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .id("add-car-form")?
        .class("add-car-form")
        .attr("novalidate", "")?
        .build();

    let title = ElementBuilder::new("h2")?
        .text("Add a car")
        .build();
    append_child(&form, &title)?;

    let errors = ElementBuilder::new("div")?
        .id(FORM_ERRORS_ELEMENT_ID)?
        .child(render_form_errors(state)?)?
        .build();
    append_child(&form, &errors)?;

    for field in CarField::ALL {
        append_child(&form, &render_field(field, state)?)?;
    }

    let actions = ElementBuilder::new("div")?
        .class("form-actions")
        .build();
    let submit = ElementBuilder::new("button")?
        .class("btn-save-car")
        .attr("type", "submit")?
        .text("Save")
        .build();
    let cancel = ElementBuilder::new("a")?
        .class("btn-cancel")
        .attr("href", &href_for(LIST_PATH))?
        .text("Cancel")
        .build();
    append_child(&actions, &submit)?;
    append_child(&actions, &cancel)?;
    append_child(&form, &actions)?;

    {
        let state_clone = state.clone();
        on_submit(&form, move || {
            // Con errores, la vista se actualiza de forma incremental desde el estado
            if CarViewModel::new(&state_clone).add_car().is_ok() {
                if let Err(e) = navigate(LIST_PATH) {
                    log::error!("❌ [ADD-CAR] Error navegando a la lista: {:?}", e);
                }
            }
        })?;
    }

    Ok(form)
}

fn render_field(field: CarField, state: &AppState) -> Result<Element, JsValue> {
    let input_id = format!("car-{}", field.name());
    let wrapper = ElementBuilder::new("div")?
        .class("form-field")
        .build();

    let label = ElementBuilder::new("label")?
        .attr("for", &input_id)?
        .text(field.label())
        .build();
    append_child(&wrapper, &label)?;

    let value = field.get(&state.draft.borrow()).to_string();
    let input = if field == CarField::Info {
        // textarea: el valor va como contenido, no como atributo
        ElementBuilder::new("textarea")?
            .text(&value)
            .attr("rows", "3")?
    } else {
        ElementBuilder::new("input")?
            .attr("type", "text")?
            .attr("value", &value)?
    };
    let input = input
        .id(&input_id)?
        .attr("name", field.name())?
        .build();
    match field {
        CarField::Model => input.set_attribute("required", "")?,
        // Texto libre: se aceptan valores como "N/A"
        CarField::Year => input.set_attribute("inputmode", "numeric")?,
        _ => {}
    }
    {
        let state_clone = state.clone();
        on_input(&input, move |value| {
            state_clone.update_draft(|draft| field.set(draft, value));
        })?;
    }
    append_child(&wrapper, &input)?;

    Ok(wrapper)
}

/// Lista de errores de validación del borrador
pub fn render_form_errors(state: &AppState) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ul")?
        .class("form-errors")
        .build();

    for error in state.form_errors.borrow().iter() {
        let item = ElementBuilder::new("li")?
            .attr("data-field", error.field())?
            .text(&error.to_string())
            .build();
        append_child(&list, &item)?;
    }

    Ok(list)
}
