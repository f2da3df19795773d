// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo re-renderiza el contenedor afectado; así el input de búsqueda o del
// formulario conserva el foco mientras el usuario escribe.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, replace_children};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::utils::{CAR_TABLE_ELEMENT_ID, FORM_ERRORS_ELEMENT_ID};
use crate::views::{render_car_table, render_form_errors};

/// Aplicar una actualización incremental.
/// Si el contenedor no está montado (otra ruta activa) no hay nada que actualizar.
pub fn apply_incremental_update(update: IncrementalUpdate, state: &AppState) -> Result<(), JsValue> {
    match update {
        IncrementalUpdate::CarTable => update_car_table(state),
        IncrementalUpdate::FormErrors => update_form_errors(state),
    }
}

/// Re-renderizar la tabla de coches con la búsqueda actual
pub fn update_car_table(state: &AppState) -> Result<(), JsValue> {
    match get_element_by_id(CAR_TABLE_ELEMENT_ID) {
        Some(container) => {
            let table = render_car_table(state)?;
            replace_children(&container, &table)
        }
        None => {
            log::debug!("[INCREMENTAL] #{} no montado, se omite", CAR_TABLE_ELEMENT_ID);
            Ok(())
        }
    }
}

/// Re-renderizar la lista de errores del formulario
pub fn update_form_errors(state: &AppState) -> Result<(), JsValue> {
    match get_element_by_id(FORM_ERRORS_ELEMENT_ID) {
        Some(container) => {
            let errors = render_form_errors(state)?;
            replace_children(&container, &errors)
        }
        None => {
            log::debug!("[INCREMENTAL] #{} no montado, se omite", FORM_ERRORS_ELEMENT_ID);
            Ok(())
        }
    }
}
