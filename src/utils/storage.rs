use web_sys::{window, Storage};
use serde::Serialize;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

/// Leer el JSON crudo guardado bajo `key`
pub fn load_raw_from_storage(key: &str) -> Result<Option<String>, String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.get_item(key)
        .map_err(|_| "Error leyendo localStorage".to_string())
}
