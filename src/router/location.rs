// ============================================================================
// LOCATION - Path actual a partir de location.hash
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::window;

/// Ubicación ruteable: path sin `#` y query opcional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Option<String>,
}

impl Location {
    /// Parsear un hash tipo `#/add?x=1`. Hash vacío (o solo `#`) equivale a `/`.
    pub fn from_hash(hash: &str) -> Self {
        let raw = hash.strip_prefix('#').unwrap_or(hash);
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (raw, None),
        };
        let path = if path.is_empty() { "/" } else { path };
        Self {
            path: path.to_string(),
            query,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

/// Href para un link de navegación
pub fn href_for(path: &str) -> String {
    format!("#{}", path)
}

/// Leer la ubicación actual del navegador
pub fn current_location() -> Result<Location, JsValue> {
    let hash = window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .hash()?;
    Ok(Location::from_hash(&hash))
}

/// Navegar cambiando el hash; el render lo dispara el evento `hashchange`
pub fn navigate(path: &str) -> Result<(), JsValue> {
    log::info!("🧭 [ROUTER] navigate -> {}", path);
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_hash(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash_is_root() {
        assert_eq!(Location::from_hash("").path(), "/");
        assert_eq!(Location::from_hash("#").path(), "/");
    }

    #[test]
    fn test_hash_prefix_is_stripped() {
        assert_eq!(Location::from_hash("#/add").path(), "/add");
        assert_eq!(Location::from_hash("/add").path(), "/add");
    }

    #[test]
    fn test_query_is_split_from_path() {
        let location = Location::from_hash("#/?model=civic");
        assert_eq!(location.path(), "/");
        assert_eq!(location.query(), Some("model=civic"));
        assert_eq!(Location::from_hash("#/add").query(), None);
    }

    #[test]
    fn test_href_for() {
        assert_eq!(href_for("/add"), "#/add");
        assert_eq!(href_for("/"), "#/");
    }
}
