// ============================================================================
// ROUTE TABLE - Asociación path -> vista
// ============================================================================

use thiserror::Error;

/// Errores al construir la tabla
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route path must not be empty")]
    EmptyPath,
    #[error("route path `{0}` must start with `/`")]
    RelativePath(String),
    #[error("route path `{0}` is declared more than once")]
    DuplicatePath(String),
}

/// Una ruta: path exacto y la vista que se monta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    pub path: &'static str,
    pub view: V,
}

impl<V> Route<V> {
    pub fn new(path: &'static str, view: V) -> Self {
        Self { path, view }
    }
}

/// Tabla inmutable: se valida una vez y no se modifica después
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Construir tabla validando paths (no vacíos, absolutos, únicos)
    pub fn new(routes: Vec<Route<V>>) -> Result<Self, RouteError> {
        for (idx, route) in routes.iter().enumerate() {
            if route.path.is_empty() {
                return Err(RouteError::EmptyPath);
            }
            if !route.path.starts_with('/') {
                return Err(RouteError::RelativePath(route.path.to_string()));
            }
            if routes[..idx].iter().any(|prev| prev.path == route.path) {
                return Err(RouteError::DuplicatePath(route.path.to_string()));
            }
        }
        Ok(Self { routes })
    }

    /// Vista asociada al path, o None si ninguna ruta coincide.
    /// Coincidencia exacta: sin segmentos dinámicos ni fallback.
    pub fn resolve(&self, path: &str) -> Option<&V> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| &route.view)
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.iter().map(|route| route.path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_path() {
        let err = RouteTable::new(vec![Route::new("", 1)]).unwrap_err();
        assert_eq!(err, RouteError::EmptyPath);
    }

    #[test]
    fn test_rejects_relative_path() {
        let err = RouteTable::new(vec![Route::new("/", 1), Route::new("add", 2)]).unwrap_err();
        assert_eq!(err, RouteError::RelativePath("add".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let err = RouteTable::new(vec![
            Route::new("/", 1),
            Route::new("/add", 2),
            Route::new("/add", 3),
        ])
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/add".to_string()));
        assert_eq!(err.to_string(), "route path `/add` is declared more than once");
    }

    #[test]
    fn test_empty_table_matches_nothing() {
        let table: RouteTable<u8> = RouteTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.resolve("/"), None);
    }
}
