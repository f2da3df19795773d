// ============================================================================
// ROUTER MODULE - Tabla de rutas del cliente (hash mode)
// ============================================================================
// La tabla se construye una sola vez en el arranque y se pasa a App::new().
// No hay singleton global: el valor es inmutable y se comparte con Rc.
// ============================================================================

pub mod table;
pub mod location;

pub use table::*;
pub use location::*;

/// Vistas que la app sabe montar en el outlet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    CarList,
    AddCar,
}

impl View {
    /// Etiqueta para el link de navegación
    pub fn label(&self) -> &'static str {
        match self {
            View::CarList => "Cars",
            View::AddCar => "Add car",
        }
    }
}

pub const LIST_PATH: &str = "/";
pub const ADD_PATH: &str = "/add";

/// Tabla de rutas del car tracker
pub fn routes() -> Result<RouteTable<View>, RouteError> {
    RouteTable::new(vec![
        Route::new(LIST_PATH, View::CarList),
        Route::new(ADD_PATH, View::AddCar),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defined_paths_resolve_to_their_views() {
        let table = routes().unwrap();
        assert_eq!(table.resolve("/"), Some(&View::CarList));
        assert_eq!(table.resolve("/add"), Some(&View::AddCar));
    }

    #[test]
    fn test_undefined_paths_do_not_match() {
        let table = routes().unwrap();
        for path in ["/missing", "/add/", "/ADD", "add", "/add/extra", "/cars"] {
            assert_eq!(table.resolve(path), None, "path {path} should not match");
        }
    }

    #[test]
    fn test_lookups_are_stable() {
        let table = routes().unwrap();
        for _ in 0..3 {
            assert_eq!(table.resolve("/"), Some(&View::CarList));
            assert_eq!(table.resolve("/add"), Some(&View::AddCar));
            assert_eq!(table.resolve("/missing"), None);
        }
    }

    #[test]
    fn test_navigation_scenario() {
        let table = routes().unwrap();
        let visited: Vec<Option<View>> = ["#/", "#/add", "#/missing"]
            .iter()
            .map(|hash| table.resolve(Location::from_hash(hash).path()).copied())
            .collect();
        assert_eq!(visited, vec![Some(View::CarList), Some(View::AddCar), None]);
    }

    #[test]
    fn test_table_lists_paths_in_declaration_order() {
        let table = routes().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.paths().collect::<Vec<_>>(), vec!["/", "/add"]);
    }
}
