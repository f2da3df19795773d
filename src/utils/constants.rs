/// Id del elemento raíz donde se monta la app
pub const ROOT_ELEMENT_ID: &str = "app";

/// Id del contenedor donde se renderiza la vista ruteada
pub const OUTLET_ELEMENT_ID: &str = "router-outlet";

/// Versión del snapshot guardado en localStorage
pub const SNAPSHOT_VERSION: u32 = 1;

/// Contenedor de la tabla de coches (actualización incremental al buscar)
pub const CAR_TABLE_ELEMENT_ID: &str = "car-table";

/// Contenedor de errores del formulario de alta
pub const FORM_ERRORS_ELEMENT_ID: &str = "form-errors";
