use crate::models::Car;

/// Almacenamiento de la lista de coches
pub trait CarRepository {
    /// Cargar todos los coches guardados
    fn load(&self) -> Result<Vec<Car>, String>;

    /// Reemplazar la lista guardada
    fn save(&self, cars: &[Car]) -> Result<(), String>;
}
