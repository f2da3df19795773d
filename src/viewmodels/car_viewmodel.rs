// ============================================================================
// CAR VIEWMODEL - Lógica de la lista y del alta de coches
// ============================================================================
// Las vistas solo llaman a estos métodos; la persistencia va por CarRepository
// ============================================================================

use crate::models::{Car, CarError};
use crate::services::{CarRepository, CarStore};
use crate::state::AppState;

pub struct CarViewModel<R: CarRepository = CarStore> {
    state: AppState,
    repository: R,
}

impl CarViewModel<CarStore> {
    pub fn new(state: &AppState) -> Self {
        Self::with_repository(state, CarStore::new())
    }
}

impl<R: CarRepository> CarViewModel<R> {
    pub fn with_repository(state: &AppState, repository: R) -> Self {
        Self {
            state: state.clone(),
            repository,
        }
    }

    /// Cargar los coches guardados en el estado
    pub fn load(&self) {
        match self.repository.load() {
            Ok(cars) => {
                *self.state.cars.borrow_mut() = cars;
                self.state.set_storage_error(None);
            }
            Err(e) => {
                log::error!("❌ [CARS] Error cargando coches: {}", e);
                self.state.set_storage_error(Some(e));
            }
        }
    }

    /// Dar de alta el borrador del formulario.
    /// Si la validación falla, los errores quedan en el estado y el borrador se conserva.
    pub fn add_car(&self) -> Result<Car, Vec<CarError>> {
        let mut car = self.state.draft.borrow().clone();
        car.assign_id();

        // Validar antes de normalizar: la normalización vacía un año fuera de rango
        if let Err(errors) = car.validate() {
            log::warn!("⚠️ [CARS] Alta rechazada: {} errores", errors.len());
            self.state.set_form_errors(errors.clone());
            return Err(errors);
        }
        let car = car.normalized();

        self.state.cars.borrow_mut().push(car.clone());
        self.persist();
        self.state.reset_draft();
        log::info!("✅ [CARS] Coche añadido: {} ({})", car.model, car.id);
        Ok(car)
    }

    /// Coches cuyo modelo contiene `query` (sin distinguir mayúsculas). Query vacía => todos.
    pub fn search(&self, query: &str) -> Vec<Car> {
        self.state
            .cars
            .borrow()
            .iter()
            .filter(|car| car.matches_model(query))
            .cloned()
            .collect()
    }

    /// Coches visibles según la búsqueda actual del estado
    pub fn visible_cars(&self) -> Vec<Car> {
        let query = self.state.search_query.borrow().clone();
        self.search(&query)
    }

    /// Eliminar por id; false si no existía
    pub fn remove_car(&self, id: &str) -> bool {
        let removed = {
            let mut cars = self.state.cars.borrow_mut();
            let before = cars.len();
            cars.retain(|car| car.id != id);
            cars.len() != before
        };

        if removed {
            self.persist();
            log::info!("🗑️ [CARS] Coche eliminado: {}", id);
        }
        removed
    }

    fn persist(&self) {
        let cars = self.state.cars.borrow().clone();
        match self.repository.save(&cars) {
            Ok(()) => self.state.set_storage_error(None),
            Err(e) => {
                // El cambio se mantiene en memoria aunque no se haya podido guardar
                log::error!("❌ [CARS] Error guardando coches: {}", e);
                self.state.set_storage_error(Some(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryRepository {
        saved: Rc<RefCell<Vec<Car>>>,
        fail_saves: bool,
    }

    impl CarRepository for MemoryRepository {
        fn load(&self) -> Result<Vec<Car>, String> {
            Ok(self.saved.borrow().clone())
        }

        fn save(&self, cars: &[Car]) -> Result<(), String> {
            if self.fail_saves {
                return Err("quota exceeded".to_string());
            }
            *self.saved.borrow_mut() = cars.to_vec();
            Ok(())
        }
    }

    fn car(id: &str, model: &str) -> Car {
        Car {
            id: id.to_string(),
            model: model.to_string(),
            ..Car::default()
        }
    }

    fn viewmodel_with(cars: Vec<Car>) -> (AppState, MemoryRepository, CarViewModel<MemoryRepository>) {
        let state = AppState::new();
        let repository = MemoryRepository::default();
        *repository.saved.borrow_mut() = cars;
        let vm = CarViewModel::with_repository(&state, repository.clone());
        vm.load();
        (state, repository, vm)
    }

    #[test]
    fn test_load_fills_state() {
        let (state, _, _) = viewmodel_with(vec![car("1", "Mini")]);
        assert_eq!(state.cars.borrow().len(), 1);
        assert!(state.storage_error.borrow().is_none());
    }

    #[test]
    fn test_add_car_persists_and_resets_draft() {
        let (state, repository, vm) = viewmodel_with(Vec::new());
        state.update_draft(|draft| {
            draft.model = " Beetle ".to_string();
            draft.year = "1938".to_string();
        });

        let added = vm.add_car().unwrap();

        assert_eq!(added.model, "Beetle");
        assert!(!added.id.is_empty());
        assert_eq!(*repository.saved.borrow(), vec![added]);
        assert_eq!(*state.draft.borrow(), Car::default());
    }

    #[test]
    fn test_add_car_rejects_invalid_draft() {
        let (state, repository, vm) = viewmodel_with(Vec::new());
        state.update_draft(|draft| draft.year = "1500".to_string());

        let errors = vm.add_car().unwrap_err();

        assert_eq!(errors, vec![CarError::MissingModel, CarError::YearOutOfRange]);
        assert_eq!(*state.form_errors.borrow(), errors);
        assert_eq!(state.draft.borrow().year, "1500");
        assert!(repository.saved.borrow().is_empty());
    }

    #[test]
    fn test_save_failure_keeps_car_in_memory() {
        let state = AppState::new();
        let repository = MemoryRepository {
            fail_saves: true,
            ..MemoryRepository::default()
        };
        let vm = CarViewModel::with_repository(&state, repository);
        state.update_draft(|draft| draft.model = "Mini".to_string());

        assert!(vm.add_car().is_ok());
        assert_eq!(state.cars.borrow().len(), 1);
        assert_eq!(state.storage_error.borrow().as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn test_search_by_model() {
        let (state, _, vm) = viewmodel_with(vec![
            car("1", "Honda Civic"),
            car("2", "Toyota Corolla"),
            car("3", "Civic Type R"),
        ]);

        let ids = |cars: Vec<Car>| cars.into_iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids(vm.search("CIVIC")), vec!["1", "3"]);
        assert_eq!(ids(vm.search("")), vec!["1", "2", "3"]);
        assert!(vm.search("ferrari").is_empty());

        state.set_search_query("corolla");
        assert_eq!(ids(vm.visible_cars()), vec!["2"]);
    }

    #[test]
    fn test_remove_car() {
        let (state, repository, vm) = viewmodel_with(vec![car("1", "Mini"), car("2", "Beetle")]);

        assert!(vm.remove_car("1"));
        assert!(!vm.remove_car("1"));
        assert_eq!(state.cars.borrow().len(), 1);
        assert_eq!(*repository.saved.borrow(), vec![car("2", "Beetle")]);
    }
}
