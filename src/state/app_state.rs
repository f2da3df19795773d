// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Car, CarError};
use crate::router::LIST_PATH;

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (navegación, alta de coche)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Re-renderizar solo la tabla de coches (búsqueda, sin perder el foco del input)
    CarTable,
    /// Re-renderizar solo los errores del formulario de alta
    FormErrors,
}

type ChangeSubscriber = Rc<dyn Fn(UpdateType)>;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub cars: Rc<RefCell<Vec<Car>>>,
    pub current_path: Rc<RefCell<String>>,

    // Vista de lista
    pub search_query: Rc<RefCell<String>>,

    // Vista de alta
    pub draft: Rc<RefCell<Car>>,
    pub form_errors: Rc<RefCell<Vec<CarError>>>,

    // Error de storage visible en el header
    pub storage_error: Rc<RefCell<Option<String>>>,

    pub change_subscribers: Rc<RefCell<Vec<ChangeSubscriber>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            cars: Rc::new(RefCell::new(Vec::new())),
            current_path: Rc::new(RefCell::new(LIST_PATH.to_string())),
            search_query: Rc::new(RefCell::new(String::new())),
            draft: Rc::new(RefCell::new(Car::default())),
            form_errors: Rc::new(RefCell::new(Vec::new())),
            storage_error: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers con tipo específico
    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        // Clonar la lista: un subscriber puede suscribir otro durante la notificación
        let subscribers = self.change_subscribers.borrow().clone();
        for callback in subscribers.iter() {
            callback(update_type);
        }
    }

    pub fn set_current_path(&self, path: &str) {
        *self.current_path.borrow_mut() = path.to_string();
    }

    pub fn current_path(&self) -> String {
        self.current_path.borrow().clone()
    }

    pub fn set_search_query(&self, query: &str) {
        *self.search_query.borrow_mut() = query.to_string();
        self.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::CarTable));
    }

    /// Actualizar un campo del borrador sin re-renderizar (el input ya muestra el valor)
    pub fn update_draft<F>(&self, updater: F)
    where
        F: FnOnce(&mut Car),
    {
        updater(&mut self.draft.borrow_mut());
    }

    pub fn reset_draft(&self) {
        *self.draft.borrow_mut() = Car::default();
        self.form_errors.borrow_mut().clear();
    }

    pub fn set_form_errors(&self, errors: Vec<CarError>) {
        *self.form_errors.borrow_mut() = errors;
        self.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::FormErrors));
    }

    pub fn set_storage_error(&self, error: Option<String>) {
        *self.storage_error.borrow_mut() = error;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribers_receive_update_type() {
        let state = AppState::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        {
            let received = received.clone();
            state.subscribe_to_changes(move |update| received.borrow_mut().push(update));
        }

        state.set_search_query("civic");
        state.notify_subscribers_with_type(UpdateType::FullRender);

        assert_eq!(*state.search_query.borrow(), "civic");
        assert_eq!(
            *received.borrow(),
            vec![
                UpdateType::Incremental(IncrementalUpdate::CarTable),
                UpdateType::FullRender,
            ]
        );
    }

    #[test]
    fn test_clones_share_state() {
        let state = AppState::new();
        let other = state.clone();
        other.set_current_path("/add");
        other.update_draft(|draft| draft.model = "Mini".to_string());

        assert_eq!(state.current_path(), "/add");
        assert_eq!(state.draft.borrow().model, "Mini");
    }

    #[test]
    fn test_reset_draft_clears_errors() {
        let state = AppState::new();
        state.update_draft(|draft| draft.model = "Mini".to_string());
        state.set_form_errors(vec![CarError::MissingModel]);

        state.reset_draft();

        assert_eq!(*state.draft.borrow(), Car::default());
        assert!(state.form_errors.borrow().is_empty());
    }
}
