use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::config::CONFIG;
use crate::models::Car;
use crate::services::CarRepository;
use crate::utils::{load_raw_from_storage, save_to_storage, SNAPSHOT_VERSION};

/// Lo que se guarda en localStorage
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CarSnapshot {
    pub version: u32,
    pub cars: Vec<Car>,
    pub saved_at: DateTime<Utc>,
}

impl CarSnapshot {
    pub fn new(cars: Vec<Car>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            cars,
            saved_at: Utc::now(),
        }
    }

    /// Decodificar un snapshot guardado. JSON inválido o versión desconocida => lista vacía.
    /// Cada registro se vuelve a normalizar al leerlo.
    pub fn decode(json: &str) -> Vec<Car> {
        match serde_json::from_str::<CarSnapshot>(json) {
            Ok(snapshot) if snapshot.version == SNAPSHOT_VERSION => snapshot
                .cars
                .into_iter()
                .map(Car::normalized)
                .collect(),
            Ok(snapshot) => {
                log::warn!("⚠️ [STORE] Versión de snapshot {} no soportada, se descarta", snapshot.version);
                Vec::new()
            }
            Err(e) => {
                log::warn!("⚠️ [STORE] Snapshot corrupto, se descarta: {}", e);
                Vec::new()
            }
        }
    }
}

/// Persistencia de la lista de coches en localStorage
pub struct CarStore {
    key: String,
}

impl CarStore {
    pub fn new() -> Self {
        Self::with_key(&CONFIG.storage_key)
    }

    pub fn with_key(key: &str) -> Self {
        Self { key: key.to_string() }
    }
}

impl CarRepository for CarStore {
    /// Cargar coches guardados (lista vacía si no hay nada)
    fn load(&self) -> Result<Vec<Car>, String> {
        match load_raw_from_storage(&self.key)? {
            Some(json) => {
                let cars = CarSnapshot::decode(&json);
                log::info!("📋 [STORE] {} coches cargados", cars.len());
                Ok(cars)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Guardar la lista completa
    fn save(&self, cars: &[Car]) -> Result<(), String> {
        save_to_storage(&self.key, &CarSnapshot::new(cars.to_vec()))?;
        log::info!("💾 [STORE] {} coches guardados", cars.len());
        Ok(())
    }
}

impl Default for CarStore {
    fn default() -> Self {
        Self::new()
    }
}
