use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const MIN_YEAR: u32 = 1885;
pub const MAX_YEAR: u32 = 2100;

/// Errores de validación de un registro de coche
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarError {
    #[error("id is required")]
    MissingId,
    #[error("model is required")]
    MissingModel,
    #[error("year out of valid range (1885-2100)")]
    YearOutOfRange,
}

impl CarError {
    /// Campo del formulario al que pertenece el error
    pub fn field(&self) -> &'static str {
        match self {
            CarError::MissingId => "id",
            CarError::MissingModel => "model",
            CarError::YearOutOfRange => "year",
        }
    }
}

/// Coche registrado. Todos los campos son texto (compatibilidad con los datos guardados).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    pub id: String,
    pub model: String,
    pub manufacturer: String,
    pub year: String,
    pub country_of_origin: String,
    pub category: String,
    pub replica_model: String,
    pub info: String,
}

impl Car {
    /// Normalizar: trim de todos los campos, id generado si falta, year saneado
    pub fn normalized(mut self) -> Self {
        self.assign_id();

        Self {
            id: self.id.trim().to_string(),
            model: self.model.trim().to_string(),
            manufacturer: self.manufacturer.trim().to_string(),
            year: coerce_year(&self.year),
            country_of_origin: self.country_of_origin.trim().to_string(),
            category: self.category.trim().to_string(),
            replica_model: self.replica_model.trim().to_string(),
            info: self.info.trim().to_string(),
        }
    }

    /// Generar un UUID v4 si el id está vacío
    pub fn assign_id(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    /// Validar el registro devolviendo todos los errores encontrados
    pub fn validate(&self) -> Result<(), Vec<CarError>> {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push(CarError::MissingId);
        }
        if self.model.trim().is_empty() {
            errors.push(CarError::MissingModel);
        }
        if let Some(year) = numeric_year(&self.year) {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                errors.push(CarError::YearOutOfRange);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `info` es un enlace externo (se renderiza como <a>)
    pub fn info_is_link(&self) -> bool {
        self.info.starts_with("http://") || self.info.starts_with("https://")
    }

    /// Coincidencia de búsqueda: substring case-insensitive sobre el modelo
    pub fn matches_model(&self, query: &str) -> bool {
        self.model.to_lowercase().contains(&query.trim().to_lowercase())
    }
}

/// Campos editables desde el formulario de alta (el id se genera)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarField {
    Model,
    Manufacturer,
    Year,
    CountryOfOrigin,
    Category,
    ReplicaModel,
    Info,
}

impl CarField {
    pub const ALL: [CarField; 7] = [
        CarField::Model,
        CarField::Manufacturer,
        CarField::Year,
        CarField::CountryOfOrigin,
        CarField::Category,
        CarField::ReplicaModel,
        CarField::Info,
    ];

    /// Nombre del campo (igual que la clave serializada)
    pub fn name(&self) -> &'static str {
        match self {
            CarField::Model => "model",
            CarField::Manufacturer => "manufacturer",
            CarField::Year => "year",
            CarField::CountryOfOrigin => "country_of_origin",
            CarField::Category => "category",
            CarField::ReplicaModel => "replica_model",
            CarField::Info => "info",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CarField::Model => "Model",
            CarField::Manufacturer => "Manufacturer",
            CarField::Year => "Year",
            CarField::CountryOfOrigin => "Country of origin",
            CarField::Category => "Category",
            CarField::ReplicaModel => "Replica model",
            CarField::Info => "More info",
        }
    }

    pub fn get<'a>(&self, car: &'a Car) -> &'a str {
        match self {
            CarField::Model => &car.model,
            CarField::Manufacturer => &car.manufacturer,
            CarField::Year => &car.year,
            CarField::CountryOfOrigin => &car.country_of_origin,
            CarField::Category => &car.category,
            CarField::ReplicaModel => &car.replica_model,
            CarField::Info => &car.info,
        }
    }

    pub fn set(&self, car: &mut Car, value: String) {
        match self {
            CarField::Model => car.model = value,
            CarField::Manufacturer => car.manufacturer = value,
            CarField::Year => car.year = value,
            CarField::CountryOfOrigin => car.country_of_origin = value,
            CarField::Category => car.category = value,
            CarField::ReplicaModel => car.replica_model = value,
            CarField::Info => car.info = value,
        }
    }
}

/// Año solo con dígitos; None para textos como "N/A" o valores enormes
fn numeric_year(value: &str) -> Option<u32> {
    let text = value.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    // Un año de muchos dígitos desborda u32: fuera de rango igualmente
    Some(text.parse::<u32>().unwrap_or(u32::MAX))
}

fn coerce_year(value: &str) -> String {
    let text = value.trim();
    match numeric_year(text) {
        Some(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => year.to_string(),
        Some(_) => String::new(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(model: &str, year: &str) -> Car {
        Car {
            model: model.to_string(),
            year: year.to_string(),
            ..Car::default()
        }
    }

    #[test]
    fn test_normalize_trims_and_generates_id() {
        let normalized = Car {
            model: "  Civic ".to_string(),
            manufacturer: " Honda".to_string(),
            ..Car::default()
        }
        .normalized();

        assert_eq!(normalized.model, "Civic");
        assert_eq!(normalized.manufacturer, "Honda");
        assert!(Uuid::parse_str(&normalized.id).is_ok());
    }

    #[test]
    fn test_normalize_keeps_existing_id() {
        let normalized = Car {
            id: " abc ".to_string(),
            ..car("Civic", "")
        }
        .normalized();
        assert_eq!(normalized.id, "abc");
    }

    #[test]
    fn test_year_coercion() {
        assert_eq!(car("a", "1999").normalized().year, "1999");
        assert_eq!(car("a", " 01999 ").normalized().year, "1999");
        assert_eq!(car("a", "1800").normalized().year, "");
        assert_eq!(car("a", "2101").normalized().year, "");
        assert_eq!(car("a", "99999999999999").normalized().year, "");
        assert_eq!(car("a", "N/A").normalized().year, "N/A");
        assert_eq!(car("a", "").normalized().year, "");
    }

    #[test]
    fn test_validate_reports_every_error() {
        let errors = car("  ", "1700").validate().unwrap_err();
        assert_eq!(
            errors,
            vec![CarError::MissingId, CarError::MissingModel, CarError::YearOutOfRange]
        );
        assert_eq!(errors[2].to_string(), "year out of valid range (1885-2100)");
        assert_eq!(errors[1].field(), "model");
    }

    #[test]
    fn test_validate_accepts_normalized_car() {
        let valid = Car {
            info: "not a url".to_string(),
            ..car("Model T", "1908")
        }
        .normalized();
        assert!(valid.validate().is_ok());
        assert!(!valid.info_is_link());
    }

    #[test]
    fn test_matches_model_is_case_insensitive_substring() {
        let civic = car("Honda Civic", "");
        assert!(civic.matches_model("civ"));
        assert!(civic.matches_model("HONDA"));
        assert!(civic.matches_model(""));
        assert!(!civic.matches_model("corolla"));
    }

    #[test]
    fn test_field_accessors_match_serialized_keys() {
        let mut draft = Car::default();
        for field in CarField::ALL {
            field.set(&mut draft, format!("{}-value", field.name()));
        }

        let value = serde_json::to_value(&draft).unwrap();
        for field in CarField::ALL {
            assert_eq!(value[field.name()], field.get(&draft));
        }
        assert_eq!(value["id"], "");
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let parsed: Car = serde_json::from_str(r#"{"id":"1","model":"Mini"}"#).unwrap();
        assert_eq!(parsed.model, "Mini");
        assert_eq!(parsed.category, "");
    }
}
