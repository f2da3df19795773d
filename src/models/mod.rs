pub mod car;

pub use car::{Car, CarError, CarField, MIN_YEAR, MAX_YEAR};
