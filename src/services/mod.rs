pub mod traits;
pub mod car_store;

pub use traits::*;
pub use car_store::*;
