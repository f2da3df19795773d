pub mod car_viewmodel;

pub use car_viewmodel::CarViewModel;
