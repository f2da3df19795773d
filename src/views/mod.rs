pub mod app;
pub mod header;
pub mod car_list;
pub mod add_car;

pub use app::render_app;
pub use header::render_header;
pub use car_list::{render_car_list, render_car_table};
pub use add_car::{render_add_car, render_form_errors};
