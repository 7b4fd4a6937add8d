pub mod save_data;

pub use save_data::{method_not_allowed, save_data_handler};
