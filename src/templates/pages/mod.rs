pub mod status;

pub use status::{status_page, StatusVm};
