pub mod api;
pub mod fields;
pub mod ui;
