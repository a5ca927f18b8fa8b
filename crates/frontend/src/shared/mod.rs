pub mod api_utils;
pub mod config;
pub mod format;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod request_generation;
