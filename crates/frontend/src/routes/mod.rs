pub mod browser;
pub mod history;
pub mod page;
pub mod paths;
pub mod registry;
pub mod snapshot;
pub mod state;
