pub mod panel;
pub mod sidebar;

pub use panel::Left;
pub use sidebar::Sidebar;
