pub mod details;
pub mod form;
pub mod list;

pub use details::EntityDetails;
pub use form::EntityForm;
pub use list::EntityList;
