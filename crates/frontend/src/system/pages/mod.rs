pub mod calendar;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod monthly_report;
pub mod roadmap;
pub mod settings;
pub mod signup;
