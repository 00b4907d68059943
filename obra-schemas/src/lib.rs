pub mod approval;
pub mod command;
pub mod dashboard;
pub mod file_formats;
pub mod formats;
pub mod material;
pub mod project;
pub mod requirement;
pub mod screen;
pub mod user;
