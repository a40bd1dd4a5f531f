pub mod config;
pub mod form;
pub mod model;
pub mod page;
pub mod types;
