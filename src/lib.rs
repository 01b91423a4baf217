pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod numeric;
pub mod scorer;
pub mod state;
// cmd and reports are binary modules (declared in main.rs).
