pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod reference;
pub mod scorer;
pub mod sim;
pub mod sweep;
// cmd and reports are binary modules, declared in main.rs.
