mod config_loader;
pub use config_loader::*;

pub mod demo_services;
