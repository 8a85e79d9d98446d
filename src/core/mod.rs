pub mod config;
pub mod registry;
