pub mod config;
pub mod mask;
