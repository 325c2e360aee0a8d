pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{LocalStorage, PaletteConfig};
pub use crate::core::{engine::AuditEngine, pipeline::ContrastPipeline};
pub use crate::utils::error::{Result, ThemeError};
