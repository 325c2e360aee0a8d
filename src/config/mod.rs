pub mod cli;
pub mod palette_config;

pub use cli::LocalStorage;
pub use palette_config::PaletteConfig;
