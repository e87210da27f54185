// psimon Library - Public API

// Re-export error types
pub mod error;
pub use error::{PsimonError, Result};

// Module declarations
pub mod core;

// Re-export commonly used types
pub use core::config::MonitorConfig;
pub use core::monitor::Monitor;

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
