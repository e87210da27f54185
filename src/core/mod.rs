// Core business logic module

pub mod config;
pub mod evaluator;
pub mod monitor;
pub mod notify;
pub mod parser;
pub mod pressure;
pub mod resolver;

// Re-export commonly used items
pub use config::{default_thresholds, MonitorConfig, DEFAULT_INTERVAL};
pub use evaluator::evaluate;
pub use monitor::Monitor;
pub use notify::{AlertSink, DesktopNotifier, LogSink};
pub use parser::read_record;
pub use pressure::{
    PressureRecord, PressureSample, PressureThresholds, ResourceConfig, ResourceKind, Verdict,
    WindowThreshold,
};
pub use resolver::resolve_source;
