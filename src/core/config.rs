//! Startup configuration assembly.
//!
//! Sources are resolved exactly once here and the resulting configuration is
//! immutable for the lifetime of the process. A future external config
//! loader slots in by producing fully-populated `PressureThresholds` per
//! resource before the first poll cycle.

use std::time::Duration;

use super::pressure::{PressureThresholds, ResourceConfig, ResourceKind, WindowThreshold};
use super::resolver::resolve_source;

/// Default poll cadence, matching the original one-second sleep.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Immutable monitor configuration: one `ResourceConfig` per tracked
/// resource plus the poll interval.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub cpu: ResourceConfig,
    pub memory: ResourceConfig,
    pub io: ResourceConfig,
    pub interval: Duration,
}

impl MonitorConfig {
    /// Resolve all pressure sources and attach the built-in thresholds.
    ///
    /// Resolution failures disable the affected resource; they never fail
    /// startup.
    pub fn bootstrap(interval: Duration) -> Self {
        Self {
            cpu: Self::resource(ResourceKind::Cpu),
            memory: Self::resource(ResourceKind::Memory),
            io: Self::resource(ResourceKind::Io),
            interval,
        }
    }

    fn resource(kind: ResourceKind) -> ResourceConfig {
        ResourceConfig::new(kind, resolve_source(kind), default_thresholds(kind))
    }

    /// The tracked resources in poll order.
    pub fn resources(&self) -> [&ResourceConfig; 3] {
        [&self.cpu, &self.memory, &self.io]
    }
}

/// Built-in thresholds: alert on sustained CPU contention within 10s and
/// memory contention within 60s; I/O is watched but has no thresholds yet.
pub fn default_thresholds(kind: ResourceKind) -> PressureThresholds {
    match kind {
        ResourceKind::Cpu => PressureThresholds {
            ten: WindowThreshold::some_only(0.1),
            ..Default::default()
        },
        ResourceKind::Memory => PressureThresholds {
            sixty: WindowThreshold::some_only(0.1),
            ..Default::default()
        },
        ResourceKind::Io => PressureThresholds::default(),
    }
}
