//! Data model for PSI (pressure stall information) monitoring.

use std::path::PathBuf;

/// The three resource kinds the kernel exposes pressure accounting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Cpu,
    Memory,
    Io,
}

impl ResourceKind {
    /// All kinds, in the order they are polled.
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Cpu, ResourceKind::Memory, ResourceKind::Io];

    /// The name the kernel uses in pressure file paths (`cpu.pressure`,
    /// `/proc/pressure/cpu`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Cpu => "cpu",
            ResourceKind::Memory => "memory",
            ResourceKind::Io => "io",
        }
    }

    /// Human-readable label handed to the alert sink.
    pub fn alert_label(&self) -> &'static str {
        match self {
            ResourceKind::Cpu => "CPU pressure high",
            ResourceKind::Memory => "Memory pressure high",
            ResourceKind::Io => "I/O pressure high",
        }
    }

    /// Whether this kind's pressure record carries a second `full` line.
    /// CPU exposes only `some`; memory and I/O expose both.
    pub fn has_full_line(&self) -> bool {
        !matches!(self, ResourceKind::Cpu)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed pressure line: the three averaging-window percentages.
///
/// Values are non-negative and typically within 0-100, but the kernel may
/// transiently report more than 100.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressureSample {
    pub ten: f32,
    pub sixty: f32,
    pub three_hundred: f32,
}

impl PressureSample {
    pub fn new(ten: f32, sixty: f32, three_hundred: f32) -> Self {
        Self {
            ten,
            sixty,
            three_hundred,
        }
    }
}

/// The result of one read of a pressure source: the `some` line, plus the
/// `full` line when it was requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureRecord {
    pub some: PressureSample,
    pub full: Option<PressureSample>,
}

/// Optional percentage ceilings for one averaging window.
///
/// `None` means the window is disabled and never triggers. `Some(0.0)` is a
/// real, hair-trigger threshold; the two are deliberately distinct.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowThreshold {
    pub some: Option<f32>,
    pub full: Option<f32>,
}

impl WindowThreshold {
    pub fn some_only(value: f32) -> Self {
        Self {
            some: Some(value),
            full: None,
        }
    }
}

/// Per-resource thresholds, one `WindowThreshold` per averaging window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressureThresholds {
    pub ten: WindowThreshold,
    pub sixty: WindowThreshold,
    pub three_hundred: WindowThreshold,
}

/// Startup-time configuration for one monitored resource.
///
/// `source` is resolved exactly once; a resource without one is silently
/// treated as unmonitored. If the bound file later becomes unavailable that
/// surfaces as a per-cycle read error, never as a re-resolution.
#[derive(Debug, Clone)]
pub struct ResourceConfig {
    pub kind: ResourceKind,
    pub source: Option<PathBuf>,
    pub thresholds: PressureThresholds,
}

impl ResourceConfig {
    pub fn new(
        kind: ResourceKind,
        source: Option<PathBuf>,
        thresholds: PressureThresholds,
    ) -> Self {
        Self {
            kind,
            source,
            thresholds,
        }
    }
}

/// Outcome of one threshold evaluation.
///
/// The error case is carried separately as `Err(PsimonError)` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Alert,
    Normal,
}
