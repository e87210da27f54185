//! Threshold evaluation.
//!
//! Compares a parsed pressure record against the resource's configured
//! thresholds and yields a verdict.

use super::pressure::{PressureRecord, PressureSample, PressureThresholds, Verdict, WindowThreshold};

/// Evaluate one record against the configured thresholds.
///
/// The verdict is a pure disjunction: any enabled window whose sample value
/// strictly exceeds its threshold triggers an alert. The `some` windows are
/// checked first and short-circuit, but evaluation order never changes the
/// result. Equality does not trigger, and disabled windows never trigger.
pub fn evaluate(record: &PressureRecord, thresholds: &PressureThresholds) -> Verdict {
    if exceeds(&record.some, thresholds, |w| w.some) {
        return Verdict::Alert;
    }

    if let Some(full) = &record.full {
        if exceeds(full, thresholds, |w| w.full) {
            return Verdict::Alert;
        }
    }

    Verdict::Normal
}

fn exceeds(
    sample: &PressureSample,
    thresholds: &PressureThresholds,
    select: fn(&WindowThreshold) -> Option<f32>,
) -> bool {
    let windows = [
        (sample.ten, select(&thresholds.ten)),
        (sample.sixty, select(&thresholds.sixty)),
        (sample.three_hundred, select(&thresholds.three_hundred)),
    ];

    windows
        .iter()
        .any(|(value, threshold)| matches!(threshold, Some(t) if value > t))
}
