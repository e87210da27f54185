use psimon::core::evaluator::evaluate;
use psimon::core::pressure::{
    PressureRecord, PressureSample, PressureThresholds, Verdict, WindowThreshold,
};

fn memory_thresholds() -> PressureThresholds {
    // Built-in style configuration: a single some-window ceiling.
    PressureThresholds {
        ten: WindowThreshold::some_only(0.1),
        ..Default::default()
    }
}

#[test]
fn test_high_short_window_sample_alerts() {
    let record = PressureRecord {
        some: PressureSample::new(50.0, 0.0, 0.0),
        full: None,
    };

    assert_eq!(evaluate(&record, &memory_thresholds()), Verdict::Alert);
}

#[test]
fn test_low_short_window_sample_is_normal() {
    let record = PressureRecord {
        some: PressureSample::new(0.05, 0.0, 0.0),
        full: None,
    };

    assert_eq!(evaluate(&record, &memory_thresholds()), Verdict::Normal);
}

#[test]
fn test_verdict_is_order_independent() {
    // One trigger in some, one in full: either alone must alert.
    let thresholds = PressureThresholds {
        sixty: WindowThreshold {
            some: Some(1.0),
            full: Some(1.0),
        },
        ..Default::default()
    };

    let some_only = PressureRecord {
        some: PressureSample::new(0.0, 2.0, 0.0),
        full: Some(PressureSample::new(0.0, 0.0, 0.0)),
    };
    let full_only = PressureRecord {
        some: PressureSample::new(0.0, 0.0, 0.0),
        full: Some(PressureSample::new(0.0, 2.0, 0.0)),
    };

    assert_eq!(evaluate(&some_only, &thresholds), Verdict::Alert);
    assert_eq!(evaluate(&full_only, &thresholds), Verdict::Alert);
}

#[test]
fn test_sample_above_hundred_still_compares() {
    // Kernel semantics allow transient values over 100.
    let thresholds = PressureThresholds {
        ten: WindowThreshold::some_only(100.0),
        ..Default::default()
    };
    let record = PressureRecord {
        some: PressureSample::new(100.5, 0.0, 0.0),
        full: None,
    };

    assert_eq!(evaluate(&record, &thresholds), Verdict::Alert);
}

#[test]
fn test_fully_unset_thresholds_never_alert() {
    let record = PressureRecord {
        some: PressureSample::new(100.0, 100.0, 100.0),
        full: Some(PressureSample::new(100.0, 100.0, 100.0)),
    };

    assert_eq!(
        evaluate(&record, &PressureThresholds::default()),
        Verdict::Normal
    );
}
