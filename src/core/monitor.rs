//! Poll loop and alert dispatch.
//!
//! One cycle walks the tracked resources in order, reads and evaluates each
//! one, and hands positive verdicts to the alert sink. Per-resource failures
//! are logged and contained; the next cycle is the implicit retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::error::Result;

use super::config::MonitorConfig;
use super::evaluator::evaluate;
use super::notify::AlertSink;
use super::parser::read_record;
use super::pressure::{ResourceConfig, Verdict};

/// Granularity of the inter-cycle sleep, so shutdown is honored promptly
/// even with long poll intervals.
const SLEEP_STEP: Duration = Duration::from_millis(100);

/// The resident monitor: immutable configuration plus an injected sink.
pub struct Monitor {
    config: MonitorConfig,
    sink: Box<dyn AlertSink>,
}

impl Monitor {
    pub fn new(config: MonitorConfig, sink: Box<dyn AlertSink>) -> Self {
        Self { config, sink }
    }

    /// Read and evaluate a single resource.
    ///
    /// A resource with no bound source is always `Normal`; monitoring for it
    /// is silently disabled rather than an error.
    pub fn check_resource(resource: &ResourceConfig) -> Result<Verdict> {
        let Some(source) = &resource.source else {
            return Ok(Verdict::Normal);
        };

        let record = read_record(source, resource.kind.has_full_line())?;
        Ok(evaluate(&record, &resource.thresholds))
    }

    /// Run one evaluation cycle across all tracked resources.
    ///
    /// Errors never abort the cycle or leak into other resources'
    /// evaluation; they surface on the diagnostic stream only.
    pub fn poll_once(&self) {
        for resource in self.config.resources() {
            match Self::check_resource(resource) {
                Ok(Verdict::Alert) => {
                    log::debug!("{}: above thresholds", resource.kind);
                    self.sink.raise(resource.kind.alert_label());
                }
                Ok(Verdict::Normal) => {}
                Err(e) => log::warn!("{}: {}", resource.kind, e),
            }
        }
    }

    /// Poll until cancellation is requested.
    ///
    /// The flag is only consulted between cycles; an in-flight cycle always
    /// completes.
    pub fn run(&self, cancel: &AtomicBool) {
        log::info!(
            "polling every {:?} (cpu={} memory={} io={})",
            self.config.interval,
            self.config.cpu.source.is_some(),
            self.config.memory.source.is_some(),
            self.config.io.source.is_some(),
        );

        while !cancel.load(Ordering::Relaxed) {
            self.poll_once();
            self.sleep_interval(cancel);
        }

        log::info!("shutdown requested, stopping monitor");
    }

    fn sleep_interval(&self, cancel: &AtomicBool) {
        let mut remaining = self.config.interval;
        while remaining > Duration::ZERO && !cancel.load(Ordering::Relaxed) {
            let step = remaining.min(SLEEP_STEP);
            thread::sleep(step);
            remaining -= step;
        }
    }
}
