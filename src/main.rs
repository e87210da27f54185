use anyhow::Result;
use clap::{Arg, Command};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use psimon::core::notify::{AlertSink, DesktopNotifier, LogSink};
use psimon::core::DEFAULT_INTERVAL;
use psimon::{init_logging, Monitor, MonitorConfig};

fn main() -> Result<()> {
    let matches = Command::new("psimon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Alerts when Linux PSI metrics cross configured thresholds")
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("SECS")
                .help("Seconds between poll cycles")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("1"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Log alerts instead of sending desktop notifications")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    init_logging();

    let interval = matches
        .get_one::<u64>("interval")
        .copied()
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_INTERVAL);

    let config = MonitorConfig::bootstrap(interval);

    let sink: Box<dyn AlertSink> = if matches.get_flag("stdout") {
        Box::new(LogSink)
    } else {
        Box::new(DesktopNotifier::new())
    };

    // Ctrl+C / SIGTERM flips the flag; the loop exits between cycles.
    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_handler = Arc::clone(&cancel);
    ctrlc::set_handler(move || {
        cancel_handler.store(true, Ordering::Relaxed);
    })
    .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    Monitor::new(config, sink).run(&cancel);

    Ok(())
}
