#![forbid(unsafe_code)]

mod clock;
mod constants;
mod constraints;
mod dashboard;
mod error;
mod events;
mod panel;
mod persistence;
mod session;
mod settings;
mod store;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{Level as TraceLevel, debug, info};
use tracing_subscriber::FmtSubscriber;

use clock::ClockSimulator;
use events::DeviceEvent;
use panel::ControlPanel;
use persistence::{BackgroundWriter, JsonFileGateway};
use store::SettingsStore;

/// Simulated seconds between dashboard log lines
const DASHBOARD_LOG_EVERY: u64 = 10;

#[derive(Parser, Debug)]
#[command(about = "Trail camera configuration simulator")]
struct Args {
    /// Settings document path (defaults to the platform data dir)
    #[arg(long)]
    settings_file: Option<PathBuf>,

    /// Wall-clock milliseconds per simulated second
    #[arg(long, default_value_t = constants::clock::TICK_INTERVAL_MS)]
    tick_millis: u64,

    /// Stop after this many simulated seconds (runs until killed when absent)
    #[arg(long)]
    run_for: Option<u64>,

    /// Play a scripted operator sequence before the clock takes over
    #[arg(long)]
    demo: bool,
}

/// Operator script for `--demo`: exercises every request kind once and
/// leaves the device back on factory defaults.
fn demo_script() -> Vec<DeviceEvent> {
    use events::OperatorRequest::*;
    use settings::FieldId;

    [
        FirmwareUpgrade,
        SetField {
            field: FieldId::Mode,
            value: "VIDEO".to_string(),
        },
        SetField {
            field: FieldId::VideoLength,
            value: "2min".to_string(),
        },
        ConfirmTime {
            year: 2025,
            month: 1,
            day: 15,
            hour: 8,
            minute: 30,
        },
        DeleteAll,
        ResetDefaults,
    ]
    .into_iter()
    .map(DeviceEvent::Operator)
    .collect()
}

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let gateway = match args.settings_file {
        Some(path) => JsonFileGateway::new(path),
        None => JsonFileGateway::at_default_path(),
    };
    let store = SettingsStore::open(Box::new(BackgroundWriter::spawn(gateway)));
    let mut panel = ControlPanel::new(store);

    let startup = panel.display_model();
    info!(date = %startup.date, clock = %startup.clock, "device ready");
    for row in &startup.fields {
        if row.applicable {
            debug!(field = ?row.field, label = row.label, value = %row.value, "setting");
        }
    }

    // Single consumer loop: the clock thread and the operator surface
    // produce events, this loop applies them in total order
    let (events_tx, events_rx) = mpsc::channel();
    if args.demo {
        for event in demo_script() {
            let _ = events_tx.send(event);
        }
    }
    let clock = ClockSimulator::start(events_tx.clone(), Duration::from_millis(args.tick_millis));

    let mut ticks: u64 = 0;
    loop {
        let Ok(event) = events_rx.recv() else {
            break; // every producer is gone
        };
        if event == DeviceEvent::Shutdown {
            break;
        }
        let is_tick = event == DeviceEvent::Tick;
        panel.handle_event(event);

        if is_tick {
            ticks += 1;
            if ticks % DASHBOARD_LOG_EVERY == 0 {
                let model = panel.display_model();
                info!(date = %model.date, clock = %model.clock, card = %model.card_usage, battery = %model.battery, "dashboard");
            }
            if let Some(limit) = args.run_for
                && ticks >= limit
            {
                info!(ticks = ticks, "simulated run complete");
                let _ = events_tx.send(DeviceEvent::Shutdown);
            }
        }
    }

    // No further tick can fire past this point; in-flight persistence
    // writes drain on their own without being awaited
    clock.stop();
    info!("session ended");
    Ok(())
}
