//! Simulated onboard clock
//!
//! A background thread sends one `Tick` per fixed wall-clock interval to the
//! consumer loop. There is no catch-up: if the host stalls past an interval,
//! only the next scheduled tick fires. Operator time corrections change the
//! value being advanced, never the cadence.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;
use tracing::{error, info};

use crate::events::DeviceEvent;

pub struct ClockSimulator {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ClockSimulator {
    /// Spawn the ticker thread; it runs until `stop` or until the consumer
    /// side of the channel goes away.
    pub fn start(events: Sender<DeviceEvent>, interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();

        let handle = thread::spawn(move || {
            info!(interval_ms = interval.as_millis() as u64, "clock simulator running");
            loop {
                thread::sleep(interval);
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                if events.send(DeviceEvent::Tick).is_err() {
                    // Consumer loop is gone; nothing left to advance
                    break;
                }
            }
            info!("clock simulator stopped");
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop ticking. When this returns the thread has exited, so no further
    /// tick can reach the channel.
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            error!("clock simulator thread panicked");
        }
    }
}
