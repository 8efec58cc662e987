//! Orientation sample suppliers.
//!
//! A [`SampleSource`] is polled at a fixed interval by a
//! [`SensorSubscription`], which forwards each sample to the session's event
//! channel. The subscription lives exactly as long as the session: dropping it
//! stops and joins the polling thread.
//!
//! | Source | Description |
//! |--------|-------------|
//! | [`mock::SimulatedOrientation`] | Simulated device aimed from the console |
//! | [`replay::ReplaySource`] | JSON-lines recording |

pub mod mock;
pub mod replay;

use crate::config::{SensorConfig, SourceKind};
use crate::error::{Error, Result};
use crate::events::SessionEvent;
use crate::types::OrientationSample;
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub use mock::{AimHandle, SimulatedOrientation};
pub use replay::ReplaySource;

/// Supplier of raw orientation samples
pub trait SampleSource: Send {
    /// Short name for logging
    fn name(&self) -> &str;

    /// Read the next sample; `None` once the source is exhausted
    fn read(&mut self) -> Result<Option<OrientationSample>>;
}

/// Build the configured sample source
///
/// Returns the aim handle alongside the source when the source is simulated.
pub fn create_source(config: &SensorConfig) -> Result<(Box<dyn SampleSource>, Option<AimHandle>)> {
    match config.source {
        SourceKind::Mock => {
            let sim = SimulatedOrientation::new(&config.mock);
            let aim = sim.aim_handle();
            Ok((Box::new(sim), Some(aim)))
        }
        SourceKind::Replay => {
            let path = config.replay_path.as_ref().ok_or_else(|| {
                Error::Config("Replay source requires sensor.replay_path".to_string())
            })?;
            Ok((Box::new(ReplaySource::open(path)?), None))
        }
    }
}

/// Running sensor poller; unsubscribes on drop
pub struct SensorSubscription {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SensorSubscription {
    /// Start polling `source` every `interval`, forwarding samples to `events`
    pub fn spawn(
        mut source: Box<dyn SampleSource>,
        interval: Duration,
        events: Sender<SessionEvent>,
    ) -> Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let name = source.name().to_string();

        log::info!("Subscribing to {} sensor every {:?}", name, interval);

        let handle = thread::Builder::new()
            .name("sensor-poller".to_string())
            .spawn(move || {
                while flag.load(Ordering::Relaxed) {
                    match source.read() {
                        Ok(Some(sample)) => {
                            if events.send(SessionEvent::Sample(sample)).is_err() {
                                log::debug!("Event channel closed, sensor poller exiting");
                                break;
                            }
                        }
                        Ok(None) => {
                            log::info!("{} sensor exhausted", name);
                            break;
                        }
                        Err(e) => {
                            log::error!("{} sensor error: {}", name, e);
                            break;
                        }
                    }
                    thread::sleep(interval);
                }
            })
            .map_err(|e| Error::Other(format!("Failed to spawn sensor poller: {}", e)))?;

        Ok(Self {
            running,
            handle: Some(handle),
        })
    }

    /// True while the poller thread is still producing samples
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop polling and wait for the thread to exit
    pub fn unsubscribe(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Sensor poller panicked");
            }
            log::info!("Sensor unsubscribed");
        }
    }
}

impl Drop for SensorSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
