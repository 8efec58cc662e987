//! Single-threaded event dispatch for a measurement session
//!
//! Sensor samples and user actions arrive on one channel and are applied to
//! the session in arrival order by [`EventLoop`]. Nothing else touches the
//! session, so it needs no locking.
//!
//! ```text
//! sensor-poller ──Sample──┐
//!                         ├──▶ channel ──▶ EventLoop ──▶ MeasurementSession
//! console ──Capture/...───┘                   │
//!                                             └──▶ DisplaySink
//! ```

use crate::error::{Error, Result};
use crate::session::{DisplaySnapshot, MeasurementSession};
use crate::types::{OrientationSample, StandoffDistance};
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Inbound session events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// Newest sensor reading
    Sample(OrientationSample),
    /// Snapshot the live tilt into the capture window
    Capture,
    /// Picker changed the standoff distance
    SelectDistance(StandoffDistance),
    /// Re-render the current state without changing it
    Refresh,
    /// End the session
    Shutdown,
}

/// Create the session event channel
pub fn create_event_channel() -> (Sender<SessionEvent>, Receiver<SessionEvent>) {
    unbounded()
}

/// Receiver of display updates
pub trait DisplaySink {
    fn render(&mut self, snapshot: &DisplaySnapshot);
}

impl DisplaySink for Vec<DisplaySnapshot> {
    fn render(&mut self, snapshot: &DisplaySnapshot) {
        self.push(snapshot.clone());
    }
}

/// Owns the session and applies events to it one at a time
pub struct EventLoop {
    session: MeasurementSession,
    events: Receiver<SessionEvent>,
    /// Last live tilt pushed to the display (whole degrees)
    shown_tilt: Option<i64>,
}

impl EventLoop {
    pub fn new(session: MeasurementSession, events: Receiver<SessionEvent>) -> Self {
        Self {
            session,
            events,
            shown_tilt: None,
        }
    }

    pub fn session(&self) -> &MeasurementSession {
        &self.session
    }

    pub fn into_session(self) -> MeasurementSession {
        self.session
    }

    /// Apply one event; returns `false` once the session should end
    ///
    /// Renders only when something visible changed: the rounded live tilt,
    /// the captured angles, or the distance.
    pub fn handle(&mut self, event: SessionEvent, sink: &mut dyn DisplaySink) -> bool {
        match event {
            SessionEvent::Sample(sample) => {
                self.session.update_sample(sample);
                let tilt = self.session.current_tilt().rounded();
                if self.shown_tilt != Some(tilt) {
                    self.render(sink);
                }
            }
            SessionEvent::Capture => {
                self.session.capture();
                self.render(sink);
            }
            SessionEvent::SelectDistance(distance) => {
                if distance != self.session.distance() {
                    self.session.select_distance(distance);
                    self.render(sink);
                }
            }
            SessionEvent::Refresh => self.render(sink),
            SessionEvent::Shutdown => {
                log::info!("Session shutdown requested");
                return false;
            }
        }
        true
    }

    /// Dispatch events until shutdown
    ///
    /// Fails with [`Error::ChannelClosed`] if every sender goes away without
    /// sending [`SessionEvent::Shutdown`].
    pub fn run(&mut self, sink: &mut dyn DisplaySink) -> Result<()> {
        self.render(sink);
        loop {
            let event = self.events.recv().map_err(|_| Error::ChannelClosed)?;
            if !self.handle(event, sink) {
                return Ok(());
            }
        }
    }

    fn render(&mut self, sink: &mut dyn DisplaySink) {
        let snapshot = self.session.snapshot();
        self.shown_tilt = Some(snapshot.live_tilt_deg);
        sink.render(&snapshot);
    }
}
