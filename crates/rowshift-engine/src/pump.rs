#![forbid(unsafe_code)]

//! Thread-backed event pump.
//!
//! Host observers (mutation callbacks, click/key listeners, navigation
//! hooks) run on their own threads or callbacks; the pump gives them a
//! cloneable [`PumpHandle`] to push [`EngineEvent`]s through, and drives
//! the engine itself: it sleeps until the engine's next deadline, wakes on
//! incoming events, and polls the engine so due passes run.
//!
//! The single-slot replace-or-arm discipline lives entirely inside the
//! engine; the pump adds no timers of its own. Stopping is cooperative:
//! [`PumpHandle::stop`] enqueues a stop marker, and the loop also exits
//! when every handle has been dropped.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use rowshift_core::clock::Clock;
use rowshift_core::row::HostView;
use rowshift_core::style::Surface;

use crate::engine::{EngineEvent, ReorderEngine};

/// Longest the pump will sleep even with no deadline near, so a stop
/// marker is never stranded behind a distant fallback tick.
const MAX_WAIT: Duration = Duration::from_millis(1_000);

enum PumpMessage {
    Event(EngineEvent),
    Stop,
}

/// Cloneable inlet for host observers.
#[derive(Clone)]
pub struct PumpHandle {
    sender: mpsc::Sender<PumpMessage>,
}

impl PumpHandle {
    /// Deliver an event. Silently drops the event when the pump is gone —
    /// observers outliving the view are expected during teardown.
    pub fn send(&self, event: EngineEvent) {
        let _ = self.sender.send(PumpMessage::Event(event));
    }

    /// Ask the pump loop to exit after the current iteration.
    pub fn stop(&self) {
        let _ = self.sender.send(PumpMessage::Stop);
    }
}

/// Owns the engine plus the host adapters and runs the event loop.
pub struct EnginePump<C, V, S>
where
    C: Clock,
    V: HostView,
    S: Surface,
{
    engine: ReorderEngine<C>,
    view: V,
    surface: S,
    receiver: mpsc::Receiver<PumpMessage>,
}

impl<C, V, S> EnginePump<C, V, S>
where
    C: Clock,
    V: HostView,
    S: Surface,
{
    /// Build a pump around an engine and the host adapters.
    #[must_use]
    pub fn new(engine: ReorderEngine<C>, view: V, surface: S) -> (Self, PumpHandle) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                engine,
                view,
                surface,
                receiver,
            },
            PumpHandle { sender },
        )
    }

    /// Run the loop on the current thread until stopped or all handles are
    /// dropped. Returns the engine for inspection.
    pub fn run(mut self) -> ReorderEngine<C> {
        loop {
            let wait = self.engine.until_next_deadline().min(MAX_WAIT);
            match self.receiver.recv_timeout(wait) {
                Ok(PumpMessage::Event(event)) => self.engine.handle(event),
                Ok(PumpMessage::Stop) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
            }
            let _ = self.engine.poll(&self.view, &mut self.surface);
        }
        self.engine
    }
}

impl<C, V, S> EnginePump<C, V, S>
where
    C: Clock + Send + 'static,
    V: HostView + Send + 'static,
    S: Surface + Send + 'static,
{
    /// Run the loop on a background thread.
    #[must_use]
    pub fn spawn(self) -> thread::JoinHandle<ReorderEngine<C>> {
        thread::Builder::new()
            .name("rowshift-pump".into())
            .spawn(move || self.run())
            .expect("spawn rowshift pump thread")
    }
}
