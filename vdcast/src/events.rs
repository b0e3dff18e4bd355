//! Typed event vocabulary and buses for the cast session.
//!
//! The two directions are kept as distinct tagged unions: a control point's
//! actions arrive as [`TransportEvent`]s, the local engine's lifecycle leaves
//! as [`PlayerStatusEvent`]s. Each bus is a plain subscriber list over
//! crossbeam senders; a broadcast prunes subscribers whose receiver is gone.

use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender, unbounded};

/// Inbound remote-control action, produced by the renderer service when a
/// control point invokes a transport/rendering operation. Consumed exactly
/// once by the session relay; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub enum TransportEvent {
    /// SetAVTransportURI: the remote selected a new source URL.
    SetUri(String),
    /// SetAVTransportURI metadata: display title for the current source.
    SetMetadata(String),
    Stop,
    Play,
    Pause,
    /// Seek target, in the `H:MM:SS` form control points send.
    Seek(String),
    /// RenderingControl SetVolume, kept as the raw string value.
    SetVolume(String),
    /// Protocol-level error surfaced by the service; the session shows the
    /// message and keeps the renderer alive.
    Error(String),
}

/// Outbound playback lifecycle change originating from the local engine.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerStatusEvent {
    Resumed,
    Paused,
    /// The engine started loading a new file.
    FileStarted,
    Stopped,
    EndOfFile,
    /// Total duration became known or changed, in seconds.
    DurationUpdated(f64),
    /// Playback position advanced, in seconds.
    ProgressUpdated(f64),
    VolumeChanged(i64),
}

#[derive(Clone, Default)]
pub struct TransportEventBus {
    subscribers: Arc<Mutex<Vec<Sender<TransportEvent>>>>,
}

impl TransportEventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn subscribe(&self) -> Receiver<TransportEvent> {
        let (tx, rx) = unbounded::<TransportEvent>();
        {
            let mut subscribers = self.subscribers.lock().unwrap();
            subscribers.push(tx);
        }
        rx
    }

    pub fn broadcast(&self, event: TransportEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[derive(Clone, Default)]
pub struct PlayerStatusBus {
    subscribers: Arc<Mutex<Vec<Sender<PlayerStatusEvent>>>>,
}

impl PlayerStatusBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn subscribe(&self) -> Receiver<PlayerStatusEvent> {
        let (tx, rx) = unbounded::<PlayerStatusEvent>();
        {
            let mut subscribers = self.subscribers.lock().unwrap();
            subscribers.push(tx);
        }
        rx
    }

    pub fn broadcast(&self, event: PlayerStatusEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
