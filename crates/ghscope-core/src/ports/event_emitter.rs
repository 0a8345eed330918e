//! View event emitter for observers of controller state.
//!
//! Controllers publish a snapshot after every mutation. Implementations
//! handle transport details (channels, UI bindings, etc.).

use tokio::sync::mpsc;

use crate::events::ViewEvent;

/// Trait for emitting view events.
///
/// This abstraction keeps channel types out of controller signatures.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and headless contexts that poll getters
/// - `ChannelEmitter` - Forwards events into an unbounded tokio channel
pub trait ViewEventEmitter: Send + Sync {
    /// Emit a view event.
    ///
    /// This method must not block.
    fn emit(&self, event: ViewEvent);

    /// Clone this emitter into a boxed trait object.
    fn clone_box(&self) -> Box<dyn ViewEventEmitter>;
}

/// A no-op emitter that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl ViewEventEmitter for NoopEmitter {
    fn emit(&self, _event: ViewEvent) {}

    fn clone_box(&self) -> Box<dyn ViewEventEmitter> {
        Box::new(self.clone())
    }
}

/// Emitter that forwards events into an unbounded channel.
///
/// Events sent after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelEmitter {
    tx: mpsc::UnboundedSender<ViewEvent>,
}

impl ChannelEmitter {
    /// Create an emitter and the receiver the presentation layer listens on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ViewEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ViewEventEmitter for ChannelEmitter {
    fn emit(&self, event: ViewEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("view event dropped, receiver closed");
        }
    }

    fn clone_box(&self) -> Box<dyn ViewEventEmitter> {
        Box::new(self.clone())
    }
}
