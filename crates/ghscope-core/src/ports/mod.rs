//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only core types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - The transport moves raw bytes; validation and decoding stay in core
//! - Event emission never blocks the caller

pub mod event_emitter;
pub mod transport;

pub use event_emitter::{ChannelEmitter, NoopEmitter, ViewEventEmitter};
pub use transport::{RawResponse, TransportError, TransportGateway};
