//! # kinema-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (stepping, contacts, energy) that can be consumed by pluggable
//! sinks (in-memory buffers, `tracing`, host overlays).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
