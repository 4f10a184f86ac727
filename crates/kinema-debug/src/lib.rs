//! # kinema-debug
//!
//! Debugging aids for Kinema simulations: a hook that bridges solver
//! lifecycle callbacks into telemetry events, and compact binary
//! snapshots of body state for replay and diff-based debugging.
//!
//! Nothing here persists scenes — snapshots are an ephemeral
//! inspection format, not serialization of the simulation.

pub mod hooks;
pub mod snapshot;

pub use hooks::TelemetryHook;
pub use snapshot::BodySnapshot;
