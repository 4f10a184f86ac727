//! # kinema-contact
//!
//! Collision detection and contact response for the Kinema core.
//!
//! The collision pipeline is split into three phases:
//! 1. **Broad phase** — cheap axis-aligned bounds pruning
//! 2. **Narrow phase** — circle-approximation depth test
//! 3. **Contact response** — restitution-scaled velocity adjustment
//!
//! Each phase is a pluggable trait, so a host can swap strategies or
//! disable a phase outright (`Null*` implementations).

pub mod broad;
pub mod contact;
pub mod narrow;
pub mod pipeline;
pub mod response;

pub use broad::{AabbBroadPhase, BroadPhase, CandidatePair, NullBroadPhase};
pub use contact::Contact;
pub use narrow::{CircleNarrowPhase, NarrowPhase, NullNarrowPhase};
pub use pipeline::{CollisionPipeline, CollisionStepResult};
pub use response::{
    ContactResponse, ContactResult, NullContactResponse, RestitutionMix, RestitutionResponse,
};
