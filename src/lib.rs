#![forbid(unsafe_code)]
//! Snapforge: pre-flight validation for cloud image builds.
//!
//! Before an image build provisions any server, the gate asks the provider for
//! its image inventory and refuses to continue when a user-created snapshot
//! already carries the desired name. The decision is binary (`Continue` /
//! `Halt`); a `force` policy flag bypasses the check entirely.
//!
//! Design highlights:
//! - Capabilities are explicit: the provider client (`adapters::ImageLister`)
//!   and the operator channel (`adapters::UiSink`) are passed in, never read
//!   from ambient build state.
//! - One blocking listing per invocation, no retries: an unreliable inventory
//!   check is worse than failing the build early.
//! - Every invocation emits structured facts via `logging::FactsEmitter`.

pub mod constants;
pub mod adapters;
pub mod api;
pub mod cloud;
pub mod logging;
pub mod policy;
pub mod prevalidate;
pub mod types;

pub use api::*;
