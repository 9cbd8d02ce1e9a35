//! Policy configuration for the pre-validation gate.
//!
//! The `policy` module centralizes the knobs consulted by the gate. Consumers
//! typically construct a [`Policy`](crate::policy::Policy) via
//! `Policy::for_snapshot` and then customize fields before creating a
//! [`Snapforge`](crate::Snapforge) instance.
//!
//! Submodules:
//! - `config`: policy struct and constructors
//! - `types`: grouped policy field structs

pub mod config;
pub mod types;

pub use config::Policy;
