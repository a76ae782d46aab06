//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Hosts provide concrete implementations.

pub mod contact_prompt;

pub use contact_prompt::{ContactPrompt, NoCorrection, ScriptedCorrections};
