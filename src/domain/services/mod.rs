//! Domain Services
//!
//! Stateless logic shared by the entities.

pub mod ranking;

pub use ranking::{top_n, top_one};
