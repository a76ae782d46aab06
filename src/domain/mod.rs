//! Domain Layer
//!
//! The catalog itself: readers, works, the registry that links them, and the
//! ranking primitive. Nothing here touches the file system or the terminal.
//!
//! ## Structure
//!
//! - `entities/` - Reader, Work, Registry
//! - `value_objects/` - ContactId, RatingInput, DuplicateCheck
//! - `services/` - Top-N ranking
//! - `ports/` - Interfaces the host implements (contact correction)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
