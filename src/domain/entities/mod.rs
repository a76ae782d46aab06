//! Domain Entities
//!
//! - `Work` - A rated book, general or of a specific kind
//! - `Reader` - Someone who reads and rates works
//! - `Registry` - Owns readers and works and ranks them

mod reader;
mod registry;
mod work;

pub use reader::Reader;
pub use registry::{Linked, Registry, WorkId};
pub use work::{Ratable, Work, WorkKey, WorkKind};
