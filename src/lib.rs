//! TomeRater - a small library catalog
//!
//! Readers are registered by contact address, works are created with a
//! catalog id, and every reading links the two, optionally with a rating.
//! The [`Registry`] owns both sides and answers the ranking questions:
//! most read, highest rated, most positive reader, most prolific readers.
//!
//! ```
//! use tomerater::Registry;
//!
//! let mut registry = Registry::new();
//! let dune = registry.create_narrative_work("Dune", "Frank Herbert", "1").unwrap();
//! registry.register_reader("Ana", "ana@example.org", &[]).unwrap();
//! registry.link_reading(dune, "ana@example.org", 4).unwrap();
//!
//! assert_eq!(registry.highest_rated().unwrap().title(), "Dune");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CatalogReport, CatalogScript, ScriptSummary, ScriptUseCase};
pub use config::{Config, OutputFormat};
pub use domain::entities::{Ratable, Reader, Registry, Work, WorkId, WorkKind};
pub use domain::services::top_n;
pub use domain::value_objects::{is_valid_contact, ContactId, DuplicateCheck, RatingInput};
pub use error::{CatalogError, CatalogResult};
pub use infrastructure::load_script;
