//! Application Layer
//!
//! Use cases that orchestrate the catalog on behalf of a host.
//! This layer:
//! - Depends on the Domain layer (entities, services, ports)
//! - Does NOT contain catalog rules (those are in Domain)
//!
//! ## Use Cases
//!
//! - `ScriptUseCase` - Applies a declarative catalog script to a registry
//! - `CatalogReport` - Gathers listings and rankings for output

pub mod report;
pub mod script;

pub use report::{CatalogReport, ReaderSummary, WorkSummary};
pub use script::{
    CatalogRef, CatalogScript, ReaderEntry, ReadingEntry, ScriptSummary, ScriptUseCase,
    ScriptWarning, Section, WorkEntry,
};
