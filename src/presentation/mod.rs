//! Presentation Layer
//!
//! Turns a catalog report into something a person or a CI job can read.
//!
//! ## Structure
//!
//! - `output` - Text and JSON renderers behind [`ReportRenderer`]

pub mod output;

pub use output::{create_renderer, JsonRenderer, ReportRenderer, TextRenderer};
