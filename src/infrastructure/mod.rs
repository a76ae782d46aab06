//! Infrastructure Layer
//!
//! Concrete implementations at the edge of the catalog: script files on disk
//! and the terminal prompt for contact corrections.

pub mod prompt;
pub mod script_file;

pub use prompt::InteractiveContactPrompt;
pub use script_file::{load_script, parse_script, ScriptFormat};
