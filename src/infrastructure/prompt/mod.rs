//! Contact prompt implementations

mod interactive;

pub use interactive::InteractiveContactPrompt;
