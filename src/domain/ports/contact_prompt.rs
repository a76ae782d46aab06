//! Contact Prompt Port
//!
//! When a reader is registered with a contact that is malformed or already
//! taken, the registry asks a `ContactPrompt` for a replacement. Hosts decide
//! whether that means asking a human, trying a fallback, or giving up.

use crate::error::CatalogError;

/// Source of corrected contact identifiers.
pub trait ContactPrompt {
    /// Called once before each registration, whatever the reader's name.
    fn begin(&mut self, _name: &str) {}

    /// Offer a replacement for `rejected`.
    ///
    /// `reason` is the error the rejected value produced. Returning `None`
    /// abandons the registration.
    fn correct(&mut self, name: &str, rejected: &str, reason: &CatalogError) -> Option<String>;
}

/// Prompt that never supplies a correction.
///
/// Registration fails on the first rejected contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCorrection;

impl ContactPrompt for NoCorrection {
    fn correct(&mut self, _name: &str, _rejected: &str, _reason: &CatalogError) -> Option<String> {
        None
    }
}

/// Prompt that hands out a fixed list of replacements, one per rejection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCorrections {
    replacements: std::collections::VecDeque<String>,
}

impl ScriptedCorrections {
    pub fn new(replacements: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replacements: replacements.into_iter().map(Into::into).collect(),
        }
    }

    /// Replacements not yet handed out
    pub fn remaining(&self) -> usize {
        self.replacements.len()
    }
}

impl ContactPrompt for ScriptedCorrections {
    fn correct(&mut self, _name: &str, _rejected: &str, _reason: &CatalogError) -> Option<String> {
        self.replacements.pop_front()
    }
}
