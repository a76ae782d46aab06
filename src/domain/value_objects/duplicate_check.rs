//! Duplicate Check Value Object
//!
//! Decides which works a new catalog id is compared against when the registry
//! creates a work.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scope of the catalog id uniqueness check
///
/// - `AllCreated`: every work the registry has created (default)
/// - `LinkedOnly`: only works already linked to a reader. Two works created
///   back to back may then share an id until one of them is linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateCheck {
    #[default]
    AllCreated,
    LinkedOnly,
}

impl DuplicateCheck {
    pub const VALID_VALUES: [&'static str; 2] = ["all-created", "linked-only"];
}

impl FromStr for DuplicateCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all-created" => Ok(DuplicateCheck::AllCreated),
            "linked-only" => Ok(DuplicateCheck::LinkedOnly),
            other => Err(format!("unknown duplicate check '{}'", other)),
        }
    }
}
