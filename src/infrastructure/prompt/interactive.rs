//! Interactive Contact Prompt
//!
//! Asks on the terminal for a replacement contact whenever a registration is
//! refused, up to a fixed number of attempts per registration.

use dialoguer::Input;

use crate::domain::ports::ContactPrompt;
use crate::error::CatalogError;

/// Terminal prompt backed by `dialoguer`
pub struct InteractiveContactPrompt {
    max_attempts: u32,
    attempts: u32,
}

impl InteractiveContactPrompt {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            attempts: 0,
        }
    }

    /// Count an attempt, returning false once the budget is spent
    fn take_attempt(&mut self) -> bool {
        if self.attempts >= self.max_attempts {
            return false;
        }
        self.attempts += 1;
        true
    }
}

impl ContactPrompt for InteractiveContactPrompt {
    fn begin(&mut self, _name: &str) {
        self.attempts = 0;
    }

    fn correct(&mut self, name: &str, rejected: &str, reason: &CatalogError) -> Option<String> {
        if !self.take_attempt() {
            tracing::warn!(reader = name, contact = rejected, "giving up on contact correction");
            return None;
        }

        eprintln!("{}", reason);
        Input::<String>::new()
            .with_prompt(format!("Contact for {}", name))
            .with_initial_text(rejected)
            .interact_text()
            .ok()
    }
}
