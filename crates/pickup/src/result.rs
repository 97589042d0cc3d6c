use serde::{Deserialize, Serialize};

/// Outcome of one validation rule: zero or more customer-facing messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages in the order the rule produced them.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}
