use std::sync::Arc;

use storepickup_core::DomainResult;
use storepickup_quote::Quote;

use crate::result::ValidationResult;

/// A single quote validation rule.
///
/// Business failures are returned as messages inside the results; `Err` is
/// reserved for faults the rule cannot turn into a customer-facing message
/// (e.g. a dangling pickup location reference).
pub trait QuoteValidationRule: Send + Sync {
    fn validate(&self, quote: &Quote) -> DomainResult<Vec<ValidationResult>>;
}

impl<R> QuoteValidationRule for Arc<R>
where
    R: QuoteValidationRule + ?Sized,
{
    fn validate(&self, quote: &Quote) -> DomainResult<Vec<ValidationResult>> {
        (**self).validate(quote)
    }
}

/// Runs an ordered list of rules over a quote and aggregates their results.
#[derive(Default)]
pub struct QuoteValidator {
    rules: Vec<Box<dyn QuoteValidationRule>>,
}

impl QuoteValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: impl QuoteValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Results of every rule, in rule order. The first fault aborts the run.
    pub fn validate(&self, quote: &Quote) -> DomainResult<Vec<ValidationResult>> {
        let mut results = Vec::new();
        for rule in &self.rules {
            results.extend(rule.validate(quote)?);
        }
        Ok(results)
    }

    /// All error messages across all rules, flattened.
    pub fn errors(&self, quote: &Quote) -> DomainResult<Vec<String>> {
        let errors: Vec<String> = self
            .validate(quote)?
            .into_iter()
            .flat_map(ValidationResult::into_errors)
            .collect();

        tracing::debug!(
            store_id = %quote.store_id(),
            rules = self.rules.len(),
            errors = errors.len(),
            "quote validated"
        );
        Ok(errors)
    }
}
