//! Concurrency limit pipe specification.

use crate::bus_factory::{
    domain::{ValidationResult, ValidationResults},
    ports::PipeSpecification,
};
use std::iter;

/// Caps the number of messages consumed concurrently by the bus or by a
/// single endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrencyLimitSpecification {
    limit: usize,
}

impl ConcurrencyLimitSpecification {
    /// Creates a specification allowing `limit` concurrent consumers.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Returns the configured limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl PipeSpecification for ConcurrencyLimitSpecification {
    fn name(&self) -> &str {
        "ConcurrencyLimit"
    }

    fn validate(&self) -> ValidationResults<'_> {
        Box::new(
            iter::once_with(|| {
                (self.limit == 0).then(|| {
                    ValidationResult::failure(
                        "ConcurrencyLimit",
                        "The concurrency limit must be greater than zero",
                    )
                })
            })
            .flatten(),
        )
    }
}
