//! Unit tests for bus factory configuration.


use crate::bus_factory::{
    domain::{ValidationResult, ValidationResults},
    ports::PipeSpecification,
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Pipe specification reporting canned results and counting validations.
#[derive(Debug, Default)]
pub(super) struct RecordingPipeSpecification {
    name: String,
    results: Vec<ValidationResult>,
    validations: AtomicUsize,
}

impl RecordingPipeSpecification {
    pub(super) fn named(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_owned(),
            ..Self::default()
        })
    }

    pub(super) fn reporting(name: &str, results: Vec<ValidationResult>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_owned(),
            results,
            validations: AtomicUsize::new(0),
        })
    }

    pub(super) fn validation_count(&self) -> usize {
        self.validations.load(Ordering::SeqCst)
    }
}

impl PipeSpecification for RecordingPipeSpecification {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> ValidationResults<'_> {
        self.validations.fetch_add(1, Ordering::SeqCst);
        Box::new(self.results.iter().cloned())
    }
}
