//! Specification capabilities applied by the bus factory.

use super::{BusBuilder, BusBuilderResult};
use crate::bus_factory::domain::ValidationResults;
use std::fmt;

/// A unit of message-processing configuration.
///
/// Pipe specifications are scoped either to the whole bus or to a single
/// receive endpoint. They are shared between the configurator and every bus
/// it builds, so they are handed around as `Arc<dyn PipeSpecification>`.
pub trait PipeSpecification: fmt::Debug + Send + Sync {
    /// Short descriptive name used in diagnostics.
    fn name(&self) -> &str;

    /// Lazily validates the specification.
    ///
    /// Calling this again re-runs validation from the start.
    fn validate(&self) -> ValidationResults<'_>;
}

/// Configuration unit that can validate itself and apply itself to a bus
/// builder.
///
/// Receive endpoint specifications are the built-in implementation; callers
/// may register their own.
pub trait BusFactorySpecification: fmt::Debug + Send + Sync {
    /// Lazily validates the specification and everything nested in it.
    fn validate(&self) -> ValidationResults<'_>;

    /// Applies the specification to `builder`.
    ///
    /// # Errors
    ///
    /// Returns whatever [`BusBuilderError`](super::BusBuilderError) the
    /// builder raises.
    fn configure(&self, builder: &mut dyn BusBuilder) -> BusBuilderResult<()>;
}
