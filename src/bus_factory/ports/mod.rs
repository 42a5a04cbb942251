//! Port contracts for bus factory configuration.

mod builder;
mod specification;

pub use builder::{
    BuildBus, BusBuilder, BusBuilderError, BusBuilderFactory, BusBuilderResult, BusBuilderSeed,
    BusOf, ReceiveEndpointDefinition,
};
pub use specification::{BusFactorySpecification, PipeSpecification};
