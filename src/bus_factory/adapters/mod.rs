//! Adapter implementations for bus factory ports.

pub mod memory;

pub use memory::{InMemoryBus, InMemoryBusBuilder, InMemoryBusBuilderFactory};
