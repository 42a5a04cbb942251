//! Bus builder port: the collaborator that turns validated configuration
//! into a running bus.

use super::PipeSpecification;
use crate::bus_factory::domain::{
    HostId, RabbitMqHost, ReceiveEndpointSettings, TransportAddress,
};
use std::sync::Arc;
use thiserror::Error;

/// Result type for bus builder operations.
pub type BusBuilderResult<T> = Result<T, BusBuilderError>;

/// Resolved receive endpoint handed to a bus builder.
#[derive(Debug, Clone)]
pub struct ReceiveEndpointDefinition {
    host: RabbitMqHost,
    settings: ReceiveEndpointSettings,
    pipe_specifications: Vec<Arc<dyn PipeSpecification>>,
}

impl ReceiveEndpointDefinition {
    /// Creates an endpoint definition.
    #[must_use]
    pub const fn new(
        host: RabbitMqHost,
        settings: ReceiveEndpointSettings,
        pipe_specifications: Vec<Arc<dyn PipeSpecification>>,
    ) -> Self {
        Self {
            host,
            settings,
            pipe_specifications,
        }
    }

    /// Returns the host the endpoint consumes from.
    #[must_use]
    pub const fn host(&self) -> &RabbitMqHost {
        &self.host
    }

    /// Returns the queue name and delivery flags.
    #[must_use]
    pub const fn settings(&self) -> &ReceiveEndpointSettings {
        &self.settings
    }

    /// Returns the endpoint-scoped pipe specifications in registration
    /// order.
    #[must_use]
    pub fn pipe_specifications(&self) -> &[Arc<dyn PipeSpecification>] {
        &self.pipe_specifications
    }
}

/// Initial state handed to a bus builder before any specification is
/// applied.
#[derive(Debug, Clone, Default)]
pub struct BusBuilderSeed {
    /// Registered hosts; the first one is the default host.
    pub hosts: Vec<RabbitMqHost>,
    /// Local (return) address of the bus, present once a host exists.
    pub local_address: Option<TransportAddress>,
    /// Bus-level pipe specifications in registration order.
    pub pipe_specifications: Vec<Arc<dyn PipeSpecification>>,
}

/// Registration surface exposed to specifications while a bus is built.
pub trait BusBuilder {
    /// Registers a receive endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`BusBuilderError`] when the builder rejects the endpoint.
    fn add_receive_endpoint(&mut self, endpoint: ReceiveEndpointDefinition)
    -> BusBuilderResult<()>;

    /// Adds a bus-level pipeline stage.
    ///
    /// # Errors
    ///
    /// Returns [`BusBuilderError`] when the builder rejects the stage.
    fn add_pipe_specification(
        &mut self,
        specification: Arc<dyn PipeSpecification>,
    ) -> BusBuilderResult<()>;
}

/// A bus builder that can be finalized into a bus.
pub trait BuildBus: BusBuilder {
    /// The bus control handle produced by [`BuildBus::build`].
    type Bus;

    /// Finalizes the builder.
    ///
    /// # Errors
    ///
    /// Returns [`BusBuilderError`] when the collected configuration cannot
    /// form a bus.
    fn build(self) -> BusBuilderResult<Self::Bus>;
}

/// Creates seeded bus builders.
pub trait BusBuilderFactory {
    /// Builder type produced by this factory.
    type Builder: BuildBus;

    /// Creates a fresh builder from `seed`.
    fn create_builder(&self, seed: BusBuilderSeed) -> Self::Builder;
}

/// Bus type produced by a builder factory.
pub type BusOf<F> = <<F as BusBuilderFactory>::Builder as BuildBus>::Bus;

/// Errors raised by bus builder adapters.
#[derive(Debug, Clone, Error)]
pub enum BusBuilderError {
    /// The builder was asked to build a bus without any host.
    #[error("at least one host must be defined to build a bus")]
    NoHosts,

    /// A receive endpoint references a host the builder was not seeded
    /// with.
    #[error("receive endpoint '{queue_name}' references unknown host {host_id}")]
    UnknownHost {
        /// Identifier of the unknown host.
        host_id: HostId,
        /// Queue name of the rejected endpoint.
        queue_name: String,
    },

    /// Two receive endpoints use the same queue on the same host.
    #[error("queue '{queue_name}' is already configured on host {host_id}")]
    DuplicateQueue {
        /// Host identifier.
        host_id: HostId,
        /// Duplicated queue name.
        queue_name: String,
    },

    /// Adapter-specific failure.
    #[error("bus builder error: {0}")]
    Adapter(Arc<dyn std::error::Error + Send + Sync>),
}

impl BusBuilderError {
    /// Wraps an adapter-specific error.
    #[must_use]
    pub fn adapter(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Adapter(Arc::new(err))
    }
}
