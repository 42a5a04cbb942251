//! In-memory bus builder adapter.
//!
//! The adapter records every receive endpoint and pipeline stage applied to
//! it and produces an inspectable [`InMemoryBus`]. It is suitable for unit
//! and integration tests and for local deterministic tooling that needs to
//! inspect the assembled configuration without a broker.

use crate::bus_factory::{
    domain::{RabbitMqHost, TransportAddress},
    ports::{
        BuildBus, BusBuilder, BusBuilderError, BusBuilderFactory, BusBuilderResult,
        BusBuilderSeed, PipeSpecification, ReceiveEndpointDefinition,
    },
};
use std::sync::Arc;
use tracing::debug;

/// Factory producing [`InMemoryBusBuilder`] instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryBusBuilderFactory;

impl InMemoryBusBuilderFactory {
    /// Creates the factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BusBuilderFactory for InMemoryBusBuilderFactory {
    type Builder = InMemoryBusBuilder;

    fn create_builder(&self, seed: BusBuilderSeed) -> Self::Builder {
        InMemoryBusBuilder::new(seed)
    }
}

/// Bus builder that keeps the assembled configuration in memory.
///
/// Endpoints must be bound to a host from the seed, and a queue name may be
/// used only once per host.
#[derive(Debug)]
pub struct InMemoryBusBuilder {
    seed: BusBuilderSeed,
    receive_endpoints: Vec<ReceiveEndpointDefinition>,
    pipe_stages: Vec<Arc<dyn PipeSpecification>>,
}

impl InMemoryBusBuilder {
    /// Creates a builder from `seed`.
    #[must_use]
    pub const fn new(seed: BusBuilderSeed) -> Self {
        Self {
            seed,
            receive_endpoints: Vec::new(),
            pipe_stages: Vec::new(),
        }
    }

    /// Returns the endpoints registered so far.
    #[must_use]
    pub fn receive_endpoints(&self) -> &[ReceiveEndpointDefinition] {
        &self.receive_endpoints
    }
}

impl BusBuilder for InMemoryBusBuilder {
    fn add_receive_endpoint(
        &mut self,
        endpoint: ReceiveEndpointDefinition,
    ) -> BusBuilderResult<()> {
        let host_id = endpoint.host().id();
        let queue_name = endpoint.settings().queue_name();

        if !self.seed.hosts.iter().any(|host| host.id() == host_id) {
            return Err(BusBuilderError::UnknownHost {
                host_id,
                queue_name: queue_name.to_owned(),
            });
        }

        let is_duplicate = self.receive_endpoints.iter().any(|existing| {
            existing.host().id() == host_id && existing.settings().queue_name() == queue_name
        });
        if is_duplicate {
            return Err(BusBuilderError::DuplicateQueue {
                host_id,
                queue_name: queue_name.to_owned(),
            });
        }

        debug!(%host_id, queue_name, "receive endpoint added to in-memory bus");
        self.receive_endpoints.push(endpoint);
        Ok(())
    }

    fn add_pipe_specification(
        &mut self,
        specification: Arc<dyn PipeSpecification>,
    ) -> BusBuilderResult<()> {
        debug!(
            specification = specification.name(),
            "pipeline stage added to in-memory bus"
        );
        self.pipe_stages.push(specification);
        Ok(())
    }
}

impl BuildBus for InMemoryBusBuilder {
    type Bus = InMemoryBus;

    fn build(self) -> BusBuilderResult<Self::Bus> {
        if self.seed.hosts.is_empty() {
            return Err(BusBuilderError::NoHosts);
        }

        let mut pipe_specifications = self.seed.pipe_specifications;
        pipe_specifications.extend(self.pipe_stages);

        Ok(InMemoryBus {
            hosts: self.seed.hosts,
            local_address: self.seed.local_address,
            pipe_specifications,
            receive_endpoints: self.receive_endpoints,
        })
    }
}

/// Bus assembled by [`InMemoryBusBuilder`].
#[derive(Debug, Clone)]
pub struct InMemoryBus {
    hosts: Vec<RabbitMqHost>,
    local_address: Option<TransportAddress>,
    pipe_specifications: Vec<Arc<dyn PipeSpecification>>,
    receive_endpoints: Vec<ReceiveEndpointDefinition>,
}

impl InMemoryBus {
    /// Returns the hosts the bus connects to; the first is the default.
    #[must_use]
    pub fn hosts(&self) -> &[RabbitMqHost] {
        &self.hosts
    }

    /// Returns the local (return) address of the bus.
    #[must_use]
    pub const fn local_address(&self) -> Option<&TransportAddress> {
        self.local_address.as_ref()
    }

    /// Returns bus-level pipe specifications: the seeded ones followed by
    /// stages added while specifications were applied.
    #[must_use]
    pub fn pipe_specifications(&self) -> &[Arc<dyn PipeSpecification>] {
        &self.pipe_specifications
    }

    /// Returns receive endpoints in the order they were applied.
    #[must_use]
    pub fn receive_endpoints(&self) -> &[ReceiveEndpointDefinition] {
        &self.receive_endpoints
    }

    /// Finds the receive endpoint consuming `queue_name`.
    #[must_use]
    pub fn receive_endpoint(&self, queue_name: &str) -> Option<&ReceiveEndpointDefinition> {
        self.receive_endpoints
            .iter()
            .find(|endpoint| endpoint.settings().queue_name() == queue_name)
    }
}
