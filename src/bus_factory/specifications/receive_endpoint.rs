//! Receive endpoint specification.

use crate::bus_factory::{
    domain::{RabbitMqHost, ReceiveEndpointSettings, ValidationResult, ValidationResults},
    ports::{
        BusBuilder, BusBuilderResult, BusFactorySpecification, PipeSpecification,
        ReceiveEndpointDefinition,
    },
};
use std::{iter, sync::Arc};
use tracing::debug;

/// Configuration of one receive endpoint: a queue on a host, its delivery
/// flags, and the pipe specifications scoped to it.
///
/// Flags may be changed any number of times until the owning configurator
/// builds a bus.
///
/// # Examples
///
/// ```
/// use warren::bus_factory::domain::{RabbitMqHost, RabbitMqHostSettings};
/// use warren::bus_factory::specifications::ReceiveEndpointSpecification;
///
/// let host = RabbitMqHost::new(RabbitMqHostSettings::new("broker").expect("valid host"));
/// let mut endpoint = ReceiveEndpointSpecification::new(host, "orders");
/// endpoint.durable(false).auto_delete();
/// assert!(endpoint.settings().is_temporary());
/// ```
#[derive(Debug, Clone)]
pub struct ReceiveEndpointSpecification {
    host: RabbitMqHost,
    settings: ReceiveEndpointSettings,
    pipe_specifications: Vec<Arc<dyn PipeSpecification>>,
}

impl ReceiveEndpointSpecification {
    /// Creates a specification for `queue_name` on `host` with default
    /// flags.
    #[must_use]
    pub fn new(host: RabbitMqHost, queue_name: impl Into<String>) -> Self {
        Self {
            host,
            settings: ReceiveEndpointSettings::new(queue_name),
            pipe_specifications: Vec::new(),
        }
    }

    /// Makes the queue exclusive to the bus connection.
    pub const fn exclusive(&mut self) -> &mut Self {
        self.settings.set_exclusive(true);
        self
    }

    /// Sets whether the queue survives broker restarts.
    pub const fn durable(&mut self, durable: bool) -> &mut Self {
        self.settings.set_durable(durable);
        self
    }

    /// Deletes the queue once its last consumer disconnects.
    pub const fn auto_delete(&mut self) -> &mut Self {
        self.settings.set_auto_delete(true);
        self
    }

    /// Sets the consumer prefetch count.
    pub const fn prefetch_count(&mut self, prefetch_count: u16) -> &mut Self {
        self.settings.set_prefetch_count(prefetch_count);
        self
    }

    /// Appends a pipe specification scoped to this endpoint.
    pub fn add_pipe_specification(
        &mut self,
        specification: Arc<dyn PipeSpecification>,
    ) -> &mut Self {
        self.pipe_specifications.push(specification);
        self
    }

    /// Returns the host the endpoint is bound to.
    #[must_use]
    pub const fn host(&self) -> &RabbitMqHost {
        &self.host
    }

    /// Returns the current queue name and flags.
    #[must_use]
    pub const fn settings(&self) -> &ReceiveEndpointSettings {
        &self.settings
    }

    /// Returns the endpoint-scoped pipe specifications.
    #[must_use]
    pub fn pipe_specifications(&self) -> &[Arc<dyn PipeSpecification>] {
        &self.pipe_specifications
    }

    /// Resolves the specification into the definition handed to a builder.
    #[must_use]
    pub fn definition(&self) -> ReceiveEndpointDefinition {
        ReceiveEndpointDefinition::new(
            self.host.clone(),
            self.settings.clone(),
            self.pipe_specifications.clone(),
        )
    }
}

impl BusFactorySpecification for ReceiveEndpointSpecification {
    fn validate(&self) -> ValidationResults<'_> {
        let queue_name = iter::once_with(|| {
            self.settings
                .queue_name()
                .trim()
                .is_empty()
                .then(|| ValidationResult::failure("QueueName", "The queue name must not be empty"))
        });
        let prefetch_count = iter::once_with(|| {
            (self.settings.prefetch_count() == 0).then(|| {
                ValidationResult::failure(
                    "PrefetchCount",
                    "The prefetch count must be greater than zero",
                )
            })
        });

        Box::new(
            queue_name
                .chain(prefetch_count)
                .flatten()
                .chain(
                    self.pipe_specifications
                        .iter()
                        .flat_map(|specification| specification.validate()),
                ),
        )
    }

    fn configure(&self, builder: &mut dyn BusBuilder) -> BusBuilderResult<()> {
        debug!(
            host_id = %self.host.id(),
            queue_name = self.settings.queue_name(),
            exclusive = self.settings.is_exclusive(),
            durable = self.settings.is_durable(),
            auto_delete = self.settings.is_auto_delete(),
            pipe_specifications = self.pipe_specifications.len(),
            "configuring receive endpoint"
        );
        builder.add_receive_endpoint(self.definition())
    }
}
