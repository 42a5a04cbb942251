//! Service layer for assembling a RabbitMQ bus from configuration.

use crate::bus_factory::{
    domain::{
        HostId, HostMetadata, RabbitMqHost, RabbitMqHostSettings, TransportAddress,
        ValidationResult, default_queue_name,
    },
    ports::{
        BuildBus, BusBuilderError, BusBuilderFactory, BusBuilderSeed, BusFactorySpecification,
        BusOf, PipeSpecification,
    },
    specifications::ReceiveEndpointSpecification,
};
use mockable::Clock;
use std::{fmt, iter, sync::Arc};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for bus configuration.
#[derive(Debug, Clone, Error)]
pub enum BusConfigurationError {
    /// A receive endpoint referenced a host that was never registered with
    /// this configurator.
    #[error("the host specified for receive endpoint '{queue_name}' was not configured ({host_id})")]
    EndpointTargetMissing {
        /// Identifier of the unregistered host.
        host_id: HostId,
        /// Queue name of the rejected endpoint.
        queue_name: String,
    },

    /// Validation reported failures and the bus was not built.
    #[error("bus configuration is invalid: {}", format_results(.0))]
    Validation(Vec<ValidationResult>),

    /// The bus builder rejected the configuration.
    #[error(transparent)]
    Builder(#[from] BusBuilderError),
}

fn format_results(results: &[ValidationResult]) -> String {
    results
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for configurator operations.
pub type BusConfigurationResult<T> = Result<T, BusConfigurationError>;

/// Collects hosts, receive endpoints and pipeline specifications, and
/// builds buses from them.
///
/// The first registered host is the default host. Registering it also
/// registers an exclusive, non-durable, auto-delete receive endpoint with a
/// generated `bus-{process}-{machine}-{id}` queue name, and fixes the local
/// address of every bus built by this configurator. Later hosts never change
/// either.
///
/// Validation and building are independent: [`validate`](Self::validate)
/// only reports, [`create_bus`](Self::create_bus) only builds, and
/// [`create_validated_bus`](Self::create_validated_bus) does both.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mockable::DefaultClock;
/// use warren::bus_factory::{
///     adapters::InMemoryBusBuilderFactory,
///     domain::RabbitMqHostSettings,
///     services::RabbitMqBusFactoryConfigurator,
/// };
///
/// let mut configurator =
///     RabbitMqBusFactoryConfigurator::new(InMemoryBusBuilderFactory::new(), Arc::new(DefaultClock));
/// let host = configurator.host(RabbitMqHostSettings::new("localhost").expect("valid host"));
/// configurator
///     .receive_endpoint(&host, "orders", |endpoint| {
///         endpoint.durable(true);
///     })
///     .expect("host is registered");
///
/// assert_eq!(configurator.validate().count(), 0);
/// let bus = configurator.create_bus().expect("bus builds");
/// assert_eq!(bus.receive_endpoints().len(), 2);
/// ```
pub struct RabbitMqBusFactoryConfigurator<F, C>
where
    F: BusBuilderFactory,
    C: Clock + Send + Sync,
{
    builder_factory: F,
    clock: Arc<C>,
    host_metadata: Option<HostMetadata>,
    hosts: Vec<RabbitMqHost>,
    specifications: Vec<Box<dyn BusFactorySpecification>>,
    pipe_specifications: Vec<Arc<dyn PipeSpecification>>,
    local_address: Option<TransportAddress>,
}

impl<F, C> RabbitMqBusFactoryConfigurator<F, C>
where
    F: BusBuilderFactory,
    C: Clock + Send + Sync,
{
    /// Creates an empty configurator.
    ///
    /// Generated queue names are labelled with the current process and
    /// machine unless [`with_host_metadata`](Self::with_host_metadata)
    /// supplies other names. The current names are only looked up when the
    /// first host is registered without explicit metadata.
    #[must_use]
    pub fn new(builder_factory: F, clock: Arc<C>) -> Self {
        Self {
            builder_factory,
            clock,
            host_metadata: None,
            hosts: Vec::new(),
            specifications: Vec::new(),
            pipe_specifications: Vec::new(),
            local_address: None,
        }
    }

    /// Replaces the process and machine names used for the default queue
    /// name. Only affects hosts registered afterwards.
    #[must_use]
    pub fn with_host_metadata(mut self, host_metadata: HostMetadata) -> Self {
        self.host_metadata = Some(host_metadata);
        self
    }

    /// Returns the process and machine names used for the default queue
    /// name, once supplied or resolved.
    #[must_use]
    pub const fn host_metadata(&self) -> Option<&HostMetadata> {
        self.host_metadata.as_ref()
    }

    /// Registers a broker host and returns its handle.
    ///
    /// The first host registered becomes the default host; see the type
    /// documentation. Host settings are validated at construction, so this
    /// never fails.
    pub fn host(&mut self, settings: RabbitMqHostSettings) -> RabbitMqHost {
        let host = self.register_host(settings);
        if self.hosts.len() == 1 {
            self.establish_default_endpoint(&host);
        }
        host
    }

    fn register_host(&mut self, settings: RabbitMqHostSettings) -> RabbitMqHost {
        let host = RabbitMqHost::new(settings);
        debug!(
            host_id = %host.id(),
            host = host.settings().host(),
            port = host.settings().port(),
            virtual_host = host.settings().virtual_host(),
            is_default = self.hosts.is_empty(),
            "registering broker host"
        );
        self.hosts.push(host.clone());
        host
    }

    // Runs exactly once, for the first host.
    fn establish_default_endpoint(&mut self, default_host: &RabbitMqHost) {
        let host_metadata = self.host_metadata.get_or_insert_with(HostMetadata::current);
        let queue_name = default_queue_name(host_metadata, &*self.clock);

        let mut endpoint = ReceiveEndpointSpecification::new(default_host.clone(), queue_name);
        endpoint.exclusive().durable(false).auto_delete();

        let local_address = default_host.settings().input_address(endpoint.settings());
        debug!(
            queue_name = endpoint.settings().queue_name(),
            %local_address,
            "default receive endpoint established"
        );

        self.local_address = Some(local_address);
        self.add_bus_factory_specification(endpoint);
    }

    /// Appends a specification applied, in registration order, whenever a
    /// bus is built.
    pub fn add_bus_factory_specification(
        &mut self,
        specification: impl BusFactorySpecification + 'static,
    ) {
        self.specifications.push(Box::new(specification));
    }

    /// Declares a receive endpoint for `queue_name` on `host`.
    ///
    /// `configure` runs immediately against the new specification and may
    /// change its flags or attach pipe specifications.
    ///
    /// # Errors
    ///
    /// Returns [`BusConfigurationError::EndpointTargetMissing`] when `host`
    /// was not registered with this configurator. Nothing is registered in
    /// that case and `configure` is not called.
    pub fn receive_endpoint<Configure>(
        &mut self,
        host: &RabbitMqHost,
        queue_name: impl Into<String>,
        configure: Configure,
    ) -> BusConfigurationResult<()>
    where
        Configure: FnOnce(&mut ReceiveEndpointSpecification),
    {
        let name = queue_name.into();
        if !self.hosts.contains(host) {
            warn!(
                host_id = %host.id(),
                queue_name = name.as_str(),
                "receive endpoint target host not configured"
            );
            return Err(BusConfigurationError::EndpointTargetMissing {
                host_id: host.id(),
                queue_name: name,
            });
        }

        let mut endpoint = ReceiveEndpointSpecification::new(host.clone(), name);
        configure(&mut endpoint);
        debug!(
            host_id = %host.id(),
            queue_name = endpoint.settings().queue_name(),
            "receive endpoint declared"
        );
        self.add_bus_factory_specification(endpoint);
        Ok(())
    }

    /// Appends a bus-level pipe specification.
    pub fn add_pipe_specification(&mut self, specification: Arc<dyn PipeSpecification>) {
        self.pipe_specifications.push(specification);
    }

    /// Returns the factory used to create bus builders.
    #[must_use]
    pub const fn builder_factory(&self) -> &F {
        &self.builder_factory
    }

    /// Returns registered hosts in registration order.
    #[must_use]
    pub fn hosts(&self) -> &[RabbitMqHost] {
        &self.hosts
    }

    /// Returns the default (first registered) host.
    #[must_use]
    pub fn default_host(&self) -> Option<&RabbitMqHost> {
        self.hosts.first()
    }

    /// Returns the local address derived from the default endpoint.
    #[must_use]
    pub const fn local_address(&self) -> Option<&TransportAddress> {
        self.local_address.as_ref()
    }

    /// Returns the number of registered bus factory specifications,
    /// including the default endpoint.
    #[must_use]
    pub fn specification_count(&self) -> usize {
        self.specifications.len()
    }

    /// Returns the number of bus-level pipe specifications.
    #[must_use]
    pub fn pipe_specification_count(&self) -> usize {
        self.pipe_specifications.len()
    }

    /// Lazily validates the configuration.
    ///
    /// Yields a host failure when no host is registered, then the results
    /// of every bus factory specification, then those of every bus-level
    /// pipe specification, each group in registration order. The iterator
    /// computes results on demand; call again to re-run validation.
    pub fn validate(&self) -> impl Iterator<Item = ValidationResult> + '_ {
        let host_check = iter::once_with(|| {
            self.hosts
                .is_empty()
                .then(|| ValidationResult::failure("Host", "At least one host must be defined"))
        })
        .flatten();

        host_check
            .chain(
                self.specifications
                    .iter()
                    .flat_map(|specification| specification.validate()),
            )
            .chain(
                self.pipe_specifications
                    .iter()
                    .flat_map(|specification| specification.validate()),
            )
    }

    /// Builds a bus from the current configuration.
    ///
    /// A fresh builder is seeded with the hosts, the local address and the
    /// bus-level pipe specifications; every bus factory specification is
    /// then applied in registration order and the builder is finalized.
    /// Validation is not run. Each call produces an independent bus.
    ///
    /// # Errors
    ///
    /// Returns [`BusConfigurationError::Builder`] when applying a
    /// specification or finalizing the builder fails.
    pub fn create_bus(&self) -> BusConfigurationResult<BusOf<F>> {
        let seed = BusBuilderSeed {
            hosts: self.hosts.clone(),
            local_address: self.local_address.clone(),
            pipe_specifications: self.pipe_specifications.clone(),
        };
        let mut builder = self.builder_factory.create_builder(seed);

        for (index, specification) in self.specifications.iter().enumerate() {
            debug!(index, "applying bus factory specification");
            specification.configure(&mut builder)?;
        }

        let bus = builder.build()?;
        info!(
            hosts = self.hosts.len(),
            specifications = self.specifications.len(),
            pipe_specifications = self.pipe_specifications.len(),
            "bus created"
        );
        Ok(bus)
    }

    /// Validates the configuration and builds a bus only when no failure
    /// is reported. Warnings do not block the build.
    ///
    /// # Errors
    ///
    /// Returns [`BusConfigurationError::Validation`] carrying every failure,
    /// or the errors of [`create_bus`](Self::create_bus).
    pub fn create_validated_bus(&self) -> BusConfigurationResult<BusOf<F>> {
        let failures: Vec<ValidationResult> =
            self.validate().filter(ValidationResult::is_failure).collect();
        if !failures.is_empty() {
            warn!(failures = failures.len(), "bus configuration failed validation");
            return Err(BusConfigurationError::Validation(failures));
        }
        self.create_bus()
    }
}

impl<F, C> fmt::Debug for RabbitMqBusFactoryConfigurator<F, C>
where
    F: BusBuilderFactory,
    C: Clock + Send + Sync,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RabbitMqBusFactoryConfigurator")
            .field("host_metadata", &self.host_metadata)
            .field("hosts", &self.hosts)
            .field("specifications", &self.specifications)
            .field("pipe_specifications", &self.pipe_specifications)
            .field("local_address", &self.local_address)
            .finish_non_exhaustive()
    }
}
