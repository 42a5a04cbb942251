//! Shared world state for bus factory BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use warren::bus_factory::{
    adapters::InMemoryBusBuilderFactory,
    domain::{HostMetadata, RabbitMqHost, RabbitMqHostSettings, ValidationResult},
    services::{BusConfigurationResult, RabbitMqBusFactoryConfigurator},
};

/// Configurator type used by the BDD world.
pub type TestConfigurator = RabbitMqBusFactoryConfigurator<InMemoryBusBuilderFactory, DefaultClock>;

/// Scenario world for bus factory behaviour tests.
pub struct BusFactoryWorld {
    /// The configurator under test.
    pub configurator: TestConfigurator,
    /// Registered hosts keyed by broker host name.
    pub hosts: Vec<(String, RabbitMqHost)>,
    /// Result of the last receive endpoint declaration.
    pub last_declaration: Option<BusConfigurationResult<()>>,
    /// Results of the last validation run.
    pub last_validation: Vec<ValidationResult>,
}

impl BusFactoryWorld {
    /// Creates a world with a configurator labelled for the current process.
    #[must_use]
    pub fn new() -> Self {
        Self {
            configurator: build_configurator(HostMetadata::current()),
            hosts: Vec::new(),
            last_declaration: None,
            last_validation: Vec::new(),
        }
    }

    /// Registers a broker host and remembers its handle.
    ///
    /// # Errors
    ///
    /// Returns an error when `host` is not a valid broker host name.
    pub fn register_host(&mut self, host: &str) -> Result<(), eyre::Report> {
        let settings = RabbitMqHostSettings::new(host)?;
        let handle = self.configurator.host(settings);
        self.hosts.push((host.to_owned(), handle));
        Ok(())
    }

    /// Looks up a previously registered host handle.
    ///
    /// # Errors
    ///
    /// Returns an error when no host with that name was registered.
    pub fn host(&self, host: &str) -> Result<&RabbitMqHost, eyre::Report> {
        self.hosts
            .iter()
            .find(|(name, _)| name == host)
            .map(|(_, handle)| handle)
            .ok_or_else(|| eyre::eyre!("host '{host}' was not registered in this scenario"))
    }
}

impl Default for BusFactoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BusFactoryWorld {
    BusFactoryWorld::default()
}

/// Builds a configurator backed by the in-memory bus builder.
#[must_use]
pub fn build_configurator(host_metadata: HostMetadata) -> TestConfigurator {
    RabbitMqBusFactoryConfigurator::new(InMemoryBusBuilderFactory::new(), Arc::new(DefaultClock))
        .with_host_metadata(host_metadata)
}
