//! Application services for bus factory configuration.

mod configurator;

pub use configurator::{
    BusConfigurationError, BusConfigurationResult, RabbitMqBusFactoryConfigurator,
};
