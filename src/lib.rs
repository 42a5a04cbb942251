//! Warren: RabbitMQ bus configuration.
//!
//! This crate collects broker hosts, receive endpoints and pipeline
//! specifications for a RabbitMQ message bus, validates the collected
//! configuration, and hands it to a bus builder to produce a bus.
//!
//! # Architecture
//!
//! Warren follows hexagonal architecture principles:
//!
//! - **Domain**: Host settings, addresses, queue naming and validation results
//! - **Ports**: Specification and bus builder traits
//! - **Adapters**: Concrete bus builders (an in-memory builder is included)
//!
//! # Modules
//!
//! - [`bus_factory`]: Bus factory configurator and its collaborators

pub mod bus_factory;
