//! RabbitMQ bus factory configuration.
//!
//! Collects broker hosts, receive endpoints and pipeline specifications,
//! validates them, and builds a bus through a pluggable bus builder. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Built-in specifications in [`specifications`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod specifications;

#[cfg(test)]
mod tests;
