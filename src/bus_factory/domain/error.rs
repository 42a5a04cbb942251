//! Error types for bus factory domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing broker host settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostSettingsError {
    /// The broker host name is empty after trimming.
    #[error("broker host must not be empty")]
    EmptyHost,

    /// The broker host name is not a valid domain name or IP address.
    #[error("broker host '{0}' is not a valid domain name or IP address")]
    InvalidHost(String),

    /// Port zero cannot be used to reach a broker.
    #[error("broker port must be greater than zero")]
    InvalidPort,

    /// The virtual host is empty after trimming.
    #[error("virtual host must not be empty")]
    EmptyVirtualHost,

    /// A host address string could not be parsed.
    #[error("invalid broker address '{address}': {reason}")]
    InvalidAddress {
        /// The address as supplied.
        address: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A host address uses a scheme other than `amqp`, `amqps` or `rabbitmq`.
    #[error("unsupported broker address scheme '{0}'")]
    UnsupportedScheme(String),
}

/// Error returned when a transport address cannot be rendered as a URL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("transport address '{address}' is not a valid URL: {reason}")]
pub struct AddressError {
    /// The rendered address that failed to parse.
    pub address: String,
    /// Parser diagnostic.
    pub reason: String,
}
