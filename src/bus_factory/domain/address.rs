//! Canonical transport addresses for RabbitMQ receive endpoints.

use super::{AddressError, RabbitMqHostSettings};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Scheme used by every transport address produced by this crate.
pub const TRANSPORT_SCHEME: &str = "rabbitmq";

/// Prefetch count advertised on source addresses.
pub const DEFAULT_PREFETCH_COUNT: u16 = 4;

/// A transport address: scheme, host, port, path and query parameters.
///
/// The path is kept exactly as composed (it may or may not carry a leading
/// slash); rendering normalizes it to a single separator after the
/// authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportAddress {
    scheme: String,
    host: String,
    port: u16,
    path: String,
    query: Vec<(String, String)>,
}

impl TransportAddress {
    /// Creates an address without query parameters.
    #[must_use]
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter. Parameters render in insertion order.
    #[must_use]
    pub fn with_query_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Returns the scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the composed path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters in insertion order.
    #[must_use]
    pub fn query_parameters(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the first value recorded for `key`.
    #[must_use]
    pub fn query_parameter(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the query string without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parses the rendered address as a URL.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] when the rendered form is not a valid URL,
    /// which can only happen for addresses built from unvalidated parts.
    pub fn to_url(&self) -> Result<Url, AddressError> {
        let rendered = self.to_string();
        Url::parse(&rendered).map_err(|err| AddressError {
            address: rendered.clone(),
            reason: err.to_string(),
        })
    }
}

impl fmt::Display for TransportAddress {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}://{}:{}/{}",
            self.scheme,
            self.host,
            self.port,
            self.path.trim_start_matches('/')
        )?;
        if !self.query.is_empty() {
            write!(formatter, "?{}", self.query_string())?;
        }
        Ok(())
    }
}

/// Builds the source address of `queue_name` on the broker described by
/// `settings`.
///
/// The path is the bare queue name on the root virtual host, otherwise the
/// virtual host and queue name joined by `/`. Source addresses always carry
/// `temporary=true&prefetch=4`.
///
/// # Examples
///
/// ```
/// use warren::bus_factory::domain::{RabbitMqHostSettings, source_address};
///
/// let settings = RabbitMqHostSettings::new("b")
///     .and_then(|settings| settings.with_virtual_host("/tenant"))
///     .expect("valid settings");
/// let address = source_address(&settings, "orders");
/// assert_eq!(address.path(), "/tenant/orders");
/// assert_eq!(
///     address.to_string(),
///     "rabbitmq://b:5672/tenant/orders?temporary=true&prefetch=4"
/// );
/// ```
#[must_use]
pub fn source_address(settings: &RabbitMqHostSettings, queue_name: &str) -> TransportAddress {
    let path = if settings.is_root_virtual_host() {
        queue_name.to_owned()
    } else {
        format!("{}/{queue_name}", settings.virtual_host())
    };

    TransportAddress::new(TRANSPORT_SCHEME, settings.host(), settings.port(), path)
        .with_query_parameter("temporary", "true")
        .with_query_parameter("prefetch", DEFAULT_PREFETCH_COUNT.to_string())
}
