//! Domain model for bus factory configuration.
//!
//! The domain covers broker host settings, receive endpoint settings,
//! transport address derivation, queue naming, and validation diagnostics.
//! Builder and pipeline collaborators remain outside this boundary.

mod address;
mod endpoint;
mod error;
mod host;
mod ids;
mod queue_name;
mod validation;

pub use address::{DEFAULT_PREFETCH_COUNT, TRANSPORT_SCHEME, TransportAddress, source_address};
pub use endpoint::ReceiveEndpointSettings;
pub use error::{AddressError, HostSettingsError};
pub use host::{
    DEFAULT_PORT, DEFAULT_TLS_PORT, ROOT_VIRTUAL_HOST, RabbitMqHost, RabbitMqHostSettings,
};
pub use ids::HostId;
pub use queue_name::{
    DEFAULT_QUEUE_PREFIX, HostMetadata, default_queue_name, sanitize_queue_name_part,
    unique_id_at,
};
pub use validation::{ValidationDisposition, ValidationResult, ValidationResults};
