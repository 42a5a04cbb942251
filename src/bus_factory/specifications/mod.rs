//! Built-in bus factory and pipe specifications.

mod concurrency_limit;
mod receive_endpoint;

pub use concurrency_limit::ConcurrencyLimitSpecification;
pub use receive_endpoint::ReceiveEndpointSpecification;
