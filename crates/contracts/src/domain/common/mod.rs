//! Common types shared by all catalog aggregates

pub mod aggregate_root;
pub mod envelope;
pub mod wire_format;

// Re-exports
pub use aggregate_root::AggregateRoot;
pub use envelope::ListEnvelope;
pub use wire_format::{parse_decimal, HasId};

/// Primary key as issued by the REST backend.
pub type EntityId = i64;
