//! Common types and traits for all records

pub mod envelope;
pub mod record;
pub mod record_id;

// Re-exports
pub use envelope::{ApiEnvelope, EnvelopeError, ProblemDetails};
pub use record::Record;
pub use record_id::opaque_id;
