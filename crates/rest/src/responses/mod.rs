//! Response formatting for the list API.
//!
//! - [`envelope`] - Success and failure envelopes

pub mod envelope;

pub use envelope::{FailureDetail, ResponseEnvelope};
