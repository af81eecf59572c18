//! Readable diagnostics for configuration failures.
//!
//! [`ConfigurationError`] is the closed set of failures a command-line tool can
//! hit while locating, reading, decoding, or migrating its configuration.
//! Formatting an error yields a short message; decoding failures expand into a
//! keyed [`Diagnostic`] that names the offending field and its coding path:
//!
//! ```text
//! Failed to deserialize configuration: Unable to decode Int
//!   Reason: expected integer
//!   Coding Path: app -> version
//! ```
pub use crate::core::{Diagnostic, Entry, INDENT};
pub use decoding::{CodingPath, DecodingContext, DeserializationFailure, PathSegment};
pub use errors::{AppConfigurationError, ConfigurationError};
pub use reporting::report;

pub mod prelude;

mod core;
mod decoding;
mod errors;
mod reporting;
