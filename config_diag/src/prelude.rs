//! The `config_diag` prelude.

pub use crate::decoding::{CodingPath, DecodingContext, DeserializationFailure, PathSegment};
pub use crate::errors::{AppConfigurationError, ConfigurationError};
pub use crate::{Diagnostic, Entry, diagnostic, report};
