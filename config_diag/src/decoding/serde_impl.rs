use super::{DecodingContext, DeserializationFailure};
use serde::de::{self, Expected, Unexpected};
use std::fmt::Display;

/// Lets deserializers that are generic over their error type report
/// classified failures directly.
///
/// Only the cases that map onto a dedicated variant are overridden. Everything
/// else (unknown fields, invalid values, lengths, variants) goes through
/// `custom` with serde's own message and becomes `ValueMalformed`. Failures are
/// created at the root; use [`DeserializationFailure::at`] to record where
/// they happened.
impl de::Error for DeserializationFailure {
    fn custom<T: Display>(msg: T) -> Self {
        DeserializationFailure::ValueMalformed {
            context: DecodingContext::at_root(msg.to_string()),
        }
    }

    fn invalid_type(unexp: Unexpected, exp: &dyn Expected) -> Self {
        let expected = exp.to_string();
        let expected_type = type_name(&expected).to_string();
        match unexp {
            Unexpected::Unit | Unexpected::Option => DeserializationFailure::NullNotAllowed {
                context: DecodingContext::at_root(format!(
                    "Expected {expected} but found null instead."
                )),
                expected_type,
            },
            _ => DeserializationFailure::TypeMismatch {
                context: DecodingContext::at_root(format!(
                    "invalid type: {unexp}, expected {expected}"
                )),
                expected_type,
            },
        }
    }

    fn missing_field(field: &'static str) -> Self {
        DeserializationFailure::FieldMissing {
            key: field.to_string(),
            context: DecodingContext::at_root(format!(
                "No value associated with key \"{field}\"."
            )),
        }
    }
}

/// Turns serde's `Expected` prose ("a string", "an integer") into a bare type
/// name for diagnostic titles. Names without a leading article pass through.
fn type_name(expected: &str) -> &str {
    expected
        .strip_prefix("a ")
        .or_else(|| expected.strip_prefix("an "))
        .unwrap_or(expected)
}
