use crate::core::Diagnostic;
use getset::Getters;
use std::fmt::{self, Display};

mod serde_impl;

const PATH_SEPARATOR: &str = " -> ";

const REASON_LABEL: &str = "Reason";
const CODING_PATH_LABEL: &str = "Coding Path";

/// A single step into a nested value: a field name or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// The root-to-leaf location of a value inside a nested document.
///
/// Displays as the segments joined with `" -> "`; an empty path displays as an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath(Vec<PathSegment>);

impl CodingPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment at the leaf end.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.0.push(segment.into());
    }

    /// Inserts a segment at the root end.
    pub fn prepend(&mut self, segment: impl Into<PathSegment>) {
        self.0.insert(0, segment.into());
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(PATH_SEPARATOR)?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for CodingPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<PathSegment>> for CodingPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

/// Where a deserialization failure happened and what the decoder had to say about it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct DecodingContext {
    debug_description: String,
    coding_path: CodingPath,
}

impl DecodingContext {
    pub fn new(debug_description: impl Into<String>, coding_path: impl Into<CodingPath>) -> Self {
        Self {
            debug_description: debug_description.into(),
            coding_path: coding_path.into(),
        }
    }

    /// A context located at the document root.
    pub fn at_root(debug_description: impl Into<String>) -> Self {
        Self::new(debug_description, CodingPath::new())
    }

    pub(crate) fn coding_path_mut(&mut self) -> &mut CodingPath {
        &mut self.coding_path
    }
}

/// Why decoding a structured configuration document failed.
///
/// Values are produced by a deserializer (see the `serde::de::Error`
/// implementation) and rendered as a [`Diagnostic`] naming the offending field
/// and its location. `Other` covers anything the decoder could not classify.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeserializationFailure {
    FieldMissing {
        key: String,
        context: DecodingContext,
    },
    ValueMalformed {
        context: DecodingContext,
    },
    TypeMismatch {
        expected_type: String,
        context: DecodingContext,
    },
    NullNotAllowed {
        expected_type: String,
        context: DecodingContext,
    },
    Other,
}

impl DeserializationFailure {
    pub fn context(&self) -> Option<&DecodingContext> {
        match self {
            DeserializationFailure::FieldMissing { context, .. }
            | DeserializationFailure::ValueMalformed { context }
            | DeserializationFailure::TypeMismatch { context, .. }
            | DeserializationFailure::NullNotAllowed { context, .. } => Some(context),
            DeserializationFailure::Other => None,
        }
    }

    fn context_mut(&mut self) -> Option<&mut DecodingContext> {
        match self {
            DeserializationFailure::FieldMissing { context, .. }
            | DeserializationFailure::ValueMalformed { context }
            | DeserializationFailure::TypeMismatch { context, .. }
            | DeserializationFailure::NullNotAllowed { context, .. } => Some(context),
            DeserializationFailure::Other => None,
        }
    }

    /// Records that the failure happened inside `segment`.
    ///
    /// Call this while the failure propagates out of a nested value: each
    /// enclosing level prepends its own key or index, so the final path reads
    /// from the document root down to the failing field. `Other` carries no
    /// path and is returned unchanged.
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        if let Some(context) = self.context_mut() {
            context.coding_path_mut().prepend(segment);
        }
        self
    }

    /// The keyed diagnostic for this failure, or `None` for `Other`.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        let (title, context) = match self {
            DeserializationFailure::FieldMissing { key, context } => {
                (format!("\"{key}\" was not found."), context)
            }
            DeserializationFailure::ValueMalformed { context } => {
                ("Data corrupted.".to_string(), context)
            }
            DeserializationFailure::TypeMismatch {
                expected_type,
                context,
            } => (format!("Unable to decode {expected_type}"), context),
            DeserializationFailure::NullNotAllowed {
                expected_type,
                context,
            } => (
                format!("Tried to decode \"{expected_type}\" but found a null value instead."),
                context,
            ),
            DeserializationFailure::Other => return None,
        };

        Some(crate::diagnostic!(title;
            REASON_LABEL => context.debug_description(),
            CODING_PATH_LABEL => context.coding_path().to_string(),
        ))
    }

    pub fn render(&self) -> String {
        match self.diagnostic() {
            Some(diagnostic) => diagnostic.render(),
            None => "A decoding error occurred.".to_string(),
        }
    }
}

impl Display for DeserializationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for DeserializationFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(reason: &str, path: &[&str]) -> DecodingContext {
        DecodingContext::new(reason, path.iter().copied().collect::<CodingPath>())
    }

    #[test]
    fn test_type_mismatch() {
        let failure = DeserializationFailure::TypeMismatch {
            expected_type: "Int".to_string(),
            context: context("expected integer", &["app", "version"]),
        };

        assert_eq!(
            failure.render(),
            "Unable to decode Int\n  Reason: expected integer\n  Coding Path: app -> version"
        );
    }

    #[test]
    fn test_field_missing() {
        let failure = DeserializationFailure::FieldMissing {
            key: "identifier".to_string(),
            context: context("No value associated with key.", &["apps", "Demo"]),
        };

        assert_eq!(
            failure.to_string(),
            "\"identifier\" was not found.\n  \
            Reason: No value associated with key.\n  \
            Coding Path: apps -> Demo"
        );
    }

    #[test]
    fn test_value_malformed() {
        let failure = DeserializationFailure::ValueMalformed {
            context: context("The given data was not valid TOML.", &[]),
        };

        assert_eq!(
            failure.render(),
            "Data corrupted.\n  Reason: The given data was not valid TOML.\n  Coding Path: "
        );
    }

    #[test]
    fn test_null_not_allowed() {
        let failure = DeserializationFailure::NullNotAllowed {
            expected_type: "String".to_string(),
            context: context("Expected String value but found null.", &["apps", "Demo", "product"]),
        };

        assert_eq!(
            failure.render(),
            "Tried to decode \"String\" but found a null value instead.\n  \
            Reason: Expected String value but found null.\n  \
            Coding Path: apps -> Demo -> product"
        );
    }

    #[test]
    fn test_other_has_no_entries() {
        let failure = DeserializationFailure::Other;

        assert_eq!(failure.render(), "A decoding error occurred.");
        assert!(failure.diagnostic().is_none());
        assert!(failure.context().is_none());
    }

    #[test]
    fn test_empty_path_still_emits_coding_path_entry() {
        let failure = DeserializationFailure::ValueMalformed {
            context: DecodingContext::at_root("bad document"),
        };
        let diagnostic = failure.diagnostic().unwrap();
        let entry = diagnostic
            .entries()
            .iter()
            .find(|e| e.label() == "Coding Path")
            .expect("Coding Path entry should be present");

        assert_eq!(entry.value(), "");
    }

    #[test]
    fn test_path_display() {
        let path: CodingPath = ["a", "b", "c"].into_iter().collect();
        assert_eq!(path.to_string(), "a -> b -> c");

        let mixed = CodingPath::from(vec![
            PathSegment::from("apps"),
            PathSegment::from(2usize),
            PathSegment::from("name".to_string()),
        ]);
        assert_eq!(mixed.to_string(), "apps -> 2 -> name");

        assert_eq!(CodingPath::new().to_string(), "");
    }

    #[test]
    fn test_push_and_prepend() {
        let mut path = CodingPath::new();
        path.push("version");
        path.prepend("app");
        path.push(0usize);

        assert_eq!(path.to_string(), "app -> version -> 0");
        assert_eq!(path.segments().len(), 3);
        assert!(!path.is_empty());
    }

    #[test]
    fn test_at_prepends_as_failure_propagates() {
        let failure = DeserializationFailure::TypeMismatch {
            expected_type: "u32".to_string(),
            context: context("invalid type", &["version"]),
        }
        .at(0usize)
        .at("apps");

        assert_eq!(
            failure.context().unwrap().coding_path().to_string(),
            "apps -> 0 -> version"
        );
        assert_eq!(DeserializationFailure::Other.at("apps"), DeserializationFailure::Other);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let failure = DeserializationFailure::FieldMissing {
            key: "name".to_string(),
            context: context("missing", &["apps", "Demo"]),
        };

        assert_eq!(failure.render(), failure.render());
    }
}
