use getset::Getters;
use std::fmt::{self, Display};

mod macros;

/// One level of indentation applied to every entry line of a [`Diagnostic`].
pub const INDENT: &str = "  ";

/// A single `label: value` line of a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Entry {
    label: String,
    value: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// A title line followed by an indented, keyed list of details.
///
/// This is the building block for every multi-line message the crate produces.
/// A `Diagnostic` is a plain value: it is assembled once, then rendered with
/// [`Diagnostic::render`] or through its `Display` implementation.
///
/// ```text
/// Unable to decode Int
///   Reason: expected integer
///   Coding Path: app -> version
/// ```
///
/// Entries keep the order in which they were added. Duplicate labels are kept
/// as-is, and values are not escaped: every line after the first line of a
/// multi-line value is indented to the entry's level, so the value reads as
/// one block under its label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Diagnostic {
    title: String,
    entries: Vec<Entry>,
}

impl Diagnostic {
    /// Creates a diagnostic with the given title and no entries.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Appends an entry and returns the diagnostic, for chained construction.
    pub fn entry(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_entry(label, value);
        self
    }

    pub fn push_entry(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Entry::new(label, value));
    }

    /// Renders the title and every entry, one per line, without a trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        for entry in &self.entries {
            write!(f, "\n{INDENT}{}: ", entry.label)?;
            for (i, line) in entry.value.split('\n').enumerate() {
                if i > 0 {
                    write!(f, "\n{INDENT}")?;
                }
                f.write_str(line)?;
            }
        }
        Ok(())
    }
}
