//! The file-like record capability consumed by compiled assertions.
//!
//! A candidate is eligible for matching only if it carries the two
//! structural markers of a file record: a message list and a history list.
//! Presence is what matters, not content. [`FileLike`] makes that gate an
//! explicit capability instead of ad-hoc structural probing.

use std::collections::BTreeMap;

/// A named field value read from a record.
///
/// Field checks compare string values; anything else a record stores under a
/// field is observable only as "present, but not a string".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A string value.
    Str(&'a str),
    /// A present value of some non-string type.
    Other,
}

/// Capability trait for candidates that can be matched.
///
/// Records are produced by an external file-abstraction layer; the matcher
/// reads them by name and never constructs or mutates them.
///
/// The two marker methods form the validity gate: every compiled assertion
/// rejects a candidate for which either returns `false`, before any
/// check-specific logic runs.
pub trait FileLike {
    /// Whether the record carries a message list.
    fn has_messages(&self) -> bool;

    /// Whether the record carries a history list.
    fn has_history(&self) -> bool;

    /// Full path, if set.
    fn path(&self) -> Option<&str> {
        None
    }

    /// Base name (last path segment), if set.
    fn basename(&self) -> Option<&str> {
        None
    }

    /// Extension including the leading separator (e.g. `.js`), if set.
    ///
    /// A dotfile's extension is the dotfile name itself.
    fn extname(&self) -> Option<&str> {
        None
    }

    /// Base name without the extension, if set.
    fn stem(&self) -> Option<&str> {
        None
    }

    /// An arbitrary additional named field.
    ///
    /// The well-known names (`path`, `basename`, `extname`, `stem`) are
    /// routed through their accessors by the matcher and do not need to be
    /// handled here.
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let _ = name;
        None
    }
}

/// Passes iff the candidate carries both structural markers.
pub(crate) fn gate(file: &dyn FileLike) -> bool {
    file.has_messages() && file.has_history()
}

/// Reads a field by name, routing well-known names through their accessors.
pub(crate) fn lookup<'a>(file: &'a dyn FileLike, name: &str) -> Option<FieldValue<'a>> {
    match name {
        "path" => file.path().map(FieldValue::Str),
        "basename" => file.basename().map(FieldValue::Str),
        "extname" => file.extname().map(FieldValue::Str),
        "stem" => file.stem().map(FieldValue::Str),
        _ => file.field(name),
    }
}

/// A minimal in-memory record for tests, doctests, and embedding hosts that
/// only need path-derived fields.
///
/// `basename`, `extname`, and `stem` are derived from the path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFile {
    path: Option<String>,
    fields: BTreeMap<String, String>,
}

impl MemoryFile {
    /// Creates a record with the given path.
    #[must_use]
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: Some(path.into()),
            fields: BTreeMap::new(),
        }
    }

    /// Creates a record with no path set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds an arbitrary string field.
    #[must_use]
    pub fn with_field<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    fn split_extension(&self) -> Option<(&str, usize)> {
        let basename = self.basename()?;
        let dot = basename.rfind('.')?;
        Some((basename, dot))
    }
}

impl FileLike for MemoryFile {
    fn has_messages(&self) -> bool {
        true
    }

    fn has_history(&self) -> bool {
        true
    }

    fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    fn basename(&self) -> Option<&str> {
        self.path().and_then(|p| p.rsplit('/').next())
    }

    fn extname(&self) -> Option<&str> {
        // `.gitignore` has the extension `.gitignore`.
        self.split_extension()
            .map(|(basename, dot)| &basename[dot..])
    }

    fn stem(&self) -> Option<&str> {
        match self.split_extension() {
            // Dotfile: the stem is the whole name.
            Some((basename, 0)) => Some(basename),
            Some((basename, dot)) => Some(&basename[..dot]),
            None => self.basename(),
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.fields.get(name).map(|v| FieldValue::Str(v.as_str()))
    }
}
