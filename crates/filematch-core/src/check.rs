//! Pure domain model for check descriptions.
//!
//! No I/O and no dynamic shapes here; the serde-facing DTO layer lives in
//! [`crate::dto`] and is converted into this model by [`crate::loader`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::record::FileLike;

/// A caller-supplied boolean test over a record.
///
/// Cheap to clone; the underlying function is shared.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&dyn FileLike) -> bool + Send + Sync>);

impl Predicate {
    /// Wraps a function as a predicate check.
    #[must_use]
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&dyn FileLike) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(test))
    }

    pub(crate) fn call(&self, file: &dyn FileLike) -> bool {
        (self.0)(file)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

/// A per-field rule applied to one of a record's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    /// No constraint; the key is skipped.
    Ignore,
    /// The field must exist (`true`) or be absent (`false`); its value is
    /// irrelevant.
    Exists(bool),
    /// The field's value must be a string exactly equal to this one.
    Equals(String),
    /// The field's value must be a string starting and/or ending with the
    /// given parts. With neither part given, the value merely has to be a
    /// string.
    Partial {
        /// Required leading substring.
        prefix: Option<String>,
        /// Required trailing substring.
        suffix: Option<String>,
    },
}

/// A check description: the caller-supplied specification of what counts as
/// a match.
///
/// Compile it once with [`crate::convert`] and apply the resulting
/// [`crate::Assert`] to any number of records.
///
/// Deserialization goes through the DTO layer, so checks can be embedded in
/// host configuration; see [`crate::dto`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "crate::dto::CheckDto")]
pub enum Check {
    /// The absent check; matches any valid file-like record.
    #[default]
    Any,
    /// A file name, extension, dotfile name, or glob pattern.
    Path(String),
    /// A caller-supplied predicate.
    Predicate(Predicate),
    /// Per-field rules, all of which must pass.
    Fields(BTreeMap<String, FieldCheck>),
    /// A list of checks of which at least one must pass.
    AnyOf(Vec<Check>),
}

impl Check {
    /// A path check (name, extension, dotfile name, or glob pattern).
    #[must_use]
    pub fn path(pattern: impl Into<String>) -> Self {
        Check::Path(pattern.into())
    }

    /// A predicate check.
    #[must_use]
    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&dyn FileLike) -> bool + Send + Sync + 'static,
    {
        Check::Predicate(Predicate::new(test))
    }

    /// A field-spec check from `(field, rule)` pairs.
    #[must_use]
    pub fn fields<I, K>(specs: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldCheck)>,
        K: Into<String>,
    {
        Check::Fields(specs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// An any-of check over the given list.
    #[must_use]
    pub fn any_of(checks: impl IntoIterator<Item = Check>) -> Self {
        Check::AnyOf(checks.into_iter().collect())
    }
}

impl From<&str> for Check {
    fn from(pattern: &str) -> Self {
        Check::Path(pattern.to_string())
    }
}

impl From<String> for Check {
    fn from(pattern: String) -> Self {
        Check::Path(pattern)
    }
}

impl From<Vec<Check>> for Check {
    fn from(checks: Vec<Check>) -> Self {
        Check::AnyOf(checks)
    }
}

/// Errors raised while loading or compiling a check description.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The check description is neither absent, string, array, nor object.
    #[error("expected function, string, array, or object as test, found {kind}")]
    InvalidCheckKind {
        /// Kind family of the received value (e.g. `number`, `boolean`).
        kind: String,
    },

    /// A field-spec value is neither null, boolean, string, nor a
    /// prefix/suffix object.
    #[error("invalid spec `{value}` for field `{field}`, expected `boolean`, `string`, or `object`")]
    InvalidFieldSpecKind {
        /// The field whose spec is invalid.
        field: String,
        /// The offending value, rendered as JSON.
        value: String,
    },

    /// The pattern compiler rejected a glob; propagated verbatim.
    #[error(transparent)]
    Pattern(#[from] globset::Error),
}
