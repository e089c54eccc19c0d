//! Serde-facing check description types (DTO layer).
//!
//! These types exist solely for deserialization of checks embedded in host
//! configuration. They are converted to the domain model via
//! [`crate::loader`].
//!
//! The shapes are deliberately dynamic: the catch-all variants keep invalid
//! kinds representable so the loader can report them as
//! [`crate::CheckError`]s instead of serde rejecting the document with a
//! shape mismatch.
//!
//! ```
//! use serde::Deserialize;
//! use filematch_core::Check;
//!
//! #[derive(Deserialize)]
//! struct PipelineConfig {
//!     #[serde(default)]
//!     filter: Check,
//! }
//!
//! let config: PipelineConfig = toml::from_str(r#"filter = "*.md""#)?;
//! # let _ = config.filter;
//! # Ok::<(), toml::de::Error>(())
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::check::{Check, CheckError};

/// Raw representation of a check description.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CheckDto {
    /// A path string.
    Path(String),
    /// A list of checks.
    List(Vec<CheckDto>),
    /// A field-spec mapping. `null` values mean "no constraint".
    Fields(BTreeMap<String, Option<FieldCheckDto>>),
    /// Anything else; rejected by the loader.
    Other(serde_json::Value),
}

/// Raw representation of a single field rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldCheckDto {
    /// The field must exist (`true`) or be absent (`false`).
    Exists(bool),
    /// The field's value must equal this string.
    Equals(String),
    /// The field's value must be a string with the given prefix and/or
    /// suffix.
    Partial {
        /// Required leading substring.
        #[serde(default)]
        prefix: Option<String>,
        /// Required trailing substring.
        #[serde(default)]
        suffix: Option<String>,
    },
    /// Anything else; rejected by the loader.
    Other(serde_json::Value),
}

impl TryFrom<CheckDto> for Check {
    type Error = CheckError;

    fn try_from(dto: CheckDto) -> Result<Self, Self::Error> {
        crate::loader::load(dto)
    }
}
