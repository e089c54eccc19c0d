//! # filematch
//!
//! Check whether a file-like record matches a description: a name or glob
//! string, a field spec, a caller-supplied predicate, or a list of those.
//!
//! ## Quick Start
//!
//! ```
//! use filematch::{convert, is, Check, MemoryFile};
//!
//! let readme = MemoryFile::new("readme.md");
//!
//! // Compile once, test many records.
//! let markdown = convert("*.md")?;
//! assert!(markdown.matches(&readme));
//! assert!(!markdown.matches(&MemoryFile::new("index.js")));
//!
//! // Or compile and evaluate in one call.
//! assert!(is(&readme, "readme.md")?);
//! assert!(is(&readme, ".md")?);
//! assert!(is(&readme, Check::predicate(|f| f.stem() == Some("readme")))?);
//! # Ok::<(), filematch::CheckError>(())
//! ```
//!
//! ## Configuration-Driven Checks
//!
//! [`Check`] deserializes through a validating DTO layer, so pipelines can
//! embed checks in their own config structs:
//!
//! ```
//! use serde::Deserialize;
//! use filematch::{convert, Check, MemoryFile};
//!
//! #[derive(Deserialize)]
//! struct Step {
//!     #[serde(default)]
//!     filter: Check,
//! }
//!
//! let step: Step = toml::from_str(r#"filter = ["*.md", ".txt"]"#)?;
//! let filter = convert(step.filter)?;
//! assert!(filter.matches(&MemoryFile::new("readme.md")));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A check description is one of:
//!
//! - absent (`null`) — matches any valid record
//! - a plain string — equal to a record's base name or extension
//! - a glob string — matched against a record's full path
//! - a field-spec mapping — existence, equality, and prefix/suffix rules
//! - a predicate function (Rust only)
//! - a list of any of these — matches when any element matches

#![forbid(unsafe_code)]

pub use filematch_core::*;
