//! # filematch-core
//!
//! Compiles heterogeneous check descriptions into reusable boolean
//! assertions over file-like records.
//!
//! Document-processing pipelines use this to decide, cheaply and
//! repeatedly, whether a record should be included in some operation
//! ("process only `*.md` files", "skip records without a `data` field").
//!
//! # Architecture
//!
//! ```text
//! TOML/JSON text
//!   ↓ serde (DTO layer)
//! CheckDto
//!   ↓ loader (validate + convert)
//! Check (pure domain model)   ←  or built directly in Rust
//!   ↓ convert()
//! Assert — reusable boolean test over &dyn FileLike
//! ```
//!
//! # Example
//!
//! ```
//! use filematch_core::{convert, MemoryFile};
//!
//! let test = convert("*.{js,jsx}")?;
//! assert!(test.matches(&MemoryFile::new("index.js")));
//! assert!(!test.matches(&MemoryFile::new("readme.md")));
//! # Ok::<(), filematch_core::CheckError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod assert;
pub mod check;
pub mod dto;
pub mod fields;
pub mod loader;
pub mod pattern;
pub mod record;

pub use assert::{convert, is, Assert};
pub use check::{Check, CheckError, FieldCheck, Predicate};
pub use fields::FieldMatcher;
pub use pattern::PathPattern;
pub use record::{FieldValue, FileLike, MemoryFile};
