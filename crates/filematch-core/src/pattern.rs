//! Path checks: plain name/extension literals vs magic glob patterns.

use globset::{Glob, GlobMatcher};

use crate::record::{gate, FileLike};

/// A compiled path check.
///
/// Classification happens once, at construction: a string containing
/// unescaped glob syntax is magic and is handed to the pattern compiler;
/// anything else is a plain literal compared against a record's base name
/// and extension.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    kind: PatternKind,
}

#[derive(Debug, Clone)]
enum PatternKind {
    /// Plain literal: equal to the base name or the extension.
    Name,
    /// Glob pattern matched against the full path.
    Glob(GlobMatcher),
}

impl PathPattern {
    /// Compiles a path check.
    ///
    /// # Errors
    ///
    /// Returns the pattern compiler's error verbatim when a magic pattern
    /// has malformed glob syntax. Plain literals never reach the compiler
    /// and never fail.
    pub fn new(raw: impl Into<String>) -> Result<Self, globset::Error> {
        let raw = raw.into();
        let kind = if is_magic(&raw) {
            PatternKind::Glob(Glob::new(&raw)?.compile_matcher())
        } else {
            PatternKind::Name
        };
        Ok(Self { raw, kind })
    }

    /// Whether the string classified as a glob pattern.
    #[must_use]
    pub fn is_magic(&self) -> bool {
        matches!(self.kind, PatternKind::Glob(_))
    }

    /// The pattern string as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Tests a record against the path check.
    ///
    /// Gate-failing candidates never match, before the pattern is looked at.
    #[must_use]
    pub fn matches(&self, file: &dyn FileLike) -> bool {
        if !gate(file) {
            return false;
        }
        match &self.kind {
            // One rule covers whole names, bare extensions, and dotfiles
            // (whose extension is the dotfile name itself).
            PatternKind::Name => {
                file.basename() == Some(self.raw.as_str())
                    || file.extname() == Some(self.raw.as_str())
            }
            PatternKind::Glob(matcher) => file.path().is_some_and(|p| matcher.is_match(p)),
        }
    }
}

/// A pattern is magic when it contains unescaped glob syntax: a wildcard
/// (`*`, `?`, `[`) or brace alternation (`{`), which compiles to more than
/// one alternative.
fn is_magic(pattern: &str) -> bool {
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '*' | '?' | '[' | '{' => return true,
            _ => {}
        }
    }
    false
}
