//! Compiling check descriptions into reusable assertions.

use tracing::debug;

use crate::check::{Check, CheckError, Predicate};
use crate::fields::FieldMatcher;
use crate::pattern::PathPattern;
use crate::record::{gate, FileLike};

/// A compiled, reusable boolean test produced from a [`Check`].
///
/// Behavior is fully determined by the check description at compile time;
/// evaluation is pure and free of shared mutable state, so an `Assert` can
/// be cloned and used from any number of threads without coordination.
#[derive(Debug, Clone)]
pub struct Assert {
    kind: AssertKind,
}

#[derive(Debug, Clone)]
enum AssertKind {
    /// The absent check: the record gate alone.
    Gate,
    Path(PathPattern),
    Predicate(Predicate),
    Fields(FieldMatcher),
    AnyOf(Vec<Assert>),
}

impl Assert {
    /// Tests a candidate.
    ///
    /// Gate-failing candidates never match, regardless of the check kind.
    #[must_use]
    pub fn matches(&self, file: &dyn FileLike) -> bool {
        match &self.kind {
            AssertKind::Gate => gate(file),
            AssertKind::Path(pattern) => pattern.matches(file),
            AssertKind::Predicate(test) => gate(file) && test.call(file),
            AssertKind::Fields(matcher) => matcher.matches(file),
            AssertKind::AnyOf(asserts) => {
                gate(file) && asserts.iter().any(|assert| assert.matches(file))
            }
        }
    }
}

/// Creates an assertion from a check description.
///
/// Dispatch is a single `match` over the check's shape; the real work
/// happens in the per-kind sub-compilers. List elements are compiled
/// eagerly, so a malformed element fails the whole compilation instead of a
/// later evaluation.
///
/// # Errors
///
/// Returns [`CheckError::Pattern`] verbatim when a magic path check has
/// malformed glob syntax.
pub fn convert(check: impl Into<Check>) -> Result<Assert, CheckError> {
    let kind = match check.into() {
        Check::Any => AssertKind::Gate,
        Check::Path(raw) => {
            let pattern = PathPattern::new(raw)?;
            debug!(
                pattern = pattern.as_str(),
                magic = pattern.is_magic(),
                "compiled path check"
            );
            AssertKind::Path(pattern)
        }
        Check::Predicate(test) => AssertKind::Predicate(test),
        Check::Fields(specs) => AssertKind::Fields(FieldMatcher::new(specs)),
        Check::AnyOf(checks) => AssertKind::AnyOf(
            checks
                .into_iter()
                .map(convert)
                .collect::<Result<Vec<_>, _>>()?,
        ),
    };
    Ok(Assert { kind })
}

/// Compiles `check` and immediately evaluates it against `file`.
///
/// When applying the same description to many records, compile once with
/// [`convert`] and reuse the [`Assert`] instead.
///
/// # Errors
///
/// Same as [`convert`].
pub fn is(file: &dyn FileLike, check: impl Into<Check>) -> Result<bool, CheckError> {
    Ok(convert(check)?.matches(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::FieldCheck;
    use crate::record::MemoryFile;

    struct Bare;

    impl FileLike for Bare {
        fn has_messages(&self) -> bool {
            false
        }
        fn has_history(&self) -> bool {
            false
        }
        fn path(&self) -> Option<&str> {
            Some("index.js")
        }
        fn basename(&self) -> Option<&str> {
            Some("index.js")
        }
    }

    // -- Dispatch --

    #[test]
    fn absent_check_is_the_gate_alone() {
        let test = convert(Check::Any).unwrap();
        assert!(test.matches(&MemoryFile::empty()));
        assert!(!test.matches(&Bare));
    }

    #[test]
    fn predicate_checks_run_behind_the_gate() {
        let test = convert(Check::predicate(|f| f.stem() == Some("index"))).unwrap();
        assert!(test.matches(&MemoryFile::new("index.js")));
        assert!(!test.matches(&MemoryFile::new("readme.md")));
        // The predicate would pass, but the gate fails first.
        assert!(!test.matches(&Bare));
    }

    #[test]
    fn field_checks_dispatch_to_the_field_matcher() {
        let test = convert(Check::fields([("stem", FieldCheck::Equals("index".into()))])).unwrap();
        assert!(test.matches(&MemoryFile::new("index.js")));
        assert!(!test.matches(&MemoryFile::new("readme.md")));
    }

    // -- Any-of --

    #[test]
    fn empty_list_never_matches() {
        let test = convert(Check::any_of([])).unwrap();
        assert!(!test.matches(&MemoryFile::new("index.js")));
        assert!(!test.matches(&MemoryFile::empty()));
    }

    #[test]
    fn any_of_short_circuits_on_the_first_match() {
        let test = convert(Check::any_of([
            Check::from(".js"),
            Check::fields([("stem", FieldCheck::Equals("index".into()))]),
        ]))
        .unwrap();
        assert!(test.matches(&MemoryFile::new("index.js")));
        assert!(test.matches(&MemoryFile::new("other.js")));
        assert!(!test.matches(&MemoryFile::new("readme.md")));
        assert!(!test.matches(&Bare));
    }

    #[test]
    fn reordering_elements_never_changes_the_result() {
        let forward = convert(Check::any_of([Check::from(".js"), Check::from(".md")])).unwrap();
        let backward = convert(Check::any_of([Check::from(".md"), Check::from(".js")])).unwrap();
        for file in [
            MemoryFile::new("index.js"),
            MemoryFile::new("readme.md"),
            MemoryFile::new("notes.txt"),
            MemoryFile::empty(),
        ] {
            assert_eq!(forward.matches(&file), backward.matches(&file));
        }
    }

    #[test]
    fn list_elements_compile_eagerly() {
        // The malformed second element fails compilation even though the
        // first would match everything reaching it.
        let result = convert(Check::any_of([Check::Any, Check::from("[")]));
        assert!(matches!(result, Err(CheckError::Pattern(_))));
    }

    // -- Compilation properties --

    #[test]
    fn compiling_twice_yields_identical_behavior() {
        let first = convert("*.{js,jsx}").unwrap();
        let second = convert("*.{js,jsx}").unwrap();
        for file in [
            MemoryFile::new("index.js"),
            MemoryFile::new("app.jsx"),
            MemoryFile::new("readme.md"),
            MemoryFile::empty(),
        ] {
            assert_eq!(first.matches(&file), second.matches(&file));
        }
    }

    #[test]
    fn is_compiles_and_evaluates_in_one_call() {
        let index = MemoryFile::new("index.js");
        assert!(is(&index, "index.js").unwrap());
        assert!(!is(&index, "*.md").unwrap());
    }

    #[test]
    fn asserts_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Assert>();
    }
}
