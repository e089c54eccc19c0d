//! Field-spec checks: a conjunction of per-field rules.

use std::collections::BTreeMap;

use crate::check::FieldCheck;
use crate::record::{gate, lookup, FieldValue, FileLike};

/// A compiled field-spec check.
///
/// Evaluates every `(field, rule)` pair in deterministic key order and
/// short-circuits on the first failure.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    specs: BTreeMap<String, FieldCheck>,
}

impl FieldMatcher {
    pub(crate) fn new(specs: BTreeMap<String, FieldCheck>) -> Self {
        Self { specs }
    }

    /// Tests a record against all field rules.
    ///
    /// Gate-failing candidates never match, before any field is inspected.
    #[must_use]
    pub fn matches(&self, file: &dyn FileLike) -> bool {
        if !gate(file) {
            return false;
        }
        self.specs
            .iter()
            .all(|(field, check)| field_matches(file, field, check))
    }
}

fn field_matches(file: &dyn FileLike, field: &str, check: &FieldCheck) -> bool {
    let value = lookup(file, field);
    match check {
        FieldCheck::Ignore => true,
        FieldCheck::Exists(required) => *required == value.is_some(),
        // Strict: a present non-string value never equals.
        FieldCheck::Equals(expected) => value == Some(FieldValue::Str(expected.as_str())),
        FieldCheck::Partial { prefix, suffix } => {
            let Some(FieldValue::Str(value)) = value else {
                return false;
            };
            prefix.as_deref().map_or(true, |p| value.starts_with(p))
                && suffix.as_deref().map_or(true, |s| value.ends_with(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MemoryFile;

    fn matcher<const N: usize>(specs: [(&str, FieldCheck); N]) -> FieldMatcher {
        FieldMatcher::new(
            specs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    fn readme() -> MemoryFile {
        MemoryFile::new("readme.md")
    }

    #[test]
    fn existence_rules_follow_presence() {
        assert!(matcher([("stem", FieldCheck::Exists(true))]).matches(&readme()));
        assert!(!matcher([("stem", FieldCheck::Exists(false))]).matches(&readme()));
        assert!(matcher([("missing", FieldCheck::Exists(false))]).matches(&readme()));
        assert!(!matcher([("missing", FieldCheck::Exists(true))]).matches(&readme()));
    }

    #[test]
    fn equality_is_strict() {
        assert!(matcher([("stem", FieldCheck::Equals("readme".into()))]).matches(&readme()));
        assert!(!matcher([("stem", FieldCheck::Equals("index".into()))]).matches(&readme()));
        assert!(!matcher([("missing", FieldCheck::Equals("readme".into()))]).matches(&readme()));
    }

    #[test]
    fn equality_rejects_non_string_values() {
        struct Tagged;
        impl FileLike for Tagged {
            fn has_messages(&self) -> bool {
                true
            }
            fn has_history(&self) -> bool {
                true
            }
            fn field(&self, name: &str) -> Option<FieldValue<'_>> {
                (name == "count").then_some(FieldValue::Other)
            }
        }

        assert!(!matcher([("count", FieldCheck::Equals("3".into()))]).matches(&Tagged));
        // Presence still counts for existence rules.
        assert!(matcher([("count", FieldCheck::Exists(true))]).matches(&Tagged));
    }

    #[test]
    fn partial_checks_prefix_and_suffix() {
        let prefix = |p: &str| FieldCheck::Partial {
            prefix: Some(p.to_string()),
            suffix: None,
        };
        let suffix = |s: &str| FieldCheck::Partial {
            prefix: None,
            suffix: Some(s.to_string()),
        };

        assert!(matcher([("stem", prefix("re"))]).matches(&readme()));
        assert!(!matcher([("stem", prefix("in"))]).matches(&readme()));
        assert!(matcher([("stem", suffix("me"))]).matches(&readme()));
        assert!(!matcher([("stem", suffix("ex"))]).matches(&readme()));
        assert!(matcher([(
            "stem",
            FieldCheck::Partial {
                prefix: Some("re".to_string()),
                suffix: Some("me".to_string()),
            },
        )])
        .matches(&readme()));
    }

    #[test]
    fn partial_without_parts_requires_a_string_value() {
        let string_only = FieldCheck::Partial {
            prefix: None,
            suffix: None,
        };
        assert!(matcher([("stem", string_only.clone())]).matches(&readme()));
        assert!(!matcher([("missing", string_only)]).matches(&readme()));
    }

    #[test]
    fn nullish_rules_are_skipped() {
        assert!(matcher([("missing", FieldCheck::Ignore)]).matches(&readme()));
    }

    #[test]
    fn rules_form_a_conjunction() {
        let both = matcher([
            ("stem", FieldCheck::Equals("readme".into())),
            ("extname", FieldCheck::Equals(".md".into())),
        ]);
        let conflicting = matcher([
            ("stem", FieldCheck::Equals("readme".into())),
            ("extname", FieldCheck::Equals(".js".into())),
        ]);
        assert!(both.matches(&readme()));
        assert!(!conflicting.matches(&readme()));
    }

    #[test]
    fn gate_failing_candidates_never_match() {
        struct Bare;
        impl FileLike for Bare {
            fn has_messages(&self) -> bool {
                false
            }
            fn has_history(&self) -> bool {
                false
            }
        }

        assert!(!matcher([("missing", FieldCheck::Exists(false))]).matches(&Bare));
        assert!(!FieldMatcher::new(BTreeMap::new()).matches(&Bare));
    }

    #[test]
    fn empty_spec_matches_any_valid_record() {
        assert!(FieldMatcher::new(BTreeMap::new()).matches(&readme()));
    }
}
