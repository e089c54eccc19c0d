//! DTO → domain model conversion with validation.

use std::collections::BTreeMap;

use crate::check::{Check, CheckError, FieldCheck};
use crate::dto::{CheckDto, FieldCheckDto};

/// Converts a raw check description into the typed model.
///
/// This is the compile step for data-borne checks: every list element and
/// every field rule is validated here, eagerly, so invalid kinds surface at
/// load time rather than during matching. A nested invalid element fails at
/// that element's conversion.
///
/// # Errors
///
/// [`CheckError::InvalidCheckKind`] for a check that is neither absent,
/// string, list, nor mapping; [`CheckError::InvalidFieldSpecKind`] for a
/// field rule that is neither null, boolean, string, nor prefix/suffix
/// mapping.
pub fn load(dto: CheckDto) -> Result<Check, CheckError> {
    match dto {
        CheckDto::Path(pattern) => Ok(Check::Path(pattern)),
        CheckDto::List(items) => Ok(Check::AnyOf(
            items
                .into_iter()
                .map(load)
                .collect::<Result<Vec<_>, _>>()?,
        )),
        CheckDto::Fields(specs) => Ok(Check::Fields(
            specs
                .into_iter()
                .map(|(field, dto)| load_field(field, dto))
                .collect::<Result<BTreeMap<_, _>, _>>()?,
        )),
        // An explicit `null` is the absent check.
        CheckDto::Other(serde_json::Value::Null) => Ok(Check::Any),
        CheckDto::Other(value) => Err(CheckError::InvalidCheckKind {
            kind: kind_of(&value).to_string(),
        }),
    }
}

fn load_field(
    field: String,
    dto: Option<FieldCheckDto>,
) -> Result<(String, FieldCheck), CheckError> {
    let check = match dto {
        None => FieldCheck::Ignore,
        Some(FieldCheckDto::Exists(required)) => FieldCheck::Exists(required),
        Some(FieldCheckDto::Equals(value)) => FieldCheck::Equals(value),
        Some(FieldCheckDto::Partial { prefix, suffix }) => FieldCheck::Partial { prefix, suffix },
        Some(FieldCheckDto::Other(value)) => {
            return Err(CheckError::InvalidFieldSpecKind {
                field,
                value: value.to_string(),
            });
        }
    };
    Ok((field, check))
}

/// Kind family of a rejected value, for error messages.
fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
