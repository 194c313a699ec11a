//! Validation rules shared by the parser and schema-level helpers.

use uuid::Uuid;

use crate::constants::{PATH_SEPARATOR, TENANT_ROOT_SCOPE};
use crate::error::{ParseErrorKind, ValidationError};
use crate::fields::Fields;
use crate::resource_id::ResourceId;
use crate::segment::{Segment, SegmentKind};

/// Checks that every value-carrying segment of `segments` has a non-empty
/// value in `fields`, and that `fields` binds nothing else.
///
/// Values must also format back to the same tokens: plain values cannot
/// contain `/`, and a scope is either `/` or a `/`-prefixed path without
/// empty segments.
///
/// # Errors
///
/// Returns `MissingSegmentValue` naming the first segment without a value,
/// `InvalidSegmentValue` for a value that cannot be formatted, or
/// `SegmentCountMismatch` if `fields` holds values the shape does not bind.
pub fn validate_fields(fields: &Fields, segments: &[Segment]) -> Result<(), ParseErrorKind> {
    let mut bound = 0;
    for segment in segments.iter().filter(|segment| segment.carries_value()) {
        let value = match fields.get(segment.field_name()) {
            Some(value) if !value.is_empty() => value,
            _ => {
                return Err(ParseErrorKind::MissingSegmentValue {
                    segment: segment.field_name(),
                });
            }
        };

        let formattable = if segment.kind() == SegmentKind::ScopeSuffix {
            is_valid_scope(value)
        } else {
            !value.contains(PATH_SEPARATOR)
        };
        if !formattable {
            return Err(ParseErrorKind::InvalidSegmentValue {
                segment: segment.field_name(),
                value: value.to_string(),
            });
        }
        bound += 1;
    }

    if fields.len() != bound {
        return Err(ParseErrorKind::SegmentCountMismatch {
            expected: bound,
            actual: fields.len(),
        });
    }
    Ok(())
}

fn is_valid_scope(scope: &str) -> bool {
    if scope == TENANT_ROOT_SCOPE {
        return true;
    }
    scope
        .strip_prefix(PATH_SEPARATOR)
        .is_some_and(|rest| rest.split(PATH_SEPARATOR).all(|token| !token.is_empty()))
}

/// Inclusive bounds on the number of entries of a repeatable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrences {
    /// Minimum number of entries
    pub min: usize,
    /// Maximum number of entries, if bounded
    pub max: Option<usize>,
}

impl Occurrences {
    /// Any number of entries, including none.
    pub const ANY: Self = Self { min: 0, max: None };

    /// Between `min` and `max` entries.
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// At most `max` entries.
    #[must_use]
    pub const fn at_most(max: usize) -> Self {
        Self::between(0, max)
    }

    /// At least `min` entries.
    #[must_use]
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }
}

/// Checks that `count` entries of `key` fall within `bounds`.
///
/// # Errors
///
/// Returns `TooFew` or `TooMany` when `count` is out of bounds.
pub fn validate_occurrences(
    key: &str,
    count: usize,
    bounds: Occurrences,
) -> Result<(), ValidationError> {
    if count < bounds.min {
        return Err(ValidationError::TooFew {
            key: key.to_string(),
            min: bounds.min,
            actual: count,
        });
    }
    if let Some(max) = bounds.max.filter(|max| count > *max) {
        return Err(ValidationError::TooMany {
            key: key.to_string(),
            max,
            actual: count,
        });
    }
    Ok(())
}

/// Validates that `input` is a well-formed ID of type `T`, in canonical case.
///
/// This is the schema-level entry point for attributes holding an ID.
///
/// # Errors
///
/// Returns `InvalidId` wrapping the parse failure.
///
/// # Examples
///
/// ```
/// use arm_resource_id::{validate_id, KeyVaultId};
///
/// let id = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.KeyVault/vaults/kv1";
/// assert!(validate_id::<KeyVaultId>(id, "key_vault_id").is_ok());
///
/// let err = validate_id::<KeyVaultId>("/subscriptions/sub1", "key_vault_id").unwrap_err();
/// assert!(err.to_string().contains("key_vault_id"));
/// ```
pub fn validate_id<T: ResourceId>(input: &str, key: &str) -> Result<T, ValidationError> {
    T::parse_with(input, crate::CaseSensitivity::Strict).map_err(|source| {
        ValidationError::InvalidId {
            key: key.to_string(),
            type_name: T::TYPE_NAME,
            source,
        }
    })
}

/// Validates a list of IDs of type `T`, including its length.
///
/// # Errors
///
/// Returns `TooFew`/`TooMany` if the list length is out of bounds, otherwise
/// `InvalidId` for the first entry that fails to parse. Entry keys are
/// reported as `key.N`.
pub fn validate_id_list<T, S>(
    inputs: &[S],
    key: &str,
    bounds: Occurrences,
) -> Result<Vec<T>, ValidationError>
where
    T: ResourceId,
    S: AsRef<str>,
{
    validate_occurrences(key, inputs.len(), bounds)?;
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| validate_id(input.as_ref(), &format!("{key}.{i}")))
        .collect()
}

/// Validates that `value` is a GUID, as subscription IDs must be.
///
/// # Errors
///
/// Returns `NotAGuid` if `value` does not parse as a UUID.
pub fn validate_subscription_guid(value: &str, key: &str) -> Result<Uuid, ValidationError> {
    Uuid::try_parse(value).map_err(|_| ValidationError::NotAGuid {
        key: key.to_string(),
        value: value.to_string(),
    })
}
