//! Shape-driven parser for resource IDs.

use crate::constants::{PATH_SEPARATOR, TENANT_ROOT_SCOPE};
use crate::error::{MalformedReason, ParseError, ParseErrorKind};
use crate::fields::Fields;
use crate::segment::{Segment, SegmentKind};
use crate::validate::validate_fields;

/// How keywords are compared while parsing.
///
/// Values bound to fields are never case-normalized in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseSensitivity {
    /// Keywords must be spelled exactly as the shape declares them.
    ///
    /// Used for values authored by users.
    #[default]
    Strict,
    /// Keywords are compared ignoring ASCII case.
    ///
    /// Used for values echoed back by the API, which does not always
    /// preserve keyword casing.
    Insensitive,
}

/// Parses `input` against `segments`, returning the bound field values.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - The input is empty, lacks a leading `/`, is just `/`, or ends with `/`
/// - A keyword does not match the shape at its position
/// - The input ends before the shape does, or a value is empty
/// - The input has segments left over after the shape is consumed
///
/// # Examples
///
/// ```
/// use arm_resource_id::{parse, CaseSensitivity, Segment};
///
/// let shape = [
///     Segment::fixed("subscriptions"),
///     Segment::subscription_id("subscription_id"),
/// ];
///
/// let fields = parse("/SUBSCRIPTIONS/abc", &shape, CaseSensitivity::Insensitive).unwrap();
/// assert_eq!(fields.get("subscription_id"), Some("abc"));
///
/// assert!(parse("/SUBSCRIPTIONS/abc", &shape, CaseSensitivity::Strict).is_err());
/// ```
pub fn parse(
    input: &str,
    segments: &[Segment],
    sensitivity: CaseSensitivity,
) -> Result<Fields, ParseError> {
    match_shape(input, segments, sensitivity).map_err(|kind| {
        tracing::trace!(input, ?sensitivity, error = %kind, "resource id did not match shape");
        ParseError::new(input, kind)
    })
}

/// Matches `input` against `segments` without logging a failure.
pub(crate) fn match_shape(
    input: &str,
    segments: &[Segment],
    sensitivity: CaseSensitivity,
) -> Result<Fields, ParseErrorKind> {
    let tokens = tokenize(input)?;
    let mut fields = Fields::new();
    let mut cursor = 0;

    for (index, segment) in segments.iter().enumerate() {
        if segment.kind() == SegmentKind::ScopeSuffix {
            // Everything up to the fixed suffix belongs to the scope.
            let suffix_len = segments.len() - index - 1;
            let end = tokens.len().saturating_sub(suffix_len).max(cursor);
            fields.insert(segment.field_name(), join_scope(&tokens[cursor..end])?);
            cursor = end;
            continue;
        }

        let Some(token) = tokens.get(cursor) else {
            return Err(ParseErrorKind::MissingSegmentValue {
                segment: segment.name(),
            });
        };

        if segment.carries_value() {
            fields.insert(segment.field_name(), *token);
        } else if !segment.matches_keyword(token, sensitivity) {
            return Err(ParseErrorKind::UnexpectedSegment {
                expected: segment.label(),
                actual: (*token).to_string(),
                position: cursor,
            });
        }
        cursor += 1;
    }

    if cursor != tokens.len() {
        return Err(ParseErrorKind::SegmentCountMismatch {
            expected: cursor,
            actual: tokens.len(),
        });
    }

    validate_fields(&fields, segments)?;
    Ok(fields)
}

fn tokenize(input: &str) -> Result<Vec<&str>, ParseErrorKind> {
    let malformed = |reason| ParseErrorKind::MalformedInput { reason };

    if input.is_empty() {
        return Err(malformed(MalformedReason::Empty));
    }
    let Some(rest) = input.strip_prefix(PATH_SEPARATOR) else {
        return Err(malformed(MalformedReason::MissingLeadingSlash));
    };
    if rest.is_empty() {
        return Err(malformed(MalformedReason::NoSegments));
    }
    if rest.ends_with(PATH_SEPARATOR) {
        return Err(malformed(MalformedReason::TrailingSlash));
    }

    Ok(rest.split(PATH_SEPARATOR).collect())
}

fn join_scope(tokens: &[&str]) -> Result<String, ParseErrorKind> {
    if tokens.is_empty() {
        return Ok(TENANT_ROOT_SCOPE.to_string());
    }
    if tokens.iter().any(|token| token.is_empty()) {
        return Err(ParseErrorKind::MalformedInput {
            reason: MalformedReason::EmptySegment,
        });
    }

    let mut scope = String::new();
    for token in tokens {
        scope.push(PATH_SEPARATOR);
        scope.push_str(token);
    }
    Ok(scope)
}
