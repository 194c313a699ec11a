//! The trait shared by every typed resource ID.

use crate::error::{ParseError, ParseErrorKind};
use crate::fields::Fields;
use crate::formatter;
use crate::parser::{self, CaseSensitivity};
use crate::segment::Segment;
use crate::validate::validate_fields;

/// A nominal resource ID type described by a constant shape.
///
/// Parsing and formatting are both driven by [`ResourceId::SEGMENTS`], so the
/// two directions cannot drift apart. Types are normally declared through the
/// crate's declaration macro, but the trait can be implemented by hand for
/// shapes defined elsewhere.
///
/// # Examples
///
/// ```
/// use arm_resource_id::{ResourceId, ServerId};
///
/// let id = ServerId::new("sub1", "rg1", "server1");
/// assert_eq!(
///     ResourceId::id(&id),
///     "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.AnalysisServices/servers/server1"
/// );
/// assert_eq!(ServerId::segments().len(), 8);
/// ```
pub trait ResourceId: Sized {
    /// Human-readable name of the type, e.g. `"Key Vault"`.
    const TYPE_NAME: &'static str;

    /// The ordered shape of this type.
    const SEGMENTS: &'static [Segment];

    /// Builds the ID from parsed field values.
    ///
    /// # Errors
    ///
    /// Returns `MissingSegmentValue` if a field is not bound.
    fn from_fields(fields: Fields) -> Result<Self, ParseErrorKind>;

    /// Returns the field values of this ID.
    fn to_fields(&self) -> Fields;

    /// Returns the shape of this type.
    #[must_use]
    fn segments() -> &'static [Segment] {
        Self::SEGMENTS
    }

    /// Parses `input` with the given keyword case sensitivity.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `input` does not match the shape.
    fn parse_with(input: &str, sensitivity: CaseSensitivity) -> Result<Self, ParseError> {
        let fields = parser::parse(input, Self::SEGMENTS, sensitivity)?;
        Self::from_fields(fields).map_err(|kind| ParseError::new(input, kind))
    }

    /// Returns the canonical string form of this ID.
    #[must_use]
    fn id(&self) -> String {
        formatter::format(&self.to_fields(), Self::SEGMENTS)
    }

    /// Validates a directly constructed ID.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` naming the first empty segment.
    fn validate(&self) -> Result<(), ParseError> {
        validate_fields(&self.to_fields(), Self::SEGMENTS)
            .map_err(|kind| ParseError::new(self.id(), kind))
    }

    /// Describes the ID and its values over several lines.
    #[must_use]
    fn describe(&self) -> String {
        let fields = self.to_fields();
        let components: Vec<String> = Self::SEGMENTS
            .iter()
            .filter(|segment| segment.carries_value())
            .map(|segment| {
                let value = fields.get(segment.field_name()).unwrap_or_default();
                format!("{}: {value:?}", title_case(segment.field_name()))
            })
            .collect();
        format!("{} ({})", Self::TYPE_NAME, components.join("\n"))
    }

    /// Returns this shape rendered with example values.
    #[must_use]
    fn example_id() -> String {
        formatter::format_example(Self::SEGMENTS)
    }
}

fn title_case(field_name: &str) -> String {
    field_name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
