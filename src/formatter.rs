//! Canonical formatting of resource IDs.

use crate::constants::PATH_SEPARATOR;
use crate::fields::Fields;
use crate::segment::{Segment, SegmentKind};

/// Renders `fields` through `segments` as a canonical resource ID.
///
/// Keywords are always emitted in their canonical spelling; values are emitted
/// exactly as bound. A missing value renders as an empty segment.
///
/// # Examples
///
/// ```
/// use arm_resource_id::{format, Fields, Segment};
///
/// let shape = [
///     Segment::fixed("subscriptions"),
///     Segment::subscription_id("subscription_id"),
///     Segment::fixed("resourceGroups"),
///     Segment::resource_group_name("resource_group_name"),
/// ];
/// let fields: Fields = [("subscription_id", "sub1"), ("resource_group_name", "rg1")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(format(&fields, &shape), "/subscriptions/sub1/resourceGroups/rg1");
/// ```
#[must_use]
pub fn format(fields: &Fields, segments: &[Segment]) -> String {
    let mut out = String::new();

    for segment in segments {
        match segment.kind() {
            SegmentKind::ScopeSuffix => {
                // The tenant root `/` contributes nothing.
                let scope = fields
                    .get(segment.field_name())
                    .unwrap_or_default()
                    .trim_matches(PATH_SEPARATOR);
                if !scope.is_empty() {
                    out.push(PATH_SEPARATOR);
                    out.push_str(scope);
                }
            }
            SegmentKind::Static | SegmentKind::ResourceProviderNamespace => {
                out.push(PATH_SEPARATOR);
                out.push_str(segment.label());
            }
            SegmentKind::SubscriptionId
            | SegmentKind::ResourceGroupName
            | SegmentKind::UserSpecified => {
                out.push(PATH_SEPARATOR);
                out.push_str(fields.get(segment.field_name()).unwrap_or_default());
            }
        }
    }

    if out.is_empty() {
        out.push(PATH_SEPARATOR);
    }
    out
}

/// Renders `segments` with every value replaced by its example value.
#[must_use]
pub fn format_example(segments: &[Segment]) -> String {
    let fields: Fields = segments
        .iter()
        .filter(|segment| segment.carries_value())
        .map(|segment| (segment.field_name(), segment.example_value()))
        .collect();
    format(&fields, segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVER: &[Segment] = &[
        Segment::fixed("subscriptions"),
        Segment::subscription_id("subscription_id"),
        Segment::fixed("resourceGroups"),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed("providers"),
        Segment::provider("Microsoft.AnalysisServices"),
        Segment::fixed("servers"),
        Segment::user_specified("server_name", "serverValue"),
    ];

    const SCOPED: &[Segment] = &[
        Segment::scope("scope", "/subscriptions/12345678-1234-9876-4563-123456789012"),
        Segment::fixed("providers"),
        Segment::provider("Microsoft.Authorization"),
        Segment::fixed("roleAssignments"),
        Segment::user_specified("role_assignment_name", "roleAssignmentValue"),
    ];

    #[test]
    fn format_example_server() {
        assert_eq!(
            format_example(SERVER),
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.AnalysisServices/servers/serverValue"
        );
    }

    #[test]
    fn format_scope_verbatim() {
        let fields: Fields = [
            ("scope", "/subscriptions/sub1/resourceGroups/RG1"),
            ("role_assignment_name", "ra1"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            format(&fields, SCOPED),
            "/subscriptions/sub1/resourceGroups/RG1/providers/Microsoft.Authorization/roleAssignments/ra1"
        );
    }

    #[test]
    fn format_tenant_root_scope() {
        let fields: Fields = [("scope", "/"), ("role_assignment_name", "ra1")]
            .into_iter()
            .collect();
        assert_eq!(
            format(&fields, SCOPED),
            "/providers/Microsoft.Authorization/roleAssignments/ra1"
        );
    }

    #[test]
    fn format_normalizes_scope_slashes() {
        let fields: Fields = [("scope", "subscriptions/sub1/"), ("role_assignment_name", "ra1")]
            .into_iter()
            .collect();
        assert!(format(&fields, SCOPED).starts_with("/subscriptions/sub1/providers/"));
    }

    #[test]
    fn format_scope_only_root() {
        let shape = [Segment::scope("scope", "/")];
        let fields: Fields = [("scope", "/")].into_iter().collect();
        assert_eq!(format(&fields, &shape), "/");
    }

    #[test]
    fn format_missing_value_is_empty_segment() {
        let fields: Fields = [("subscription_id", "sub1")].into_iter().collect();
        assert!(format(&fields, SERVER).starts_with("/subscriptions/sub1/resourceGroups//providers"));
    }
}
