//! Segment model for resource ID shapes.

use std::fmt;

use crate::constants::{
    EXAMPLE_RESOURCE_GROUP_NAME, EXAMPLE_SUBSCRIPTION_ID, PROVIDERS, SUBSCRIPTIONS,
};
use crate::parser::CaseSensitivity;

/// The role a segment plays in a resource ID shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A fixed keyword such as `resourceGroups` or `servers`
    Static,
    /// The subscription ID value
    SubscriptionId,
    /// The resource group name value
    ResourceGroupName,
    /// A resource provider namespace such as `Microsoft.DocumentDB`
    ResourceProviderNamespace,
    /// A user-chosen resource name
    UserSpecified,
    /// A variable scope prefix consumed as one opaque value
    ScopeSuffix,
}

impl SegmentKind {
    /// Returns true if segments of this kind bind a field value.
    #[must_use]
    pub const fn carries_value(self) -> bool {
        !self.is_keyword()
    }

    /// Returns true if segments of this kind are matched against a label.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::Static | Self::ResourceProviderNamespace)
    }
}

/// One slash-delimited component of a resource ID shape.
///
/// Shapes are declared as constant slices, so every constructor is `const`.
///
/// # Examples
///
/// ```
/// use arm_resource_id::{Segment, SegmentKind};
///
/// const SHAPE: &[Segment] = &[
///     Segment::fixed("subscriptions"),
///     Segment::subscription_id("subscription_id"),
///     Segment::fixed("resourceGroups"),
///     Segment::resource_group_name("resource_group_name"),
/// ];
///
/// assert_eq!(SHAPE[0].kind(), SegmentKind::Static);
/// assert_eq!(SHAPE[3].field_name(), "resource_group_name");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    kind: SegmentKind,
    label: &'static str,
    field_name: &'static str,
    example_value: &'static str,
}

impl Segment {
    /// A fixed keyword.
    #[must_use]
    pub const fn fixed(label: &'static str) -> Self {
        Self {
            kind: SegmentKind::Static,
            label,
            field_name: "",
            example_value: label,
        }
    }

    /// A resource provider namespace, e.g. `Microsoft.Storage`.
    #[must_use]
    pub const fn provider(namespace: &'static str) -> Self {
        Self {
            kind: SegmentKind::ResourceProviderNamespace,
            label: namespace,
            field_name: "",
            example_value: namespace,
        }
    }

    /// The subscription ID value.
    #[must_use]
    pub const fn subscription_id(field_name: &'static str) -> Self {
        Self {
            kind: SegmentKind::SubscriptionId,
            label: "",
            field_name,
            example_value: EXAMPLE_SUBSCRIPTION_ID,
        }
    }

    /// The resource group name value.
    #[must_use]
    pub const fn resource_group_name(field_name: &'static str) -> Self {
        Self {
            kind: SegmentKind::ResourceGroupName,
            label: "",
            field_name,
            example_value: EXAMPLE_RESOURCE_GROUP_NAME,
        }
    }

    /// A user-specified resource name.
    #[must_use]
    pub const fn user_specified(field_name: &'static str, example_value: &'static str) -> Self {
        Self {
            kind: SegmentKind::UserSpecified,
            label: "",
            field_name,
            example_value,
        }
    }

    /// A variable scope prefix.
    #[must_use]
    pub const fn scope(field_name: &'static str, example_value: &'static str) -> Self {
        Self {
            kind: SegmentKind::ScopeSuffix,
            label: "",
            field_name,
            example_value,
        }
    }

    /// Returns the segment kind.
    #[must_use]
    pub const fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Returns the canonical keyword, empty for value-carrying segments.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the bound field name, empty for keywords.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// Returns the example value.
    #[must_use]
    pub const fn example_value(&self) -> &'static str {
        self.example_value
    }

    /// Returns true if this segment binds a field value.
    #[must_use]
    pub const fn carries_value(&self) -> bool {
        self.kind.carries_value()
    }

    /// Name used to refer to this segment in errors: the field name for
    /// value-carrying segments, the label for keywords.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        if self.carries_value() {
            self.field_name
        } else {
            self.label
        }
    }

    /// Returns true if `token` spells this segment's keyword.
    ///
    /// Always false for value-carrying segments.
    #[must_use]
    pub fn matches_keyword(&self, token: &str, sensitivity: CaseSensitivity) -> bool {
        if !self.kind.is_keyword() {
            return false;
        }
        match sensitivity {
            CaseSensitivity::Strict => token == self.label,
            CaseSensitivity::Insensitive => token.eq_ignore_ascii_case(self.label),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.carries_value() {
            write!(f, "{{{}}}", self.field_name)
        } else {
            write!(f, "{}", self.label)
        }
    }
}

/// Returns true if `segments` binds exactly the names in `fields`, each once,
/// with at most one scope segment and no keyword claiming a field.
///
/// The shape must also be anchored: it starts with `subscriptions`,
/// `providers` or a scope.
///
/// Evaluated at compile time for every declared ID type.
#[must_use]
pub const fn binds_exactly(segments: &[Segment], fields: &[&str]) -> bool {
    if !is_anchored(segments) {
        return false;
    }

    let mut bound = 0;
    let mut scopes = 0;
    let mut i = 0;
    while i < segments.len() {
        let segment = &segments[i];
        if segment.kind.carries_value() {
            if !contains(fields, segment.field_name) {
                return false;
            }
            if matches!(segment.kind, SegmentKind::ScopeSuffix) {
                scopes += 1;
            }
            bound += 1;
        } else if !segment.field_name.is_empty() || segment.label.is_empty() {
            return false;
        }
        i += 1;
    }
    if bound != fields.len() || scopes > 1 {
        return false;
    }

    let mut j = 0;
    while j < fields.len() {
        if !binds(segments, fields[j]) {
            return false;
        }
        j += 1;
    }
    true
}

const fn is_anchored(segments: &[Segment]) -> bool {
    let Some(first) = segments.first() else {
        return false;
    };
    match first.kind {
        SegmentKind::ScopeSuffix => true,
        SegmentKind::Static => {
            str_eq(first.label, SUBSCRIPTIONS) || str_eq(first.label, PROVIDERS)
        }
        _ => false,
    }
}

const fn contains(fields: &[&str], name: &str) -> bool {
    let mut i = 0;
    while i < fields.len() {
        if str_eq(fields[i], name) {
            return true;
        }
        i += 1;
    }
    false
}

const fn binds(segments: &[Segment], name: &str) -> bool {
    let mut i = 0;
    while i < segments.len() {
        if segments[i].kind.carries_value() && str_eq(segments[i].field_name, name) {
            return true;
        }
        i += 1;
    }
    false
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE: &[Segment] = &[
        Segment::fixed("subscriptions"),
        Segment::subscription_id("subscription_id"),
        Segment::fixed("resourceGroups"),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed("providers"),
        Segment::provider("Microsoft.Storage"),
        Segment::fixed("storageAccounts"),
        Segment::user_specified("storage_account_name", "storageAccountValue"),
    ];

    #[test]
    fn keyword_kinds_do_not_carry_values() {
        assert!(!SegmentKind::Static.carries_value());
        assert!(!SegmentKind::ResourceProviderNamespace.carries_value());
        assert!(SegmentKind::SubscriptionId.carries_value());
        assert!(SegmentKind::ScopeSuffix.carries_value());
    }

    #[test]
    fn matches_keyword_respects_sensitivity() {
        let seg = Segment::fixed("resourceGroups");
        assert!(seg.matches_keyword("resourceGroups", CaseSensitivity::Strict));
        assert!(!seg.matches_keyword("resourcegroups", CaseSensitivity::Strict));
        assert!(seg.matches_keyword("RESOURCEGROUPS", CaseSensitivity::Insensitive));
        assert!(!seg.matches_keyword("resourceGroup", CaseSensitivity::Insensitive));
    }

    #[test]
    fn value_segments_never_match_keywords() {
        let seg = Segment::user_specified("server_name", "serverValue");
        assert!(!seg.matches_keyword("", CaseSensitivity::Insensitive));
        assert!(!seg.matches_keyword("serverValue", CaseSensitivity::Strict));
    }

    #[test]
    fn name_prefers_field_for_values() {
        assert_eq!(SHAPE[1].name(), "subscription_id");
        assert_eq!(SHAPE[5].name(), "Microsoft.Storage");
    }

    #[test]
    fn display_shows_template() {
        let template: Vec<String> = SHAPE.iter().map(ToString::to_string).collect();
        assert_eq!(template[6], "storageAccounts");
        assert_eq!(template[7], "{storage_account_name}");
    }

    #[test]
    fn binds_exactly_accepts_matching_fields() {
        assert!(binds_exactly(
            SHAPE,
            &["subscription_id", "resource_group_name", "storage_account_name"]
        ));
    }

    #[test]
    fn binds_exactly_rejects_missing_or_extra_fields() {
        assert!(!binds_exactly(SHAPE, &["subscription_id", "resource_group_name"]));
        assert!(!binds_exactly(
            SHAPE,
            &[
                "subscription_id",
                "resource_group_name",
                "storage_account_name",
                "extra"
            ]
        ));
        assert!(!binds_exactly(
            SHAPE,
            &["subscription_id", "resource_group_name", "account_name"]
        ));
    }

    #[test]
    fn binds_exactly_rejects_two_scopes() {
        let shape = [Segment::scope("a", "/"), Segment::scope("b", "/")];
        assert!(!binds_exactly(&shape, &["a", "b"]));
    }

    #[test]
    fn binds_exactly_rejects_duplicate_binding() {
        let shape = [
            Segment::fixed("subscriptions"),
            Segment::user_specified("a", "x"),
            Segment::user_specified("a", "y"),
        ];
        assert!(!binds_exactly(&shape, &["a", "b"]));
    }

    #[test]
    fn binds_exactly_requires_anchored_start() {
        let loose = [
            Segment::user_specified("name", "x"),
            Segment::fixed("servers"),
        ];
        assert!(!binds_exactly(&loose, &["name"]));

        let wrong_keyword = [
            Segment::fixed("resourceGroups"),
            Segment::resource_group_name("resource_group_name"),
        ];
        assert!(!binds_exactly(&wrong_keyword, &["resource_group_name"]));

        assert!(!binds_exactly(&[], &[]));

        let tenant = [
            Segment::fixed("providers"),
            Segment::provider("Microsoft.Management"),
            Segment::fixed("managementGroups"),
            Segment::user_specified("group_id", "groupIdValue"),
        ];
        assert!(binds_exactly(&tenant, &["group_id"]));

        let scoped = [Segment::scope("scope", "/")];
        assert!(binds_exactly(&scoped, &["scope"]));
    }
}
