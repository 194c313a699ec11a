//! CDN profile, endpoint and custom domain IDs.

use crate::Segment;
use crate::constants::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

define_resource_id! {
    /// A CDN profile.
    ProfileId("CDN Profile") {
        subscription_id,
        resource_group_name,
        profile_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Cdn"),
        Segment::fixed("profiles"),
        Segment::user_specified("profile_name", "profileValue"),
    ]
}

define_resource_id! {
    /// An endpoint within a CDN profile.
    EndpointId("CDN Endpoint") {
        subscription_id,
        resource_group_name,
        profile_name,
        endpoint_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Cdn"),
        Segment::fixed("profiles"),
        Segment::user_specified("profile_name", "profileValue"),
        Segment::fixed("endpoints"),
        Segment::user_specified("endpoint_name", "endpointValue"),
    ]
}

define_resource_id! {
    /// A custom domain attached to a CDN endpoint.
    ///
    /// The API spells this keyword in lower case.
    CustomDomainId("CDN Custom Domain") {
        subscription_id,
        resource_group_name,
        profile_name,
        endpoint_name,
        custom_domain_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Cdn"),
        Segment::fixed("profiles"),
        Segment::user_specified("profile_name", "profileValue"),
        Segment::fixed("endpoints"),
        Segment::user_specified("endpoint_name", "endpointValue"),
        Segment::fixed("customdomains"),
        Segment::user_specified("custom_domain_name", "customDomainValue"),
    ]
}

impl EndpointId {
    /// Returns the profile owning this endpoint.
    #[must_use]
    pub fn profile(&self) -> ProfileId {
        ProfileId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.profile_name.clone(),
        )
    }
}

impl CustomDomainId {
    /// Returns the endpoint this custom domain is attached to.
    #[must_use]
    pub fn endpoint(&self) -> EndpointId {
        EndpointId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.profile_name.clone(),
            self.endpoint_name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseErrorKind;

    const ENDPOINT: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/resGroup1/providers/Microsoft.Cdn/profiles/profile1/endpoints/endpoint1";

    #[test]
    fn custom_domain_without_name_is_missing_value() {
        let input = format!("{ENDPOINT}/customdomains");
        let err = CustomDomainId::parse(&input).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MissingSegmentValue {
                segment: "custom_domain_name"
            }
        );
        assert_eq!(err.input, input);
    }

    #[test]
    fn custom_domain_navigates_to_profile() {
        let id = CustomDomainId::parse(&format!("{ENDPOINT}/customdomains/www")).unwrap();
        assert_eq!(id.custom_domain_name, "www");
        assert_eq!(id.endpoint().id(), ENDPOINT);
        assert_eq!(id.endpoint().profile().profile_name, "profile1");
    }

    #[test]
    fn swapped_children_fail() {
        let swapped = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/resGroup1/providers/Microsoft.Cdn/endpoints/endpoint1/profiles/profile1";
        assert!(matches!(
            EndpointId::parse(swapped).unwrap_err().kind,
            ParseErrorKind::UnexpectedSegment {
                expected: "profiles",
                position: 6,
                ..
            }
        ));
    }

    #[test]
    fn endpoint_is_not_a_profile() {
        assert!(matches!(
            ProfileId::parse(ENDPOINT).unwrap_err().kind,
            ParseErrorKind::SegmentCountMismatch {
                expected: 8,
                actual: 10
            }
        ));
    }
}
