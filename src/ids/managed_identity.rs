//! Managed identity IDs.

use crate::Segment;
use crate::constants::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

define_resource_id! {
    /// A user-assigned managed identity.
    UserAssignedIdentityId("User Assigned Identity") {
        subscription_id,
        resource_group_name,
        user_assigned_identity_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.ManagedIdentity"),
        Segment::fixed("userAssignedIdentities"),
        Segment::user_specified("user_assigned_identity_name", "userAssignedIdentityValue"),
    ]
}
