//! IDs for subscriptions, resource groups, management groups and scopes.

use crate::Segment;
use crate::constants::{
    MANAGEMENT_GROUPS, MANAGEMENT_PROVIDER, PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS,
};

define_resource_id! {
    /// A subscription.
    SubscriptionId("Subscription") {
        subscription_id,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
    ]
}

define_resource_id! {
    /// A resource group within a subscription.
    ResourceGroupId("Resource Group") {
        subscription_id,
        resource_group_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
    ]
}

define_resource_id! {
    /// A management group, rooted at the tenant.
    ManagementGroupId("Management Group") {
        group_id,
    }
    shape: [
        Segment::fixed(PROVIDERS),
        Segment::provider(MANAGEMENT_PROVIDER),
        Segment::fixed(MANAGEMENT_GROUPS),
        Segment::user_specified("group_id", "groupIdValue"),
    ]
}

define_resource_id! {
    /// An arbitrary scope: the tenant root, a management group, a
    /// subscription, a resource group or a resource.
    ScopeId("Scope") {
        scope,
    }
    shape: [
        Segment::scope(
            "scope",
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group",
        ),
    ]
}

impl SubscriptionId {
    /// Returns the resource group `name` in this subscription.
    #[must_use]
    pub fn resource_group(&self, name: impl Into<String>) -> ResourceGroupId {
        ResourceGroupId::new(self.subscription_id.clone(), name)
    }
}

impl ResourceGroupId {
    /// Returns the subscription owning this resource group.
    #[must_use]
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(self.subscription_id.clone())
    }
}

impl ScopeId {
    /// The tenant root scope.
    #[must_use]
    pub fn tenant_root() -> Self {
        Self::new(crate::constants::TENANT_ROOT_SCOPE)
    }

    /// Returns true if this is the tenant root scope.
    #[must_use]
    pub fn is_tenant_root(&self) -> bool {
        self.scope.trim_matches(crate::constants::PATH_SEPARATOR).is_empty()
    }
}
