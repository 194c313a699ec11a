//! Authorization IDs anchored under an arbitrary scope.

use crate::Segment;
use crate::constants::PROVIDERS;

define_resource_id! {
    /// A role assignment at any scope.
    RoleAssignmentId("Role Assignment") {
        scope,
        role_assignment_name,
    }
    shape: [
        Segment::scope(
            "scope",
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group",
        ),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Authorization"),
        Segment::fixed("roleAssignments"),
        Segment::user_specified("role_assignment_name", "roleAssignmentValue"),
    ]
}

define_resource_id! {
    /// A management lock at any scope.
    ManagementLockId("Management Lock") {
        scope,
        lock_name,
    }
    shape: [
        Segment::scope(
            "scope",
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group",
        ),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Authorization"),
        Segment::fixed("locks"),
        Segment::user_specified("lock_name", "lockValue"),
    ]
}

impl RoleAssignmentId {
    /// Returns the scope this role assignment applies to.
    #[must_use]
    pub fn scope_id(&self) -> crate::ScopeId {
        crate::ScopeId::new(self.scope.clone())
    }
}

impl ManagementLockId {
    /// Returns the scope this lock applies to.
    #[must_use]
    pub fn scope_id(&self) -> crate::ScopeId {
        crate::ScopeId::new(self.scope.clone())
    }
}
