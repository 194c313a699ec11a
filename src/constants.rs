//! Canonical keywords and example values for resource IDs.

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// The scope value of the tenant root.
pub const TENANT_ROOT_SCOPE: &str = "/";

/// Keyword preceding a subscription ID.
pub const SUBSCRIPTIONS: &str = "subscriptions";

/// Keyword preceding a resource group name.
pub const RESOURCE_GROUPS: &str = "resourceGroups";

/// Keyword preceding a resource provider namespace.
pub const PROVIDERS: &str = "providers";

/// Keyword preceding a management group ID.
pub const MANAGEMENT_GROUPS: &str = "managementGroups";

/// Resource provider namespace owning management groups.
pub const MANAGEMENT_PROVIDER: &str = "Microsoft.Management";

/// Example subscription ID used in rendered example IDs.
pub const EXAMPLE_SUBSCRIPTION_ID: &str = "12345678-1234-9876-4563-123456789012";

/// Example resource group name used in rendered example IDs.
pub const EXAMPLE_RESOURCE_GROUP_NAME: &str = "example-resource-group";
