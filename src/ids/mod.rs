//! Typed IDs for commonly used resources.

mod analysis_services;
mod authorization;
mod cdn;
mod common;
mod compute;
mod containers;
mod cosmos;
mod key_vault;
mod managed_identity;
mod network;
mod storage;
mod web;

pub use analysis_services::ServerId;
pub use authorization::{ManagementLockId, RoleAssignmentId};
pub use cdn::{CustomDomainId, EndpointId, ProfileId};
pub use common::{ManagementGroupId, ResourceGroupId, ScopeId, SubscriptionId};
pub use compute::{
    AvailabilitySetId, DedicatedHostGroupId, DedicatedHostId, ManagedDiskId, VirtualMachineId,
    VirtualMachineScaleSetId,
};
pub use containers::KubernetesClusterId;
pub use cosmos::{DatabaseAccountId, SqlContainerId, SqlDatabaseId};
pub use key_vault::KeyVaultId;
pub use managed_identity::UserAssignedIdentityId;
pub use network::{NetworkInterfaceId, PublicIpAddressId, SubnetId, VirtualNetworkId};
pub use storage::StorageAccountId;
pub use web::{AppServiceEnvironmentId, AppServiceId, AppServicePlanId, FunctionAppId, WebAppId};

use crate::registry::Registry;

/// Registers every built-in type except [`ScopeId`], whose shape carries no
/// keyword to normalize and would match any input.
pub(crate) fn register_builtin(registry: &mut Registry) {
    registry.register::<SubscriptionId>();
    registry.register::<ResourceGroupId>();
    registry.register::<ManagementGroupId>();
    registry.register::<ServerId>();
    registry.register::<RoleAssignmentId>();
    registry.register::<ManagementLockId>();
    registry.register::<ProfileId>();
    registry.register::<EndpointId>();
    registry.register::<CustomDomainId>();
    registry.register::<VirtualMachineId>();
    registry.register::<VirtualMachineScaleSetId>();
    registry.register::<ManagedDiskId>();
    registry.register::<AvailabilitySetId>();
    registry.register::<DedicatedHostGroupId>();
    registry.register::<DedicatedHostId>();
    registry.register::<KubernetesClusterId>();
    registry.register::<DatabaseAccountId>();
    registry.register::<SqlDatabaseId>();
    registry.register::<SqlContainerId>();
    registry.register::<KeyVaultId>();
    registry.register::<UserAssignedIdentityId>();
    registry.register::<VirtualNetworkId>();
    registry.register::<SubnetId>();
    registry.register::<NetworkInterfaceId>();
    registry.register::<PublicIpAddressId>();
    registry.register::<StorageAccountId>();
    registry.register::<AppServicePlanId>();
    registry.register::<AppServiceEnvironmentId>();
    registry.register::<AppServiceId>();
    registry.register::<WebAppId>();
    registry.register::<FunctionAppId>();
}
