//! Compute IDs.

use crate::Segment;
use crate::constants::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

define_resource_id! {
    /// A virtual machine.
    VirtualMachineId("Virtual Machine") {
        subscription_id,
        resource_group_name,
        virtual_machine_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Compute"),
        Segment::fixed("virtualMachines"),
        Segment::user_specified("virtual_machine_name", "virtualMachineValue"),
    ]
}

define_resource_id! {
    /// A virtual machine scale set.
    VirtualMachineScaleSetId("Virtual Machine Scale Set") {
        subscription_id,
        resource_group_name,
        virtual_machine_scale_set_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Compute"),
        Segment::fixed("virtualMachineScaleSets"),
        Segment::user_specified("virtual_machine_scale_set_name", "virtualMachineScaleSetValue"),
    ]
}

define_resource_id! {
    /// A managed disk.
    ManagedDiskId("Managed Disk") {
        subscription_id,
        resource_group_name,
        disk_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Compute"),
        Segment::fixed("disks"),
        Segment::user_specified("disk_name", "diskValue"),
    ]
}

define_resource_id! {
    /// An availability set.
    AvailabilitySetId("Availability Set") {
        subscription_id,
        resource_group_name,
        availability_set_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Compute"),
        Segment::fixed("availabilitySets"),
        Segment::user_specified("availability_set_name", "availabilitySetValue"),
    ]
}

define_resource_id! {
    /// A dedicated host group.
    DedicatedHostGroupId("Dedicated Host Group") {
        subscription_id,
        resource_group_name,
        host_group_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Compute"),
        Segment::fixed("hostGroups"),
        Segment::user_specified("host_group_name", "hostGroupValue"),
    ]
}

define_resource_id! {
    /// A dedicated host within a host group.
    DedicatedHostId("Dedicated Host") {
        subscription_id,
        resource_group_name,
        host_group_name,
        host_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Compute"),
        Segment::fixed("hostGroups"),
        Segment::user_specified("host_group_name", "hostGroupValue"),
        Segment::fixed("hosts"),
        Segment::user_specified("host_name", "hostValue"),
    ]
}

impl DedicatedHostId {
    /// Returns the host group owning this host.
    #[must_use]
    pub fn host_group(&self) -> DedicatedHostGroupId {
        DedicatedHostGroupId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.host_group_name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResourceId;

    #[test]
    fn managed_disk_keeps_value_case() {
        let input = "/subscriptions/sub1/resourceGroups/RG1/providers/Microsoft.Compute/disks/OsDisk_1";
        let id = ManagedDiskId::parse(input).unwrap();
        assert_eq!(id.resource_group_name, "RG1");
        assert_eq!(id.disk_name, "OsDisk_1");
    }

    #[test]
    fn dedicated_host_parent() {
        let id = DedicatedHostId::new("sub1", "rg1", "group1", "host1");
        assert_eq!(
            id.host_group().id(),
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Compute/hostGroups/group1"
        );
    }

    #[test]
    fn scale_set_and_vm_do_not_cross_parse() {
        let vm = VirtualMachineId::new("sub1", "rg1", "vm1").id();
        assert!(VirtualMachineScaleSetId::parse(&vm).is_err());
        assert!(AvailabilitySetId::parse(&vm).is_err());
    }

    #[test]
    fn examples_roundtrip() {
        assert!(VirtualMachineId::parse(&VirtualMachineId::example_id()).is_ok());
        assert!(DedicatedHostId::parse(&DedicatedHostId::example_id()).is_ok());
    }
}
