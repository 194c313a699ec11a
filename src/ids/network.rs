//! Networking IDs.

use crate::Segment;
use crate::constants::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

define_resource_id! {
    /// A virtual network.
    VirtualNetworkId("Virtual Network") {
        subscription_id,
        resource_group_name,
        virtual_network_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Network"),
        Segment::fixed("virtualNetworks"),
        Segment::user_specified("virtual_network_name", "virtualNetworkValue"),
    ]
}

define_resource_id! {
    /// A subnet within a virtual network.
    SubnetId("Subnet") {
        subscription_id,
        resource_group_name,
        virtual_network_name,
        subnet_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Network"),
        Segment::fixed("virtualNetworks"),
        Segment::user_specified("virtual_network_name", "virtualNetworkValue"),
        Segment::fixed("subnets"),
        Segment::user_specified("subnet_name", "subnetValue"),
    ]
}

define_resource_id! {
    /// A network interface.
    NetworkInterfaceId("Network Interface") {
        subscription_id,
        resource_group_name,
        network_interface_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Network"),
        Segment::fixed("networkInterfaces"),
        Segment::user_specified("network_interface_name", "networkInterfaceValue"),
    ]
}

define_resource_id! {
    /// A public IP address.
    PublicIpAddressId("Public IP Address") {
        subscription_id,
        resource_group_name,
        public_ip_address_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Network"),
        Segment::fixed("publicIPAddresses"),
        Segment::user_specified("public_ip_address_name", "publicIPAddressValue"),
    ]
}

impl SubnetId {
    /// Returns the virtual network containing this subnet.
    #[must_use]
    pub fn virtual_network(&self) -> VirtualNetworkId {
        VirtualNetworkId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.virtual_network_name.clone(),
        )
    }
}

impl VirtualNetworkId {
    /// Returns the subnet `name` in this virtual network.
    #[must_use]
    pub fn subnet(&self, name: impl Into<String>) -> SubnetId {
        SubnetId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.virtual_network_name.clone(),
            name,
        )
    }
}
