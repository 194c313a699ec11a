//! Container service IDs.

use crate::Segment;
use crate::constants::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

define_resource_id! {
    /// A managed Kubernetes cluster.
    KubernetesClusterId("Kubernetes Cluster") {
        subscription_id,
        resource_group_name,
        managed_cluster_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.ContainerService"),
        Segment::fixed("managedClusters"),
        Segment::user_specified("managed_cluster_name", "managedClusterValue"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_roundtrip() {
        let id = KubernetesClusterId::new("sub1", "rg1", "aks1");
        assert_eq!(KubernetesClusterId::parse(&id.id()).unwrap(), id);
    }
}
