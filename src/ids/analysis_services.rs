//! Analysis Services IDs.

use crate::Segment;
use crate::constants::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

define_resource_id! {
    /// An Analysis Services server.
    ServerId("Analysis Services Server") {
        subscription_id,
        resource_group_name,
        server_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.AnalysisServices"),
        Segment::fixed("servers"),
        Segment::user_specified("server_name", "serverValue"),
    ]
}
