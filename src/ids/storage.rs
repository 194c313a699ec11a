//! Storage IDs.

use crate::Segment;
use crate::constants::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

define_resource_id! {
    /// A storage account.
    StorageAccountId("Storage Account") {
        subscription_id,
        resource_group_name,
        storage_account_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Storage"),
        Segment::fixed("storageAccounts"),
        Segment::user_specified("storage_account_name", "storageAccountValue"),
    ]
}
