//! Key Vault IDs.

use crate::Segment;
use crate::constants::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

define_resource_id! {
    /// A Key Vault.
    KeyVaultId("Key Vault") {
        subscription_id,
        resource_group_name,
        vault_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.KeyVault"),
        Segment::fixed("vaults"),
        Segment::user_specified("vault_name", "vaultValue"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_rejected() {
        let input = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.KeyVault/vaults/kv1/";
        let err = KeyVaultId::parse(input).unwrap_err();
        assert!(err.is_malformed());
    }
}
