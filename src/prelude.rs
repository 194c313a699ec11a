//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for the trait, the parsing entry
//! points and the errors:
//!
//! ```rust
//! use arm_resource_id::prelude::*;
//!
//! let id = KeyVaultId::parse(
//!     "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.KeyVault/vaults/kv1",
//! ).unwrap();
//! assert_eq!(id.vault_name, "kv1");
//! assert_eq!(KeyVaultId::TYPE_NAME, "Key Vault");
//! ```
//!
//! Typed IDs are not all re-exported here; import them from the crate root.

pub use crate::{
    // Core types
    CaseSensitivity, Fields, ResourceId, Segment, SegmentKind,
    // Registry
    RegisteredType, Registry,
    // Errors
    MalformedReason, ParseError, ParseErrorKind, ValidationError,
    // Common IDs
    KeyVaultId, ManagementGroupId, ResourceGroupId, ScopeId, SubscriptionId,
};
