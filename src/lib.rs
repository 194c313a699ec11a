//! Typed Azure Resource Manager resource IDs.
//!
//! This crate parses, validates and formats ARM resource IDs through typed
//! shapes, so that each resource type gets its own nominal ID type with named
//! fields instead of a bare string.
//!
//! # Overview
//!
//! A resource ID is a `/`-separated path alternating keywords and values:
//!
//! ```text
//! /subscriptions/{subscription_id}/resourceGroups/{resource_group_name}/providers/{namespace}/{type}/{name}
//! ```
//!
//! Every ID type is described by an ordered list of [`Segment`]s. Parsing and
//! formatting are both driven by that list, so the two directions cannot
//! drift apart.
//!
//! # Quick Start
//!
//! ```rust
//! use arm_resource_id::ServerId;
//!
//! let id = ServerId::parse(
//!     "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.AnalysisServices/servers/server1",
//! ).unwrap();
//!
//! assert_eq!(id.subscription_id, "sub1");
//! assert_eq!(id.resource_group_name, "rg1");
//! assert_eq!(id.server_name, "server1");
//!
//! // Keywords in the wrong case are rejected unless parsed insensitively
//! let lower = "/subscriptions/sub1/resourcegroups/rg1/providers/microsoft.analysisservices/servers/server1";
//! assert!(ServerId::parse(lower).is_err());
//! assert_eq!(ServerId::parse_insensitively(lower).unwrap(), id);
//! ```
//!
//! # Custom Shapes
//!
//! The parser and formatter also work on shapes that have no typed ID:
//!
//! ```rust
//! use arm_resource_id::{format, parse, CaseSensitivity, Segment};
//!
//! const SHAPE: &[Segment] = &[
//!     Segment::fixed("subscriptions"),
//!     Segment::subscription_id("subscription_id"),
//!     Segment::fixed("providers"),
//!     Segment::provider("Microsoft.Insights"),
//!     Segment::fixed("components"),
//!     Segment::user_specified("component_name", "componentValue"),
//! ];
//!
//! let fields = parse(
//!     "/subscriptions/sub1/providers/Microsoft.Insights/components/c1",
//!     SHAPE,
//!     CaseSensitivity::Strict,
//! ).unwrap();
//! assert_eq!(fields.get("component_name"), Some("c1"));
//! assert_eq!(format(&fields, SHAPE), "/subscriptions/sub1/providers/Microsoft.Insights/components/c1");
//! ```
//!
//! # Recasing
//!
//! IDs returned by the service sometimes use keywords in the wrong case. A
//! [`Registry`] of known shapes rewrites them canonically:
//!
//! ```rust
//! let registry = arm_resource_id::register_all();
//! let recased = registry
//!     .recase("/subscriptions/sub1/resourcegroups/rg1/providers/microsoft.keyvault/vaults/kv1")
//!     .unwrap();
//! assert_eq!(recased, "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.KeyVault/vaults/kv1");
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod macros;

mod constants;
mod error;
mod fields;
mod formatter;
mod ids;
mod parser;
pub mod prelude;
mod registry;
mod resource_id;
mod segment;
mod validate;

pub use constants::{
    EXAMPLE_RESOURCE_GROUP_NAME, EXAMPLE_SUBSCRIPTION_ID, MANAGEMENT_GROUPS, MANAGEMENT_PROVIDER,
    PATH_SEPARATOR, PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS, TENANT_ROOT_SCOPE,
};
pub use error::{MalformedReason, ParseError, ParseErrorKind, ValidationError};
pub use fields::Fields;
pub use formatter::{format, format_example};
pub use ids::*;
pub use parser::{parse, CaseSensitivity};
pub use registry::{global, install, register_all, RegisteredType, Registry};
pub use resource_id::ResourceId;
pub use segment::{Segment, SegmentKind};
pub use validate::{
    validate_fields, validate_id, validate_id_list, validate_occurrences,
    validate_subscription_guid, Occurrences,
};
