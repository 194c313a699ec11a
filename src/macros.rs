//! Macro for declaring typed resource IDs.

/// Declares a typed resource ID from its fields and shape.
///
/// This generates a struct with one `String` per field plus:
/// - `new()`, `parse()` (strict), `parse_insensitively()` and `id()`
/// - a [`ResourceId`](crate::ResourceId) implementation over the shape
/// - `Display`, `FromStr` and `TryFrom<&str>`
/// - `Serialize` and `Deserialize` with the `serde` feature
///
/// A compile-time assertion checks that the shape binds exactly the declared
/// fields, so a shape and its struct cannot disagree.
///
/// # Example
///
/// ```ignore
/// define_resource_id! {
///     /// A Key Vault.
///     KeyVaultId("Key Vault") {
///         subscription_id,
///         resource_group_name,
///         vault_name,
///     }
///     shape: [
///         Segment::fixed("subscriptions"),
///         Segment::subscription_id("subscription_id"),
///         Segment::fixed("resourceGroups"),
///         Segment::resource_group_name("resource_group_name"),
///         Segment::fixed("providers"),
///         Segment::provider("Microsoft.KeyVault"),
///         Segment::fixed("vaults"),
///         Segment::user_specified("vault_name", "vaultValue"),
///     ]
/// }
/// ```
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $name:ident($type_name:literal) {
            $($field:ident),+ $(,)?
        }
        shape: [$($segment:expr),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            $(
                #[doc = concat!("The `", stringify!($field), "` segment value.")]
                pub $field: String,
            )+
        }

        impl $name {
            #[doc = concat!("Creates a new [`", stringify!($name), "`] from its segment values.")]
            #[must_use]
            pub fn new($($field: impl Into<String>),+) -> Self {
                Self {
                    $($field: $field.into(),)+
                }
            }

            /// Parses an ID whose keywords are in canonical case.
            ///
            /// # Errors
            ///
            /// Returns `ParseError` if the input does not match the shape.
            pub fn parse(input: &str) -> Result<Self, $crate::ParseError> {
                <Self as $crate::ResourceId>::parse_with(input, $crate::CaseSensitivity::Strict)
            }

            /// Parses an ID whose keywords may be in any case.
            ///
            /// Values are kept exactly as given.
            ///
            /// # Errors
            ///
            /// Returns `ParseError` if the input does not match the shape.
            pub fn parse_insensitively(input: &str) -> Result<Self, $crate::ParseError> {
                <Self as $crate::ResourceId>::parse_with(
                    input,
                    $crate::CaseSensitivity::Insensitive,
                )
            }

            /// Returns the canonical string form of this ID.
            #[must_use]
            pub fn id(&self) -> String {
                <Self as $crate::ResourceId>::id(self)
            }
        }

        impl $crate::ResourceId for $name {
            const TYPE_NAME: &'static str = $type_name;
            const SEGMENTS: &'static [$crate::Segment] = &[$($segment),+];

            fn from_fields(
                mut fields: $crate::Fields,
            ) -> Result<Self, $crate::ParseErrorKind> {
                Ok(Self {
                    $($field: fields.take(stringify!($field))?,)+
                })
            }

            fn to_fields(&self) -> $crate::Fields {
                let mut fields = $crate::Fields::new();
                $(fields.insert(stringify!($field), self.$field.as_str());)+
                fields
            }
        }

        const _: () = assert!(
            $crate::segment::binds_exactly(
                <$name as $crate::ResourceId>::SEGMENTS,
                &[$(stringify!($field)),+],
            ),
            concat!("shape of ", stringify!($name), " must bind exactly its fields"),
        );

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.id())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::ParseError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
