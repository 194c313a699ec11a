//! Registry of resource ID shapes, used to recase IDs of unknown type.
//!
//! Registration happens once at startup: build a [`Registry`] (or call
//! [`register_all`]) before any concurrent parsing, then share it read-only.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::constants::{PATH_SEPARATOR, PROVIDERS};
use crate::error::{ParseError, ParseErrorKind};
use crate::fields::Fields;
use crate::formatter;
use crate::parser::{self, CaseSensitivity};
use crate::resource_id::ResourceId;
use crate::segment::{Segment, SegmentKind};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The shape of a registered resource ID type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredType {
    type_name: &'static str,
    segments: &'static [Segment],
}

impl RegisteredType {
    /// Describes the resource ID type `T`.
    #[must_use]
    pub fn of<T: ResourceId>() -> Self {
        Self {
            type_name: T::TYPE_NAME,
            segments: T::SEGMENTS,
        }
    }

    /// Returns the type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the shape.
    #[must_use]
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Parses `input` against this shape.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `input` does not match the shape.
    pub fn parse(&self, input: &str, sensitivity: CaseSensitivity) -> Result<Fields, ParseError> {
        parser::parse(input, self.segments, sensitivity)
    }

    /// Formats `fields` through this shape.
    #[must_use]
    pub fn format(&self, fields: &Fields) -> String {
        formatter::format(fields, self.segments)
    }

    fn has_scope(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.kind() == SegmentKind::ScopeSuffix)
    }

    fn keyword_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| !segment.carries_value())
            .count()
    }

    /// Ordering key: fixed shapes beat scoped ones, then more keywords win.
    fn specificity(&self) -> (bool, usize) {
        (!self.has_scope(), self.keyword_count())
    }
}

/// A table of resource ID shapes.
///
/// # Examples
///
/// ```
/// use arm_resource_id::{KeyVaultId, Registry};
///
/// let mut registry = Registry::new();
/// registry.register::<KeyVaultId>();
///
/// let recased = registry
///     .recase("/SUBSCRIPTIONS/sub1/resourcegroups/Rg1/providers/microsoft.keyvault/VAULTS/Vault1")
///     .unwrap();
/// assert_eq!(
///     recased,
///     "/subscriptions/sub1/resourceGroups/Rg1/providers/Microsoft.KeyVault/vaults/Vault1"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: Vec<RegisteredType>,
    by_name: HashMap<&'static str, usize>,
    keywords: HashMap<String, &'static str>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the resource ID type `T`.
    ///
    /// Returns false if a type with the same name was already registered.
    pub fn register<T: ResourceId>(&mut self) -> bool {
        self.register_type(RegisteredType::of::<T>())
    }

    /// Registers a shape under its type name.
    ///
    /// Registering the same shape twice is a no-op. A different shape under an
    /// already registered name is rejected. Returns true if the type was added.
    pub fn register_type(&mut self, ty: RegisteredType) -> bool {
        if let Some(&index) = self.by_name.get(ty.type_name) {
            if self.types[index] != ty {
                tracing::warn!(
                    type_name = ty.type_name,
                    "ignoring registration of a different shape under an existing type name"
                );
            }
            return false;
        }

        for segment in ty.segments.iter().filter(|segment| !segment.carries_value()) {
            self.keywords
                .entry(segment.label().to_ascii_lowercase())
                .or_insert(segment.label());
        }
        self.by_name.insert(ty.type_name, self.types.len());
        self.types.push(ty);
        tracing::debug!(
            type_name = ty.type_name,
            segments = ty.segments.len(),
            "registered resource id type"
        );
        true
    }

    /// Returns the registered type with the given name.
    #[must_use]
    pub fn lookup(&self, type_name: &str) -> Option<RegisteredType> {
        self.by_name.get(type_name).map(|&index| self.types[index])
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no type is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over registered types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredType> {
        self.types.iter()
    }

    /// Finds the registered shape `input` matches, ignoring keyword case.
    ///
    /// When several shapes match, unscoped shapes win over scoped ones, then
    /// shapes with more keywords, then the earliest registered.
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if no registered shape matches.
    pub fn find_shape(&self, input: &str) -> Result<(RegisteredType, Fields), ParseError> {
        let mut best: Option<(RegisteredType, Fields)> = None;
        for ty in &self.types {
            let Ok(fields) = parser::match_shape(input, ty.segments, CaseSensitivity::Insensitive)
            else {
                continue;
            };
            let better = best
                .as_ref()
                .is_none_or(|(current, _)| ty.specificity() > current.specificity());
            if better {
                best = Some((*ty, fields));
            }
        }
        best.ok_or_else(|| {
            tracing::trace!(
                input,
                candidates = self.types.len(),
                "input matches no registered shape"
            );
            ParseError::new(input, ParseErrorKind::UnknownShape)
        })
    }

    /// Re-emits `input` with every keyword in canonical case.
    ///
    /// Values are left untouched, except that a nested scope is itself
    /// recased when it matches a registered shape.
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if no registered shape matches.
    pub fn recase(&self, input: &str) -> Result<String, ParseError> {
        let (ty, mut fields) = self.find_shape(input)?;
        for segment in ty.segments {
            if segment.kind() != SegmentKind::ScopeSuffix {
                continue;
            }
            let Some(scope) = fields.get(segment.field_name()) else {
                continue;
            };
            if let Ok(recased) = self.recase(scope) {
                fields.insert(segment.field_name(), recased);
            }
        }
        Ok(ty.format(&fields))
    }

    /// Canonicalizes known keywords in `input` without requiring a structural
    /// match.
    ///
    /// A token is treated as a keyword unless it follows a keyword that
    /// introduces a value; the token after `providers` is a namespace. Inputs
    /// matching a registered shape are recased structurally instead.
    #[must_use]
    pub fn recase_keywords(&self, input: &str) -> String {
        if let Ok(recased) = self.recase(input) {
            return recased;
        }
        tracing::debug!(input, "no registered shape matched, recasing keywords only");

        let mut out = String::with_capacity(input.len());
        let mut previous = Token::Value;
        for (i, token) in input.split(PATH_SEPARATOR).enumerate() {
            if i > 0 {
                out.push(PATH_SEPARATOR);
            }
            let canonical = match previous {
                Token::Keyword => None,
                Token::Providers | Token::Value => self.keywords.get(&token.to_ascii_lowercase()),
            };
            previous = match (previous, canonical) {
                (Token::Keyword | Token::Providers, _) | (Token::Value, None) => Token::Value,
                (Token::Value, Some(&label)) if label == PROVIDERS => Token::Providers,
                (Token::Value, Some(_)) => Token::Keyword,
            };
            out.push_str(canonical.copied().unwrap_or(token));
        }
        out
    }
}

#[derive(Debug, Clone, Copy)]
enum Token {
    /// A keyword followed by a value
    Keyword,
    /// The `providers` keyword, followed by a namespace
    Providers,
    /// A value, namespace or unknown token
    Value,
}

/// Initializes the process-wide registry with every built-in type and
/// returns it.
///
/// Call once during startup, before parsing concurrently. Later calls return
/// the already initialized registry.
pub fn register_all() -> &'static Registry {
    GLOBAL.get_or_init(|| {
        let mut registry = Registry::new();
        crate::ids::register_builtin(&mut registry);
        tracing::info!(types = registry.len(), "initialized resource id registry");
        registry
    })
}

/// Installs `registry` as the process-wide registry.
///
/// # Errors
///
/// Returns the registry back if the process-wide registry is already
/// initialized.
pub fn install(registry: Registry) -> Result<&'static Registry, Registry> {
    let mut pending = Some(registry);
    let installed = GLOBAL.get_or_init(|| pending.take().unwrap_or_default());
    match pending {
        Some(rejected) => Err(rejected),
        None => {
            tracing::info!(types = installed.len(), "installed resource id registry");
            Ok(installed)
        }
    }
}

/// Returns the process-wide registry, if initialized.
#[must_use]
pub fn global() -> Option<&'static Registry> {
    GLOBAL.get()
}
