use derive_more::Display;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::stac::StacExtensions;

use super::FieldDecodeError;

/// The kind of an object that extensions may be attached to.
///
/// This is a closed set, an extension declares which kinds it applies to with [`StacExtension::supports`](super::StacExtension::supports).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum OwnerKind {
    /// A STAC item.
    #[display("Item")]
    Item,
    /// A STAC asset, owned by an item or collection or standalone.
    #[display("Asset")]
    Asset,
    /// A STAC collection.
    #[display("Collection")]
    Collection,
    /// A STAC catalog.
    #[display("Catalog")]
    Catalog,
    /// A JSON object that is not a STAC object.
    #[display("object")]
    Object,
}

impl OwnerKind {
    /// Returns the type name of the owner kind, as reported in errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Item => "Item",
            Self::Asset => "Asset",
            Self::Collection => "Collection",
            Self::Catalog => "Catalog",
            Self::Object => "object",
        }
    }
}

/// The fields of an extension owner.
///
/// Holds:
///  - the declared extensions of the declaring object, if any (an ownerless asset has none),
///  - the mutable field map extension properties are read from and written to, and
///  - an optional read-only map consulted when a key is absent from the field map.
#[derive(Debug)]
pub struct OwnerFields<'a> {
    declared: Option<&'a mut StacExtensions>,
    fields: &'a mut Map<String, Value>,
    inherited: Option<&'a Map<String, Value>>,
}

impl<'a> OwnerFields<'a> {
    /// Create owner fields over `fields` with no declaring object.
    #[must_use]
    pub fn new(fields: &'a mut Map<String, Value>) -> Self {
        Self {
            declared: None,
            fields,
            inherited: None,
        }
    }

    /// Set the declared extensions of the declaring object.
    #[must_use]
    pub fn with_declared(mut self, declared: &'a mut StacExtensions) -> Self {
        self.declared = Some(declared);
        self
    }

    /// Set the read-only map consulted for keys absent from the field map.
    #[must_use]
    pub fn with_inherited(mut self, inherited: &'a Map<String, Value>) -> Self {
        self.inherited = Some(inherited);
        self
    }

    /// Returns the declared extensions of the declaring object, if any.
    #[must_use]
    pub fn declared_extensions(&self) -> Option<&StacExtensions> {
        self.declared.as_deref()
    }

    /// Returns the declared extensions of the declaring object mutably, if any.
    pub fn declared_extensions_mut(&mut self) -> Option<&mut StacExtensions> {
        self.declared.as_deref_mut()
    }

    /// Returns the value of `key`, falling back to the inherited map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .get(key)
            .or_else(|| self.inherited.and_then(|inherited| inherited.get(key)))
    }

    /// Set `key` to `value` in the field map, or remove it if `value` is [`None`].
    ///
    /// The inherited map is never written.
    pub fn set(&mut self, key: &str, value: Option<Value>) {
        set_field(self.fields, key, value);
    }

    /// Returns the field map.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &*self.fields
    }
}

/// An object that extensions can be attached to.
pub trait ExtensionOwner {
    /// Returns the kind of the owner.
    fn owner_kind(&self) -> OwnerKind;

    /// Returns the declared extensions of the declaring object, or [`None`] if the owner has no declaring object.
    fn declared_extensions(&self) -> Option<&StacExtensions>;

    /// Returns the extension fields of the owner.
    fn owner_fields(&mut self) -> OwnerFields<'_>;
}

/// Decode the optional field `key` of `map`.
pub(crate) fn get_field<T: DeserializeOwned>(
    map: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<T>, FieldDecodeError> {
    map.get(key).map(|value| decode(value, key)).transpose()
}

/// Decode the required field `key` of `map`.
pub(crate) fn get_required_field<T: DeserializeOwned>(
    map: &Map<String, Value>,
    key: &'static str,
) -> Result<T, FieldDecodeError> {
    get_field(map, key)?.ok_or(FieldDecodeError::Missing { key })
}

/// Set `key` of `map` to `value`, or remove it if `value` is [`None`].
pub(crate) fn set_field(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    } else {
        map.remove(key);
    }
}

pub(crate) fn decode<T: DeserializeOwned>(
    value: &Value,
    key: &'static str,
) -> Result<T, FieldDecodeError> {
    T::deserialize(value).map_err(|source| FieldDecodeError::Invalid { key, source })
}
