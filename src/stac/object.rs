use derive_more::From;
use serde_json::{Map, Value};

use crate::extension::{ExtensionOwner, OwnerFields, OwnerKind};

use super::{Catalog, Collection, Item, StacExtensions};

/// A STAC object of any kind, or a JSON object that is not a STAC object.
///
/// Decoded from a JSON object by its `type` field (`Feature`, `Collection`, or `Catalog`).
#[derive(Clone, PartialEq, Debug, From)]
pub enum StacObject {
    /// An item.
    Item(Item),
    /// A collection.
    Collection(Collection),
    /// A catalog.
    Catalog(Catalog),
    /// A JSON object that is not a STAC object.
    Object(Map<String, Value>),
}

impl StacObject {
    /// Decode a STAC object from a JSON object.
    ///
    /// A JSON object with a `type` other than `Feature`, `Collection`, or `Catalog` is decoded as [`StacObject::Object`].
    ///
    /// # Errors
    /// Returns a [`serde_json::Error`] if `value` is not a JSON object, or it is not a valid STAC object of the kind named by `type`.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let Value::Object(object) = value else {
            return Err(serde::de::Error::custom("a STAC object must be a JSON object"));
        };
        match object.get("type").and_then(Value::as_str) {
            Some("Feature") => Ok(Self::Item(Item::from_value(Value::Object(object))?)),
            Some("Collection") => Ok(Self::Collection(Collection::from_value(Value::Object(
                object,
            ))?)),
            Some("Catalog") => Ok(Self::Catalog(Catalog::from_value(Value::Object(object))?)),
            _ => Ok(Self::Object(object)),
        }
    }

    /// Returns the type name of the object.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.owner_kind().type_name()
    }
}

impl TryFrom<&str> for StacObject {
    type Error = serde_json::Error;

    fn try_from(object_json: &str) -> Result<Self, Self::Error> {
        Self::from_value(serde_json::from_str(object_json)?)
    }
}

impl ExtensionOwner for StacObject {
    fn owner_kind(&self) -> OwnerKind {
        match self {
            Self::Item(item) => item.owner_kind(),
            Self::Collection(collection) => collection.owner_kind(),
            Self::Catalog(catalog) => catalog.owner_kind(),
            Self::Object(_) => OwnerKind::Object,
        }
    }

    fn declared_extensions(&self) -> Option<&StacExtensions> {
        match self {
            Self::Item(item) => item.declared_extensions(),
            Self::Collection(collection) => collection.declared_extensions(),
            Self::Catalog(catalog) => catalog.declared_extensions(),
            Self::Object(_) => None,
        }
    }

    fn owner_fields(&mut self) -> OwnerFields<'_> {
        match self {
            Self::Item(item) => item.owner_fields(),
            Self::Collection(collection) => collection.owner_fields(),
            Self::Catalog(catalog) => catalog.owner_fields(),
            Self::Object(object) => OwnerFields::new(object),
        }
    }
}
