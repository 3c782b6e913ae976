use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::extension::{ExtensionOwner, OwnerFields, OwnerKind};

use super::{StacExtensions, STAC_VERSION};

/// A STAC catalog.
///
/// See <https://github.com/radiantearth/stac-spec/blob/master/catalog-spec/catalog-spec.md>.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Display)]
#[display("{}", serde_json::to_string(self).unwrap_or_default())]
pub struct Catalog {
    /// The object type, must be `Catalog`.
    #[serde(rename = "type")]
    pub object_type: monostate::MustBe!("Catalog"),
    /// The STAC version the catalog implements.
    pub stac_version: String,
    /// The schema URIs of the extensions the catalog implements.
    #[serde(default, skip_serializing_if = "StacExtensions::is_empty")]
    pub stac_extensions: StacExtensions,
    /// The catalog identifier.
    pub id: String,
    /// Additional fields.
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

impl TryFrom<&str> for Catalog {
    type Error = serde_json::Error;

    fn try_from(catalog_json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(catalog_json)
    }
}

impl Catalog {
    /// Create a catalog with identifier `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            object_type: monostate::MustBe!("Catalog"),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: StacExtensions::new(),
            id: id.into(),
            extra_fields: Map::new(),
        }
    }

    /// Decode a catalog from a JSON value.
    ///
    /// # Errors
    /// Returns a [`serde_json::Error`] if `value` is not a valid catalog.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Encode the catalog as a JSON value.
    ///
    /// # Errors
    /// Returns a [`serde_json::Error`] if the catalog cannot be encoded.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl ExtensionOwner for Catalog {
    fn owner_kind(&self) -> OwnerKind {
        OwnerKind::Catalog
    }

    fn declared_extensions(&self) -> Option<&StacExtensions> {
        Some(&self.stac_extensions)
    }

    fn owner_fields(&mut self) -> OwnerFields<'_> {
        OwnerFields::new(&mut self.extra_fields).with_declared(&mut self.stac_extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_round_trip() {
        let catalog = Catalog::try_from(
            r#"{
            "type": "Catalog",
            "stac_version": "1.0.0",
            "id": "catalog",
            "description": "a catalog",
            "links": []
        }"#,
        )
        .unwrap();
        assert_eq!(catalog.id, "catalog");
        assert!(catalog.extra_fields.contains_key("links"));
        assert_eq!(
            Catalog::from_value(catalog.to_value().unwrap()).unwrap(),
            catalog
        );
        let collection = r#"{"type": "Collection", "stac_version": "1.0.0", "id": "a"}"#;
        assert!(Catalog::try_from(collection).is_err());
    }
}
