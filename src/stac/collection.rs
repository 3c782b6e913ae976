use std::collections::BTreeMap;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::extension::{ExtensionOwner, OwnerFields, OwnerKind};

use super::{Asset, StacExtensions, STAC_VERSION};

/// A STAC collection.
///
/// See <https://github.com/radiantearth/stac-spec/blob/master/collection-spec/collection-spec.md>.
///
/// Extension fields of a collection are top level fields, retained in [`Collection::extra_fields`] with `extent`, `license`, `links`, etc.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Display)]
#[display("{}", serde_json::to_string(self).unwrap_or_default())]
pub struct Collection {
    /// The object type, must be `Collection`.
    #[serde(rename = "type")]
    pub object_type: monostate::MustBe!("Collection"),
    /// The STAC version the collection implements.
    pub stac_version: String,
    /// The schema URIs of the extensions the collection and its assets implement.
    #[serde(default, skip_serializing_if = "StacExtensions::is_empty")]
    pub stac_extensions: StacExtensions,
    /// The collection identifier.
    pub id: String,
    /// The collection assets.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub assets: BTreeMap<String, Asset>,
    /// Additional fields, including extension fields.
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

impl TryFrom<&str> for Collection {
    type Error = serde_json::Error;

    fn try_from(collection_json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(collection_json)
    }
}

impl Collection {
    /// Create a collection with identifier `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            object_type: monostate::MustBe!("Collection"),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: StacExtensions::new(),
            id: id.into(),
            assets: BTreeMap::new(),
            extra_fields: Map::new(),
        }
    }

    /// Decode a collection from a JSON value.
    ///
    /// # Errors
    /// Returns a [`serde_json::Error`] if `value` is not a valid collection.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Encode the collection as a JSON value.
    ///
    /// # Errors
    /// Returns a [`serde_json::Error`] if the collection cannot be encoded.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Add an asset named `name`, replacing any existing asset with that name.
    #[must_use]
    pub fn with_asset(mut self, name: impl Into<String>, asset: Asset) -> Self {
        self.assets.insert(name.into(), asset);
        self
    }

    /// Returns the asset named `name` together with this collection as its owner.
    #[must_use]
    pub fn asset_mut(&mut self, name: &str) -> Option<CollectionAsset<'_>> {
        let asset = self.assets.get_mut(name)?;
        Some(CollectionAsset {
            asset,
            stac_extensions: &mut self.stac_extensions,
        })
    }
}

impl ExtensionOwner for Collection {
    fn owner_kind(&self) -> OwnerKind {
        OwnerKind::Collection
    }

    fn declared_extensions(&self) -> Option<&StacExtensions> {
        Some(&self.stac_extensions)
    }

    fn owner_fields(&mut self) -> OwnerFields<'_> {
        OwnerFields::new(&mut self.extra_fields).with_declared(&mut self.stac_extensions)
    }
}

/// An asset of a [`Collection`].
///
/// The asset declares extensions through the `stac_extensions` of the collection.
#[derive(Debug)]
pub struct CollectionAsset<'a> {
    asset: &'a mut Asset,
    stac_extensions: &'a mut StacExtensions,
}

impl CollectionAsset<'_> {
    /// Returns the asset.
    #[must_use]
    pub fn asset(&self) -> &Asset {
        &*self.asset
    }

    /// Returns the asset mutably.
    pub fn asset_mut(&mut self) -> &mut Asset {
        &mut *self.asset
    }
}

impl ExtensionOwner for CollectionAsset<'_> {
    fn owner_kind(&self) -> OwnerKind {
        OwnerKind::Asset
    }

    fn declared_extensions(&self) -> Option<&StacExtensions> {
        Some(&*self.stac_extensions)
    }

    fn owner_fields(&mut self) -> OwnerFields<'_> {
        OwnerFields::new(&mut self.asset.extra_fields).with_declared(&mut *self.stac_extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_extra_fields() {
        let collection = Collection::try_from(
            r#"{
            "type": "Collection",
            "stac_version": "1.0.0",
            "id": "collection",
            "description": "a collection",
            "license": "proprietary",
            "extent": {},
            "links": [],
            "cube:dimensions": {}
        }"#,
        )
        .unwrap();
        assert!(collection.stac_extensions.is_empty());
        assert!(collection.assets.is_empty());
        assert!(collection.extra_fields.contains_key("cube:dimensions"));
        assert_eq!(
            Collection::from_value(collection.to_value().unwrap()).unwrap(),
            collection
        );
    }

    #[test]
    fn collection_asset_owner_fields() {
        let mut collection =
            Collection::new("collection").with_asset("data", Asset::new("data.zarr"));
        let mut asset = collection.asset_mut("data").unwrap();
        assert_eq!(asset.asset().href, "data.zarr");
        asset
            .owner_fields()
            .declared_extensions_mut()
            .unwrap()
            .insert("x");
        assert!(collection.stac_extensions.contains("x"));
    }
}
