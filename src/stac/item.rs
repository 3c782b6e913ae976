use std::collections::BTreeMap;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::extension::{ExtensionOwner, OwnerFields, OwnerKind};

use super::{Asset, StacExtensions, STAC_VERSION};

/// A STAC item.
///
/// See <https://github.com/radiantearth/stac-spec/blob/master/item-spec/item-spec.md>.
///
/// Fields other than those below (e.g. `geometry`, `bbox`, `links`) are retained in [`Item::additional_fields`].
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Display)]
#[display("{}", serde_json::to_string(self).unwrap_or_default())]
pub struct Item {
    /// The GeoJSON type, must be `Feature`.
    #[serde(rename = "type")]
    pub object_type: monostate::MustBe!("Feature"),
    /// The STAC version the item implements.
    pub stac_version: String,
    /// The schema URIs of the extensions the item and its assets implement.
    #[serde(default, skip_serializing_if = "StacExtensions::is_empty")]
    pub stac_extensions: StacExtensions,
    /// The item identifier.
    pub id: String,
    /// The item properties, including extension properties.
    #[serde(default)]
    pub properties: Map<String, Value>,
    /// The item assets.
    #[serde(default)]
    pub assets: BTreeMap<String, Asset>,
    /// Additional fields.
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl TryFrom<&str> for Item {
    type Error = serde_json::Error;

    fn try_from(item_json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(item_json)
    }
}

impl Item {
    /// Create an item with identifier `id` and no properties or assets.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            object_type: monostate::MustBe!("Feature"),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: StacExtensions::new(),
            id: id.into(),
            properties: Map::new(),
            assets: BTreeMap::new(),
            additional_fields: Map::new(),
        }
    }

    /// Decode an item from a JSON value.
    ///
    /// # Errors
    /// Returns a [`serde_json::Error`] if `value` is not a valid item.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Encode the item as a JSON value.
    ///
    /// # Errors
    /// Returns a [`serde_json::Error`] if the item cannot be encoded.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Add an asset named `name`, replacing any existing asset with that name.
    #[must_use]
    pub fn with_asset(mut self, name: impl Into<String>, asset: Asset) -> Self {
        self.assets.insert(name.into(), asset);
        self
    }

    /// Returns the asset named `name` together with this item as its owner.
    #[must_use]
    pub fn asset_mut(&mut self, name: &str) -> Option<ItemAsset<'_>> {
        let asset = self.assets.get_mut(name)?;
        Some(ItemAsset {
            asset,
            stac_extensions: &mut self.stac_extensions,
            properties: &self.properties,
        })
    }
}

impl ExtensionOwner for Item {
    fn owner_kind(&self) -> OwnerKind {
        OwnerKind::Item
    }

    fn declared_extensions(&self) -> Option<&StacExtensions> {
        Some(&self.stac_extensions)
    }

    fn owner_fields(&mut self) -> OwnerFields<'_> {
        OwnerFields::new(&mut self.properties).with_declared(&mut self.stac_extensions)
    }
}

/// An asset of an [`Item`].
///
/// The asset declares extensions through the `stac_extensions` of the item.
/// Extension properties absent from the asset are read from the item properties.
#[derive(Debug)]
pub struct ItemAsset<'a> {
    asset: &'a mut Asset,
    stac_extensions: &'a mut StacExtensions,
    properties: &'a Map<String, Value>,
}

impl ItemAsset<'_> {
    /// Returns the asset.
    #[must_use]
    pub fn asset(&self) -> &Asset {
        &*self.asset
    }

    /// Returns the asset mutably.
    pub fn asset_mut(&mut self) -> &mut Asset {
        &mut *self.asset
    }

    /// Returns the properties of the owning item.
    #[must_use]
    pub fn item_properties(&self) -> &Map<String, Value> {
        self.properties
    }
}

impl ExtensionOwner for ItemAsset<'_> {
    fn owner_kind(&self) -> OwnerKind {
        OwnerKind::Asset
    }

    fn declared_extensions(&self) -> Option<&StacExtensions> {
        Some(&*self.stac_extensions)
    }

    fn owner_fields(&mut self) -> OwnerFields<'_> {
        OwnerFields::new(&mut self.asset.extra_fields)
            .with_declared(&mut *self.stac_extensions)
            .with_inherited(self.properties)
    }
}
