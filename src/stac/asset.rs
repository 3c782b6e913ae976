use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::extension::{ExtensionOwner, OwnerFields, OwnerKind};

use super::StacExtensions;

/// A STAC asset.
///
/// A standalone asset has no owner.
/// Use [`Item::asset_mut`](super::Item::asset_mut) or [`Collection::asset_mut`](super::Collection::asset_mut) to access an asset together with its owner.
///
/// ### Example
/// ```json
/// {
///     "href": "https://example.com/data.nc",
///     "type": "application/netcdf",
///     "roles": ["data"],
///     "cube:variables": {}
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Display)]
#[display("{}", serde_json::to_string(self).unwrap_or_default())]
pub struct Asset {
    /// The URI of the asset.
    pub href: String,
    /// The displayed title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// A description of the asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The media type of the asset.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// The semantic roles of the asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// Additional fields, including extension fields.
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

impl TryFrom<&str> for Asset {
    type Error = serde_json::Error;

    fn try_from(asset_json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(asset_json)
    }
}

impl Asset {
    /// Create an asset referencing `href`.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: None,
            description: None,
            media_type: None,
            roles: None,
            extra_fields: Map::new(),
        }
    }

    /// Decode an asset from a JSON value.
    ///
    /// # Errors
    /// Returns a [`serde_json::Error`] if `value` is not a valid asset.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Encode the asset as a JSON value.
    ///
    /// # Errors
    /// Returns a [`serde_json::Error`] if the asset cannot be encoded.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Set the media type.
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Set the roles.
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = Some(roles);
        self
    }
}

impl ExtensionOwner for Asset {
    fn owner_kind(&self) -> OwnerKind {
        OwnerKind::Asset
    }

    fn declared_extensions(&self) -> Option<&StacExtensions> {
        None
    }

    fn owner_fields(&mut self) -> OwnerFields<'_> {
        OwnerFields::new(&mut self.extra_fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_extra_fields() {
        let asset = Asset::try_from(
            r#"{
            "href": "data.nc",
            "type": "application/netcdf",
            "roles": ["data"],
            "cube:variables": {"temp": {"dimensions": [], "type": "data"}}
        }"#,
        )
        .unwrap();
        assert_eq!(asset.href, "data.nc");
        assert_eq!(asset.media_type.as_deref(), Some("application/netcdf"));
        assert_eq!(asset.roles, Some(vec!["data".to_string()]));
        assert!(asset.extra_fields.contains_key("cube:variables"));

        let value = asset.to_value().unwrap();
        assert_eq!(Asset::from_value(value).unwrap(), asset);
    }

    #[test]
    fn asset_empty_roles() {
        let asset = Asset::try_from(r#"{"href": "data.nc", "roles": []}"#).unwrap();
        assert_eq!(asset.roles, Some(vec![]));
        assert_eq!(
            asset.to_value().unwrap(),
            serde_json::json!({"href": "data.nc", "roles": []})
        );
        assert!(!Asset::new("data.nc")
            .to_value()
            .unwrap()
            .as_object()
            .unwrap()
            .contains_key("roles"));
    }

    #[test]
    fn asset_ownerless() {
        let mut asset = Asset::new("data.nc");
        assert!(asset.declared_extensions().is_none());
        assert!(asset.owner_fields().declared_extensions().is_none());
        assert_eq!(asset.owner_kind(), OwnerKind::Asset);
    }
}
