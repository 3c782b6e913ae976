//! A minimal STAC document model.
//!
//! The types in this module are the owners that extensions attach to.
//! Known fields are typed and any other field is retained verbatim, so a document survives a decode, mutate, encode round trip.
//!
//! See <https://github.com/radiantearth/stac-spec>.

mod asset;
pub use asset::Asset;

mod item;
pub use item::{Item, ItemAsset};

mod collection;
pub use collection::{Collection, CollectionAsset};

mod catalog;
pub use catalog::Catalog;

mod object;
pub use object::StacObject;

use derive_more::Deref;
use serde::{Deserialize, Serialize};

/// The STAC version written by default.
pub const STAC_VERSION: &str = "1.0.0";

/// The schema URIs of the extensions declared by a STAC object (`stac_extensions`).
///
/// Preserves declaration order and never holds duplicate URIs.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Default, Deref)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StacExtensions(Vec<String>);

impl StacExtensions {
    /// Create an empty set of declared extensions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no extensions are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `uri` is declared.
    #[must_use]
    pub fn contains(&self, uri: &str) -> bool {
        self.0.iter().any(|declared| declared == uri)
    }

    /// Declare `uri`.
    ///
    /// Returns false if `uri` was already declared.
    pub fn insert(&mut self, uri: impl Into<String>) -> bool {
        let uri = uri.into();
        if self.contains(&uri) {
            false
        } else {
            self.0.push(uri);
            true
        }
    }

    /// Remove `uri`.
    ///
    /// Returns true if `uri` was declared.
    pub fn remove(&mut self, uri: &str) -> bool {
        let len = self.0.len();
        self.0.retain(|declared| declared != uri);
        self.0.len() != len
    }

    /// Replace `from` with `to` in place.
    ///
    /// If `to` is already declared, `from` is removed instead.
    /// Returns true if `from` was declared.
    pub fn replace(&mut self, from: &str, to: &str) -> bool {
        if self.contains(to) {
            return self.remove(from);
        }
        match self.0.iter_mut().find(|declared| *declared == from) {
            Some(declared) => {
                *declared = to.to_string();
                true
            }
            None => false,
        }
    }
}

impl From<Vec<String>> for StacExtensions {
    fn from(uris: Vec<String>) -> Self {
        uris.into_iter().collect()
    }
}

impl From<StacExtensions> for Vec<String> {
    fn from(extensions: StacExtensions) -> Self {
        extensions.0
    }
}

impl FromIterator<String> for StacExtensions {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut extensions = Self::new();
        for uri in iter {
            extensions.insert(uri);
        }
        extensions
    }
}
