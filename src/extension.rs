//! STAC extension support.
//!
//! A STAC extension is a namespaced set of additional properties attachable to an object, identified by a schema URI.
//! An object must declare the schema URI in the `stac_extensions` of its *declaring object* before the extension can be accessed strictly:
//!  - an item, collection, or catalog is its own declaring object,
//!  - an asset is declared by the item or collection that owns it, and
//!  - a standalone asset has no declaring object and can always be accessed.
//!
//! [`StacExtension`] implements the access gate shared by all extensions.
//! An implementation names the [`OwnerKind`]s it applies to and how it binds to the [`OwnerFields`] of an owner.
//!
//! ### Legacy Schema URIs
//! Extensions evolve and older documents may declare an extension by a previous schema URI.
//! Unless disabled with [`Config::set_migrate_legacy_schema_uris`](crate::config::Config::set_migrate_legacy_schema_uris), a declared legacy schema URI satisfies the declaration check and is rewritten to the current schema URI.

mod error;
pub use error::{
    ExtensionError, ExtensionNotImplementedError, ExtensionTypeError, FieldDecodeError,
};

mod owner;
pub use owner::{ExtensionOwner, OwnerFields, OwnerKind};
pub(crate) use owner::{decode, get_field, get_required_field, set_field};

use crate::{config::global_config, stac::StacExtensions};

/// A STAC extension.
pub trait StacExtension<'a>: Sized {
    /// The human readable name of the extension, e.g. `Datacube`.
    const NAME: &'static str;

    /// The schema URI identifying the extension.
    const SCHEMA_URI: &'static str;

    /// Previous schema URIs identifying the extension.
    const LEGACY_SCHEMA_URIS: &'static [&'static str] = &[];

    /// Returns true if the extension applies to owners of `kind`.
    fn supports(kind: OwnerKind) -> bool;

    /// Bind the extension to the fields of an owner of `kind`.
    ///
    /// This does not check that the extension is declared, use [`StacExtension::ext`].
    fn bind(kind: OwnerKind, fields: OwnerFields<'a>) -> Self;

    /// Returns the schema URI identifying the extension.
    #[must_use]
    fn get_schema_uri() -> &'static str {
        Self::SCHEMA_URI
    }

    /// Access the extension on `owner`.
    ///
    /// If the declaring object of `owner` does not declare the extension, the schema URI is added if `add_if_missing` is true.
    ///
    /// # Errors
    /// Returns an [`ExtensionError`] if
    ///  - the extension does not apply to the kind of `owner`, or
    ///  - the extension is not declared and `add_if_missing` is false.
    fn ext<O: ExtensionOwner + ?Sized>(
        owner: &'a mut O,
        add_if_missing: bool,
    ) -> Result<Self, ExtensionError> {
        let kind = owner.owner_kind();
        if !Self::supports(kind) {
            return Err(ExtensionTypeError::new(Self::NAME, kind.type_name()).into());
        }

        let mut fields = owner.owner_fields();
        if let Some(declared) = fields.declared_extensions_mut() {
            if !ensure_declared::<Self>(declared) {
                if add_if_missing {
                    log::debug!("adding {} to stac_extensions of {kind}", Self::SCHEMA_URI);
                    declared.insert(Self::SCHEMA_URI);
                } else {
                    return Err(ExtensionNotImplementedError::new(Self::SCHEMA_URI).into());
                }
            }
        }

        log::trace!("binding {} extension to {kind}", Self::NAME);
        Ok(Self::bind(kind, fields))
    }

    /// Returns true if the declaring object of `owner` declares the extension.
    ///
    /// An owner without a declaring object (e.g. a standalone asset) never declares an extension.
    fn has_extension<O: ExtensionOwner + ?Sized>(owner: &O) -> bool {
        owner
            .declared_extensions()
            .is_some_and(|declared| is_declared::<Self>(declared))
    }

    /// Declare the extension on the declaring object of `owner`.
    ///
    /// Does nothing if `owner` has no declaring object.
    fn add_to<O: ExtensionOwner + ?Sized>(owner: &mut O) {
        if let Some(declared) = owner.owner_fields().declared_extensions_mut() {
            if !ensure_declared::<Self>(declared) {
                log::debug!("adding {} to stac_extensions", Self::SCHEMA_URI);
                declared.insert(Self::SCHEMA_URI);
            }
        }
    }

    /// Remove the extension, including legacy schema URIs, from the declaring object of `owner`.
    ///
    /// Extension properties of `owner` are left untouched.
    fn remove_from<O: ExtensionOwner + ?Sized>(owner: &mut O) {
        if let Some(declared) = owner.owner_fields().declared_extensions_mut() {
            for uri in std::iter::once(&Self::SCHEMA_URI).chain(Self::LEGACY_SCHEMA_URIS) {
                if declared.remove(uri) {
                    log::debug!("removed {uri} from stac_extensions");
                }
            }
        }
    }
}

fn is_declared<'a, E: StacExtension<'a>>(declared: &StacExtensions) -> bool {
    declared.contains(E::SCHEMA_URI)
        || (global_config().migrate_legacy_schema_uris()
            && E::LEGACY_SCHEMA_URIS
                .iter()
                .any(|legacy| declared.contains(legacy)))
}

/// Returns true if `declared` declares the extension, migrating a legacy schema URI if present.
fn ensure_declared<'a, E: StacExtension<'a>>(declared: &mut StacExtensions) -> bool {
    if declared.contains(E::SCHEMA_URI) {
        return true;
    }
    if !global_config().migrate_legacy_schema_uris() {
        return false;
    }
    for legacy in E::LEGACY_SCHEMA_URIS {
        if declared.replace(legacy, E::SCHEMA_URI) {
            log::debug!("migrated {legacy} to {}", E::SCHEMA_URI);
            return true;
        }
    }
    false
}
