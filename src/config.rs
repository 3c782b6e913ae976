//! `stac_datacube` global configuration options.

use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Global configuration options for the `stac_datacube` crate.
///
/// Retrieve the global [`Config`] with [`global_config`] and modify it with [`global_config_mut`].
///
/// # Extension Declaration Options
///
/// ## Migrate Legacy Schema URIs
///  > default: [`true`]
///
/// If enabled, an owner declaring a legacy schema URI of an extension (e.g. `datacube` or the `v1.0.0` datacube schema) is treated as declaring the extension.
/// The legacy URI is rewritten to the current schema URI in place when the extension is accessed.
/// Otherwise, only the current schema URI satisfies the declaration check.
#[derive(Debug)]
pub struct Config {
    migrate_legacy_schema_uris: bool,
}

#[allow(clippy::derivable_impls)]
impl Default for Config {
    fn default() -> Self {
        Config {
            migrate_legacy_schema_uris: true,
        }
    }
}

impl Config {
    /// Get the [migrate legacy schema URIs](#migrate-legacy-schema-uris) configuration.
    #[must_use]
    pub fn migrate_legacy_schema_uris(&self) -> bool {
        self.migrate_legacy_schema_uris
    }

    /// Set the [migrate legacy schema URIs](#migrate-legacy-schema-uris) configuration.
    pub fn set_migrate_legacy_schema_uris(&mut self, migrate_legacy_schema_uris: bool) {
        self.migrate_legacy_schema_uris = migrate_legacy_schema_uris;
    }
}

static CONFIG: OnceLock<RwLock<Config>> = OnceLock::new();

/// Returns a reference to the global `stac_datacube` configuration.
///
/// # Panics
/// This function panics if the underlying lock has been poisoned and might panic if the global config is already held by the current thread.
pub fn global_config() -> RwLockReadGuard<'static, Config> {
    CONFIG
        .get_or_init(|| RwLock::new(Config::default()))
        .read()
        .unwrap()
}

/// Returns a mutable reference to the global `stac_datacube` configuration.
///
/// # Panics
/// This function panics if the underlying lock has been poisoned and might panic if the global config is already held by the current thread.
pub fn global_config_mut() -> RwLockWriteGuard<'static, Config> {
    CONFIG
        .get_or_init(|| RwLock::new(Config::default()))
        .write()
        .unwrap()
}
