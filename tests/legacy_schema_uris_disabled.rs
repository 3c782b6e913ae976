#![allow(missing_docs)]

use stac_datacube::{
    config::global_config_mut,
    datacube::DatacubeExtension,
    extension::{ExtensionError, StacExtension},
    stac::Item,
};

#[test]
fn datacube_legacy_schema_uri_not_migrated() {
    let mut item = Item::new("item");
    item.stac_extensions.insert("datacube");

    global_config_mut().set_migrate_legacy_schema_uris(false);
    assert!(!DatacubeExtension::has_extension(&item));
    assert!(matches!(
        DatacubeExtension::ext(&mut item, false),
        Err(ExtensionError::NotImplemented(_))
    ));
    assert!(item.stac_extensions.contains("datacube"));

    let _ = DatacubeExtension::ext(&mut item, true).unwrap();
    assert!(item.stac_extensions.contains("datacube"));
    assert!(item
        .stac_extensions
        .contains(DatacubeExtension::get_schema_uri()));
    global_config_mut().set_migrate_legacy_schema_uris(true);
}
