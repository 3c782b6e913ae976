//! A rust library for the [STAC datacube extension](https://github.com/stac-extensions/datacube).
//!
//! The datacube extension describes the dimensions and variables of multidimensional data referenced by a [SpatioTemporal Asset Catalog](https://stacspec.org) item, asset, or collection.
//! This crate provides typed views over those fields, read from and written back to the JSON document they live in.
//!
//! ## Getting Started
//! - [`stac`] holds a minimal STAC document model ([`stac::Item`], [`stac::Asset`], [`stac::Collection`], etc.) that retains unknown fields verbatim.
//! - [`extension`] implements the declaration check shared by STAC extensions.
//! - [`datacube`] is the datacube extension: [`datacube::DatacubeExtension`], [`datacube::Dimension`] and [`datacube::Variable`].
//!
//! ## Example
//! ```rust
//! use stac_datacube::{datacube::{DatacubeExtension, Dimension}, extension::StacExtension, stac::Item};
//!
//! let mut item = Item::try_from(r#"{
//!     "type": "Feature",
//!     "stac_version": "1.0.0",
//!     "stac_extensions": ["https://stac-extensions.github.io/datacube/v2.0.0/schema.json"],
//!     "id": "item",
//!     "properties": {
//!         "cube:dimensions": {
//!             "x": { "type": "spatial", "axis": "x", "extent": [-180, 180] },
//!             "time": { "type": "temporal", "extent": ["2020-01-01T00:00:00Z", null] }
//!         }
//!     }
//! }"#)?;
//!
//! let datacube = DatacubeExtension::ext(&mut item, false)?;
//! let dimensions = datacube.dimensions()?.unwrap_or_default();
//! assert!(matches!(dimensions["x"], Dimension::HorizontalSpatial(_)));
//! assert!(matches!(dimensions["time"], Dimension::Temporal(_)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! JSON schema validation and document I/O are left to other crates.
//!
//! ## Licence
//! `stac_datacube` is licensed under either of
//!  - the Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

#![warn(unused_variables)]
#![warn(dead_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![deny(clippy::missing_panics_doc)]

pub mod config;
pub mod datacube;
pub mod extension;
pub mod stac;

pub use datacube::DatacubeExtension;
pub use extension::{ExtensionError, StacExtension};
