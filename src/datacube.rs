//! The STAC [datacube extension](https://github.com/stac-extensions/datacube).
//!
//! The datacube extension describes the dimensions and variables of multidimensional data referenced by an item, asset, or collection.
//!
//! ### Example
//! ```json
//! "cube:dimensions": {
//!     "x": { "type": "spatial", "axis": "x", "extent": [-180, 180], "reference_system": 4326 },
//!     "time": { "type": "temporal", "extent": ["2020-01-01T00:00:00Z", null], "step": "P1D" },
//!     "bands": { "type": "bands", "values": ["red", "green", "blue"] }
//! },
//! "cube:variables": {
//!     "temp": { "dimensions": ["time", "x"], "type": "data", "unit": "K" }
//! }
//! ```
//!
//! [`Dimension`] and [`Variable`] are typed views over the JSON object describing a dimension or variable.
//! [`DatacubeExtension`] reads and writes them in the fields of an owner.

use thiserror::Error;

use crate::extension::FieldDecodeError;

mod dimension;
pub use dimension::{
    AdditionalDimension, Dimension, DimensionDecodeError, DimensionType, DimensionValue,
    HorizontalSpatialDimension, HorizontalSpatialDimensionAxis, ReferenceSystem,
    TemporalDimension, VerticalSpatialDimension, VerticalSpatialDimensionAxis,
};

mod variable;
pub use variable::{Variable, VariableType};

mod datacube_extension;
pub use datacube_extension::DatacubeExtension;

/// The schema URI of the datacube extension.
pub const SCHEMA_URI: &str = "https://stac-extensions.github.io/datacube/v2.0.0/schema.json";

/// Previous schema URIs of the datacube extension.
pub const LEGACY_SCHEMA_URIS: &[&str] = &[
    "datacube",
    "https://stac-extensions.github.io/datacube/v1.0.0/schema.json",
];

/// The prefix of datacube extension fields.
pub const PREFIX: &str = "cube:";

/// The field holding datacube dimensions.
pub const DIMENSIONS_PROP: &str = "cube:dimensions";

/// The field holding datacube variables.
pub const VARIABLES_PROP: &str = "cube:variables";

/// A datacube decoding error.
#[derive(Debug, Error)]
pub enum DatacubeError {
    /// A dimension could not be decoded.
    #[error(transparent)]
    Dimension(#[from] DimensionDecodeError),
    /// A field could not be decoded.
    #[error(transparent)]
    Field(#[from] FieldDecodeError),
}
