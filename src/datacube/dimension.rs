//! Datacube dimensions.
//!
//! See <https://github.com/stac-extensions/datacube#dimension-object>.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

mod horizontal_spatial;
pub use horizontal_spatial::{HorizontalSpatialDimension, HorizontalSpatialDimensionAxis};

mod vertical_spatial;
pub use vertical_spatial::{VerticalSpatialDimension, VerticalSpatialDimensionAxis};

mod temporal;
pub use temporal::TemporalDimension;

mod additional;
pub use additional::AdditionalDimension;

pub(crate) const TYPE: &str = "type";
pub(crate) const DESCRIPTION: &str = "description";
pub(crate) const AXIS: &str = "axis";
pub(crate) const EXTENT: &str = "extent";
pub(crate) const VALUES: &str = "values";
pub(crate) const STEP: &str = "step";
pub(crate) const UNIT: &str = "unit";
pub(crate) const REFERENCE_SYSTEM: &str = "reference_system";

const SPATIAL: &str = "spatial";
const TEMPORAL: &str = "temporal";

/// The type of a dimension.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum DimensionType {
    /// A spatial dimension (`spatial`).
    #[display("spatial")]
    Spatial,
    /// A temporal dimension (`temporal`).
    #[display("temporal")]
    Temporal,
    /// Any other dimension type, e.g. `bands`.
    #[display("{_0}")]
    Other(String),
}

impl DimensionType {
    /// Returns the dimension type as it appears in the `type` field.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Spatial => SPATIAL,
            Self::Temporal => TEMPORAL,
            Self::Other(dim_type) => dim_type,
        }
    }
}

impl From<&str> for DimensionType {
    fn from(dim_type: &str) -> Self {
        match dim_type {
            SPATIAL => Self::Spatial,
            TEMPORAL => Self::Temporal,
            _ => Self::Other(dim_type.to_string()),
        }
    }
}

/// A dimension value or extent bound, a number or a string.
///
/// Numbers keep their JSON representation, so an integer is written back as an integer.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Display, From)]
#[serde(untagged)]
pub enum DimensionValue {
    /// A number.
    #[display("{_0}")]
    Number(serde_json::Number),
    /// A string.
    #[display("{_0}")]
    String(String),
}

impl DimensionValue {
    /// Returns the value as an [`f64`] if it is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            Self::String(_) => None,
        }
    }
}

impl From<&str> for DimensionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for DimensionValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for DimensionValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl TryFrom<f64> for DimensionValue {
    type Error = f64;

    /// Fails if `value` is not finite, since JSON has no representation for it.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        serde_json::Number::from_f64(value)
            .map(Self::Number)
            .ok_or(value)
    }
}

/// The reference system of a dimension.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, From)]
#[serde(untagged)]
pub enum ReferenceSystem {
    /// An EPSG code.
    Epsg(u64),
    /// A WKT2 string.
    Wkt2(String),
    /// A PROJJSON object.
    ProjJson(Map<String, Value>),
}

impl Default for ReferenceSystem {
    /// EPSG:4326, the default of spatial dimensions.
    fn default() -> Self {
        Self::Epsg(4326)
    }
}

/// A dimension decoding error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DimensionDecodeError {
    /// A spatial dimension without an `axis`.
    #[error("spatial dimension has no axis")]
    MissingAxis,
    /// A spatial dimension with an unrecognised `axis`.
    #[error("unrecognised spatial dimension axis {0}")]
    InvalidAxis(Value),
    /// An additional dimension with a `type` reserved for spatial or temporal dimensions.
    #[error("dimension type {0} is reserved for spatial and temporal dimensions")]
    ReservedType(String),
}

/// A datacube dimension.
///
/// The variant is chosen by the `type` field and, for spatial dimensions, the `axis` field.
#[derive(Clone, PartialEq, Debug, From)]
pub enum Dimension {
    /// A spatial dimension with axis `x` or `y`.
    HorizontalSpatial(HorizontalSpatialDimension),
    /// A spatial dimension with axis `z`.
    VerticalSpatial(VerticalSpatialDimension),
    /// A temporal dimension.
    Temporal(TemporalDimension),
    /// Any other dimension.
    Additional(AdditionalDimension),
}

enum DimensionKind {
    HorizontalSpatial,
    VerticalSpatial,
    Temporal,
    Additional,
}

impl Dimension {
    /// Create a dimension from its JSON object.
    ///
    /// | `type`     | `axis`       | Dimension                             |
    /// |------------|--------------|---------------------------------------|
    /// | `spatial`  | `x` or `y`   | [`Dimension::HorizontalSpatial`]      |
    /// | `spatial`  | `z`          | [`Dimension::VerticalSpatial`]        |
    /// | `temporal` |              | [`Dimension::Temporal`]               |
    /// | other      |              | [`Dimension::Additional`]             |
    ///
    /// # Errors
    /// Returns a [`DimensionDecodeError`] if a spatial dimension has a missing or unrecognised axis.
    pub fn from_dict(properties: Map<String, Value>) -> Result<Self, DimensionDecodeError> {
        let kind = match properties.get(TYPE).and_then(Value::as_str) {
            Some(SPATIAL) => match properties.get(AXIS) {
                Some(Value::String(axis))
                    if HorizontalSpatialDimensionAxis::try_from(axis.as_str()).is_ok() =>
                {
                    DimensionKind::HorizontalSpatial
                }
                Some(Value::String(axis))
                    if VerticalSpatialDimensionAxis::try_from(axis.as_str()).is_ok() =>
                {
                    DimensionKind::VerticalSpatial
                }
                Some(axis) => return Err(DimensionDecodeError::InvalidAxis(axis.clone())),
                None => return Err(DimensionDecodeError::MissingAxis),
            },
            Some(TEMPORAL) => DimensionKind::Temporal,
            _ => DimensionKind::Additional,
        };
        Ok(match kind {
            DimensionKind::HorizontalSpatial => {
                Self::HorizontalSpatial(HorizontalSpatialDimension { properties })
            }
            DimensionKind::VerticalSpatial => {
                Self::VerticalSpatial(VerticalSpatialDimension { properties })
            }
            DimensionKind::Temporal => Self::Temporal(TemporalDimension { properties }),
            DimensionKind::Additional => Self::Additional(AdditionalDimension { properties }),
        })
    }

    /// Returns the JSON object of the dimension.
    #[must_use]
    pub fn to_dict(&self) -> &Map<String, Value> {
        match self {
            Self::HorizontalSpatial(dimension) => dimension.to_dict(),
            Self::VerticalSpatial(dimension) => dimension.to_dict(),
            Self::Temporal(dimension) => dimension.to_dict(),
            Self::Additional(dimension) => dimension.to_dict(),
        }
    }

    /// Convert the dimension into its JSON object.
    #[must_use]
    pub fn into_dict(self) -> Map<String, Value> {
        match self {
            Self::HorizontalSpatial(dimension) => dimension.into_dict(),
            Self::VerticalSpatial(dimension) => dimension.into_dict(),
            Self::Temporal(dimension) => dimension.into_dict(),
            Self::Additional(dimension) => dimension.into_dict(),
        }
    }

    /// Returns the dimension type.
    #[must_use]
    pub fn dim_type(&self) -> DimensionType {
        match self {
            Self::HorizontalSpatial(dimension) => dimension.dim_type(),
            Self::VerticalSpatial(dimension) => dimension.dim_type(),
            Self::Temporal(dimension) => dimension.dim_type(),
            Self::Additional(dimension) => dimension.dim_type(),
        }
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        description(self.to_dict())
    }

    /// Set the description, or remove it if [`None`].
    pub fn set_description(&mut self, description: Option<&str>) -> &mut Self {
        let properties = match self {
            Self::HorizontalSpatial(dimension) => &mut dimension.properties,
            Self::VerticalSpatial(dimension) => &mut dimension.properties,
            Self::Temporal(dimension) => &mut dimension.properties,
            Self::Additional(dimension) => &mut dimension.properties,
        };
        set_description(properties, description);
        self
    }
}

impl Serialize for Dimension {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.to_dict().serialize(s)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let properties = Map::deserialize(d)?;
        Self::from_dict(properties).map_err(serde::de::Error::custom)
    }
}

fn description(properties: &Map<String, Value>) -> Option<&str> {
    properties.get(DESCRIPTION).and_then(Value::as_str)
}

fn set_description(properties: &mut Map<String, Value>, description: Option<&str>) {
    crate::extension::set_field(properties, DESCRIPTION, description.map(Value::from));
}

/// Implements the accessors common to all dimensions.
macro_rules! dimension_common {
    ($dimension:ty) => {
        impl $dimension {
            /// Returns the JSON object of the dimension.
            #[must_use]
            pub fn to_dict(&self) -> &serde_json::Map<String, serde_json::Value> {
                &self.properties
            }

            /// Convert the dimension into its JSON object.
            #[must_use]
            pub fn into_dict(self) -> serde_json::Map<String, serde_json::Value> {
                self.properties
            }

            /// Returns the description.
            #[must_use]
            pub fn description(&self) -> Option<&str> {
                super::description(&self.properties)
            }

            /// Set the description, or remove it if [`None`].
            pub fn set_description(&mut self, description: Option<&str>) -> &mut Self {
                super::set_description(&mut self.properties, description);
                self
            }
        }

        impl From<$dimension> for serde_json::Value {
            fn from(dimension: $dimension) -> Self {
                serde_json::Value::Object(dimension.into_dict())
            }
        }
    };
}
use dimension_common;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dict(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(object) => object,
            _ => panic!("not an object"),
        }
    }

    const DESC: &str = "explains the dimension";

    #[test]
    fn dimension_horizontal_spatial() {
        for axis in [
            HorizontalSpatialDimensionAxis::X,
            HorizontalSpatialDimensionAxis::Y,
        ] {
            let dimension = Dimension::from_dict(dict(json!({
                "type": "spatial",
                "axis": axis.to_string(),
                "description": DESC,
            })))
            .unwrap();
            let Dimension::HorizontalSpatial(horizontal) = &dimension else {
                panic!("expected a horizontal spatial dimension");
            };
            assert_eq!(dimension.description(), Some(DESC));
            assert_eq!(dimension.dim_type(), DimensionType::Spatial);
            assert_eq!(horizontal.axis(), axis);
        }
    }

    #[test]
    fn dimension_vertical_spatial() {
        let dimension = Dimension::from_dict(dict(json!({
            "type": "spatial",
            "axis": "z",
            "description": DESC,
        })))
        .unwrap();
        let Dimension::VerticalSpatial(vertical) = &dimension else {
            panic!("expected a vertical spatial dimension");
        };
        assert_eq!(dimension.description(), Some(DESC));
        assert_eq!(dimension.dim_type(), DimensionType::Spatial);
        assert_eq!(vertical.axis(), VerticalSpatialDimensionAxis::Z);
    }

    #[test]
    fn dimension_temporal() {
        let dimension =
            Dimension::from_dict(dict(json!({"type": "temporal", "description": DESC}))).unwrap();
        assert!(matches!(dimension, Dimension::Temporal(_)));
        assert_eq!(dimension.description(), Some(DESC));
        assert_eq!(dimension.dim_type(), DimensionType::Temporal);
    }

    #[test]
    fn dimension_additional() {
        let dimension =
            Dimension::from_dict(dict(json!({"type": "other", "description": DESC}))).unwrap();
        assert!(matches!(dimension, Dimension::Additional(_)));
        assert_eq!(dimension.description(), Some(DESC));
        assert_eq!(
            dimension.dim_type(),
            DimensionType::Other("other".to_string())
        );
        assert_eq!(dimension.to_dict()["type"], json!("other"));

        let dimension = Dimension::from_dict(dict(json!({"description": DESC}))).unwrap();
        assert!(matches!(dimension, Dimension::Additional(_)));
    }

    #[test]
    fn dimension_invalid_axis() {
        assert_eq!(
            Dimension::from_dict(dict(json!({"type": "spatial", "axis": "w"}))),
            Err(DimensionDecodeError::InvalidAxis(json!("w")))
        );
        assert_eq!(
            Dimension::from_dict(dict(json!({"type": "spatial", "axis": 1}))),
            Err(DimensionDecodeError::InvalidAxis(json!(1)))
        );
        assert_eq!(
            Dimension::from_dict(dict(json!({"type": "spatial"}))),
            Err(DimensionDecodeError::MissingAxis)
        );
    }

    #[test]
    fn dimension_set_description() {
        let mut dimension = Dimension::from_dict(dict(json!({"type": "temporal"}))).unwrap();
        assert_eq!(dimension.description(), None);
        dimension.set_description(Some(DESC));
        assert_eq!(dimension.to_dict()["description"], json!(DESC));
        dimension.set_description(None);
        assert!(!dimension.to_dict().contains_key("description"));
    }

    #[test]
    fn dimension_serde() {
        let dimension: Dimension =
            serde_json::from_str(r#"{"type": "spatial", "axis": "y", "extent": [0, 1]}"#).unwrap();
        assert!(matches!(dimension, Dimension::HorizontalSpatial(_)));
        assert_eq!(
            serde_json::to_value(&dimension).unwrap(),
            json!({"type": "spatial", "axis": "y", "extent": [0, 1]})
        );
        assert!(serde_json::from_str::<Dimension>(r#"{"type": "spatial", "axis": "t"}"#).is_err());
    }

    #[test]
    fn dimension_value_number_repr() {
        let values: Vec<DimensionValue> =
            serde_json::from_value(json!([0, 10, 2.5, "a"])).unwrap();
        assert_eq!(values[1], DimensionValue::from(10_u64));
        assert_eq!(values[2].as_f64(), Some(2.5));
        assert_eq!(values[3].as_f64(), None);
        assert_eq!(serde_json::to_value(&values).unwrap(), json!([0, 10, 2.5, "a"]));
        assert_eq!(DimensionValue::try_from(f64::NAN).map_err(f64::is_nan), Err(true));
        assert_eq!(DimensionValue::try_from(-1.5).unwrap().to_string(), "-1.5");
    }

    #[test]
    fn dimension_type_str() {
        assert_eq!(DimensionType::from("spatial"), DimensionType::Spatial);
        assert_eq!(DimensionType::from("bands").as_str(), "bands");
        assert_eq!(DimensionType::Temporal.to_string(), "temporal");
    }

    #[test]
    fn reference_system() {
        assert_eq!(ReferenceSystem::default(), ReferenceSystem::Epsg(4326));
        let wkt: ReferenceSystem = serde_json::from_str(r#""PROJCRS[...]""#).unwrap();
        assert!(matches!(wkt, ReferenceSystem::Wkt2(_)));
        let projjson: ReferenceSystem = serde_json::from_str(r#"{"type": "ProjectedCRS"}"#).unwrap();
        assert!(matches!(projjson, ReferenceSystem::ProjJson(_)));
    }
}
