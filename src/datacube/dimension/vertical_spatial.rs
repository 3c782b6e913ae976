use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::extension::{get_field, get_required_field, set_field, FieldDecodeError};

use super::{
    DimensionType, DimensionValue, ReferenceSystem, AXIS, EXTENT, REFERENCE_SYSTEM, SPATIAL, STEP,
    TYPE, UNIT, VALUES,
};

/// The axis of a vertical spatial dimension.
#[derive(Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[serde(rename_all = "lowercase")]
pub enum VerticalSpatialDimensionAxis {
    /// The `z` axis.
    #[display("z")]
    Z,
}

impl TryFrom<&str> for VerticalSpatialDimensionAxis {
    type Error = String;

    fn try_from(axis: &str) -> Result<Self, Self::Error> {
        match axis {
            "z" => Ok(Self::Z),
            _ => Err(axis.to_string()),
        }
    }
}

/// A vertical spatial dimension, with axis `z`.
///
/// ### Example
/// ```json
/// {
///     "type": "spatial",
///     "axis": "z",
///     "extent": [0, 1000],
///     "values": [0, 100, 250, 500, 1000],
///     "unit": "m"
/// }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct VerticalSpatialDimension {
    pub(super) properties: Map<String, Value>,
}

super::dimension_common!(VerticalSpatialDimension);

impl VerticalSpatialDimension {
    /// Create a vertical spatial dimension covering `extent` (`[min, max]`, either may be open).
    #[must_use]
    pub fn new(extent: [Option<f64>; 2]) -> Self {
        let mut properties = Map::new();
        properties.insert(TYPE.to_string(), Value::from(SPATIAL));
        properties.insert(
            AXIS.to_string(),
            Value::from(VerticalSpatialDimensionAxis::Z.to_string()),
        );
        properties.insert(EXTENT.to_string(), json!(extent));
        Self { properties }
    }

    /// Returns the dimension type, always [`DimensionType::Spatial`].
    #[must_use]
    pub fn dim_type(&self) -> DimensionType {
        DimensionType::Spatial
    }

    /// Returns the axis.
    #[must_use]
    pub fn axis(&self) -> VerticalSpatialDimensionAxis {
        VerticalSpatialDimensionAxis::Z
    }

    /// Set the axis.
    pub fn set_axis(&mut self, axis: VerticalSpatialDimensionAxis) -> &mut Self {
        self.properties
            .insert(AXIS.to_string(), Value::from(axis.to_string()));
        self
    }

    /// Returns the extent (`[min, max]`), [`None`] bounds are open.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the extent is missing or is not a pair of numbers or `null`.
    pub fn extent(&self) -> Result<[Option<f64>; 2], FieldDecodeError> {
        get_required_field(&self.properties, EXTENT)
    }

    /// Set the extent (`[min, max]`), [`None`] bounds are open.
    pub fn set_extent(&mut self, extent: [Option<f64>; 2]) -> &mut Self {
        set_field(&mut self.properties, EXTENT, Some(json!(extent)));
        self
    }

    /// Returns the ordered values, if the dimension has discrete values.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the values are not a list of numbers or strings.
    pub fn values(&self) -> Result<Option<Vec<DimensionValue>>, FieldDecodeError> {
        get_field(&self.properties, VALUES)
    }

    /// Set the ordered values, or remove them if [`None`].
    pub fn set_values(&mut self, values: Option<Vec<DimensionValue>>) -> &mut Self {
        set_field(&mut self.properties, VALUES, values.map(|values| json!(values)));
        self
    }

    /// Returns the spacing between values.
    ///
    /// [`None`] if absent or `null` (irregularly spaced).
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the step is not a number.
    pub fn step(&self) -> Result<Option<f64>, FieldDecodeError> {
        get_field::<Option<f64>>(&self.properties, STEP).map(Option::flatten)
    }

    /// Set the spacing between values, or remove it if [`None`].
    pub fn set_step(&mut self, step: Option<f64>) -> &mut Self {
        set_field(&mut self.properties, STEP, step.map(|step| json!(step)));
        self
    }

    /// Returns the unit of measurement.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.properties.get(UNIT).and_then(Value::as_str)
    }

    /// Set the unit of measurement, or remove it if [`None`].
    pub fn set_unit(&mut self, unit: Option<&str>) -> &mut Self {
        set_field(&mut self.properties, UNIT, unit.map(Value::from));
        self
    }

    /// Returns the reference system, EPSG:4326 if absent.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the reference system is not an EPSG code, WKT2 string, or PROJJSON object.
    pub fn reference_system(&self) -> Result<ReferenceSystem, FieldDecodeError> {
        Ok(get_field(&self.properties, REFERENCE_SYSTEM)?.unwrap_or_default())
    }

    /// Set the reference system, or remove it if [`None`].
    pub fn set_reference_system(
        &mut self,
        reference_system: Option<ReferenceSystem>,
    ) -> &mut Self {
        set_field(
            &mut self.properties,
            REFERENCE_SYSTEM,
            reference_system.map(|reference_system| json!(reference_system)),
        );
        self
    }
}
