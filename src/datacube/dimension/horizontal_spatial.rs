use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::extension::{get_field, get_required_field, set_field, FieldDecodeError};

use super::{ReferenceSystem, AXIS, EXTENT, REFERENCE_SYSTEM, SPATIAL, STEP, TYPE, VALUES};

/// The axis of a horizontal spatial dimension.
#[derive(Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalSpatialDimensionAxis {
    /// The `x` axis.
    #[display("x")]
    X,
    /// The `y` axis.
    #[display("y")]
    Y,
}

impl TryFrom<&str> for HorizontalSpatialDimensionAxis {
    type Error = String;

    fn try_from(axis: &str) -> Result<Self, Self::Error> {
        match axis {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(axis.to_string()),
        }
    }
}

/// A horizontal spatial dimension, with axis `x` or `y`.
///
/// ### Example
/// ```json
/// {
///     "type": "spatial",
///     "axis": "x",
///     "extent": [-180, 180],
///     "step": 0.25,
///     "reference_system": 4326
/// }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct HorizontalSpatialDimension {
    pub(super) properties: Map<String, Value>,
}

super::dimension_common!(HorizontalSpatialDimension);

impl HorizontalSpatialDimension {
    /// Create a horizontal spatial dimension along `axis` covering `extent` (`[min, max]`).
    #[must_use]
    pub fn new(axis: HorizontalSpatialDimensionAxis, extent: [f64; 2]) -> Self {
        let mut properties = Map::new();
        properties.insert(TYPE.to_string(), Value::from(SPATIAL));
        properties.insert(AXIS.to_string(), Value::from(axis.to_string()));
        properties.insert(EXTENT.to_string(), json!(extent));
        Self { properties }
    }

    /// Returns the dimension type, always [`DimensionType::Spatial`](super::DimensionType::Spatial).
    #[must_use]
    pub fn dim_type(&self) -> super::DimensionType {
        super::DimensionType::Spatial
    }

    /// Returns the axis.
    #[must_use]
    pub fn axis(&self) -> HorizontalSpatialDimensionAxis {
        // the axis is validated on construction and only written by `set_axis`
        match self.properties.get(AXIS).and_then(Value::as_str) {
            Some("y") => HorizontalSpatialDimensionAxis::Y,
            _ => HorizontalSpatialDimensionAxis::X,
        }
    }

    /// Set the axis.
    pub fn set_axis(&mut self, axis: HorizontalSpatialDimensionAxis) -> &mut Self {
        self.properties
            .insert(AXIS.to_string(), Value::from(axis.to_string()));
        self
    }

    /// Returns the extent (`[min, max]`).
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the extent is missing or is not a pair of numbers.
    pub fn extent(&self) -> Result<[f64; 2], FieldDecodeError> {
        get_required_field(&self.properties, EXTENT)
    }

    /// Set the extent (`[min, max]`).
    pub fn set_extent(&mut self, extent: [f64; 2]) -> &mut Self {
        set_field(&mut self.properties, EXTENT, Some(json!(extent)));
        self
    }

    /// Returns the ordered values, if the dimension has discrete values.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the values are not a list of numbers.
    pub fn values(&self) -> Result<Option<Vec<f64>>, FieldDecodeError> {
        get_field(&self.properties, VALUES)
    }

    /// Set the ordered values, or remove them if [`None`].
    pub fn set_values(&mut self, values: Option<Vec<f64>>) -> &mut Self {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_spatial_new() {
        let mut dimension =
            HorizontalSpatialDimension::new(HorizontalSpatialDimensionAxis::X, [-180.0, 180.0]);
        assert_eq!(dimension.axis(), HorizontalSpatialDimensionAxis::X);
        assert_eq!(dimension.extent().unwrap(), [-180.0, 180.0]);
        assert_eq!(dimension.values().unwrap(), None);
        assert_eq!(dimension.step().unwrap(), None);
        assert_eq!(
            dimension.reference_system().unwrap(),
            ReferenceSystem::Epsg(4326)
        );

        dimension
            .set_axis(HorizontalSpatialDimensionAxis::Y)
            .set_step(Some(0.5))
            .set_values(Some(vec![0.0, 0.5]))
            .set_reference_system(Some(ReferenceSystem::Epsg(3857)));
        assert_eq!(
            Value::from(dimension),
            json!({
                "type": "spatial",
                "axis": "y",
                "extent": [-180.0, 180.0],
                "step": 0.5,
                "values": [0.0, 0.5],
                "reference_system": 3857
            })
        );
    }

    #[test]
    fn horizontal_spatial_step_null() {
        let mut dimension =
            HorizontalSpatialDimension::new(HorizontalSpatialDimensionAxis::X, [0.0, 1.0]);
        dimension.properties.insert(STEP.to_string(), Value::Null);
        assert_eq!(dimension.step().unwrap(), None);
        dimension.properties.insert(STEP.to_string(), json!("1"));
        assert!(dimension.step().is_err());
        dimension.set_step(None);
        assert!(!dimension.to_dict().contains_key(STEP));
    }

    #[test]
    fn horizontal_spatial_axis_try_from() {
        assert_eq!(
            HorizontalSpatialDimensionAxis::try_from("y"),
            Ok(HorizontalSpatialDimensionAxis::Y)
        );
        assert!(HorizontalSpatialDimensionAxis::try_from("z").is_err());
    }
}
