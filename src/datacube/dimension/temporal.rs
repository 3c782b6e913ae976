use serde_json::{json, Map, Value};

use crate::extension::{get_field, get_required_field, set_field, FieldDecodeError};

use super::{DimensionType, EXTENT, STEP, TEMPORAL, TYPE, VALUES};

/// A temporal dimension.
///
/// Extents and values are ISO 8601 date-times, the step is an ISO 8601 duration.
///
/// ### Example
/// ```json
/// {
///     "type": "temporal",
///     "extent": ["2020-01-01T00:00:00Z", null],
///     "step": "P1D"
/// }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct TemporalDimension {
    pub(super) properties: Map<String, Value>,
}

super::dimension_common!(TemporalDimension);

impl TemporalDimension {
    /// Create a temporal dimension covering `extent` (`[start, end]`, either may be open).
    #[must_use]
    pub fn new(extent: [Option<String>; 2]) -> Self {
        let mut properties = Map::new();
        properties.insert(TYPE.to_string(), Value::from(TEMPORAL));
        properties.insert(EXTENT.to_string(), json!(extent));
        Self { properties }
    }

    /// Returns the dimension type, always [`DimensionType::Temporal`].
    #[must_use]
    pub fn dim_type(&self) -> DimensionType {
        DimensionType::Temporal
    }

    /// Returns the extent (`[start, end]`), [`None`] bounds are open.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the extent is missing or is not a pair of strings or `null`.
    pub fn extent(&self) -> Result<[Option<String>; 2], FieldDecodeError> {
        get_required_field(&self.properties, EXTENT)
    }

    /// Set the extent (`[start, end]`), [`None`] bounds are open.
    pub fn set_extent(&mut self, extent: [Option<String>; 2]) -> &mut Self {
        set_field(&mut self.properties, EXTENT, Some(json!(extent)));
        self
    }

    /// Returns the ordered values, if the dimension has discrete values.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the values are not a list of strings.
    pub fn values(&self) -> Result<Option<Vec<String>>, FieldDecodeError> {
        get_field(&self.properties, VALUES)
    }

    /// Set the ordered values, or remove them if [`None`].
    pub fn set_values(&mut self, values: Option<Vec<String>>) -> &mut Self {
        set_field(&mut self.properties, VALUES, values.map(|values| json!(values)));
        self
    }

    /// Returns the spacing between values as an ISO 8601 duration.
    ///
    /// [`None`] if absent or `null` (irregularly spaced).
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the step is not a string.
    pub fn step(&self) -> Result<Option<String>, FieldDecodeError> {
        get_field::<Option<String>>(&self.properties, STEP).map(Option::flatten)
    }

    /// Set the spacing between values as an ISO 8601 duration, or remove it if [`None`].
    pub fn set_step(&mut self, step: Option<&str>) -> &mut Self {
        set_field(&mut self.properties, STEP, step.map(Value::from));
        self
    }
}
