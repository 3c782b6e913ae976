use serde_json::{json, Map, Value};

use crate::extension::{get_field, set_field, FieldDecodeError};

use super::{
    DimensionDecodeError, DimensionType, DimensionValue, ReferenceSystem, EXTENT, REFERENCE_SYSTEM, STEP, TYPE, UNIT,
    VALUES,
};

/// A dimension that is neither spatial nor temporal, e.g. spectral bands.
///
/// The `type` is free-form and retained verbatim.
///
/// ### Example
/// ```json
/// {
///     "type": "bands",
///     "values": ["red", "green", "blue"]
/// }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct AdditionalDimension {
    pub(super) properties: Map<String, Value>,
}

super::dimension_common!(AdditionalDimension);

impl AdditionalDimension {
    /// Create an additional dimension of type `dim_type`.
    ///
    /// # Errors
    /// Returns [`DimensionDecodeError::ReservedType`] if `dim_type` is `spatial` or `temporal`.
    pub fn new(dim_type: impl Into<String>) -> Result<Self, DimensionDecodeError> {
        let dim_type = dim_type.into();
        if let DimensionType::Spatial | DimensionType::Temporal =
            DimensionType::from(dim_type.as_str())
        {
            return Err(DimensionDecodeError::ReservedType(dim_type));
        }
        let mut properties = Map::new();
        properties.insert(TYPE.to_string(), Value::from(dim_type));
        Ok(Self { properties })
    }

    /// Returns the dimension type.
    ///
    /// An absent `type` is an empty [`DimensionType::Other`], a non-string `type` is its JSON representation.
    #[must_use]
    pub fn dim_type(&self) -> DimensionType {
        match self.properties.get(TYPE) {
            Some(Value::String(dim_type)) => DimensionType::Other(dim_type.clone()),
            Some(dim_type) => DimensionType::Other(dim_type.to_string()),
            None => DimensionType::Other(String::new()),
        }
    }

    /// Returns the extent (`[min, max]`), [`None`] bounds are open.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the extent is not a pair of numbers or `null`.
    pub fn extent(&self) -> Result<Option<[Option<f64>; 2]>, FieldDecodeError> {
        get_field(&self.properties, EXTENT)
    }

    /// Set the extent (`[min, max]`), or remove it if [`None`].
    pub fn set_extent(&mut self, extent: Option<[Option<f64>; 2]>) -> &mut Self {
        set_field(&mut self.properties, EXTENT, extent.map(|extent| json!(extent)));
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

    /// Returns the reference system, if any.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the reference system is not an EPSG code, WKT2 string, or PROJJSON object.
    pub fn reference_system(&self) -> Result<Option<ReferenceSystem>, FieldDecodeError> {
        get_field(&self.properties, REFERENCE_SYSTEM)
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
