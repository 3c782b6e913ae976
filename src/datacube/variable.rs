//! Datacube variables.
//!
//! See <https://github.com/stac-extensions/datacube#variable-object>.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::extension::{get_field, get_required_field, set_field, FieldDecodeError};

use super::{
    dimension::{DESCRIPTION, EXTENT, STEP, TYPE, UNIT, VALUES},
    DimensionValue,
};

const DIMENSIONS: &str = "dimensions";

/// The role of a variable.
#[derive(Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    /// A variable holding the data of interest.
    #[display("data")]
    Data,
    /// A variable holding auxiliary data, e.g. coordinates or quality flags.
    #[display("auxiliary")]
    Auxiliary,
}

/// A datacube variable.
///
/// A typed view over the JSON object describing the variable.
///
/// ### Example
/// ```json
/// {
///     "dimensions": ["time", "y", "x", "pressure_levels"],
///     "type": "data",
///     "unit": "K"
/// }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Variable {
    properties: Map<String, Value>,
}

impl Variable {
    /// Create a variable of type `var_type` over `dimensions`.
    #[must_use]
    pub fn new(dimensions: Vec<String>, var_type: VariableType) -> Self {
        let mut properties = Map::new();
        properties.insert(DIMENSIONS.to_string(), json!(dimensions));
        properties.insert(TYPE.to_string(), Value::from(var_type.to_string()));
        Self { properties }
    }

    /// Create a variable from its JSON object.
    #[must_use]
    pub fn from_dict(properties: Map<String, Value>) -> Self {
        Self { properties }
    }

    /// Returns the JSON object of the variable.
    #[must_use]
    pub fn to_dict(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Convert the variable into its JSON object.
    #[must_use]
    pub fn into_dict(self) -> Map<String, Value> {
        self.properties
    }

    /// Returns the names of the dimensions of the variable, in order.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the dimensions are missing or are not a list of strings.
    pub fn dimensions(&self) -> Result<Vec<String>, FieldDecodeError> {
        get_required_field(&self.properties, DIMENSIONS)
    }

    /// Set the names of the dimensions of the variable.
    pub fn set_dimensions(&mut self, dimensions: Vec<String>) -> &mut Self {
        set_field(&mut self.properties, DIMENSIONS, Some(json!(dimensions)));
        self
    }

    /// Returns the type of the variable.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the type is missing or unrecognised.
    pub fn var_type(&self) -> Result<VariableType, FieldDecodeError> {
        get_required_field(&self.properties, TYPE)
    }

    /// Set the type of the variable.
    pub fn set_var_type(&mut self, var_type: VariableType) -> &mut Self {
        set_field(
            &mut self.properties,
            TYPE,
            Some(Value::from(var_type.to_string())),
        );
        self
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.properties.get(DESCRIPTION).and_then(Value::as_str)
    }

    /// Set the description, or remove it if [`None`].
    pub fn set_description(&mut self, description: Option<&str>) -> &mut Self {
        set_field(&mut self.properties, DESCRIPTION, description.map(Value::from));
        self
    }

    /// Returns the extent (`[min, max]`) of the variable values, [`None`] bounds are open.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the extent is not a pair of numbers, strings, or `null`.
    pub fn extent(&self) -> Result<Option<[Option<DimensionValue>; 2]>, FieldDecodeError> {
        get_field(&self.properties, EXTENT)
    }

    /// Set the extent (`[min, max]`) of the variable values, or remove it if [`None`].
    pub fn set_extent(&mut self, extent: Option<[Option<DimensionValue>; 2]>) -> &mut Self {
        set_field(&mut self.properties, EXTENT, extent.map(|extent| json!(extent)));
        self
    }

    /// Returns the values of the variable, if it has a limited set of values.
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the values are not a list of numbers or strings.
    pub fn values(&self) -> Result<Option<Vec<DimensionValue>>, FieldDecodeError> {
        get_field(&self.properties, VALUES)
    }

    /// Set the values of the variable, or remove them if [`None`].
    pub fn set_values(&mut self, values: Option<Vec<DimensionValue>>) -> &mut Self {
        set_field(&mut self.properties, VALUES, values.map(|values| json!(values)));
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

    /// Returns the spacing between values.
    ///
    /// [`None`] if absent or `null` (irregularly spaced).
    ///
    /// # Errors
    /// Returns a [`FieldDecodeError`] if the step is not a number or string.
    pub fn step(&self) -> Result<Option<DimensionValue>, FieldDecodeError> {
        get_field::<Option<DimensionValue>>(&self.properties, STEP).map(Option::flatten)
    }

    /// Set the spacing between values, or remove it if [`None`].
    pub fn set_step(&mut self, step: Option<DimensionValue>) -> &mut Self {
        set_field(&mut self.properties, STEP, step.map(|step| json!(step)));
        self
    }
}

impl From<Variable> for Value {
    fn from(variable: Variable) -> Self {
        Value::Object(variable.into_dict())
    }
}

impl Serialize for Variable {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.properties.serialize(s)
    }
}

impl<'de> Deserialize<'de> for Variable {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(Self::from_dict(Map::deserialize(d)?))
    }
}
