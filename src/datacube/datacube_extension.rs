use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::extension::{decode, OwnerFields, OwnerKind, StacExtension};

use super::{
    DatacubeError, Dimension, Variable, DIMENSIONS_PROP, LEGACY_SCHEMA_URIS, SCHEMA_URI,
    VARIABLES_PROP,
};

/// The datacube extension of an item, asset, or collection.
///
/// Created with [`StacExtension::ext`], which checks the extension is declared by the owner.
/// Dimensions and variables are read from and written to the fields of the owner:
///  - item properties,
///  - asset fields, with dimensions and variables absent from an item asset read from the item properties, or
///  - top level collection fields.
///
/// ```
/// # use stac_datacube::{datacube::{DatacubeExtension, Variable, VariableType}, extension::StacExtension, stac::Item};
/// let mut item = Item::new("item");
/// let mut datacube = DatacubeExtension::ext(&mut item, true)?;
/// let variable = Variable::new(vec!["time".to_string()], VariableType::Data);
/// datacube.set_variables(Some([("temp".to_string(), variable)].into()));
/// assert!(item.properties.contains_key("cube:variables"));
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct DatacubeExtension<'a> {
    kind: OwnerKind,
    fields: OwnerFields<'a>,
}

impl<'a> StacExtension<'a> for DatacubeExtension<'a> {
    const NAME: &'static str = "Datacube";
    const SCHEMA_URI: &'static str = SCHEMA_URI;
    const LEGACY_SCHEMA_URIS: &'static [&'static str] = LEGACY_SCHEMA_URIS;

    fn supports(kind: OwnerKind) -> bool {
        matches!(
            kind,
            OwnerKind::Item | OwnerKind::Asset | OwnerKind::Collection
        )
    }

    fn bind(kind: OwnerKind, fields: OwnerFields<'a>) -> Self {
        Self { kind, fields }
    }
}

impl DatacubeExtension<'_> {
    /// Returns the kind of the owner the extension is bound to.
    #[must_use]
    pub fn owner_kind(&self) -> OwnerKind {
        self.kind
    }

    /// Returns the dimensions (`cube:dimensions`), keyed by name.
    ///
    /// Returns [`None`] if the owner has no dimensions.
    ///
    /// # Errors
    /// Returns a [`DatacubeError`] if the dimensions are not an object of dimension objects, or a dimension cannot be decoded.
    pub fn dimensions(&self) -> Result<Option<BTreeMap<String, Dimension>>, DatacubeError> {
        let Some(dimensions) = self.fields.get(DIMENSIONS_PROP) else {
            return Ok(None);
        };
        let dimensions: BTreeMap<String, Map<String, Value>> =
            decode(dimensions, DIMENSIONS_PROP)?;
        dimensions
            .into_iter()
            .map(|(name, dimension)| {
                Ok::<_, DatacubeError>((name, Dimension::from_dict(dimension)?))
            })
            .collect::<Result<_, _>>()
            .map(Some)
    }

    /// Set the dimensions (`cube:dimensions`), or remove them if [`None`].
    ///
    /// Any existing dimensions are replaced.
    pub fn set_dimensions(
        &mut self,
        dimensions: Option<BTreeMap<String, Dimension>>,
    ) -> &mut Self {
        let dimensions = dimensions.map(|dimensions| {
            Value::Object(
                dimensions
                    .into_iter()
                    .map(|(name, dimension)| (name, Value::Object(dimension.into_dict())))
                    .collect(),
            )
        });
        self.fields.set(DIMENSIONS_PROP, dimensions);
        self
    }

    /// Returns the variables (`cube:variables`), keyed by name.
    ///
    /// Returns [`None`] if the owner has no variables.
    ///
    /// # Errors
    /// Returns a [`DatacubeError`] if the variables are not an object of variable objects.
    pub fn variables(&self) -> Result<Option<BTreeMap<String, Variable>>, DatacubeError> {
        let Some(variables) = self.fields.get(VARIABLES_PROP) else {
            return Ok(None);
        };
        let variables: BTreeMap<String, Map<String, Value>> = decode(variables, VARIABLES_PROP)?;
        Ok(Some(
            variables
                .into_iter()
                .map(|(name, variable)| (name, Variable::from_dict(variable)))
                .collect(),
        ))
    }

    /// Set the variables (`cube:variables`), or remove them if [`None`].
    ///
    /// Any existing variables are replaced.
    pub fn set_variables(&mut self, variables: Option<BTreeMap<String, Variable>>) -> &mut Self {
        let variables = variables.map(|variables| {
            Value::Object(
                variables
                    .into_iter()
                    .map(|(name, variable)| (name, Value::Object(variable.into_dict())))
                    .collect(),
            )
        });
        self.fields.set(VARIABLES_PROP, variables);
        self
    }

    /// Set the dimensions and variables.
    pub fn apply(
        &mut self,
        dimensions: BTreeMap<String, Dimension>,
        variables: Option<BTreeMap<String, Variable>>,
    ) -> &mut Self {
        self.set_dimensions(Some(dimensions)).set_variables(variables)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        datacube::{HorizontalSpatialDimension, HorizontalSpatialDimensionAxis, VariableType},
        stac::Item,
    };

    use super::*;

    #[test]
    fn datacube_apply() {
        let mut item = Item::new("item");
        let mut datacube = DatacubeExtension::ext(&mut item, true).unwrap();
        assert_eq!(datacube.owner_kind(), OwnerKind::Item);
        assert!(datacube.dimensions().unwrap().is_none());
        assert!(datacube.variables().unwrap().is_none());

        let dimension =
            HorizontalSpatialDimension::new(HorizontalSpatialDimensionAxis::X, [0.0, 10.0]);
        let variable = Variable::new(vec!["x".to_string()], VariableType::Data);
        datacube.apply(
            [("x".to_string(), Dimension::from(dimension))].into(),
            Some([("v".to_string(), variable)].into()),
        );
        let dimensions = datacube.dimensions().unwrap().unwrap();
        assert!(matches!(dimensions["x"], Dimension::HorizontalSpatial(_)));
        assert_eq!(datacube.variables().unwrap().unwrap().len(), 1);

        datacube.set_variables(None);
        assert!(datacube.variables().unwrap().is_none());
        assert!(item.properties.contains_key(DIMENSIONS_PROP));
        assert!(!item.properties.contains_key(VARIABLES_PROP));
        assert!(item.stac_extensions.contains(SCHEMA_URI));
    }

    #[test]
    fn datacube_invalid_fields() {
        let mut item = Item::new("item");
        item.properties
            .insert(DIMENSIONS_PROP.to_string(), json!({"x": {"type": "spatial"}}));
        item.properties
            .insert(VARIABLES_PROP.to_string(), json!(["a"]));
        let datacube = DatacubeExtension::ext(&mut item, true).unwrap();
        assert!(matches!(
            datacube.dimensions(),
            Err(DatacubeError::Dimension(_))
        ));
        assert!(matches!(datacube.variables(), Err(DatacubeError::Field(_))));
    }
}
