//! Attribute names of a WorldClim grid-cell document.

use serde::{Deserialize, Serialize};

use super::SchemaError;

/// Where the geometries and climate properties live on each document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLayout {
    /// GeoJSON polygon of the grid cell, used by the intersects predicate
    pub shape_field: String,
    /// GeoJSON point at the cell centroid, used by the distance and contains predicates
    pub centroid_field: String,
    /// Object holding the climate periods described by the schema
    pub properties_field: String,
}

impl DocumentLayout {
    pub fn validate(&self) -> Result<(), SchemaError> {
        let roles = [
            ("shape_field", &self.shape_field),
            ("centroid_field", &self.centroid_field),
            ("properties_field", &self.properties_field),
        ];
        for (role, value) in roles {
            if value.is_empty() {
                return Err(SchemaError::EmptyAttribute { role });
            }
        }
        Ok(())
    }
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            shape_field: "geometry".to_string(),
            centroid_field: "geometry_point".to_string(),
            properties_field: "properties".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_layout_is_valid() {
        assert_eq!(DocumentLayout::default().validate(), Ok(()));
    }

    #[rstest]
    fn test_partial_deserialization_keeps_defaults() {
        let layout: DocumentLayout = serde_json::from_str(r#"{"centroid_field": "center"}"#).unwrap();
        assert_eq!(layout.centroid_field, "center");
        assert_eq!(layout.shape_field, "geometry");
        assert_eq!(layout.properties_field, "properties");
    }

    #[rstest]
    fn test_empty_attribute_rejected() {
        let layout = DocumentLayout {
            properties_field: String::new(),
            ..Default::default()
        };
        assert_eq!(
            layout.validate(),
            Err(SchemaError::EmptyAttribute {
                role: "properties_field"
            })
        );
    }
}
