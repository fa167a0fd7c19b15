//! Bind parameter helpers for query building.
//!
//! Provides utilities for collecting bind parameters before they are paired
//! with the compiled query text.

use serde::Serialize;
use serde_json::Value;

use crate::aql::{BindVars, QueryError};
use crate::types::Collection;

/// Helper for building bind parameters.
///
/// Collects named parameters into a `BindVars` map. Plain values convert
/// through `Into<serde_json::Value>`; structured values such as GeoJSON
/// geometries go through serde.
#[derive(Debug, Clone, Default)]
pub struct BindVarBuilder {
    vars: BindVars,
}

impl BindVarBuilder {
    /// Create a new, empty bind parameter builder.
    pub fn new() -> Self {
        Self {
            vars: BindVars::new(),
        }
    }

    /// Add a value parameter, referenced in query text as `@name`.
    pub fn add<T: Into<Value>>(&mut self, name: impl Into<String>, value: T) {
        self.vars.insert(name.into(), value.into());
    }

    /// Add a serializable value parameter, referenced as `@name`.
    pub fn add_serialized<T: Serialize>(
        &mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<(), QueryError> {
        let name = name.into();
        let value = serde_json::to_value(value).map_err(|source| QueryError::Serialization {
            name: name.clone(),
            source,
        })?;
        self.vars.insert(name, value);
        Ok(())
    }

    /// Add a collection parameter, referenced in query text as `@@name`.
    pub fn add_collection(&mut self, name: &str, collection: &Collection) {
        self.vars
            .insert(format!("@{}", name), Value::String(collection.as_str().to_string()));
    }

    /// Build the final `BindVars` map.
    pub fn build(self) -> BindVars {
        self.vars
    }

    /// Get a reference to the underlying map.
    pub fn vars(&self) -> &BindVars {
        &self.vars
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_new() {
        let builder = BindVarBuilder::new();
        assert_eq!(builder.len(), 0);
        assert!(builder.is_empty());
    }

    #[test]
    fn test_add_numbers() {
        let mut builder = BindVarBuilder::new();
        builder.add("start", 0u64);
        builder.add("max_distance", 2500.5f64);

        let vars = builder.build();
        assert_eq!(vars.get("start"), Some(&json!(0)));
        assert_eq!(vars.get("max_distance"), Some(&json!(2500.5)));
    }

    #[test]
    fn test_add_collection_uses_at_prefix() {
        let mut builder = BindVarBuilder::new();
        builder.add_collection("collection", &Collection::new("worldclim").unwrap());

        let vars = builder.vars();
        assert_eq!(vars.get("@collection"), Some(&json!("worldclim")));
        assert!(!vars.contains_key("collection"));
    }

    #[test]
    fn test_add_serialized() {
        let geometry = geojson::Geometry::new(geojson::Value::Point(vec![12.5, 41.9]));
        let mut builder = BindVarBuilder::new();
        builder.add_serialized("geometry", &geometry).unwrap();

        let vars = builder.build();
        assert_eq!(
            vars.get("geometry"),
            Some(&json!({ "type": "Point", "coordinates": [12.5, 41.9] }))
        );
    }

    #[test]
    fn test_overwrite() {
        let mut builder = BindVarBuilder::new();
        builder.add("limit", 1u64);
        builder.add("limit", 2u64);
        assert_eq!(builder.len(), 1);
        assert_eq!(builder.build().get("limit"), Some(&json!(2)));
    }
}
