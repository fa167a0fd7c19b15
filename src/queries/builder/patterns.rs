//! The geo query pattern shared by all three WorldClim entry points.
//!
//! Compiles to:
//! - **Record result types**: `FOR doc IN @@collection <predicate> [SORT] [LIMIT] RETURN <projection>`
//! - **Aggregate result types**: `FOR doc IN @@collection <predicate> COLLECT AGGREGATE ... RETURN {...}`

use geojson::Geometry;

use super::QueryBuilder;
use super::helpers::attribute;
use super::params::BindVarBuilder;
use crate::aql::{BindVars, QueryError};
use crate::queries::aggregate::aggregation;
use crate::queries::paging::{paging_clause, paging_window};
use crate::queries::predicate::{DISTANCE_VAR, GeoPredicate};
use crate::schema::{ClimateSchema, DocumentLayout};
use crate::types::{Collection, Paging, ResultType};

/// A query over the grid cells matching a geo predicate.
#[derive(Debug, Clone)]
pub struct GeoQuery<'a> {
    /// Collection bound as `@@collection`
    pub collection: &'a Collection,
    /// Reference geometry bound as `@geometry`
    pub geometry: &'a Geometry,
    pub predicate: GeoPredicate,
    pub result_type: ResultType,
    /// Ignored for aggregate result types
    pub paging: Paging,
    pub layout: &'a DocumentLayout,
    /// Fields summarised by aggregate result types
    pub schema: &'a ClimateSchema,
}

impl GeoQuery<'_> {
    /// Expression returned per record for KEY, SHAPE and DATA.
    fn projection(&self) -> String {
        let key = attribute("doc", "_key");
        let with_distance = self.predicate.has_distance();

        match self.result_type {
            ResultType::Key => key,
            ResultType::Shape => {
                let mut fields = vec![
                    format!("_key: {}", key),
                    format!("geometry: {}", attribute("doc", &self.layout.shape_field)),
                ];
                if with_distance {
                    fields.push(DISTANCE_VAR.to_string());
                }
                format!("{{ {} }}", fields.join(", "))
            }
            ResultType::Data if with_distance => format!("MERGE(doc, {{ {} }})", DISTANCE_VAR),
            ResultType::Data | ResultType::Aggregate(_) => "doc".to_string(),
        }
    }
}

impl QueryBuilder for GeoQuery<'_> {
    fn compile(&self) -> Result<String, QueryError> {
        let mut lines = vec!["FOR doc IN @@collection".to_string()];
        lines.extend(
            self.predicate
                .clauses(self.layout)
                .into_iter()
                .map(|clause| format!("  {}", clause)),
        );

        match self.result_type {
            ResultType::Aggregate(aggregate) => {
                let agg = aggregation(self.schema, self.layout, aggregate)?;
                lines.push("  COLLECT AGGREGATE".to_string());
                lines.push(format!("    {}", agg.assignments.join(",\n    ")));
                lines.push(format!("  RETURN {}", agg.render_result(1)));
            }
            ResultType::Key | ResultType::Shape | ResultType::Data => {
                if let Some(sort) = self.predicate.sort_clause() {
                    lines.push(format!("  {}", sort));
                }
                if let Some(limit) = paging_clause(self.result_type, &self.paging) {
                    lines.push(format!("  {}", limit));
                }
                lines.push(format!("  RETURN {}", self.projection()));
            }
        }

        Ok(lines.join("\n"))
    }

    fn parameters(&self) -> Result<BindVars, QueryError> {
        let mut builder = BindVarBuilder::new();
        builder.add_collection("collection", self.collection);
        builder.add_serialized("geometry", self.geometry)?;
        self.predicate.bind(&mut builder);

        if let Some((start, limit)) = paging_window(self.result_type, &self.paging) {
            builder.add("start", start);
            builder.add("limit", limit);
        }

        Ok(builder.build())
    }
}
