//! Geo predicates selecting grid cells relative to the reference geometry.
//!
//! All geometry work is done by ArangoDB's `GEO_DISTANCE`, `GEO_CONTAINS`
//! and `GEO_INTERSECTS` functions; this module only renders the clauses.

use crate::queries::builder::helpers::attribute;
use crate::queries::builder::params::BindVarBuilder;
use crate::schema::DocumentLayout;
use crate::types::{DistanceRange, Sort};

/// Loop variable name holding the computed distance.
pub const DISTANCE_VAR: &str = "distance";

/// How matching cells relate to the `@geometry` bind parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoPredicate {
    /// Cell centroid lies within `range` meters of the geometry
    Distance { range: DistanceRange, sort: Sort },
    /// Geometry contains the cell centroid
    Contains,
    /// Geometry intersects the cell shape
    Intersects,
}

impl GeoPredicate {
    pub fn name(&self) -> &'static str {
        match self {
            GeoPredicate::Distance { .. } => "distance",
            GeoPredicate::Contains => "contains",
            GeoPredicate::Intersects => "intersects",
        }
    }

    /// Whether record results carry the computed `distance` attribute.
    pub fn has_distance(&self) -> bool {
        matches!(self, GeoPredicate::Distance { .. })
    }

    /// `LET`/`FILTER` clauses placed directly after the `FOR` line.
    pub fn clauses(&self, layout: &DocumentLayout) -> Vec<String> {
        match self {
            GeoPredicate::Distance { range, .. } => {
                let mut clauses = vec![format!(
                    "LET {} = GEO_DISTANCE(@geometry, {})",
                    DISTANCE_VAR,
                    attribute("doc", &layout.centroid_field)
                )];
                if range.min().is_some() {
                    clauses.push(format!("FILTER {} >= @min_distance", DISTANCE_VAR));
                }
                if range.max().is_some() {
                    clauses.push(format!("FILTER {} <= @max_distance", DISTANCE_VAR));
                }
                clauses
            }
            GeoPredicate::Contains => vec![format!(
                "FILTER GEO_CONTAINS(@geometry, {})",
                attribute("doc", &layout.centroid_field)
            )],
            GeoPredicate::Intersects => vec![format!(
                "FILTER GEO_INTERSECTS(@geometry, {})",
                attribute("doc", &layout.shape_field)
            )],
        }
    }

    /// `SORT` clause for record results, if the predicate orders them.
    pub fn sort_clause(&self) -> Option<String> {
        match self {
            GeoPredicate::Distance { sort, .. } => sort
                .direction()
                .map(|direction| format!("SORT {} {}", DISTANCE_VAR, direction)),
            GeoPredicate::Contains | GeoPredicate::Intersects => None,
        }
    }

    /// Add the bind parameters referenced by `clauses`.
    pub fn bind(&self, builder: &mut BindVarBuilder) {
        if let GeoPredicate::Distance { range, .. } = self {
            if let Some(min) = range.min() {
                builder.add("min_distance", min);
            }
            if let Some(max) = range.max() {
                builder.add("max_distance", max);
            }
        }
    }
}
