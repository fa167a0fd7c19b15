//! WorldClim query generators.
//!
//! Three entry points share one `GeoQuery` builder and differ only in the
//! geo predicate:
//!
//! | Function                     | Predicate                                        |
//! |------------------------------|--------------------------------------------------|
//! | `worldclim_distance_aql`     | centroid within `[min, max]` meters, optional sort |
//! | `worldclim_contains_aql`     | geometry contains the cell centroid              |
//! | `worldclim_intersects_aql`   | geometry intersects the cell shape               |
//!
//! Every call is pure: the same inputs always produce the same `AqlQuery`.

pub mod aggregate;
pub mod builder;
pub mod paging;
pub mod predicate;

use geojson::Geometry;

use crate::aql::QueryError;
use crate::schema::{ClimateSchema, DocumentLayout};
use crate::types::{Collection, DistanceRange, Paging, ResultType, Sort};
use builder::patterns::GeoQuery;
pub use builder::AqlQuery;
pub use predicate::GeoPredicate;

/// Query generator bound to a document layout and climate schema.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldClimQueries {
    layout: DocumentLayout,
    schema: ClimateSchema,
}

impl WorldClimQueries {
    /// Create a generator, validating the layout and schema up front.
    pub fn new(layout: DocumentLayout, schema: ClimateSchema) -> Result<Self, QueryError> {
        layout.validate()?;
        schema.validate()?;
        Ok(Self { layout, schema })
    }

    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }

    pub fn schema(&self) -> &ClimateSchema {
        &self.schema
    }

    /// Cells whose centroid lies within `range` meters of `geometry`.
    ///
    /// `sort` orders record results by distance; aggregates ignore it.
    pub fn distance(
        &self,
        collection: &Collection,
        geometry: &Geometry,
        result_type: ResultType,
        range: DistanceRange,
        sort: Sort,
        paging: Paging,
    ) -> Result<AqlQuery, QueryError> {
        self.build(
            collection,
            geometry,
            GeoPredicate::Distance { range, sort },
            result_type,
            paging,
        )
    }

    /// Cells whose centroid lies inside `geometry`.
    pub fn contains(
        &self,
        collection: &Collection,
        geometry: &Geometry,
        result_type: ResultType,
        paging: Paging,
    ) -> Result<AqlQuery, QueryError> {
        self.build(collection, geometry, GeoPredicate::Contains, result_type, paging)
    }

    /// Cells whose shape intersects `geometry`.
    pub fn intersects(
        &self,
        collection: &Collection,
        geometry: &Geometry,
        result_type: ResultType,
        paging: Paging,
    ) -> Result<AqlQuery, QueryError> {
        self.build(collection, geometry, GeoPredicate::Intersects, result_type, paging)
    }

    fn build(
        &self,
        collection: &Collection,
        geometry: &Geometry,
        predicate: GeoPredicate,
        result_type: ResultType,
        paging: Paging,
    ) -> Result<AqlQuery, QueryError> {
        let query = GeoQuery {
            collection,
            geometry,
            predicate,
            result_type,
            paging,
            layout: &self.layout,
            schema: &self.schema,
        };
        let compiled = AqlQuery::from_builder(&query)?;

        log::debug!(
            "Generated {} query on '{}' ({}) with {} bind parameter(s)",
            predicate.name(),
            collection,
            result_type,
            compiled.param_count()
        );
        log::trace!("{}", compiled.query);

        Ok(compiled)
    }
}

impl Default for WorldClimQueries {
    fn default() -> Self {
        Self {
            layout: DocumentLayout::default(),
            schema: ClimateSchema::worldclim(),
        }
    }
}

/// Distance query against the built-in WorldClim layout and schema.
pub fn worldclim_distance_aql(
    collection: &Collection,
    geometry: &Geometry,
    result_type: ResultType,
    range: DistanceRange,
    sort: Sort,
    paging: Paging,
) -> Result<AqlQuery, QueryError> {
    WorldClimQueries::default().distance(collection, geometry, result_type, range, sort, paging)
}

/// Contains query against the built-in WorldClim layout and schema.
pub fn worldclim_contains_aql(
    collection: &Collection,
    geometry: &Geometry,
    result_type: ResultType,
    paging: Paging,
) -> Result<AqlQuery, QueryError> {
    WorldClimQueries::default().contains(collection, geometry, result_type, paging)
}

/// Intersects query against the built-in WorldClim layout and schema.
pub fn worldclim_intersects_aql(
    collection: &Collection,
    geometry: &Geometry,
    result_type: ResultType,
    paging: Paging,
) -> Result<AqlQuery, QueryError> {
    WorldClimQueries::default().intersects(collection, geometry, result_type, paging)
}
