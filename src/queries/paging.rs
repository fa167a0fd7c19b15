//! Paging clause for record result types.

use crate::types::{Paging, ResultType};

/// The effective `(start, limit)` window for a result type.
///
/// Aggregate result types return a single document and are never paged.
pub fn paging_window(result_type: ResultType, paging: &Paging) -> Option<(u64, u64)> {
    match result_type {
        ResultType::Key | ResultType::Shape | ResultType::Data => paging.window(),
        ResultType::Aggregate(_) => None,
    }
}

/// `LIMIT @start, @limit` when the result type is paged and a limit is set.
pub fn paging_clause(result_type: ResultType, paging: &Paging) -> Option<String> {
    paging_window(result_type, paging).map(|_| "LIMIT @start, @limit".to_string())
}
