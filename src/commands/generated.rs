//! Result shared by the query-generating commands.

use serde::Serialize;

use crate::output::Outputable;
use crate::queries::AqlQuery;
use crate::types::{Collection, ResultType};

/// A generated query together with what it was generated for.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedQuery {
    pub operation: String,
    pub collection: String,
    pub result_type: String,
    #[serde(flatten)]
    pub query: AqlQuery,
}

impl GeneratedQuery {
    pub fn new(operation: &str, collection: &Collection, result_type: ResultType, query: AqlQuery) -> Self {
        Self {
            operation: operation.to_string(),
            collection: collection.to_string(),
            result_type: result_type.to_string(),
            query,
        }
    }
}

impl Outputable for GeneratedQuery {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} query on '{}' ({})",
            capitalize(&self.operation),
            self.collection,
            self.result_type
        ));
        lines.push(String::new());
        lines.push(self.query.query.clone());
        lines.push(String::new());
        lines.push(format!("Bind parameters ({}):", self.query.param_count()));
        for (name, value) in &self.query.bind_vars {
            lines.push(format!("  {} = {}", name, value));
        }

        lines.join("\n")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
