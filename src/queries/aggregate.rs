//! Schema-driven aggregation for the MIN/AVG/MAX/STD/VAR result types.
//!
//! One `COLLECT AGGREGATE` assignment is generated per schema field, then the
//! flat aggregate variables are reshaped into an object mirroring the
//! document's properties:
//!
//! ```text
//! COLLECT AGGREGATE
//!   total = LENGTH(1),
//!   v0 = MIN(doc.properties["1970-2000"].tavg[0]),
//!   ...
//! RETURN {
//!   "count": total,
//!   "min": {
//!     "1970-2000": {
//!       "tavg": [v0, v1, ..., v11],
//!       ...
//! ```

use crate::queries::builder::helpers::{attribute_path, element, indent, object_key};
use crate::schema::{ClimateSchema, DocumentLayout, SchemaError};
use crate::types::Aggregate;

/// Variable holding the number of matched records.
pub const COUNT_VAR: &str = "total";

/// Result attribute holding the number of matched records.
pub const COUNT_KEY: &str = "count";

/// Node of the reshaped result object.
#[derive(Debug, Clone, PartialEq)]
enum ResultNode {
    Object(Vec<(String, ResultNode)>),
    Value(String),
}

impl ResultNode {
    /// Get or create the child object stored under `key`.
    fn child_object(
        entries: &mut Vec<(String, ResultNode)>,
        key: &str,
        path: &[&str],
    ) -> Result<usize, SchemaError> {
        match entries.iter().position(|(k, _)| k == key) {
            Some(pos) => match entries[pos].1 {
                ResultNode::Object(_) => Ok(pos),
                ResultNode::Value(_) => Err(SchemaError::PathCollision {
                    path: path.join("."),
                }),
            },
            None => {
                entries.push((key.to_string(), ResultNode::Object(Vec::new())));
                Ok(entries.len() - 1)
            }
        }
    }

    fn render(&self, level: usize) -> String {
        match self {
            ResultNode::Value(expr) => expr.clone(),
            ResultNode::Object(entries) if entries.is_empty() => "{}".to_string(),
            ResultNode::Object(entries) => {
                let body = entries
                    .iter()
                    .map(|(key, node)| {
                        format!(
                            "{}{}: {}",
                            indent(level + 1),
                            object_key(key),
                            node.render(level + 1)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(",\n");
                format!("{{\n{}\n{}}}", body, indent(level))
            }
        }
    }
}

/// The aggregate assignments and reshaped result for one statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// `name = FN(expr)` entries of the `COLLECT AGGREGATE` clause, count first
    pub assignments: Vec<String>,
    result: ResultNode,
}

impl Aggregation {
    /// Render the `RETURN` expression, indented as if it starts at `level`.
    pub fn render_result(&self, level: usize) -> String {
        self.result.render(level)
    }

    /// Number of aggregated schema fields (the count is not included).
    pub fn field_count(&self) -> usize {
        self.assignments.len() - 1
    }
}

/// Build the aggregation of every schema field with one statistic.
///
/// The generated text is identical for all five aggregates apart from the
/// function name and the output key.
pub fn aggregation(
    schema: &ClimateSchema,
    layout: &DocumentLayout,
    aggregate: Aggregate,
) -> Result<Aggregation, SchemaError> {
    let mut assignments = vec![format!("{} = LENGTH(1)", COUNT_VAR)];
    let mut tree: Vec<(String, ResultNode)> = Vec::new();
    let mut next_var = 0usize;

    for period in &schema.periods {
        let mut segments: Vec<&str> = vec![layout.properties_field.as_str()];
        segments.extend(period.path.iter().map(String::as_str));

        let mut entries = &mut tree;
        for depth in 0..period.path.len() {
            let key = period.path[depth].as_str();
            let pos = ResultNode::child_object(entries, key, &segments[1..depth + 2])?;
            entries = match &mut entries[pos].1 {
                ResultNode::Object(children) => children,
                ResultNode::Value(_) => {
                    return Err(SchemaError::PathCollision {
                        path: period.name(),
                    });
                }
            };
        }

        for variable in &period.variables {
            if entries.iter().any(|(k, _)| *k == variable.name) {
                return Err(SchemaError::PathCollision {
                    path: format!("{}.{}", period.name(), variable.name),
                });
            }

            let mut path = segments.clone();
            path.push(variable.name.as_str());
            let base = attribute_path("doc", &path);

            let mut vars = Vec::with_capacity(variable.layout.len());
            for index in variable.layout.indices() {
                let expr = match index {
                    Some(i) => element(&base, i),
                    None => base.clone(),
                };
                let var = format!("v{}", next_var);
                next_var += 1;
                assignments.push(format!("{} = {}({})", var, aggregate.function(), expr));
                vars.push(var);
            }

            let value = if variable.layout.is_array() {
                format!("[{}]", vars.join(", "))
            } else {
                vars.concat()
            };
            entries.push((variable.name.clone(), ResultNode::Value(value)));
        }
    }

    let result = ResultNode::Object(vec![
        (COUNT_KEY.to_string(), ResultNode::Value(COUNT_VAR.to_string())),
        (aggregate.output_key().to_string(), ResultNode::Object(tree)),
    ]);

    Ok(Aggregation {
        assignments,
        result,
    })
}
