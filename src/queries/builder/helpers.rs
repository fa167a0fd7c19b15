//! Helper utilities for query building.
//!
//! Attribute access and object key rendering shared by the predicate,
//! projection and aggregation code.

use crate::aql::quote_string;

/// AQL keywords that cannot be used as bare attribute names.
const KEYWORDS: &[&str] = &[
    "AGGREGATE", "ALL", "AND", "ANY", "ASC", "COLLECT", "DESC", "DISTINCT", "FALSE", "FILTER",
    "FOR", "GRAPH", "IN", "INBOUND", "INSERT", "INTO", "K_PATHS", "K_SHORTEST_PATHS", "LET",
    "LIKE", "LIMIT", "NONE", "NOT", "NULL", "OR", "OUTBOUND", "PRUNE", "REMOVE", "REPLACE",
    "RETURN", "SEARCH", "SHORTEST_PATH", "SORT", "TRUE", "UPDATE", "UPSERT", "WINDOW", "WITH",
];

/// Whether `name` can be written as `doc.name` without quoting.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
}

/// Access an attribute of `base`.
///
/// `doc.geometry` for identifiers, `doc["1970-2000"]` otherwise.
pub fn attribute(base: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{}.{}", base, name)
    } else {
        format!("{}[{}]", base, quote_string(name))
    }
}

/// Access a nested attribute path of `base`.
pub fn attribute_path<S: AsRef<str>>(base: &str, segments: &[S]) -> String {
    segments
        .iter()
        .fold(base.to_string(), |expr, segment| attribute(&expr, segment.as_ref()))
}

/// Access an array element.
pub fn element(expr: &str, index: usize) -> String {
    format!("{}[{}]", expr, index)
}

/// Render an object literal key. Keys are always quoted so period names
/// like `1970-2000` need no special casing.
pub fn object_key(name: &str) -> String {
    quote_string(name)
}

/// Two spaces per nesting level.
pub fn indent(level: usize) -> String {
    "  ".repeat(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_detection() {
        assert!(is_identifier("geometry_point"));
        assert!(is_identifier("_key"));
        assert!(is_identifier("tavg"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1970-2000"));
        assert!(!is_identifier("MPI-ESM1-2-HR"));
        assert!(!is_identifier("filter"));
        assert!(!is_identifier("Return"));
    }

    #[test]
    fn test_attribute_identifier() {
        assert_eq!(attribute("doc", "properties"), "doc.properties");
    }

    #[test]
    fn test_attribute_quoted() {
        assert_eq!(attribute("doc", "1970-2000"), "doc[\"1970-2000\"]");
        assert_eq!(attribute("doc", "sort"), "doc[\"sort\"]");
    }

    #[test]
    fn test_attribute_path() {
        let path = attribute_path(
            "doc",
            &["properties", "2021-2040", "MPI-ESM1-2-HR", "ssp370", "tmin"],
        );
        assert_eq!(
            path,
            "doc.properties[\"2021-2040\"][\"MPI-ESM1-2-HR\"].ssp370.tmin"
        );
    }

    #[test]
    fn test_attribute_path_empty() {
        let segments: [&str; 0] = [];
        assert_eq!(attribute_path("doc", &segments), "doc");
    }

    #[test]
    fn test_element() {
        assert_eq!(element("doc.properties.tavg", 11), "doc.properties.tavg[11]");
    }

    #[test]
    fn test_object_key() {
        assert_eq!(object_key("tavg"), "\"tavg\"");
        assert_eq!(object_key("1970-2000"), "\"1970-2000\"");
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "    ");
    }
}
