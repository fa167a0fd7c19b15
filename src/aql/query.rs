//! Bind parameter storage.

use std::collections::BTreeMap;

/// Type alias for AQL bind parameters.
///
/// A `BTreeMap` keeps serialization order stable, so the same inputs always
/// produce byte-identical bind parameter JSON. Collection parameters are
/// stored under their `@`-prefixed name (`@collection` binds `@@collection`).
pub type BindVars = BTreeMap<String, serde_json::Value>;
