use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::aql::QueryError;

/// A validated ArangoDB collection name.
///
/// The name is always sent as the `@@collection` bind parameter, never
/// spliced into query text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Collection(String);

impl Collection {
    pub const MAX_LEN: usize = 256;

    /// Validate and wrap a collection name.
    ///
    /// Names must start with an ASCII letter or `_` and contain only ASCII
    /// letters, digits, `_` and `-`.
    pub fn new(name: impl Into<String>) -> Result<Self, QueryError> {
        let name = name.into();
        let invalid = |reason| QueryError::InvalidCollection {
            name: name.clone(),
            reason,
        };

        let Some(first) = name.chars().next() else {
            return Err(invalid("name is empty"));
        };
        if name.len() > Self::MAX_LEN {
            return Err(invalid("name is longer than 256 characters"));
        }
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(invalid("name must start with a letter or underscore"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(invalid("name may only contain letters, digits, '_' and '-'"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Collection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
