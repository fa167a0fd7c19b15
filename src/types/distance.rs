use std::fmt;
use std::str::FromStr;

use crate::aql::QueryError;

/// Ordering of distance query results by distance from the reference geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Leave results in engine order
    #[default]
    No,
    Asc,
    Desc,
}

impl Sort {
    /// The AQL sort direction keyword, if any.
    pub fn direction(&self) -> Option<&'static str> {
        match self {
            Sort::No => None,
            Sort::Asc => Some("ASC"),
            Sort::Desc => Some("DESC"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::No => "NO",
            Sort::Asc => "ASC",
            Sort::Desc => "DESC",
        }
    }
}

impl FromStr for Sort {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NO" => Ok(Sort::No),
            "ASC" => Ok(Sort::Asc),
            "DESC" => Ok(Sort::Desc),
            _ => Err(QueryError::UnknownSort {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive distance bounds in meters. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl DistanceRange {
    /// Create a range, rejecting negative, non-finite or inverted bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, QueryError> {
        for (label, bound) in [("min", min), ("max", max)] {
            if let Some(value) = bound {
                if !value.is_finite() {
                    return Err(QueryError::InvalidDistanceRange {
                        message: format!("{} distance must be finite, got {}", label, value),
                    });
                }
                if value < 0.0 {
                    return Err(QueryError::InvalidDistanceRange {
                        message: format!("{} distance must not be negative, got {}", label, value),
                    });
                }
            }
        }

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(QueryError::InvalidDistanceRange {
                    message: format!("min distance {} exceeds max distance {}", min, max),
                });
            }
        }

        Ok(Self { min, max })
    }

    /// A range matching every distance.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }
}
