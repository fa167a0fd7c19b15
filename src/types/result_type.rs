use std::fmt;
use std::str::FromStr;

use crate::aql::QueryError;

/// Statistic computed over every quantitative schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Min,
    Avg,
    Max,
    /// Population standard deviation
    Std,
    /// Population variance
    Var,
}

impl Aggregate {
    pub const ALL: [Aggregate; 5] = [
        Aggregate::Min,
        Aggregate::Avg,
        Aggregate::Max,
        Aggregate::Std,
        Aggregate::Var,
    ];

    /// The AQL aggregate function applied inside `COLLECT AGGREGATE`.
    pub fn function(&self) -> &'static str {
        match self {
            Aggregate::Min => "MIN",
            Aggregate::Avg => "AVERAGE",
            Aggregate::Max => "MAX",
            Aggregate::Std => "STDDEV_POPULATION",
            Aggregate::Var => "VARIANCE_POPULATION",
        }
    }

    /// Attribute holding the reshaped statistics in the query result.
    pub fn output_key(&self) -> &'static str {
        match self {
            Aggregate::Min => "min",
            Aggregate::Avg => "avg",
            Aggregate::Max => "max",
            Aggregate::Std => "std",
            Aggregate::Var => "var",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregate::Min => "MIN",
            Aggregate::Avg => "AVG",
            Aggregate::Max => "MAX",
            Aggregate::Std => "STD",
            Aggregate::Var => "VAR",
        }
    }
}

/// What a generated query returns.
///
/// `Key`, `Shape` and `Data` return one entry per matching record and are
/// paged; `Aggregate` returns a single summary document and never is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResultType {
    /// Record identifiers only
    #[default]
    Key,
    /// Identifier plus cell geometry
    Shape,
    /// Full records
    Data,
    /// Count plus one statistic over every schema field
    Aggregate(Aggregate),
}

impl ResultType {
    pub const ALL: [ResultType; 8] = [
        ResultType::Key,
        ResultType::Shape,
        ResultType::Data,
        ResultType::Aggregate(Aggregate::Min),
        ResultType::Aggregate(Aggregate::Avg),
        ResultType::Aggregate(Aggregate::Max),
        ResultType::Aggregate(Aggregate::Std),
        ResultType::Aggregate(Aggregate::Var),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Key => "KEY",
            ResultType::Shape => "SHAPE",
            ResultType::Data => "DATA",
            ResultType::Aggregate(aggregate) => aggregate.as_str(),
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, ResultType::Aggregate(_))
    }
}

impl FromStr for ResultType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KEY" => Ok(ResultType::Key),
            "SHAPE" => Ok(ResultType::Shape),
            "DATA" => Ok(ResultType::Data),
            "MIN" => Ok(ResultType::Aggregate(Aggregate::Min)),
            "AVG" => Ok(ResultType::Aggregate(Aggregate::Avg)),
            "MAX" => Ok(ResultType::Aggregate(Aggregate::Max)),
            "STD" => Ok(ResultType::Aggregate(Aggregate::Std)),
            "VAR" => Ok(ResultType::Aggregate(Aggregate::Var)),
            _ => Err(QueryError::UnknownResultType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
