//! Core climate schema types.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::SchemaError;
use super::worldclim::MONTHS;

/// How a variable's values are stored on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableLayout {
    /// Twelve values, January at index 0
    Monthly,
    /// A fixed-length array (e.g. the 19 bioclimatic variables)
    Series(usize),
    /// A single number
    Scalar,
}

impl VariableLayout {
    /// Number of quantitative values the variable contributes.
    pub fn len(&self) -> usize {
        match self {
            VariableLayout::Monthly => MONTHS,
            VariableLayout::Series(n) => *n,
            VariableLayout::Scalar => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Array indices of the values, or a single `None` for scalars.
    pub fn indices(&self) -> Vec<Option<usize>> {
        match self {
            VariableLayout::Scalar => vec![None],
            _ => (0..self.len()).map(Some).collect(),
        }
    }

    pub fn is_array(&self) -> bool {
        !matches!(self, VariableLayout::Scalar)
    }
}

/// A named climate variable stored under a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimateVariable {
    pub name: String,
    pub layout: VariableLayout,
}

impl ClimateVariable {
    pub fn monthly(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: VariableLayout::Monthly,
        }
    }

    pub fn series(name: impl Into<String>, len: usize) -> Self {
        Self {
            name: name.into(),
            layout: VariableLayout::Series(len),
        }
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: VariableLayout::Scalar,
        }
    }
}

/// A climate period and the variables recorded for it.
///
/// `path` is the nested property path below the document's properties
/// attribute, e.g. `["2021-2040", "MPI-ESM1-2-HR", "ssp370"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimatePeriod {
    pub path: Vec<String>,
    pub variables: Vec<ClimateVariable>,
}

impl ClimatePeriod {
    pub fn new<I, S>(path: I, variables: Vec<ClimateVariable>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            variables,
        }
    }

    /// Dotted form of the path (`2021-2040.MPI-ESM1-2-HR.ssp370`).
    pub fn name(&self) -> String {
        self.path.join(".")
    }

    /// Number of quantitative values recorded for this period.
    pub fn field_count(&self) -> usize {
        self.variables.iter().map(|v| v.layout.len()).sum()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if self.path.is_empty() {
            return Err(SchemaError::EmptyPeriodPath);
        }
        if self.path.iter().any(|segment| segment.is_empty()) {
            return Err(SchemaError::EmptyPathSegment {
                period: self.name(),
            });
        }

        let mut seen = HashSet::new();
        for variable in &self.variables {
            if variable.name.is_empty() {
                return Err(SchemaError::EmptyVariableName {
                    period: self.name(),
                });
            }
            if variable.layout.is_empty() {
                return Err(SchemaError::EmptySeries {
                    period: self.name(),
                    variable: variable.name.clone(),
                });
            }
            if !seen.insert(variable.name.as_str()) {
                return Err(SchemaError::DuplicateVariable {
                    period: self.name(),
                    variable: variable.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// One quantitative leaf value of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField<'a> {
    pub period: &'a ClimatePeriod,
    pub variable: &'a ClimateVariable,
    /// Array index, `None` for scalar variables
    pub index: Option<usize>,
}

impl fmt::Display for SchemaField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.period.name(), self.variable.name)?;
        if let Some(index) = self.index {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

/// The full set of climate periods an aggregate query summarises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimateSchema {
    pub periods: Vec<ClimatePeriod>,
}

impl ClimateSchema {
    pub fn new(periods: Vec<ClimatePeriod>) -> Self {
        Self { periods }
    }

    /// Every quantitative leaf, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = SchemaField<'_>> {
        self.periods.iter().flat_map(|period| {
            period.variables.iter().flat_map(move |variable| {
                variable
                    .layout
                    .indices()
                    .into_iter()
                    .map(move |index| SchemaField {
                        period,
                        variable,
                        index,
                    })
            })
        })
    }

    pub fn field_count(&self) -> usize {
        self.periods.iter().map(ClimatePeriod::field_count).sum()
    }

    /// Check that the schema can be reshaped into a single result object.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A period path is empty or has an empty segment
    /// - A variable name is empty, a series has length zero, or a variable repeats within a period
    /// - A period path repeats
    /// - A variable's path is also used as a nested object by another period
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut periods = HashSet::new();
        let mut object_paths: BTreeSet<Vec<&str>> = BTreeSet::new();
        let mut value_paths: BTreeSet<Vec<&str>> = BTreeSet::new();

        for period in &self.periods {
            period.validate()?;

            if !periods.insert(period.path.as_slice()) {
                return Err(SchemaError::DuplicatePeriod {
                    period: period.name(),
                });
            }

            let segments: Vec<&str> = period.path.iter().map(String::as_str).collect();
            for len in 1..=segments.len() {
                object_paths.insert(segments[..len].to_vec());
            }
            for variable in &period.variables {
                let mut path = segments.clone();
                path.push(variable.name.as_str());
                value_paths.insert(path);
            }
        }

        if let Some(path) = value_paths.intersection(&object_paths).next() {
            return Err(SchemaError::PathCollision {
                path: path.join("."),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn historical() -> ClimatePeriod {
        ClimatePeriod::new(
            ["1970-2000"],
            vec![
                ClimateVariable::monthly("tavg"),
                ClimateVariable::series("bio", 19),
                ClimateVariable::scalar("elev"),
            ],
        )
    }

    #[rstest]
    #[case(VariableLayout::Monthly, 12)]
    #[case(VariableLayout::Series(19), 19)]
    #[case(VariableLayout::Scalar, 1)]
    fn test_layout_len(#[case] layout: VariableLayout, #[case] expected: usize) {
        assert_eq!(layout.len(), expected);
        assert_eq!(layout.indices().len(), expected);
    }

    #[rstest]
    fn test_scalar_has_no_index() {
        assert_eq!(VariableLayout::Scalar.indices(), vec![None]);
        assert!(!VariableLayout::Scalar.is_array());
        assert_eq!(VariableLayout::Series(2).indices(), vec![Some(0), Some(1)]);
    }

    #[rstest]
    fn test_period_name_and_field_count() {
        let period = historical();
        assert_eq!(period.name(), "1970-2000");
        assert_eq!(period.field_count(), 12 + 19 + 1);
    }

    #[rstest]
    fn test_fields_in_schema_order() {
        let schema = ClimateSchema::new(vec![historical()]);
        let paths: Vec<String> = schema.fields().map(|f| f.to_string()).collect();

        assert_eq!(paths.len(), schema.field_count());
        assert_eq!(paths[0], "1970-2000.tavg[0]");
        assert_eq!(paths[11], "1970-2000.tavg[11]");
        assert_eq!(paths[12], "1970-2000.bio[0]");
        assert_eq!(paths.last().unwrap(), "1970-2000.elev");
    }

    #[rstest]
    fn test_valid_schema() {
        let schema = ClimateSchema::new(vec![
            historical(),
            ClimatePeriod::new(
                ["2021-2040", "MPI-ESM1-2-HR", "ssp370"],
                vec![ClimateVariable::monthly("tmin")],
            ),
            ClimatePeriod::new(
                ["2021-2040", "MPI-ESM1-2-HR", "ssp585"],
                vec![ClimateVariable::monthly("tmin")],
            ),
        ]);
        assert_eq!(schema.validate(), Ok(()));
    }

    #[rstest]
    fn test_empty_schema_is_valid() {
        let schema = ClimateSchema::default();
        assert_eq!(schema.validate(), Ok(()));
        assert_eq!(schema.field_count(), 0);
    }

    #[rstest]
    fn test_empty_period_path_rejected() {
        let schema = ClimateSchema::new(vec![ClimatePeriod::new(
            Vec::<String>::new(),
            vec![ClimateVariable::scalar("elev")],
        )]);
        assert_eq!(schema.validate(), Err(SchemaError::EmptyPeriodPath));
    }

    #[rstest]
    fn test_empty_segment_rejected() {
        let schema = ClimateSchema::new(vec![ClimatePeriod::new(
            ["2021-2040", ""],
            vec![ClimateVariable::scalar("elev")],
        )]);
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::EmptyPathSegment { .. })
        ));
    }

    #[rstest]
    fn test_empty_variable_name_rejected() {
        let schema = ClimateSchema::new(vec![ClimatePeriod::new(
            ["1970-2000"],
            vec![ClimateVariable::monthly("")],
        )]);
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::EmptyVariableName { .. })
        ));
    }

    #[rstest]
    fn test_zero_length_series_rejected() {
        let schema = ClimateSchema::new(vec![ClimatePeriod::new(
            ["1970-2000"],
            vec![ClimateVariable::series("bio", 0)],
        )]);
        assert_eq!(
            schema.validate(),
            Err(SchemaError::EmptySeries {
                period: "1970-2000".to_string(),
                variable: "bio".to_string(),
            })
        );
    }

    #[rstest]
    fn test_duplicate_period_rejected() {
        let schema = ClimateSchema::new(vec![historical(), historical()]);
        assert_eq!(
            schema.validate(),
            Err(SchemaError::DuplicatePeriod {
                period: "1970-2000".to_string(),
            })
        );
    }

    #[rstest]
    fn test_duplicate_variable_rejected() {
        let schema = ClimateSchema::new(vec![ClimatePeriod::new(
            ["1970-2000"],
            vec![ClimateVariable::monthly("tavg"), ClimateVariable::scalar("tavg")],
        )]);
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateVariable { .. })
        ));
    }

    #[rstest]
    fn test_variable_colliding_with_nested_period_rejected() {
        let schema = ClimateSchema::new(vec![
            ClimatePeriod::new(["2021-2040"], vec![ClimateVariable::scalar("MPI-ESM1-2-HR")]),
            ClimatePeriod::new(
                ["2021-2040", "MPI-ESM1-2-HR", "ssp370"],
                vec![ClimateVariable::monthly("tmin")],
            ),
        ]);
        assert_eq!(
            schema.validate(),
            Err(SchemaError::PathCollision {
                path: "2021-2040.MPI-ESM1-2-HR".to_string(),
            })
        );
    }

    #[rstest]
    fn test_serde_layout_format() {
        let json = r#"
        {
            "periods": [
                {
                    "path": ["1970-2000"],
                    "variables": [
                        { "name": "tavg", "layout": "monthly" },
                        { "name": "bio", "layout": { "series": 19 } },
                        { "name": "elev", "layout": "scalar" }
                    ]
                }
            ]
        }
        "#;
        let schema: ClimateSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema, ClimateSchema::new(vec![historical()]));
    }
}
