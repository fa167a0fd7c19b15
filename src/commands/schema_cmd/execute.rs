use std::error::Error;

use serde::Serialize;

use super::SchemaCmd;
use crate::commands::{Execute, QueryContext};
use crate::schema::{ClimatePeriod, ClimateVariable, VariableLayout};

/// A variable and the number of values it contributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableEntry {
    pub name: String,
    pub layout: String,
    pub field_count: usize,
}

/// A period path with its variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodEntry {
    pub path: String,
    pub field_count: usize,
    pub variables: Vec<VariableEntry>,
}

/// Result of the schema command execution
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaResult {
    pub properties_field: String,
    pub field_count: usize,
    pub periods: Vec<PeriodEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

fn describe_layout(layout: VariableLayout) -> String {
    match layout {
        VariableLayout::Monthly => "monthly".to_string(),
        VariableLayout::Series(n) => format!("series({})", n),
        VariableLayout::Scalar => "scalar".to_string(),
    }
}

impl From<&ClimateVariable> for VariableEntry {
    fn from(variable: &ClimateVariable) -> Self {
        Self {
            name: variable.name.clone(),
            layout: describe_layout(variable.layout),
            field_count: variable.layout.len(),
        }
    }
}

impl From<&ClimatePeriod> for PeriodEntry {
    fn from(period: &ClimatePeriod) -> Self {
        Self {
            path: period.name(),
            field_count: period.field_count(),
            variables: period.variables.iter().map(VariableEntry::from).collect(),
        }
    }
}

impl Execute for SchemaCmd {
    type Output = SchemaResult;

    fn execute(self, context: &QueryContext) -> Result<Self::Output, Box<dyn Error>> {
        let schema = context.queries.schema();

        Ok(SchemaResult {
            properties_field: context.queries.layout().properties_field.clone(),
            field_count: schema.field_count(),
            periods: schema.periods.iter().map(PeriodEntry::from).collect(),
            fields: self
                .fields
                .then(|| schema.fields().map(|field| field.to_string()).collect()),
        })
    }
}
