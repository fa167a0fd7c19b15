//! Output formatting for schema command results.

use super::execute::SchemaResult;
use crate::output::Outputable;

impl Outputable for SchemaResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Climate schema under '{}': {} period(s), {} field(s)",
            self.properties_field,
            self.periods.len(),
            self.field_count
        ));

        if self.periods.is_empty() {
            lines.push(String::new());
            lines.push("No periods defined.".to_string());
        }

        for period in &self.periods {
            lines.push(String::new());
            lines.push(format!("{} ({} fields):", period.path, period.field_count));
            for variable in &period.variables {
                lines.push(format!(
                    "  {:<8} {:<12} {:>4}",
                    variable.name, variable.layout, variable.field_count
                ));
            }
        }

        if let Some(fields) = &self.fields {
            lines.push(String::new());
            lines.push("Fields:".to_string());
            lines.extend(fields.iter().map(|field| format!("  {}", field)));
        }

        lines.join("\n")
    }
}
