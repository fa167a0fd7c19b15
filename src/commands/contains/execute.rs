use std::error::Error;

use super::ContainsCmd;
use crate::commands::{Execute, GeneratedQuery, QueryContext};

impl Execute for ContainsCmd {
    type Output = GeneratedQuery;

    fn execute(self, context: &QueryContext) -> Result<Self::Output, Box<dyn Error>> {
        let collection = self.common.collection()?;
        let geometry = self.common.geometry()?;
        let paging = self.common.paging(&context.paging);

        let query =
            context
                .queries
                .contains(&collection, &geometry, self.common.result_type, paging)?;

        Ok(GeneratedQuery::new("contains", &collection, self.common.result_type, query))
    }
}
