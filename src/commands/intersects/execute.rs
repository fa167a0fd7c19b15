use std::error::Error;

use super::IntersectsCmd;
use crate::commands::{Execute, GeneratedQuery, QueryContext};

impl Execute for IntersectsCmd {
    type Output = GeneratedQuery;

    fn execute(self, context: &QueryContext) -> Result<Self::Output, Box<dyn Error>> {
        let collection = self.common.collection()?;
        let geometry = self.common.geometry()?;
        let paging = self.common.paging(&context.paging);

        let query = context.queries.intersects(
            &collection,
            &geometry,
            self.common.result_type,
            paging,
        )?;

        Ok(GeneratedQuery::new(
            "intersects",
            &collection,
            self.common.result_type,
            query,
        ))
    }
}
