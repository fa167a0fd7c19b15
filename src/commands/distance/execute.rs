use std::error::Error;

use super::DistanceCmd;
use crate::commands::{Execute, GeneratedQuery, QueryContext};
use crate::types::DistanceRange;

impl Execute for DistanceCmd {
    type Output = GeneratedQuery;

    fn execute(self, context: &QueryContext) -> Result<Self::Output, Box<dyn Error>> {
        let collection = self.common.collection()?;
        let geometry = self.common.geometry()?;
        let range = DistanceRange::new(self.min, self.max)?;
        let paging = self.common.paging(&context.paging);

        let query = context.queries.distance(
            &collection,
            &geometry,
            self.common.result_type,
            range,
            self.sort,
            paging,
        )?;

        Ok(GeneratedQuery::new(
            "distance",
            &collection,
            self.common.result_type,
            query,
        ))
    }
}
