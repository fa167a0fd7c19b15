//! Built-in WorldClim 2.1 schema.
//!
//! Historical climate normals for 1970-2000 plus the CMIP6 downscaled
//! projection stored alongside them.

use super::definition::{ClimatePeriod, ClimateSchema, ClimateVariable};

pub const MONTHS: usize = 12;

/// BIO1 (annual mean temperature) through BIO19 (precipitation of coldest quarter)
pub const BIOCLIM_VARIABLES: usize = 19;

pub const HISTORICAL_PERIOD: &str = "1970-2000";

/// Average/minimum/maximum temperature, precipitation, solar radiation, wind speed, water vapour pressure
pub const HISTORICAL_MONTHLY_VARIABLES: &[&str] =
    &["tavg", "tmin", "tmax", "prec", "srad", "wind", "vapr"];

pub const FUTURE_MONTHLY_VARIABLES: &[&str] = &["tmin", "tmax", "prec"];

/// (period, global climate model, shared socio-economic pathway)
pub const FUTURE_PROJECTIONS: &[(&str, &str, &str)] = &[("2021-2040", "MPI-ESM1-2-HR", "ssp370")];

impl ClimateSchema {
    /// The schema of the WorldClim grid-cell collection.
    pub fn worldclim() -> Self {
        let mut historical: Vec<ClimateVariable> = HISTORICAL_MONTHLY_VARIABLES
            .iter()
            .map(|name| ClimateVariable::monthly(*name))
            .collect();
        historical.push(ClimateVariable::series("bio", BIOCLIM_VARIABLES));
        historical.push(ClimateVariable::scalar("elev"));

        let mut periods = vec![ClimatePeriod::new([HISTORICAL_PERIOD], historical)];

        for (period, model, pathway) in FUTURE_PROJECTIONS {
            let mut variables: Vec<ClimateVariable> = FUTURE_MONTHLY_VARIABLES
                .iter()
                .map(|name| ClimateVariable::monthly(*name))
                .collect();
            variables.push(ClimateVariable::series("bio", BIOCLIM_VARIABLES));
            periods.push(ClimatePeriod::new([*period, *model, *pathway], variables));
        }

        Self::new(periods)
    }
}
