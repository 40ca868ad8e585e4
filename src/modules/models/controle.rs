use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::acp_times::validate_distance;
use crate::modules::helpers::time::{format_controle_time, parse_start_time};
use crate::modules::models::brevet::BrevetDistance;

/// # controle query
/// a validated request for the times of a single controle.
/// a query can only be constructed from valid input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControleQuery {
    controle_km: f64,
    brevet: BrevetDistance,
    start: DateTime<FixedOffset>,
}

impl ControleQuery {
    pub fn new(
        controle_km: f64,
        brevet: BrevetDistance,
        start: DateTime<FixedOffset>,
    ) -> CustomResult<ControleQuery> {
        Ok(ControleQuery {
            controle_km: validate_distance(controle_km)?,
            brevet,
            start,
        })
    }

    /// # parse a raw query
    /// build a query from untyped parameters as they arrive over http.
    /// the distance is checked first, then the brevet, then the start time.
    ///
    /// ## Arguments
    /// * `controle_km` - distance of the controle, `None` when it was missing or not a number
    /// * `brevet_km` - nominal distance of the brevet
    /// * `start_time` - raw start time of the brevet
    ///
    /// ## Returns
    /// * `ControleQuery` - the validated query
    pub fn from_raw(
        controle_km: Option<f64>,
        brevet_km: f64,
        start_time: &str,
    ) -> CustomResult<ControleQuery> {
        let controle_km = validate_distance(controle_km.unwrap_or(f64::NAN))?;
        let brevet = BrevetDistance::try_from(brevet_km)?;
        let start = parse_start_time(start_time)?;

        Ok(ControleQuery {
            controle_km,
            brevet,
            start,
        })
    }

    pub fn controle_km(&self) -> f64 {
        self.controle_km
    }

    pub fn brevet(&self) -> BrevetDistance {
        self.brevet
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControleTimes {
    pub open: DateTime<FixedOffset>,
    pub close: DateTime<FixedOffset>,
}

impl ControleTimes {
    pub fn format(&self) -> FormattedControleTimes {
        FormattedControleTimes {
            open: format_controle_time(&self.open),
            close: format_controle_time(&self.close),
        }
    }
}

/// # Struct representing a json response for the times of a controle
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FormattedControleTimes {
    pub open: String,
    pub close: String,
}
