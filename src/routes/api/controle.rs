use chrono::{DateTime, FixedOffset, Local};
use log::{debug, warn};
use rocket::serde::json::Json;
use rocket::{get, State};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::macros::query_error_handler::query_handle_error_http;
use crate::modules::acp_times::ControleCalculator;
use crate::modules::models::bracket::{DistanceBracket, ACP_BRACKETS};
use crate::modules::models::brevet::{BrevetDistance, BrevetInfo};
use crate::modules::models::controle::{ControleQuery, FormattedControleTimes};
use crate::routes::api::error::ApiError;

const DEFAULT_BREVET_KM: f64 = 200.0;

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

/// # calculate controle times
/// calculate the open and close time of a single controle.
/// the brevet defaults to 200km and the start time to now.
#[get("/_calc_times?<km>&<brevet>&<start_time>")]
pub fn calc_times(
    km: Option<f64>,
    brevet: Option<f64>,
    start_time: Option<String>,
    config: &State<Config>,
) -> Result<Json<CalcTimesResponse>, ApiError> {
    let start_time = start_time.unwrap_or_else(|| {
        let now: DateTime<FixedOffset> = Local::now().into();
        now.to_rfc3339()
    });
    let brevet = brevet.unwrap_or(DEFAULT_BREVET_KM);

    debug!(
        target:"routes/api/controle:calc_times",
        "Got a request for km={:?} brevet={} start_time={}", km, brevet, start_time
    );

    let query = query_handle_error_http!(
        ControleQuery::from_raw(km, brevet, &start_time),
        "routes/api/controle:calc_times"
    );
    let times = query_handle_error_http!(
        ControleCalculator::new(config.rounding).times(&query),
        "routes/api/controle:calc_times"
    );

    Ok(Json(CalcTimesResponse {
        result: times.format(),
    }))
}

/// # service description
/// the supported brevets and the pace table used for the calculations
#[get("/")]
pub fn index(config: &State<Config>) -> Json<ServiceInfo> {
    Json(ServiceInfo::new(config))
}

/// same as `index`, kept for the old `/index` url
#[get("/index")]
pub fn index_page(config: &State<Config>) -> Json<ServiceInfo> {
    index(config)
}

/// # get all brevets
#[get("/brevets")]
pub fn get_all_brevets() -> Json<Vec<BrevetInfo>> {
    Json(BrevetDistance::ALL.into_iter().map(BrevetInfo::from).collect())
}

/**************************************************************************************************/
/**************** HELPERS *************************************************************************/
/**************************************************************************************************/

/// # Struct representing a json response for a time calculation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalcTimesResponse {
    pub result: FormattedControleTimes,
}

#[derive(Serialize, Debug, Clone)]
pub struct ServiceInfo {
    pub name: String,
    pub rounding: String,
    pub brevets: Vec<BrevetInfo>,
    pub brackets: Vec<DistanceBracket>,
}

impl ServiceInfo {
    pub fn new(config: &Config) -> ServiceInfo {
        ServiceInfo {
            name: "ACP controle times".to_string(),
            rounding: format!("{:?}", config.rounding).to_lowercase(),
            brevets: BrevetDistance::ALL.into_iter().map(BrevetInfo::from).collect(),
            brackets: ACP_BRACKETS.to_vec(),
        }
    }
}
