use std::fmt;

use chrono::Duration;
use serde::Serialize;
use snafu::prelude::*;

use crate::errors::{Error, InvalidBrevetDistanceSnafu};

/// # brevet distance
/// the nominal lengths a brevet can be certified for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BrevetDistance {
    Km200,
    Km300,
    Km400,
    Km600,
    Km1000,
}

impl BrevetDistance {
    pub const ALL: [BrevetDistance; 5] = [
        BrevetDistance::Km200,
        BrevetDistance::Km300,
        BrevetDistance::Km400,
        BrevetDistance::Km600,
        BrevetDistance::Km1000,
    ];

    pub fn kilometers(&self) -> u32 {
        match self {
            BrevetDistance::Km200 => 200,
            BrevetDistance::Km300 => 300,
            BrevetDistance::Km400 => 400,
            BrevetDistance::Km600 => 600,
            BrevetDistance::Km1000 => 1000,
        }
    }

    /// # overall time limit
    /// the time a rider has to finish the full nominal distance.
    /// these are fixed by the ACP rules and are not read from the pace table.
    pub fn time_limit(&self) -> Duration {
        let minutes = match self {
            BrevetDistance::Km200 => 13 * 60 + 30,
            BrevetDistance::Km300 => 20 * 60,
            BrevetDistance::Km400 => 27 * 60,
            BrevetDistance::Km600 => 40 * 60,
            BrevetDistance::Km1000 => 75 * 60,
        };

        Duration::minutes(minutes)
    }
}

impl TryFrom<f64> for BrevetDistance {
    type Error = Error;

    fn try_from(distance: f64) -> Result<Self, Self::Error> {
        let brevet = BrevetDistance::ALL
            .into_iter()
            .find(|brevet| f64::from(brevet.kilometers()) == distance);

        brevet.context(InvalidBrevetDistanceSnafu { distance })
    }
}

impl fmt::Display for BrevetDistance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}km", self.kilometers())
    }
}

/// # Struct representing a json response for a brevet distance
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BrevetInfo {
    pub distance_km: u32,
    pub time_limit: String,
}

impl From<BrevetDistance> for BrevetInfo {
    fn from(brevet: BrevetDistance) -> Self {
        let limit = brevet.time_limit();
        BrevetInfo {
            distance_km: brevet.kilometers(),
            time_limit: format!("{:02}:{:02}", limit.num_hours(), limit.num_minutes() % 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_supported_distances() {
        assert_eq!(BrevetDistance::try_from(200.0), Ok(BrevetDistance::Km200));
        assert_eq!(BrevetDistance::try_from(300.0), Ok(BrevetDistance::Km300));
        assert_eq!(BrevetDistance::try_from(400.0), Ok(BrevetDistance::Km400));
        assert_eq!(BrevetDistance::try_from(600.0), Ok(BrevetDistance::Km600));
        assert_eq!(BrevetDistance::try_from(1000.0), Ok(BrevetDistance::Km1000));
    }

    #[test]
    fn test_try_from_unsupported_distances() {
        for distance in [0.0, 199.9, 250.0, 1200.0, -200.0, f64::NAN] {
            assert!(matches!(
                BrevetDistance::try_from(distance),
                Err(Error::InvalidBrevetDistance { .. })
            ));
        }
    }

    #[test]
    fn test_time_limits() {
        assert_eq!(BrevetDistance::Km200.time_limit(), Duration::minutes(810));
        assert_eq!(BrevetDistance::Km1000.time_limit(), Duration::hours(75));
    }

    #[test]
    fn test_brevet_info() {
        let info = BrevetInfo::from(BrevetDistance::Km200);
        assert_eq!(info.distance_km, 200);
        assert_eq!(info.time_limit, "13:30");

        let info = BrevetInfo::from(BrevetDistance::Km1000);
        assert_eq!(info.time_limit, "75:00");
    }
}
