/// one microsecond expressed in minutes
pub const MINUTE_TOLERANCE: f64 = 1.0 / 60_000_000.0;

pub struct Math {}

impl Math {
    pub fn hours_to_minutes(hours: f64) -> f64 {
        hours * 60.0
    }

    /// # floor minutes
    /// round a number of minutes down. values within `MINUTE_TOLERANCE` below a
    /// whole minute are treated as that whole minute.
    ///
    /// ## Arguments
    /// * `minutes` - the minutes to round
    ///
    /// ## Returns
    /// * `i64` - the whole minutes
    pub fn floor_minutes(minutes: f64) -> i64 {
        (minutes + MINUTE_TOLERANCE).floor() as i64
    }

    /// # ceil minutes
    /// round a number of minutes up. values within `MINUTE_TOLERANCE` above a
    /// whole minute are treated as that whole minute.
    ///
    /// ## Arguments
    /// * `minutes` - the minutes to round
    ///
    /// ## Returns
    /// * `i64` - the whole minutes
    pub fn ceil_minutes(minutes: f64) -> i64 {
        (minutes - MINUTE_TOLERANCE).ceil() as i64
    }

    pub fn round_minutes(minutes: f64) -> i64 {
        minutes.round() as i64
    }
}
