use serde::Serialize;

/// # distance bracket
/// a row of the ACP pace table. the bracket covers `lower_km..upper_km`,
/// only the last bracket of the table includes its upper edge.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DistanceBracket {
    pub lower_km: f64,
    pub upper_km: f64,
    pub min_speed_kmh: f64,
    pub max_speed_kmh: f64,
}

/// which speed of a bracket to read while walking the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedColumn {
    Minimum,
    Maximum,
}

/// The ACP table, contiguous from 0 up to 1300 km.
pub const ACP_BRACKETS: [DistanceBracket; 5] = [
    DistanceBracket { lower_km: 0.0, upper_km: 200.0, min_speed_kmh: 15.0, max_speed_kmh: 34.0 },
    DistanceBracket { lower_km: 200.0, upper_km: 400.0, min_speed_kmh: 15.0, max_speed_kmh: 32.0 },
    DistanceBracket { lower_km: 400.0, upper_km: 600.0, min_speed_kmh: 15.0, max_speed_kmh: 30.0 },
    DistanceBracket { lower_km: 600.0, upper_km: 1000.0, min_speed_kmh: 11.428, max_speed_kmh: 28.0 },
    DistanceBracket { lower_km: 1000.0, upper_km: 1300.0, min_speed_kmh: 13.333, max_speed_kmh: 26.0 },
];

impl DistanceBracket {
    pub fn speed(&self, column: SpeedColumn) -> f64 {
        match column {
            SpeedColumn::Minimum => self.min_speed_kmh,
            SpeedColumn::Maximum => self.max_speed_kmh,
        }
    }

    /// # covered distance
    /// the part of `distance_km` (measured from the start) that lies inside this bracket
    ///
    /// ## Arguments
    /// * `distance_km` - distance from the start of the brevet
    ///
    /// ## Returns
    /// * `f64` - kilometers ridden inside the bracket, 0 when the distance ends before it
    pub fn covered_km(&self, distance_km: f64) -> f64 {
        (distance_km.min(self.upper_km) - self.lower_km).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_contiguous() {
        assert_eq!(ACP_BRACKETS[0].lower_km, 0.0);
        for pair in ACP_BRACKETS.windows(2) {
            assert_eq!(pair[0].upper_km, pair[1].lower_km);
            assert!(pair[0].lower_km < pair[0].upper_km);
        }
    }

    #[test]
    fn test_max_speed_is_faster_than_min_speed() {
        for bracket in ACP_BRACKETS.iter() {
            assert!(bracket.max_speed_kmh > bracket.min_speed_kmh);
        }
    }

    #[test]
    fn test_covered_km() {
        let bracket = ACP_BRACKETS[1];
        assert_eq!(bracket.covered_km(150.0), 0.0);
        assert_eq!(bracket.covered_km(200.0), 0.0);
        assert_eq!(bracket.covered_km(250.0), 50.0);
        assert_eq!(bracket.covered_km(900.0), 200.0);
    }
}
