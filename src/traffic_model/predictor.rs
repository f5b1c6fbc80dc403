// src/traffic_model/predictor.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Weather condition feeding the traffic predictor. Anything we do not
/// recognize on the wire degrades to `Clear` rather than failing the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Snow,
    Fog,
}

impl Weather {
    pub fn parse(s: &str) -> Self {
        match s {
            "rain" => Weather::Rain,
            "snow" => Weather::Snow,
            "fog" => Weather::Fog,
            _ => Weather::Clear,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Rain => "rain",
            Weather::Snow => "snow",
            Weather::Fog => "fog",
        }
    }
}

impl Serialize for Weather {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Weather {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Weather::parse(&s))
    }
}

/// Situational inputs for one prediction. Constructed per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficInput {
    /// Hour of day, 0-23.
    pub time_of_day: i64,
    /// 0 (Sun) - 6 (Sat).
    pub day_of_week: i64,
    pub weather: Weather,
    /// 0-10, 10 is very high.
    pub historical_congestion_level: f64,
}

/// Predicts a traffic density score in [0, 100] from weighted inputs.
///
/// The ordering and constants are fixed: route ranking depends on exact
/// values, so any change here changes which route wins. Only the final sum is
/// clamped; intermediate terms may run out of range.
pub fn predict_traffic_density(input: &TrafficInput) -> f64 {
    // Base score from historical congestion (0-50).
    let mut score = input.historical_congestion_level * 5.0;

    // Time of day: rush hours 8-10 and 17-19, late night 22-5.
    if (8..=10).contains(&input.time_of_day) || (17..=19).contains(&input.time_of_day) {
        score += 30.0;
    } else if input.time_of_day >= 22 || input.time_of_day <= 5 {
        score -= 10.0;
    } else {
        score += 10.0;
    }

    // Day of week: weekends carry less traffic.
    if input.day_of_week == 0 || input.day_of_week == 6 {
        score -= 15.0;
    } else {
        score += 5.0;
    }

    score += match input.weather {
        Weather::Clear => 0.0,
        Weather::Rain => 20.0,
        Weather::Snow => 30.0,
        Weather::Fog => 15.0,
    };

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(time_of_day: i64, day_of_week: i64, weather: Weather, level: f64) -> TrafficInput {
        TrafficInput {
            time_of_day,
            day_of_week,
            weather,
            historical_congestion_level: level,
        }
    }

    #[test]
    fn predict_is_deterministic() {
        let i = input(18, 1, Weather::Rain, 7.0);
        let first = predict_traffic_density(&i);
        for _ in 0..10 {
            assert_eq!(predict_traffic_density(&i), first);
        }
    }

    #[test]
    fn saturated_rush_hour_snow_clamps_to_100() {
        // 10*5 + 30 + 5 + 30 = 135, clamped.
        let score = predict_traffic_density(&input(18, 1, Weather::Snow, 10.0));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn quiet_weekend_night_clamps_to_0() {
        // 0 - 10 - 15 + 0 = -25, clamped.
        let score = predict_traffic_density(&input(3, 0, Weather::Clear, 0.0));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn rush_hour_bounds_are_inclusive() {
        // Hours 8 and 10 both count as morning rush; 11 falls back to daytime.
        let at_8 = predict_traffic_density(&input(8, 1, Weather::Clear, 4.0));
        let at_10 = predict_traffic_density(&input(10, 1, Weather::Clear, 4.0));
        let at_11 = predict_traffic_density(&input(11, 1, Weather::Clear, 4.0));
        assert_eq!(at_8, 55.0);
        assert_eq!(at_10, 55.0);
        assert_eq!(at_11, 35.0);
    }

    #[test]
    fn late_night_starts_at_22_and_ends_at_5() {
        let at_22 = predict_traffic_density(&input(22, 1, Weather::Clear, 4.0));
        let at_5 = predict_traffic_density(&input(5, 1, Weather::Clear, 4.0));
        let at_6 = predict_traffic_density(&input(6, 1, Weather::Clear, 4.0));
        assert_eq!(at_22, 15.0);
        assert_eq!(at_5, 15.0);
        assert_eq!(at_6, 35.0);
    }

    #[test]
    fn unknown_weather_parses_as_clear() {
        assert_eq!(Weather::parse("hailstorm"), Weather::Clear);
        let clear = predict_traffic_density(&input(12, 2, Weather::Clear, 5.0));
        let unknown = predict_traffic_density(&input(12, 2, Weather::parse("hailstorm"), 5.0));
        assert_eq!(clear, unknown);
    }

    #[test]
    fn unknown_weather_on_the_wire_decodes_as_clear() {
        let json = r#"{"timeOfDay":12,"dayOfWeek":2,"weather":"dust","historicalCongestionLevel":5}"#;
        let decoded: TrafficInput = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.weather, Weather::Clear);
    }

    #[test]
    fn weather_adjustments_are_ordered_snow_rain_fog_clear() {
        let base = |w| predict_traffic_density(&input(12, 2, w, 5.0));
        assert_eq!(base(Weather::Clear), 40.0);
        assert_eq!(base(Weather::Fog), 55.0);
        assert_eq!(base(Weather::Rain), 60.0);
        assert_eq!(base(Weather::Snow), 70.0);
    }
}
