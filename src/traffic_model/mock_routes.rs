// src/traffic_model/mock_routes.rs

use crate::traffic_model::predictor::{TrafficInput, Weather};
use crate::traffic_model::routing::RouteOption;

/// The static candidate set presented to the ambulance. Paths are simulated
/// around the New Delhi area.
pub fn mock_routes() -> Vec<RouteOption> {
    vec![
        RouteOption {
            id: "route-1".to_string(),
            name: "Main Highway (Fastest usually)".to_string(),
            distance_km: 12.0,
            signal_count: 4,
            traffic_input: TrafficInput {
                time_of_day: 18,
                day_of_week: 1,
                weather: Weather::Clear,
                historical_congestion_level: 8.0,
            },
            coordinates: vec![
                (28.6139, 77.2090),
                (28.6150, 77.2120),
                (28.6200, 77.2150),
                (28.6250, 77.2100),
                (28.6300, 77.2180),
            ],
        },
        RouteOption {
            id: "route-2".to_string(),
            name: "City Shortcut (More signals)".to_string(),
            distance_km: 9.0,
            signal_count: 12,
            traffic_input: TrafficInput {
                time_of_day: 18,
                day_of_week: 1,
                weather: Weather::Clear,
                historical_congestion_level: 6.0,
            },
            coordinates: vec![
                (28.6139, 77.2090),
                (28.6145, 77.2080),
                (28.6160, 77.2050),
                (28.6180, 77.2060),
                (28.6300, 77.2180),
            ],
        },
        RouteOption {
            id: "route-3".to_string(),
            name: "Backroads (Longer but empty)".to_string(),
            distance_km: 15.0,
            signal_count: 2,
            traffic_input: TrafficInput {
                time_of_day: 18,
                day_of_week: 1,
                weather: Weather::Clear,
                historical_congestion_level: 2.0,
            },
            coordinates: vec![
                (28.6139, 77.2090),
                (28.6100, 77.2000),
                (28.6050, 77.2100),
                (28.6200, 77.2250),
                (28.6300, 77.2180),
            ],
        },
    ]
}
