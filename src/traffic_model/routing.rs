// src/traffic_model/routing.rs

use crate::traffic_model::predictor::{predict_traffic_density, TrafficInput};
use serde::{Deserialize, Serialize};

/// A candidate route for the ambulance. Defined at configuration time and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    pub id: String,
    pub name: String,
    pub distance_km: f64,
    pub signal_count: u32,
    pub traffic_input: TrafficInput,
    /// Lat/lng polyline for the map view; ignored by the scorer.
    #[serde(default)]
    pub coordinates: Vec<(f64, f64)>,
}

/// A route with its computed scores attached. Lower `final_score` is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRoute {
    #[serde(flatten)]
    pub route: RouteOption,
    pub traffic_score: f64,
    pub final_score: f64,
}

/// Scores one route:
/// final = distance_km * 0.4 + traffic_score * 0.4 + signal_count * 0.2.
///
/// The three terms are combined at face value (km, 0-100 score, count) with
/// no unit normalization. Normalizing would change which route wins, so it
/// stays out.
pub fn score_route(route: &RouteOption) -> ScoredRoute {
    let traffic_score = predict_traffic_density(&route.traffic_input);
    let final_score =
        route.distance_km * 0.4 + traffic_score * 0.4 + f64::from(route.signal_count) * 0.2;
    ScoredRoute {
        route: route.clone(),
        traffic_score,
        final_score,
    }
}

/// Picks the route with the lowest final score. Returns `None` for an empty
/// candidate set. On an exact tie the route appearing earlier wins: a
/// challenger only displaces the incumbent with a strictly lower score.
pub fn find_best_route(routes: &[RouteOption]) -> Option<ScoredRoute> {
    let mut best: Option<ScoredRoute> = None;
    for route in routes {
        let scored = score_route(route);
        match &best {
            Some(current) if scored.final_score >= current.final_score => {}
            _ => best = Some(scored),
        }
    }
    best
}
