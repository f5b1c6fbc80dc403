// src/traffic_model/api.rs
//
// Request validation and response shaping for the traffic prediction
// endpoint. The HTTP framing lives outside this crate; whatever hosts it
// hands the decoded JSON body in and maps the error variants onto a generic
// client or server error.

use crate::traffic_model::predictor::{predict_traffic_density, TrafficInput, Weather};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("Invalid input. Required: timeOfDay, dayOfWeek, weather, historicalCongestionLevel")]
    InvalidInput,
    #[error("Internal Server Error")]
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CongestionLevel {
    High,
    Moderate,
    Low,
}

impl CongestionLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            CongestionLevel::High
        } else if score > 40.0 {
            CongestionLevel::Moderate
        } else {
            CongestionLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionFactors {
    pub time_ex: i64,
    pub weather_ex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub score: f64,
    pub level: CongestionLevel,
    pub factors: PredictionFactors,
}

/// Validates the raw request body and runs the predictor.
///
/// All four fields are required with the right JSON types; anything else is
/// rejected before it reaches the predictor. An unrecognized weather string
/// is not an error, it degrades to clear inside the model.
pub fn handle_predict(body: &Value) -> Result<PredictionResponse, PredictError> {
    let time_of_day = body
        .get("timeOfDay")
        .and_then(Value::as_f64)
        .ok_or(PredictError::InvalidInput)?;
    let day_of_week = body
        .get("dayOfWeek")
        .and_then(Value::as_f64)
        .ok_or(PredictError::InvalidInput)?;
    let weather = body
        .get("weather")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(PredictError::InvalidInput)?;
    let historical_congestion_level = body
        .get("historicalCongestionLevel")
        .and_then(Value::as_f64)
        .ok_or(PredictError::InvalidInput)?;

    let input = TrafficInput {
        time_of_day: time_of_day as i64,
        day_of_week: day_of_week as i64,
        weather: Weather::parse(weather),
        historical_congestion_level,
    };

    let score = predict_traffic_density(&input);

    Ok(PredictionResponse {
        score,
        level: CongestionLevel::from_score(score),
        factors: PredictionFactors {
            time_ex: input.time_of_day,
            weather_ex: weather.to_string(),
        },
    })
}
