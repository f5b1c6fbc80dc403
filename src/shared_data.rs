// src/shared_data.rs

use crate::global_variables::{GREEN_CORRIDOR_REQUEST, PATIENT_ALERT_CRITICAL, PATIENT_ALERT_ETA};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn current_timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// State of a controllable traffic signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalState {
    #[serde(rename = "RED")]
    Red,
    #[serde(rename = "GREEN")]
    Green,
}

impl SignalState {
    pub fn flipped(self) -> Self {
        match self {
            SignalState::Red => SignalState::Green,
            SignalState::Green => SignalState::Red,
        }
    }
}

/// One traffic signal as published in the `traffic_signals` snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub id: String,
    pub name: String,
    pub state: SignalState,
}

/// The seed snapshot written when `traffic_signals` is absent.
pub fn default_signals() -> Vec<SignalRecord> {
    vec![
        SignalRecord {
            id: "sig-1".to_string(),
            name: "Connaught Place Circle".to_string(),
            state: SignalState::Green,
        },
        SignalRecord {
            id: "sig-2".to_string(),
            name: "India Gate South".to_string(),
            state: SignalState::Red,
        },
        SignalRecord {
            id: "sig-3".to_string(),
            name: "AIIMS Flyover".to_string(),
            state: SignalState::Red,
        },
    ]
}

/// Written by the ambulance under `traffic_alert`; cleared by traffic control
/// once acknowledged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreenCorridorAlert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub ambulance_id: String,
    pub location: String,
    pub timestamp: u64,
}

impl GreenCorridorAlert {
    pub fn new(ambulance_id: &str, location: &str) -> Self {
        Self {
            alert_type: GREEN_CORRIDOR_REQUEST.to_string(),
            ambulance_id: ambulance_id.to_string(),
            location: location.to_string(),
            timestamp: current_timestamp_millis(),
        }
    }
}

/// Written by the ambulance under `hospital_data_request`; cleared by the
/// hospital when the request is approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDataRequest {
    pub ambulance_id: String,
    pub timestamp: u64,
}

impl HospitalDataRequest {
    pub fn new(ambulance_id: &str) -> Self {
        Self {
            ambulance_id: ambulance_id.to_string(),
            timestamp: current_timestamp_millis(),
        }
    }
}

/// Hospital resource counters. Doubles as the `hospital_data_approved`
/// payload sent back to the ambulance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSnapshot {
    pub icu_beds: u32,
    pub ventilators: u32,
    pub doctors: u32,
}

impl Default for ResourceSnapshot {
    fn default() -> Self {
        Self {
            icu_beds: 5,
            ventilators: 2,
            doctors: 8,
        }
    }
}

/// Written by the ambulance under `hospital_alert`; accumulated by the
/// hospital into a per-session log, deduplicated by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAlert {
    pub id: u64,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub eta: String,
    pub message: String,
    pub timestamp: u64,
}

impl PatientAlert {
    pub fn critical(id: u64, message: String) -> Self {
        Self {
            id,
            alert_type: PATIENT_ALERT_CRITICAL.to_string(),
            eta: PATIENT_ALERT_ETA.to_string(),
            message,
            timestamp: current_timestamp_millis(),
        }
    }
}
