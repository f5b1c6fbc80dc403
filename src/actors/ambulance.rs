// src/actors/ambulance.rs

use crate::actors::runner::ChannelActor;
use crate::global_variables::{
    CORRIDOR_LOCATION, KEY_HOSPITAL_ALERT, KEY_HOSPITAL_DATA_APPROVED, KEY_HOSPITAL_DATA_REQUEST,
    KEY_TRAFFIC_ALERT, KEY_TRAFFIC_SIGNALS,
};
use crate::shared_data::{
    current_timestamp_millis, GreenCorridorAlert, HospitalDataRequest, PatientAlert,
    ResourceSnapshot, SignalRecord,
};
use crate::sync_channel::SyncChannel;
use crate::traffic_model::routing::{find_best_route, RouteOption, ScoredRoute};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergencyState {
    Idle,
    EmergencyActive,
}

/// Three-state flag for the hospital data exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalDataStatus {
    Idle,
    Pending,
    Approved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientStatus {
    Draft,
    Sent,
}

/// A patient onboard the ambulance. Lives only in the ambulance's local
/// list; the hospital sees a PatientAlert derived from it.
#[derive(Debug, Clone)]
pub struct Patient {
    pub id: u64,
    pub condition: String,
    pub age: u32,
    pub gender: Gender,
    pub notes: String,
    pub status: PatientStatus,
}

/// The ambulance console. Drives the emergency workflow, owns the patient
/// list, and mirrors hospital resources and live signal states.
pub struct AmbulanceActor {
    channel: Arc<SyncChannel>,
    pub unit_id: String,
    candidate_routes: Vec<RouteOption>,
    pub emergency: EmergencyState,
    pub corridor_requested: bool,
    pub best_route: Option<ScoredRoute>,
    pub patients: Vec<Patient>,
    last_patient_id: u64,
    pub hospital_resources: Option<ResourceSnapshot>,
    pub request_status: HospitalDataStatus,
    pub live_signals: Vec<SignalRecord>,
}

impl AmbulanceActor {
    pub fn new(channel: Arc<SyncChannel>, unit_id: &str, candidate_routes: Vec<RouteOption>) -> Self {
        let live_signals = channel
            .get::<Vec<SignalRecord>>(KEY_TRAFFIC_SIGNALS)
            .unwrap_or_default();
        Self {
            channel,
            unit_id: unit_id.to_string(),
            candidate_routes,
            emergency: EmergencyState::Idle,
            corridor_requested: false,
            best_route: None,
            patients: Vec::new(),
            last_patient_id: 0,
            hospital_resources: None,
            request_status: HospitalDataStatus::Idle,
            live_signals,
        }
    }

    /// Enters emergency mode and ranks the candidate routes. Re-entering
    /// while already active is a no-op.
    pub fn start_emergency(&mut self) {
        if self.emergency == EmergencyState::EmergencyActive {
            return;
        }
        self.emergency = EmergencyState::EmergencyActive;
        self.best_route = find_best_route(&self.candidate_routes);
        match &self.best_route {
            Some(route) => log::info!(
                "Emergency started, recommended route '{}' (score {:.1})",
                route.route.name,
                route.final_score
            ),
            None => log::warn!("Emergency started with no candidate routes configured"),
        }
    }

    /// Publishes a green-corridor alert to traffic control. Allowed once per
    /// emergency: the flag only ever goes false -> true, and repeat calls do
    /// nothing.
    pub fn request_green_corridor(&mut self) {
        if self.emergency != EmergencyState::EmergencyActive || self.corridor_requested {
            return;
        }
        self.corridor_requested = true;
        let alert = GreenCorridorAlert::new(&self.unit_id, CORRIDOR_LOCATION);
        self.channel.set(KEY_TRAFFIC_ALERT, &alert);
        log::info!("Green corridor request sent to traffic control");
    }

    /// Adds a patient in DRAFT state and returns its id. Ids are derived
    /// from the millisecond clock, bumped when two additions land on the
    /// same tick.
    pub fn add_patient(&mut self, condition: &str, age: u32, gender: Gender, notes: &str) -> u64 {
        let mut id = current_timestamp_millis();
        if id <= self.last_patient_id {
            id = self.last_patient_id + 1;
        }
        self.last_patient_id = id;
        self.patients.push(Patient {
            id,
            condition: condition.to_string(),
            age,
            gender,
            notes: notes.to_string(),
            status: PatientStatus::Draft,
        });
        id
    }

    /// Removes a patient regardless of status.
    pub fn remove_patient(&mut self, id: u64) {
        self.patients.retain(|p| p.id != id);
    }

    /// Notifies the hospital about a DRAFT patient and marks it SENT.
    /// SENT never transitions back; re-sending is a no-op.
    pub fn send_patient_alert(&mut self, id: u64) {
        let Some(patient) = self.patients.iter_mut().find(|p| p.id == id) else {
            log::warn!("No patient with id {} to alert about", id);
            return;
        };
        if patient.status == PatientStatus::Sent {
            return;
        }
        let message = format!(
            "{} - {} {}yo",
            patient.condition, patient.gender, patient.age
        );
        let alert = PatientAlert::critical(patient.id, message);
        patient.status = PatientStatus::Sent;
        self.channel.set(KEY_HOSPITAL_ALERT, &alert);
        log::info!("Patient alert sent for '{}'", patient.condition);
    }

    /// Asks the hospital to unlock its resource data. Only valid from IDLE.
    pub fn request_hospital_data(&mut self) {
        if self.request_status != HospitalDataStatus::Idle {
            return;
        }
        self.request_status = HospitalDataStatus::Pending;
        self.channel
            .set(KEY_HOSPITAL_DATA_REQUEST, &HospitalDataRequest::new(&self.unit_id));
    }

    /// Consumes a pending approval: stores the snapshot, flips to APPROVED,
    /// and clears the key. Safe to call from both delivery paths.
    fn check_approval(&mut self) {
        if let Some(snapshot) = self.channel.get::<ResourceSnapshot>(KEY_HOSPITAL_DATA_APPROVED) {
            self.hospital_resources = Some(snapshot);
            self.request_status = HospitalDataStatus::Approved;
            self.channel.remove(KEY_HOSPITAL_DATA_APPROVED);
            log::info!("Hospital data access granted");
        }
    }

    /// Refreshes the read-only signal view. Absent or malformed snapshots
    /// keep whatever was last seen.
    fn check_signals(&mut self) {
        if let Some(signals) = self.channel.get::<Vec<SignalRecord>>(KEY_TRAFFIC_SIGNALS) {
            self.live_signals = signals;
        }
    }
}

impl ChannelActor for AmbulanceActor {
    fn handle_key_change(&mut self, key: &str) {
        match key {
            KEY_HOSPITAL_DATA_APPROVED => self.check_approval(),
            KEY_TRAFFIC_SIGNALS => self.check_signals(),
            _ => {}
        }
    }

    fn poll(&mut self) {
        self.check_approval();
        self.check_signals();
    }
}
