// src/actors/hospital.rs

use crate::actors::runner::ChannelActor;
use crate::global_variables::{
    KEY_HOSPITAL_ALERT, KEY_HOSPITAL_DATA_APPROVED, KEY_HOSPITAL_DATA_REQUEST,
};
use crate::shared_data::{HospitalDataRequest, PatientAlert, ResourceSnapshot};
use crate::sync_channel::SyncChannel;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    IcuBeds,
    Ventilators,
    Doctors,
}

/// The hospital resource gateway. Owns the resource counters, accumulates
/// incoming patient alerts, and gates data access for the ambulance.
pub struct HospitalActor {
    channel: Arc<SyncChannel>,
    pub resources: ResourceSnapshot,
    /// Newest first, deduplicated by alert id.
    pub alerts: Vec<PatientAlert>,
    pub incoming_request: Option<HospitalDataRequest>,
}

impl HospitalActor {
    /// Starts a fresh session. Any carry-over messages from a previous run
    /// are cleared unconditionally so no actor observes stale state.
    pub fn new(channel: Arc<SyncChannel>) -> Self {
        channel.remove(KEY_HOSPITAL_ALERT);
        channel.remove(KEY_HOSPITAL_DATA_REQUEST);
        channel.remove(KEY_HOSPITAL_DATA_APPROVED);
        Self {
            channel,
            resources: ResourceSnapshot::default(),
            alerts: Vec::new(),
            incoming_request: None,
        }
    }

    /// Adjusts one counter by `delta`, flooring at 0. No upper bound.
    pub fn adjust_resource(&mut self, kind: ResourceKind, delta: i64) {
        let counter = match kind {
            ResourceKind::IcuBeds => &mut self.resources.icu_beds,
            ResourceKind::Ventilators => &mut self.resources.ventilators,
            ResourceKind::Doctors => &mut self.resources.doctors,
        };
        *counter = (i64::from(*counter) + delta).max(0) as u32;
    }

    /// Approves the pending data request: publishes the current resource
    /// snapshot and consumes the request key. No-op without a request.
    pub fn approve_request(&mut self) {
        if self.incoming_request.is_none() {
            return;
        }
        self.channel.set(KEY_HOSPITAL_DATA_APPROVED, &self.resources);
        self.incoming_request = None;
        self.channel.remove(KEY_HOSPITAL_DATA_REQUEST);
        log::info!("Hospital data request approved");
    }

    /// Folds a pending patient alert into the local log. First-seen wins:
    /// an id already present is not re-inserted or updated.
    fn check_alerts(&mut self) {
        if let Some(alert) = self.channel.get::<PatientAlert>(KEY_HOSPITAL_ALERT) {
            if !self.alerts.iter().any(|a| a.id == alert.id) {
                log::info!("Incoming patient alert: {}", alert.message);
                self.alerts.insert(0, alert);
            }
        }
    }

    fn check_requests(&mut self) {
        if let Some(request) = self.channel.get::<HospitalDataRequest>(KEY_HOSPITAL_DATA_REQUEST) {
            self.incoming_request = Some(request);
        }
    }
}

impl ChannelActor for HospitalActor {
    fn handle_key_change(&mut self, key: &str) {
        match key {
            KEY_HOSPITAL_ALERT => self.check_alerts(),
            KEY_HOSPITAL_DATA_REQUEST => self.check_requests(),
            _ => {}
        }
    }

    fn poll(&mut self) {
        self.check_alerts();
        self.check_requests();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_clears_stale_session_state() {
        let channel = Arc::new(SyncChannel::new());
        channel.set(KEY_HOSPITAL_ALERT, &PatientAlert::critical(1, "stale".to_string()));
        channel.set(KEY_HOSPITAL_DATA_REQUEST, &HospitalDataRequest::new("AMB-205"));
        channel.set(KEY_HOSPITAL_DATA_APPROVED, &ResourceSnapshot::default());

        let actor = HospitalActor::new(Arc::clone(&channel));
        assert!(actor.alerts.is_empty());
        assert!(actor.incoming_request.is_none());
        assert!(!channel.contains(KEY_HOSPITAL_ALERT));
        assert!(!channel.contains(KEY_HOSPITAL_DATA_REQUEST));
        assert!(!channel.contains(KEY_HOSPITAL_DATA_APPROVED));
    }

    #[test]
    fn resource_counters_floor_at_zero_with_no_ceiling() {
        let channel = Arc::new(SyncChannel::new());
        let mut actor = HospitalActor::new(channel);

        actor.adjust_resource(ResourceKind::Ventilators, -5);
        assert_eq!(actor.resources.ventilators, 0);
        actor.adjust_resource(ResourceKind::Ventilators, -1);
        assert_eq!(actor.resources.ventilators, 0);

        actor.adjust_resource(ResourceKind::IcuBeds, 100);
        assert_eq!(actor.resources.icu_beds, 105);
        actor.adjust_resource(ResourceKind::Doctors, 1);
        assert_eq!(actor.resources.doctors, 9);
    }

    #[test]
    fn duplicate_alert_ids_are_ignored() {
        let channel = Arc::new(SyncChannel::new());
        let mut actor = HospitalActor::new(Arc::clone(&channel));

        let first = PatientAlert::critical(42, "Cardiac Arrest - Male 61yo".to_string());
        channel.set(KEY_HOSPITAL_ALERT, &first);
        actor.handle_key_change(KEY_HOSPITAL_ALERT);
        // Same id delivered again, possibly with different content.
        let mut echo = first.clone();
        echo.message = "rewritten".to_string();
        channel.set(KEY_HOSPITAL_ALERT, &echo);
        actor.handle_key_change(KEY_HOSPITAL_ALERT);
        actor.poll();

        assert_eq!(actor.alerts.len(), 1);
        assert_eq!(actor.alerts[0].message, "Cardiac Arrest - Male 61yo");
    }

    #[test]
    fn alerts_accumulate_newest_first() {
        let channel = Arc::new(SyncChannel::new());
        let mut actor = HospitalActor::new(Arc::clone(&channel));

        channel.set(KEY_HOSPITAL_ALERT, &PatientAlert::critical(1, "first".to_string()));
        actor.poll();
        channel.set(KEY_HOSPITAL_ALERT, &PatientAlert::critical(2, "second".to_string()));
        actor.poll();

        assert_eq!(actor.alerts.len(), 2);
        assert_eq!(actor.alerts[0].id, 2);
        assert_eq!(actor.alerts[1].id, 1);
    }

    #[test]
    fn approval_publishes_snapshot_and_consumes_request() {
        let channel = Arc::new(SyncChannel::new());
        let mut actor = HospitalActor::new(Arc::clone(&channel));

        // Approving with nothing pending publishes nothing.
        actor.approve_request();
        assert!(!channel.contains(KEY_HOSPITAL_DATA_APPROVED));

        channel.set(KEY_HOSPITAL_DATA_REQUEST, &HospitalDataRequest::new("AMB-101"));
        actor.handle_key_change(KEY_HOSPITAL_DATA_REQUEST);
        assert!(actor.incoming_request.is_some());

        actor.adjust_resource(ResourceKind::IcuBeds, -2);
        actor.approve_request();
        let published: ResourceSnapshot = channel.get(KEY_HOSPITAL_DATA_APPROVED).unwrap();
        assert_eq!(published.icu_beds, 3);
        assert!(actor.incoming_request.is_none());
        assert!(!channel.contains(KEY_HOSPITAL_DATA_REQUEST));
    }

    #[test]
    fn malformed_alert_payload_is_dropped() {
        let channel = Arc::new(SyncChannel::new());
        let mut actor = HospitalActor::new(Arc::clone(&channel));
        channel.set_raw(KEY_HOSPITAL_ALERT, "{\"id\":\"not-a-number\"}".to_string());
        actor.poll();
        assert!(actor.alerts.is_empty());
    }
}
