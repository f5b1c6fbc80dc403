// src/actors/traffic_control.rs

use crate::actors::runner::ChannelActor;
use crate::global_variables::{KEY_TRAFFIC_ALERT, KEY_TRAFFIC_SIGNALS};
use crate::shared_data::{default_signals, GreenCorridorAlert, SignalRecord};
use crate::sync_channel::SyncChannel;
use std::sync::Arc;

/// Status of an ambulance unit on the control-center roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitStatus {
    Critical,
    Idle,
}

/// A tracked ambulance unit shown on the control-center map.
#[derive(Debug, Clone)]
pub struct AmbulanceUnit {
    pub id: String,
    pub name: String,
    pub status: UnitStatus,
    pub lat: f64,
    pub lng: f64,
}

fn default_units() -> Vec<AmbulanceUnit> {
    vec![
        AmbulanceUnit {
            id: "1".to_string(),
            name: "AMB-101".to_string(),
            status: UnitStatus::Critical,
            lat: 28.6139,
            lng: 77.2090,
        },
        AmbulanceUnit {
            id: "2".to_string(),
            name: "AMB-205".to_string(),
            status: UnitStatus::Idle,
            lat: 28.6200,
            lng: 77.2100,
        },
    ]
}

/// The traffic-control center. Sole writer of the signal snapshot; reader
/// and clearer of green-corridor alerts.
pub struct TrafficControlActor {
    channel: Arc<SyncChannel>,
    pub signals: Vec<SignalRecord>,
    pub active_alert: Option<GreenCorridorAlert>,
    pub units: Vec<AmbulanceUnit>,
}

impl TrafficControlActor {
    /// Loads the signal snapshot from the channel, seeding the default
    /// roster (and publishing it) when none is stored yet.
    pub fn new(channel: Arc<SyncChannel>) -> Self {
        let signals = match channel.get::<Vec<SignalRecord>>(KEY_TRAFFIC_SIGNALS) {
            Some(saved) => saved,
            None => {
                let seed = default_signals();
                channel.set(KEY_TRAFFIC_SIGNALS, &seed);
                seed
            }
        };

        let mut actor = Self {
            channel,
            signals,
            active_alert: None,
            units: default_units(),
        };
        actor.check_alert();
        actor
    }

    /// Flips the matching signal RED<->GREEN and republishes the whole
    /// snapshot. Local state is updated here directly; the broadcast exists
    /// for the other actors. Unknown ids are ignored.
    pub fn toggle_signal(&mut self, id: &str) {
        let mut changed = false;
        for signal in &mut self.signals {
            if signal.id == id {
                signal.state = signal.state.flipped();
                changed = true;
                log::info!("Signal '{}' switched to {:?}", signal.name, signal.state);
            }
        }
        if changed {
            self.channel.set(KEY_TRAFFIC_SIGNALS, &self.signals);
        }
    }

    /// Surfaces a pending green-corridor alert. The alert stays visible
    /// until acknowledged, even if the key is read again meanwhile.
    fn check_alert(&mut self) {
        if let Some(alert) = self.channel.get::<GreenCorridorAlert>(KEY_TRAFFIC_ALERT) {
            if self.active_alert.as_ref() != Some(&alert) {
                log::info!(
                    "Green corridor requested by {} at {}",
                    alert.ambulance_id,
                    alert.location
                );
            }
            self.active_alert = Some(alert);
        }
    }

    /// Marks the alert handled: drops the local copy and consumes the key.
    pub fn acknowledge_alert(&mut self) {
        self.active_alert = None;
        self.channel.remove(KEY_TRAFFIC_ALERT);
    }

    fn check_signals(&mut self) {
        // Re-applying our own snapshot is harmless; a malformed stored
        // payload leaves the local list untouched.
        if let Some(signals) = self.channel.get::<Vec<SignalRecord>>(KEY_TRAFFIC_SIGNALS) {
            self.signals = signals;
        }
    }
}

impl ChannelActor for TrafficControlActor {
    fn handle_key_change(&mut self, key: &str) {
        match key {
            KEY_TRAFFIC_ALERT => self.check_alert(),
            KEY_TRAFFIC_SIGNALS => self.check_signals(),
            _ => {}
        }
    }

    fn poll(&mut self) {
        self.check_alert();
    }
}
