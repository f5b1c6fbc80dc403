// Channel keys shared by all actors.
pub const KEY_TRAFFIC_SIGNALS: &str = "traffic_signals";
pub const KEY_TRAFFIC_ALERT: &str = "traffic_alert";
pub const KEY_HOSPITAL_ALERT: &str = "hospital_alert";
pub const KEY_HOSPITAL_DATA_REQUEST: &str = "hospital_data_request";
pub const KEY_HOSPITAL_DATA_APPROVED: &str = "hospital_data_approved";

// Fallback poll interval for keys that may miss a push notification.
pub const POLL_INTERVAL_MS: u64 = 1000;

pub const AMBULANCE_UNIT_ID: &str = "AMB-101";
pub const CORRIDOR_LOCATION: &str = "Sector 42 Intersection";
pub const PATIENT_ALERT_ETA: &str = "12 min";

// Message type tags carried on the wire.
pub const GREEN_CORRIDOR_REQUEST: &str = "GREEN_CORRIDOR_REQUEST";
pub const PATIENT_ALERT_CRITICAL: &str = "CRITICAL";
