pub mod ambulance;
pub mod hospital;
pub mod runner;
pub mod traffic_control;
