pub mod actors;
pub mod global_variables;
pub mod shared_data;
pub mod sync_channel;
pub mod traffic_model;
