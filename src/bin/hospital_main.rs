use rapidresq::actors::hospital::HospitalActor;
use rapidresq::actors::runner::spawn_actor_loop;
use rapidresq::sync_channel::SyncChannel;
use std::sync::{Arc, Mutex};

fn main() {
    env_logger::init();
    println!("Starting hospital resource gateway...");
    let channel = Arc::new(SyncChannel::new());
    let notifications = channel.subscribe();
    let hospital = Arc::new(Mutex::new(HospitalActor::new(channel)));
    let handle = spawn_actor_loop(hospital, notifications);
    handle.join().ok();
}
