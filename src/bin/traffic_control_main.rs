use rapidresq::actors::runner::spawn_actor_loop;
use rapidresq::actors::traffic_control::TrafficControlActor;
use rapidresq::sync_channel::SyncChannel;
use std::sync::{Arc, Mutex};

fn main() {
    env_logger::init();
    println!("Starting traffic control center...");
    let channel = Arc::new(SyncChannel::new());
    let notifications = channel.subscribe();
    let control = Arc::new(Mutex::new(TrafficControlActor::new(channel)));
    for signal in &control.lock().unwrap().signals {
        println!("  {} [{:?}]", signal.name, signal.state);
    }
    let handle = spawn_actor_loop(control, notifications);
    handle.join().ok();
}
