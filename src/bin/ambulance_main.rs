use rapidresq::actors::ambulance::AmbulanceActor;
use rapidresq::actors::runner::spawn_actor_loop;
use rapidresq::global_variables::AMBULANCE_UNIT_ID;
use rapidresq::sync_channel::SyncChannel;
use rapidresq::traffic_model::mock_routes::mock_routes;
use std::sync::{Arc, Mutex};

fn main() {
    env_logger::init();
    println!("Starting ambulance command console...");
    let channel = Arc::new(SyncChannel::new());
    let notifications = channel.subscribe();
    let ambulance = Arc::new(Mutex::new(AmbulanceActor::new(
        channel,
        AMBULANCE_UNIT_ID,
        mock_routes(),
    )));

    {
        let mut amb = ambulance.lock().unwrap();
        amb.start_emergency();
        if let Some(route) = &amb.best_route {
            println!(
                "Recommended route: {} ({} km, score {:.1})",
                route.route.name, route.route.distance_km, route.final_score
            );
        }
    }

    let handle = spawn_actor_loop(ambulance, notifications);
    handle.join().ok();
}
