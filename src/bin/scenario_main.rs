// Runs all three actors on one shared channel and drives a scripted
// emergency end to end: route selection, green corridor, hospital data
// handshake, patient alert.

use rand::Rng;
use rapidresq::actors::ambulance::{AmbulanceActor, Gender};
use rapidresq::actors::hospital::{HospitalActor, ResourceKind};
use rapidresq::actors::runner::spawn_actor_loop;
use rapidresq::actors::traffic_control::TrafficControlActor;
use rapidresq::global_variables::AMBULANCE_UNIT_ID;
use rapidresq::sync_channel::SyncChannel;
use rapidresq::traffic_model::mock_routes::mock_routes;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

fn pause(rng: &mut impl Rng) {
    thread::sleep(Duration::from_millis(rng.random_range(200..600)));
}

fn main() {
    env_logger::init();
    let mut rng = rand::rng();
    let channel = Arc::new(SyncChannel::new());

    // Hospital comes up first so stale session keys are gone before anyone
    // else reads the channel.
    let hospital_rx = channel.subscribe();
    let hospital = Arc::new(Mutex::new(HospitalActor::new(Arc::clone(&channel))));
    let control_rx = channel.subscribe();
    let control = Arc::new(Mutex::new(TrafficControlActor::new(Arc::clone(&channel))));
    let ambulance_rx = channel.subscribe();
    let ambulance = Arc::new(Mutex::new(AmbulanceActor::new(
        Arc::clone(&channel),
        AMBULANCE_UNIT_ID,
        mock_routes(),
    )));

    spawn_actor_loop(Arc::clone(&hospital), hospital_rx);
    spawn_actor_loop(Arc::clone(&control), control_rx);
    spawn_actor_loop(Arc::clone(&ambulance), ambulance_rx);

    println!("=== Emergency dispatch ===");
    {
        let mut amb = ambulance.lock().unwrap();
        amb.start_emergency();
        if let Some(route) = &amb.best_route {
            println!(
                "Recommended route: {} ({} km, {} signals, score {:.1})",
                route.route.name,
                route.route.distance_km,
                route.route.signal_count,
                route.final_score
            );
        }
        amb.request_green_corridor();
    }
    pause(&mut rng);

    println!("=== Traffic control ===");
    {
        let mut ctl = control.lock().unwrap();
        if let Some(alert) = ctl.active_alert.clone() {
            println!(
                "Corridor request from {} at {}",
                alert.ambulance_id, alert.location
            );
            ctl.toggle_signal("sig-2");
            ctl.toggle_signal("sig-3");
            ctl.acknowledge_alert();
            println!("Corridor cleared and alert acknowledged");
        }
    }
    pause(&mut rng);

    println!("=== Hospital handshake ===");
    ambulance.lock().unwrap().request_hospital_data();
    pause(&mut rng);
    {
        let mut hosp = hospital.lock().unwrap();
        hosp.adjust_resource(ResourceKind::IcuBeds, -1);
        hosp.approve_request();
    }
    pause(&mut rng);
    if let Some(resources) = ambulance.lock().unwrap().hospital_resources {
        println!(
            "Hospital capacity: {} ICU beds, {} ventilators, {} doctors",
            resources.icu_beds, resources.ventilators, resources.doctors
        );
    }

    println!("=== Patient alert ===");
    {
        let mut amb = ambulance.lock().unwrap();
        let id = amb.add_patient("Cardiac Arrest", 61, Gender::Male, "unresponsive");
        amb.send_patient_alert(id);
    }
    pause(&mut rng);
    for alert in &hospital.lock().unwrap().alerts {
        println!("Hospital received: {} (ETA {})", alert.message, alert.eta);
    }

    let live = ambulance.lock().unwrap().live_signals.clone();
    println!("=== Final signal states ===");
    for signal in &live {
        println!("  {} [{:?}]", signal.name, signal.state);
    }
}
