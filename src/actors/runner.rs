// src/actors/runner.rs

use crate::global_variables::POLL_INTERVAL_MS;
use crossbeam_channel::{select, tick, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// An actor driven by the shared channel: push notifications carry the
/// changed key, the poll tick re-reads whatever the actor watches. Both
/// paths may deliver the same change, so handlers must be idempotent.
pub trait ChannelActor: Send {
    fn handle_key_change(&mut self, key: &str);
    fn poll(&mut self);
}

/// Spawns the event loop for one actor: channel notifications and a fixed
/// 1000 ms poll tick, interleaved on a dedicated thread. The loop ends when
/// the channel is dropped.
pub fn spawn_actor_loop<A: ChannelActor + 'static>(
    actor: Arc<Mutex<A>>,
    notifications: Receiver<String>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let ticker = tick(Duration::from_millis(POLL_INTERVAL_MS));
        loop {
            select! {
                recv(notifications) -> msg => match msg {
                    Ok(key) => actor.lock().unwrap().handle_key_change(&key),
                    Err(_) => break,
                },
                recv(ticker) -> _ => actor.lock().unwrap().poll(),
            }
        }
    })
}
