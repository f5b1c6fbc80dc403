// src/sync_channel.rs
//
// The shared key/value medium connecting the three actors. Values are stored
// JSON-encoded; every `set` fans the changed key out to all subscribers.
// `remove` is silent housekeeping: consuming a message is not a new event.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct SyncChannel {
    store: Mutex<HashMap<String, String>>,
    subscribers: Mutex<Vec<Sender<String>>>,
}

impl SyncChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes or overwrites `key`, then notifies every subscriber. Last write
    /// wins; there is no merging.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.set_raw(key, json),
            Err(e) => log::warn!("Refusing to publish unencodable value under '{}': {}", key, e),
        }
    }

    /// Stores a pre-encoded payload and broadcasts the changed key.
    pub fn set_raw(&self, key: &str, json: String) {
        self.store.lock().unwrap().insert(key.to_string(), json);
        // Prune subscribers whose receiving end has been dropped.
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(key.to_string()).is_ok());
    }

    /// Point-in-time read. An absent key and a stored payload that fails to
    /// decode both come back as `None`; malformed payloads are logged and
    /// dropped rather than surfaced to the caller.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.lock().unwrap().get(key).cloned()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Dropping malformed payload under '{}': {}", key, e);
                None
            }
        }
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.store.lock().unwrap().get(key).cloned()
    }

    /// Deletes `key` without broadcasting. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) {
        self.store.lock().unwrap().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.store.lock().unwrap().contains_key(key)
    }

    /// Registers a change listener. The receiver yields the key of every
    /// subsequent `set`, including the subscriber's own writes, so consumers
    /// must re-apply state idempotently.
    pub fn subscribe(&self) -> Receiver<String> {
        let (tx, rx) = unbounded();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}
