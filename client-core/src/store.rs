//! In-memory client store with auto-increment id allocation.
//!
//! # Design
//! The store owns both the collection and the id counter; keeping them in
//! one struct means one lock in the HTTP layer guards both, so an allocated
//! id is atomically visible in the map. Ids are allocated post-increment and
//! never reused, even after a delete. Because ids only grow, the id-keyed
//! `BTreeMap` iterates in insertion order, which is what `list` returns.
//!
//! Storage is volatile: ids restart at 1 on every process start.

use std::collections::BTreeMap;

use crate::error::NotFound;
use crate::types::{Client, ValidatedInput};

/// Authoritative in-memory collection of clients plus the id counter.
#[derive(Debug)]
pub struct ClientStore {
    clients: BTreeMap<u64, Client>,
    next_id: u64,
}

impl Default for ClientStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStore {
    pub fn new() -> Self {
        Self {
            clients: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// All clients in insertion order. Empty vec on an empty store.
    pub fn list(&self) -> Vec<Client> {
        self.clients.values().cloned().collect()
    }

    /// Insert a new client under the next id and return a copy of it.
    pub fn create(&mut self, input: ValidatedInput) -> Client {
        let id = self.next_id;
        self.next_id += 1;

        let input = input.into_input();
        let client = Client {
            id,
            name: input.name,
            phone: input.phone,
            email: input.email,
        };
        self.clients.insert(id, client.clone());
        client
    }

    /// Look up a client by id.
    pub fn get(&self, id: u64) -> Result<Client, NotFound> {
        self.clients.get(&id).cloned().ok_or(NotFound)
    }

    /// Replace every field of an existing client, preserving its id.
    ///
    /// Never creates: an absent id is `NotFound`, not an upsert.
    pub fn update(&mut self, id: u64, input: ValidatedInput) -> Result<Client, NotFound> {
        if !self.clients.contains_key(&id) {
            return Err(NotFound);
        }
        let input = input.into_input();
        let client = Client {
            id,
            name: input.name,
            phone: input.phone,
            email: input.email,
        };
        self.clients.insert(id, client.clone());
        Ok(client)
    }

    /// Remove a client by id. The id is never handed out again.
    pub fn delete(&mut self, id: u64) -> Result<(), NotFound> {
        self.clients.remove(&id).map(|_| ()).ok_or(NotFound)
    }
}
