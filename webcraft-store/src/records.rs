/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! Keyed record collections on top of a [`StorageBackend`].
//!
//! Each collection is one JSON object (key -> record) under one storage
//! key. Every call reads the whole object and, for writes, rewrites it;
//! there are no multi-key transactions.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use webcraft_core::config::StorageConfig;

use crate::backend::StorageBackend;
use crate::{Result, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Projects,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Users => f.write_str("users"),
            Collection::Projects => f.write_str("projects"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    config: StorageConfig,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn new(backend: B, config: StorageConfig) -> Self {
        Self { backend, config }
    }

    /// Seeds empty collections where none exist yet.
    pub fn init(&self) -> Result<()> {
        for collection in [Collection::Users, Collection::Projects] {
            let key = self.key(collection);
            if self.backend.read(&key)?.is_none() {
                self.backend.write(&key, "{}")?;
            }
        }
        Ok(())
    }

    fn key(&self, collection: Collection) -> String {
        match collection {
            Collection::Users => self.config.users_key(),
            Collection::Projects => self.config.projects_key(),
        }
    }

    fn load(&self, collection: Collection) -> Result<Map<String, Value>> {
        match self.backend.read(&self.key(collection))? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Map::new()),
        }
    }

    fn store(&self, collection: Collection, records: &Map<String, Value>) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.write(&self.key(collection), &raw)
    }

    pub fn get<T: DeserializeOwned>(&self, collection: Collection, key: &str) -> Result<Option<T>> {
        match self.load(collection)?.remove(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub fn contains(&self, collection: Collection, key: &str) -> Result<bool> {
        Ok(self.load(collection)?.contains_key(key))
    }

    pub fn put<T: Serialize>(&self, collection: Collection, key: &str, record: &T) -> Result<()> {
        let mut records = self.load(collection)?;
        records.insert(key.to_string(), serde_json::to_value(record)?);
        self.store(collection, &records)?;
        tracing::debug!(%collection, key, "record written");
        Ok(())
    }

    /// Removes a record; returns whether it existed.
    pub fn delete(&self, collection: Collection, key: &str) -> Result<bool> {
        let mut records = self.load(collection)?;
        if records.remove(key).is_none() {
            return Ok(false);
        }
        self.store(collection, &records)?;
        tracing::debug!(%collection, key, "record deleted");
        Ok(true)
    }

    pub fn list_all<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        self.load(collection)?
            .into_iter()
            .map(|(_, value)| serde_json::from_value(value).map_err(StoreError::from))
            .collect()
    }

    /// Records whose string `field` equals `value`. Other records are never
    /// deserialized, so a malformed one does not affect the result.
    pub fn list_where<T: DeserializeOwned>(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Vec<T>> {
        self.load(collection)?
            .into_iter()
            .filter(|(_, record)| record.get(field).and_then(Value::as_str) == Some(value))
            .map(|(_, record)| serde_json::from_value(record).map_err(StoreError::from))
            .collect()
    }

    pub fn session_user(&self) -> Result<Option<String>> {
        Ok(self
            .backend
            .read(&self.config.session_key())?
            .filter(|name| !name.is_empty()))
    }

    pub fn set_session_user(&self, username: &str) -> Result<()> {
        self.backend.write(&self.config.session_key(), username)
    }

    pub fn clear_session_user(&self) -> Result<()> {
        self.backend.remove(&self.config.session_key())
    }

    /// Drops every collection and the session pointer, then re-seeds.
    pub fn clear_all(&self) -> Result<()> {
        tracing::warn!("clearing all stored records");
        self.backend.remove(&self.key(Collection::Users))?;
        self.backend.remove(&self.key(Collection::Projects))?;
        self.clear_session_user()?;
        self.init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Note {
        body: String,
    }

    fn store() -> (MemoryBackend, RecordStore<MemoryBackend>) {
        let backend = MemoryBackend::new();
        let store = RecordStore::new(backend.clone(), StorageConfig::default());
        (backend, store)
    }

    fn note(body: &str) -> Note {
        Note { body: body.to_string() }
    }

    #[test]
    fn init_seeds_empty_collections_once() {
        let (backend, store) = store();
        store.init().unwrap();
        assert_eq!(backend.read("webcraft_users").unwrap().as_deref(), Some("{}"));

        store.put(Collection::Users, "a", &note("x")).unwrap();
        store.init().unwrap();
        assert!(store.contains(Collection::Users, "a").unwrap());
    }

    #[test]
    fn get_put_delete() {
        let (_, store) = store();

        assert_eq!(store.get::<Note>(Collection::Projects, "p").unwrap(), None);
        store.put(Collection::Projects, "p", &note("first")).unwrap();
        store.put(Collection::Projects, "p", &note("second")).unwrap();
        assert_eq!(store.get(Collection::Projects, "p").unwrap(), Some(note("second")));

        assert!(store.delete(Collection::Projects, "p").unwrap());
        assert!(!store.delete(Collection::Projects, "p").unwrap());
    }

    #[test]
    fn collections_are_separate() {
        let (_, store) = store();
        store.put(Collection::Users, "k", &note("user")).unwrap();

        assert!(store.get::<Note>(Collection::Projects, "k").unwrap().is_none());
        assert_eq!(store.list_all::<Note>(Collection::Users).unwrap(), vec![note("user")]);
    }

    #[test]
    fn session_pointer() {
        let (backend, store) = store();
        assert_eq!(store.session_user().unwrap(), None);

        store.set_session_user("ana").unwrap();
        assert_eq!(backend.read("webcraft_current_user").unwrap().as_deref(), Some("ana"));
        assert_eq!(store.session_user().unwrap().as_deref(), Some("ana"));

        store.clear_session_user().unwrap();
        assert_eq!(store.session_user().unwrap(), None);
    }

    #[test]
    fn corrupt_collections_are_reported() {
        let (backend, store) = store();
        backend.write("webcraft_projects", "not json").unwrap();

        assert!(store.list_all::<Note>(Collection::Projects).is_err());
    }

    #[test]
    fn filtered_listing_skips_unrelated_records() {
        let (backend, store) = store();
        backend
            .write(
                "webcraft_projects",
                r#"{"a":{"owner":"ana","body":"mine"},"b":{"owner":"bo","body":7}}"#,
            )
            .unwrap();

        #[derive(Debug, Deserialize, PartialEq)]
        struct Owned {
            owner: String,
            body: String,
        }

        let mine: Vec<Owned> = store.list_where(Collection::Projects, "owner", "ana").unwrap();
        assert_eq!(mine, vec![Owned { owner: "ana".to_string(), body: "mine".to_string() }]);
        assert!(store.list_where::<Owned>(Collection::Projects, "owner", "bo").is_err());
        assert!(store.list_where::<Owned>(Collection::Projects, "owner", "cy").unwrap().is_empty());
    }

    #[test]
    fn clear_all_reseeds() {
        let (backend, store) = store();
        store.put(Collection::Users, "a", &note("x")).unwrap();
        store.set_session_user("a").unwrap();

        store.clear_all().unwrap();
        assert!(store.list_all::<Note>(Collection::Users).unwrap().is_empty());
        assert_eq!(store.session_user().unwrap(), None);
        assert_eq!(backend.read("webcraft_projects").unwrap().as_deref(), Some("{}"));
    }
}
