//! Thread-safe keyed table backing the in-memory entity store
//!
//! `EntityTable` stores one entity kind in a `DashMap`, which provides
//! fine-grained locking through internal sharding: reads and writes to
//! different keys proceed in parallel while writes to the same key are
//! serialized.
//!
//! Each row carries an insertion sequence number so that `find_all` and the
//! secondary lookups return records in store order even though the map
//! itself iterates in arbitrary order.

use crate::core::traits::{Entity, GameStore, LedgerEntry, LedgerStore, Repository};
use crate::types::{Game, StoreError};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Generate a fresh store key
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone)]
struct Row<T> {
    seq: u64,
    entity: T,
}

/// Concurrent table of entities keyed by id
#[derive(Debug)]
pub struct EntityTable<T> {
    rows: DashMap<String, Row<T>>,
    next_seq: AtomicU64,
}

impl<T: Entity> EntityTable<T> {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Insert or replace an entity
    ///
    /// Assigns a generated id when the entity has none and stamps write
    /// timestamps. A replaced row keeps its original position in store order.
    pub fn save(&self, mut entity: T) -> T {
        if entity.id().is_empty() {
            entity.assign_id(generate_id());
        }
        let now = Utc::now();

        match self.rows.entry(entity.id().to_string()) {
            Entry::Occupied(mut slot) => {
                entity.stamp(now, false);
                slot.get_mut().entity = entity.clone();
            }
            Entry::Vacant(slot) => {
                entity.stamp(now, true);
                slot.insert(Row {
                    seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
                    entity: entity.clone(),
                });
            }
        }

        entity
    }

    /// Replace a stored entity, keeping its position in store order
    ///
    /// Returns `None` without writing when the id is not stored.
    pub fn replace(&self, mut entity: T) -> Option<T> {
        let mut row = self.rows.get_mut(entity.id())?;
        entity.stamp(Utc::now(), false);
        row.entity = entity.clone();
        Some(entity)
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).map(|row| row.entity.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    pub fn remove(&self, id: &str) -> Option<T> {
        self.rows.remove(id).map(|(_, row)| row.entity)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entities matching `predicate`, in store order
    pub fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let mut rows: Vec<(u64, T)> = self
            .rows
            .iter()
            .filter(|row| predicate(&row.entity))
            .map(|row| (row.seq, row.entity.clone()))
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, entity)| entity).collect()
    }
}

impl<T: Entity> Default for EntityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for EntityTable<T> {
    fn save(&self, entity: T) -> Result<T, StoreError> {
        if entity.id().is_empty() {
            return Ok(EntityTable::save(self, entity));
        }
        let id = entity.id().to_string();
        self.replace(entity)
            .ok_or_else(|| StoreError::missing(T::KIND, &id))
    }

    fn find_by_id(&self, id: &str) -> Option<T> {
        self.get(id)
    }

    fn find_all(&self) -> Vec<T> {
        self.filter(|_| true)
    }

    fn exists_by_id(&self, id: &str) -> bool {
        self.contains(id)
    }

    fn delete_by_id(&self, id: &str) -> bool {
        self.remove(id).is_some()
    }
}

impl GameStore for EntityTable<Game> {
    fn find_by_status(&self, status: &str) -> Vec<Game> {
        self.filter(|game| game.status.as_str() == status)
    }

    fn find_many(&self, ids: &[&str]) -> Vec<Game> {
        let mut games: Vec<(u64, Game)> = ids
            .iter()
            .filter_map(|id| self.rows.get(*id).map(|row| (row.seq, row.entity.clone())))
            .collect();
        games.sort_by_key(|(seq, _)| *seq);
        games.dedup_by(|a, b| a.0 == b.0);
        games.into_iter().map(|(_, game)| game).collect()
    }
}

impl<T: LedgerEntry> LedgerStore<T> for EntityTable<T> {
    fn find_by_member_id(&self, member_id: &str) -> Vec<T> {
        self.filter(|entry| entry.member_id() == member_id)
    }
}
