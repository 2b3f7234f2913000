//! Account storage with two unique secondary indexes
//!
//! `UniqueTable` wraps an [`EntityTable`] with one index per unique attribute
//! (value → id). Members are indexed by phone number and email, administrators
//! by username and email. Reads never block on each other; every write that
//! touches the indexes runs under a single write lock so the uniqueness check
//! and the write happen atomically. Two concurrent creates with the same phone
//! number therefore cannot both succeed, even when both passed the
//! service-level pre-check, and an update cannot bring back a record that a
//! concurrent delete removed.

use crate::core::entity_table::{generate_id, EntityTable};
use crate::core::traits::{AdminStore, MemberStore, Repository, UniquelyKeyed};
use crate::types::{Admin, Member, StoreError, UniqueField};
use dashmap::DashMap;
use parking_lot::Mutex;

/// Thread-safe account table
#[derive(Debug)]
pub struct UniqueTable<T> {
    rows: EntityTable<T>,
    indexes: [DashMap<String, String>; 2],
    write_lock: Mutex<()>,
}

pub type MemberTable = UniqueTable<Member>;
pub type AdminTable = UniqueTable<Admin>;

impl UniquelyKeyed for Member {
    fn unique_keys(&self) -> [(UniqueField, &str); 2] {
        [
            (UniqueField::PhoneNumber, &self.phone_number),
            (UniqueField::Email, &self.email),
        ]
    }
}

impl UniquelyKeyed for Admin {
    fn unique_keys(&self) -> [(UniqueField, &str); 2] {
        [
            (UniqueField::Username, &self.username),
            (UniqueField::Email, &self.email),
        ]
    }
}

impl<T: UniquelyKeyed> UniqueTable<T> {
    pub fn new() -> Self {
        Self {
            rows: EntityTable::new(),
            indexes: [DashMap::new(), DashMap::new()],
            write_lock: Mutex::new(()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fails when `value` is indexed to a record other than `id`
    fn check_unique(
        index: &DashMap<String, String>,
        field: UniqueField,
        value: &str,
        id: &str,
    ) -> Result<(), StoreError> {
        match index.get(value) {
            Some(holder) if holder.value() != id => {
                Err(StoreError::unique_violation(field, value, holder.value()))
            }
            _ => Ok(()),
        }
    }

    /// Record whose `slot`-th unique attribute equals `value`
    fn lookup(&self, slot: usize, value: &str) -> Option<T> {
        let id = self.indexes[slot]
            .get(value)
            .map(|holder| holder.value().clone())?;
        self.rows.get(&id)
    }
}

impl<T: UniquelyKeyed> Default for UniqueTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: UniquelyKeyed> Repository<T> for UniqueTable<T> {
    fn save(&self, mut entity: T) -> Result<T, StoreError> {
        let _guard = self.write_lock.lock();

        let previous = if entity.id().is_empty() {
            entity.assign_id(generate_id());
            None
        } else {
            let stored = self
                .rows
                .get(entity.id())
                .ok_or_else(|| StoreError::missing(T::KIND, entity.id()))?;
            Some(stored)
        };

        let keys = entity.unique_keys();
        for (index, (field, value)) in self.indexes.iter().zip(keys) {
            Self::check_unique(index, field, value, entity.id())?;
        }

        // Release index keys the previous version held
        if let Some(previous) = &previous {
            for (index, ((_, old), (_, new))) in self
                .indexes
                .iter()
                .zip(previous.unique_keys().into_iter().zip(keys))
            {
                if old != new {
                    index.remove(old);
                }
            }
        }

        for (index, (_, value)) in self.indexes.iter().zip(keys) {
            index.insert(value.to_string(), entity.id().to_string());
        }

        Ok(self.rows.save(entity))
    }

    fn find_by_id(&self, id: &str) -> Option<T> {
        self.rows.get(id)
    }

    fn find_all(&self) -> Vec<T> {
        self.rows.filter(|_| true)
    }

    fn exists_by_id(&self, id: &str) -> bool {
        self.rows.contains(id)
    }

    fn delete_by_id(&self, id: &str) -> bool {
        let _guard = self.write_lock.lock();

        match self.rows.remove(id) {
            Some(removed) => {
                for (index, (_, value)) in self.indexes.iter().zip(removed.unique_keys()) {
                    index.remove_if(value, |_, holder| holder == id);
                }
                true
            }
            None => false,
        }
    }
}

impl MemberStore for MemberTable {
    fn find_by_phone_number(&self, phone_number: &str) -> Option<Member> {
        self.lookup(0, phone_number)
    }

    fn find_by_email(&self, email: &str) -> Option<Member> {
        self.lookup(1, email)
    }
}

impl AdminStore for AdminTable {
    fn find_by_username(&self, username: &str) -> Option<Admin> {
        self.lookup(0, username)
    }

    fn find_by_email(&self, email: &str) -> Option<Admin> {
        self.lookup(1, email)
    }
}
