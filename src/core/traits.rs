//! Core traits for entity storage
//!
//! This module defines the store contract every service is written against.
//! The in-memory implementations live in `entity_table` and `unique_table`;
//! a durable backend only needs to implement these traits.

use crate::types::{Admin, Game, Member, StoreError, UniqueField};
use chrono::{DateTime, Utc};

/// A record owned by the entity store
pub trait Entity: Clone + Send + Sync + 'static {
    /// Entity kind used in NotFound messages ("Member", "Game", ...)
    const KIND: &'static str;

    /// The store-assigned key; empty until the first save
    fn id(&self) -> &str;

    /// Install a freshly generated key
    fn assign_id(&mut self, id: String);

    /// Record write timestamps; `created` is true on the first save
    fn stamp(&mut self, _now: DateTime<Utc>, _created: bool) {}
}

/// An immutable ledger record that belongs to one member
pub trait LedgerEntry: Entity {
    /// Candidate accepted by the create path
    type Input: Send + 'static;

    /// The owning member's id (not referentially enforced)
    fn member_id(&self) -> &str;

    /// Id carried by a candidate; ids are server-assigned so this must be absent
    fn candidate_id(input: &Self::Input) -> Option<&str>;

    /// Build an unsaved record, defaulting the date to `now`
    fn from_input(input: Self::Input, now: DateTime<Utc>) -> Self;
}

/// Keyed storage for one entity kind
///
/// Implementations are shared across concurrent requests, so every method
/// takes `&self`. Writes to the same key are serialized (last writer wins).
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert a record without an id (assigning one), or replace the stored
    /// record with the same id
    ///
    /// Replacing an id that is no longer stored fails with
    /// `StoreError::Missing` rather than bringing the record back.
    fn save(&self, entity: T) -> Result<T, StoreError>;

    /// Look up a record by key
    fn find_by_id(&self, id: &str) -> Option<T>;

    /// All records in store (insertion) order
    fn find_all(&self) -> Vec<T>;

    /// Whether a record with this key exists
    fn exists_by_id(&self, id: &str) -> bool;

    /// Remove a record, returning whether it existed
    fn delete_by_id(&self, id: &str) -> bool;
}

/// An account whose two identifying attributes are each unique in its store
pub trait UniquelyKeyed: Entity {
    /// The indexed attributes with their current values, in a fixed order
    fn unique_keys(&self) -> [(UniqueField, &str); 2];
}

/// Member storage with unique phone number and email indexes
///
/// `save` must reject a record whose phone number or email is held by a
/// different member, atomically with the write.
pub trait MemberStore: Repository<Member> {
    fn find_by_phone_number(&self, phone_number: &str) -> Option<Member>;

    fn find_by_email(&self, email: &str) -> Option<Member>;
}

/// Administrator storage with unique username and email indexes
pub trait AdminStore: Repository<Admin> {
    fn find_by_username(&self, username: &str) -> Option<Admin>;

    fn find_by_email(&self, email: &str) -> Option<Admin>;
}

/// Game catalog storage
pub trait GameStore: Repository<Game> {
    /// Games whose status label equals `status` exactly (case-sensitive)
    fn find_by_status(&self, status: &str) -> Vec<Game>;

    /// Games for a batch of keys; unknown keys are skipped
    fn find_many(&self, ids: &[&str]) -> Vec<Game>;
}

/// Storage for ledger entries indexed by owning member
pub trait LedgerStore<T: LedgerEntry>: Repository<T> {
    fn find_by_member_id(&self, member_id: &str) -> Vec<T>;
}
