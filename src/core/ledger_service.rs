//! Ledger services for recharges and transactions
//!
//! Both ledgers share one shape: records are created once, looked up by id or
//! by owning member, and deleted. They are never updated. `LedgerService` is
//! generic over the entry kind; [`RechargeService`] and
//! [`TransactionService`] are the two concrete services.
//!
//! Creating an entry records it and nothing else: the member's balance is
//! left untouched and the referenced member and game are not checked.

use crate::core::traits::{LedgerEntry, LedgerStore};
use crate::types::{Recharge, ServiceError, Transaction};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Create/find/delete operations over one ledger store
#[derive(Clone)]
pub struct LedgerService<E: LedgerEntry> {
    store: Arc<dyn LedgerStore<E>>,
}

/// Balance top-up ledger
pub type RechargeService = LedgerService<Recharge>;

/// Game purchase ledger
pub type TransactionService = LedgerService<Transaction>;

impl<E: LedgerEntry> LedgerService<E> {
    pub fn new(store: Arc<dyn LedgerStore<E>>) -> Self {
        LedgerService { store }
    }

    /// Record a new entry, dating it now unless the candidate carries a date
    ///
    /// # Errors
    ///
    /// Returns `BusinessRule` if the candidate carries an id.
    pub fn create(&self, candidate: E::Input) -> Result<E, ServiceError> {
        if E::candidate_id(&candidate).is_some_and(|id| !id.trim().is_empty()) {
            warn!(kind = E::KIND, "Rejected ledger create carrying a client id");
            return Err(ServiceError::business_rule(format!(
                "{} id is assigned by the server.",
                E::KIND
            )));
        }

        let entry = E::from_input(candidate, Utc::now());
        let saved = self.store.save(entry)?;
        info!(
            kind = E::KIND,
            id = %saved.id(),
            member_id = %saved.member_id(),
            "Recorded ledger entry"
        );
        Ok(saved)
    }

    /// All entries in store order
    pub fn find_all(&self) -> Vec<E> {
        self.store.find_all()
    }

    pub fn find_by_id(&self, id: &str) -> Result<E, ServiceError> {
        self.store
            .find_by_id(id)
            .ok_or_else(|| ServiceError::not_found(E::KIND, "id", id))
    }

    /// Entries owned by `member_id`, including those of deleted members
    pub fn find_by_member_id(&self, member_id: &str) -> Vec<E> {
        self.store.find_by_member_id(member_id)
    }

    pub fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.delete_by_id(id) {
            return Err(ServiceError::not_found(E::KIND, "id", id));
        }
        info!(kind = E::KIND, id = %id, "Deleted ledger entry");
        Ok(())
    }
}
