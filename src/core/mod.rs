//! Core business logic module
//!
//! This module contains the member account components:
//! - `traits` - Store contract every service is written against
//! - `entity_table` - Concurrent in-memory table for one entity kind
//! - `unique_table` - Member and admin tables with unique secondary indexes
//! - `validation` - Field and uniqueness checks for members and games
//! - `account_service` - Member lifecycle
//! - `admin_service` - Administrator accounts
//! - `profile` - Member profile aggregation
//! - `catalog_service` - Game catalog
//! - `ledger_service` - Recharge and transaction ledgers

pub mod account_service;
pub mod admin_service;
pub mod catalog_service;
pub mod entity_table;
pub mod ledger_service;
pub mod profile;
pub mod traits;
pub mod unique_table;
pub mod validation;

pub use account_service::MemberAccountService;
pub use admin_service::AdminService;
pub use catalog_service::GameService;
pub use entity_table::EntityTable;
pub use ledger_service::{LedgerService, RechargeService, TransactionService};
pub use profile::ProfileAggregator;
pub use traits::{
    AdminStore, Entity, GameStore, LedgerEntry, LedgerStore, MemberStore, Repository,
    UniquelyKeyed,
};
pub use unique_table::{AdminTable, MemberTable, UniqueTable};

use crate::types::{Game, Recharge, Transaction};
use std::sync::Arc;

/// Shared handles to the entity stores
#[derive(Clone)]
pub struct Stores {
    pub admins: Arc<dyn AdminStore>,
    pub members: Arc<dyn MemberStore>,
    pub games: Arc<dyn GameStore>,
    pub recharges: Arc<dyn LedgerStore<Recharge>>,
    pub transactions: Arc<dyn LedgerStore<Transaction>>,
}

impl Stores {
    /// Fresh, empty in-memory stores
    pub fn in_memory() -> Self {
        Stores {
            admins: Arc::new(AdminTable::new()),
            members: Arc::new(MemberTable::new()),
            games: Arc::new(EntityTable::<Game>::new()),
            recharges: Arc::new(EntityTable::<Recharge>::new()),
            transactions: Arc::new(EntityTable::<Transaction>::new()),
        }
    }
}

/// Every service, wired to one set of stores
#[derive(Clone)]
pub struct Services {
    pub admins: AdminService,
    pub members: MemberAccountService,
    pub profiles: ProfileAggregator,
    pub games: GameService,
    pub recharges: RechargeService,
    pub transactions: TransactionService,
}

impl Services {
    pub fn new(stores: &Stores) -> Self {
        Services {
            admins: AdminService::new(Arc::clone(&stores.admins)),
            members: MemberAccountService::new(Arc::clone(&stores.members)),
            profiles: ProfileAggregator::new(
                Arc::clone(&stores.members),
                Arc::clone(&stores.games),
                Arc::clone(&stores.recharges),
                Arc::clone(&stores.transactions),
            ),
            games: GameService::new(Arc::clone(&stores.games)),
            recharges: RechargeService::new(Arc::clone(&stores.recharges)),
            transactions: TransactionService::new(Arc::clone(&stores.transactions)),
        }
    }
}
