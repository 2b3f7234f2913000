//! GameZone Accounts Library
//! # Overview
//!
//! Member account and ledger backend for a gaming-credit marketplace: members
//! hold a cash balance, purchase games and top up through recharges.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Member, Admin, Game, Recharge, Transaction, profile)
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - Store contract
//!   - [`core::unique_table`] - Member and admin tables with unique indexes
//!   - [`core::validation`] - Member and game validation engine
//!   - [`core::account_service`] - Member lifecycle
//!   - [`core::admin_service`] - Administrator accounts
//!   - [`core::profile`] - Member profile aggregation
//!   - [`core::catalog_service`] / [`core::ledger_service`] - Catalog and ledgers
//! - [`api`] - axum HTTP boundary
//! - [`io`] - Seed file parsing and the member CSV export
//! - [`seed`] - Bootstrap data loading
//! - [`cli`] - CLI arguments parsing
//!
//! # Invariants
//!
//! - Phone number and email are each unique among members at all times
//! - A member balance is never negative
//! - Ids are assigned by the store and never change
//!
//! Recording a recharge or a purchase does not move the member's balance.

// Module declarations
pub mod api;
pub mod cli;
pub mod core;
pub mod io;
pub mod seed;
pub mod types;

pub use api::{build_app, AppState};
pub use core::{
    AdminService, GameService, MemberAccountService, ProfileAggregator, RechargeService, Services, Stores,
    TransactionService,
};
pub use io::write_members_csv;
pub use types::{
    Admin, AdminInput, Game, GameInput, GameStatus, Gender, Member, MemberInput, MemberProfile, Recharge,
    RechargeInput, ServiceError, StoreError, Transaction, TransactionInput,
};
