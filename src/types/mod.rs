//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `admin`: Administrator accounts
//! - `member`: Member accounts and their create/update candidates
//! - `game`: Catalog entries
//! - `recharge`: Balance top-up records
//! - `transaction`: Game purchase records
//! - `profile`: The derived member profile read-model
//! - `error`: Error types for services and the entity store

pub mod admin;
pub mod error;
pub mod game;
pub mod member;
pub mod profile;
pub mod recharge;
pub mod transaction;

pub use admin::{Admin, AdminInput};
pub use error::{ServiceError, StoreError, UniqueField};
pub use game::{Game, GameId, GameInput, GameStatus};
pub use member::{Gender, Member, MemberId, MemberInput};
pub use profile::{GameSummary, MemberProfile, MemberSummary, PlayedHistoryEntry, RechargeSummary};
pub use recharge::{Recharge, RechargeId, RechargeInput};
pub use transaction::{Transaction, TransactionId, TransactionInput};
