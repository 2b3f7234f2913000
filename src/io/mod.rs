//! I/O module
//!
//! Handles seed file parsing and the member CSV export.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (seed records, export serialization)
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;

pub use async_reader::AsyncReader;
pub use csv_format::{
    write_members_csv, GameRecord, MemberRecord, PurchaseRecord, PurchaseSeed, RechargeRecord,
    RechargeSeed, SeedRecord,
};
