//! Purchase transaction types
//!
//! A transaction records a member buying a game. It is immutable once
//! created: there is no update path, only create, lookup and delete.

use crate::core::traits::{Entity, LedgerEntry};
use crate::types::game::GameId;
use crate::types::member::MemberId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction identifier
pub type TransactionId = String;

/// Completed game purchase
///
/// `member_id` and `game_id` are plain references; the store performs no
/// referential-integrity check on either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub member_id: MemberId,
    pub game_id: GameId,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

/// Candidate transaction submitted to create
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionInput {
    pub id: Option<String>,
    pub member_id: MemberId,
    pub game_id: GameId,
    pub amount: Decimal,
    pub date: Option<DateTime<Utc>>,
}

impl TransactionInput {
    pub fn new(member_id: &str, game_id: &str, amount: Decimal) -> Self {
        TransactionInput {
            member_id: member_id.to_string(),
            game_id: game_id.to_string(),
            amount,
            ..Default::default()
        }
    }
}

impl Entity for Transaction {
    const KIND: &'static str = "Transaction";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl LedgerEntry for Transaction {
    type Input = TransactionInput;

    fn member_id(&self) -> &str {
        &self.member_id
    }

    fn candidate_id(input: &TransactionInput) -> Option<&str> {
        input.id.as_deref()
    }

    fn from_input(input: TransactionInput, now: DateTime<Utc>) -> Self {
        Transaction {
            id: String::new(),
            member_id: input.member_id,
            game_id: input.game_id,
            amount: input.amount,
            date: input.date.unwrap_or(now),
        }
    }
}
