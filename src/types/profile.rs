//! Member profile read-model
//!
//! The profile is derived on every request from four entity kinds and is
//! never stored. Field names follow the wire format consumed by the member
//! dashboard, which mixes snake_case section names with camelCase summaries.

use crate::types::{Game, Member, Recharge, Transaction};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Composed view of one member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberProfile {
    pub member: MemberSummary,
    pub recharge_history: Vec<RechargeSummary>,
    pub games: Vec<GameSummary>,
    pub played_history: Vec<PlayedHistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummary {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub balance: Decimal,
    pub joining_date: DateTime<Utc>,
    pub is_active: bool,
}

impl From<&Member> for MemberSummary {
    fn from(member: &Member) -> Self {
        MemberSummary {
            id: member.id.clone(),
            name: member.name.clone(),
            phone_number: member.phone_number.clone(),
            email: member.email.clone(),
            balance: member.balance,
            joining_date: member.joining_date,
            is_active: member.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeSummary {
    pub id: String,
    pub amount: Decimal,
    pub date_time: DateTime<Utc>,
    pub payment_method: String,
}

impl From<Recharge> for RechargeSummary {
    fn from(recharge: Recharge) -> Self {
        RechargeSummary {
            id: recharge.id,
            amount: recharge.amount,
            date_time: recharge.date,
            payment_method: recharge.payment_method,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

impl From<Game> for GameSummary {
    fn from(game: Game) -> Self {
        GameSummary {
            id: game.id,
            name: game.name,
            price: game.price,
            description: game.description,
        }
    }
}

/// One purchase in the member's play history
///
/// `game_name` is `None` when the purchased game no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayedHistoryEntry {
    pub id: String,
    pub date_time: DateTime<Utc>,
    pub amount: Decimal,
    pub game_name: Option<String>,
}

impl PlayedHistoryEntry {
    pub fn new(transaction: Transaction, game_name: Option<String>) -> Self {
        PlayedHistoryEntry {
            id: transaction.id,
            date_time: transaction.date,
            amount: transaction.amount,
            game_name,
        }
    }
}
