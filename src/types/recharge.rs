//! Balance top-up types

use crate::core::traits::{Entity, LedgerEntry};
use crate::types::member::MemberId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recharge identifier
pub type RechargeId = String;

/// Balance top-up event
///
/// `payment_method` is a free-text label; no payment is processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recharge {
    pub id: RechargeId,
    pub member_id: MemberId,
    pub amount: Decimal,
    pub payment_method: String,
    pub date: DateTime<Utc>,
}

/// Candidate recharge submitted to create
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RechargeInput {
    pub id: Option<String>,
    pub member_id: MemberId,
    pub amount: Decimal,
    pub payment_method: String,
    pub date: Option<DateTime<Utc>>,
}

impl RechargeInput {
    pub fn new(member_id: &str, amount: Decimal, payment_method: &str) -> Self {
        RechargeInput {
            member_id: member_id.to_string(),
            amount,
            payment_method: payment_method.to_string(),
            ..Default::default()
        }
    }
}

impl Entity for Recharge {
    const KIND: &'static str = "Recharge";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl LedgerEntry for Recharge {
    type Input = RechargeInput;

    fn member_id(&self) -> &str {
        &self.member_id
    }

    fn candidate_id(input: &RechargeInput) -> Option<&str> {
        input.id.as_deref()
    }

    fn from_input(input: RechargeInput, now: DateTime<Utc>) -> Self {
        Recharge {
            id: String::new(),
            member_id: input.member_id,
            amount: input.amount,
            payment_method: input.payment_method,
            date: input.date.unwrap_or(now),
        }
    }
}
