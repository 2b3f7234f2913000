//! Member-related types
//!
//! A member is a customer account holding a cash balance. This module defines
//! the stored [`Member`] record, the [`MemberInput`] candidate accepted by the
//! create/update paths, and the [`Gender`] enumeration.

use crate::core::traits::Entity;
use crate::types::error::ServiceError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Member identifier (opaque UUID string assigned by the store)
pub type MemberId = String;

/// Country recorded when a new member leaves it blank
pub const DEFAULT_COUNTRY: &str = "India";

/// Role reported for every member by the login lookup
pub const MEMBER_ROLE: &str = "USER";

/// Member gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

impl FromStr for Gender {
    type Err = ServiceError;

    // Exact, case-sensitive match on the three labels
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            "OTHER" => Ok(Gender::Other),
            _ => Err(ServiceError::business_rule(
                "Invalid gender. Must be MALE, FEMALE, or OTHER.",
            )),
        }
    }
}

/// Stored member account
///
/// `id`, `joining_date`, `created_at` and `role` are fixed at creation; the
/// update path never overwrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,

    /// Exactly ten digits, unique across all members
    pub phone_number: String,

    /// Unique across all members
    pub email: String,

    /// Cash balance, never negative
    pub balance: Decimal,

    pub joining_date: DateTime<Utc>,

    #[serde(alias = "isActive")]
    pub active: bool,

    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub gender: Option<Gender>,
    pub role: String,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_image_url: Option<String>,

    /// Set by the store on first write
    pub created_at: DateTime<Utc>,

    /// Set by the store on every write
    pub updated_at: DateTime<Utc>,
}

impl Entity for Member {
    const KIND: &'static str = "Member";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn stamp(&mut self, now: DateTime<Utc>, created: bool) {
        if created {
            self.created_at = now;
        }
        self.updated_at = now;
    }
}

/// Candidate member submitted to create or update
///
/// Every field is optional on the wire so that missing values reach the
/// validation engine and are reported with a descriptive reason instead of
/// a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberInput {
    /// Must be absent on create; ignored on update
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub balance: Option<Decimal>,
    pub joining_date: Option<DateTime<Utc>>,
    #[serde(alias = "isActive")]
    pub active: Option<bool>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_image_url: Option<String>,
}

impl MemberInput {
    /// Candidate with the three required fields and a starting balance
    pub fn new(name: &str, phone_number: &str, email: &str, balance: Decimal) -> Self {
        MemberInput {
            name: Some(name.to_string()),
            phone_number: Some(phone_number.to_string()),
            email: Some(email.to_string()),
            balance: Some(balance),
            ..Default::default()
        }
    }
}

/// Returns `None` for a missing or whitespace-only value
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
