//! CSV format handling for seed files and the member export
//!
//! This module centralizes all CSV format concerns, providing:
//! - One record structure per seed file, with conversion to service candidates
//! - The member ledger export
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Seed files
//!
//! | File | Columns |
//! |------|---------|
//! | members.csv | name, phone_number, email, balance, gender, city, country |
//! | games.csv | name, price, description, genre, status, platform, min_age |
//! | recharges.csv | phone_number, amount, payment_method |
//! | transactions.csv | phone_number, game_name, amount |
//!
//! Ledger rows name their member by phone number and their game by name, so a
//! seed directory does not depend on generated ids.

use crate::types::{GameInput, Member, MemberInput};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// A row of one seed file
pub trait SeedRecord: DeserializeOwned + Send + 'static {
    /// What the row converts into
    type Output: Send;

    /// File name inside a seed directory
    const FILE_NAME: &'static str;

    /// Parse the row's text fields
    fn convert(self) -> Result<Self::Output, String>;
}

/// Parse a required decimal column
fn parse_amount(raw: &str, column: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw.trim()).map_err(|_| format!("Invalid {} '{}'", column, raw))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Row of `members.csv`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MemberRecord {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub balance: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl SeedRecord for MemberRecord {
    type Output = MemberInput;
    const FILE_NAME: &'static str = "members.csv";

    fn convert(self) -> Result<MemberInput, String> {
        let balance = match present(self.balance) {
            Some(raw) => Some(parse_amount(&raw, "balance")?),
            None => None,
        };

        Ok(MemberInput {
            balance,
            gender: present(self.gender),
            city: present(self.city),
            country: present(self.country),
            ..MemberInput::new(&self.name, &self.phone_number, &self.email, Decimal::ZERO)
        })
    }
}

/// Row of `games.csv`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GameRecord {
    pub name: String,
    pub price: String,
    pub description: String,
    pub genre: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub min_age: Option<String>,
}

impl SeedRecord for GameRecord {
    type Output = GameInput;
    const FILE_NAME: &'static str = "games.csv";

    fn convert(self) -> Result<GameInput, String> {
        let price = parse_amount(&self.price, "price")?;
        let min_age = match present(self.min_age) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<i32>()
                    .map_err(|_| format!("Invalid min_age '{}' for game {}", raw, self.name))?,
            ),
            None => None,
        };

        Ok(GameInput {
            name: Some(self.name),
            price: Some(price),
            description: Some(self.description),
            genre: Some(self.genre),
            status: present(self.status),
            platform: present(self.platform),
            min_age,
            ..GameInput::default()
        })
    }
}

/// Recharge row resolved against the member store at load time
#[derive(Debug, Clone, PartialEq)]
pub struct RechargeSeed {
    pub phone_number: String,
    pub amount: Decimal,
    pub payment_method: String,
}

/// Row of `recharges.csv`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RechargeRecord {
    pub phone_number: String,
    pub amount: String,
    pub payment_method: String,
}

impl SeedRecord for RechargeRecord {
    type Output = RechargeSeed;
    const FILE_NAME: &'static str = "recharges.csv";

    fn convert(self) -> Result<RechargeSeed, String> {
        Ok(RechargeSeed {
            amount: parse_amount(&self.amount, "amount")?,
            phone_number: self.phone_number,
            payment_method: self.payment_method,
        })
    }
}

/// Purchase row resolved against the member and game stores at load time
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseSeed {
    pub phone_number: String,
    pub game_name: String,
    pub amount: Decimal,
}

/// Row of `transactions.csv`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PurchaseRecord {
    pub phone_number: String,
    pub game_name: String,
    pub amount: String,
}

impl SeedRecord for PurchaseRecord {
    type Output = PurchaseSeed;
    const FILE_NAME: &'static str = "transactions.csv";

    fn convert(self) -> Result<PurchaseSeed, String> {
        Ok(PurchaseSeed {
            amount: parse_amount(&self.amount, "amount")?,
            phone_number: self.phone_number,
            game_name: self.game_name,
        })
    }
}

/// Write the member ledger in CSV format
///
/// Columns: id, name, phone_number, email, balance, active. Members are
/// written in the order given (store order) with balances to two decimal
/// places.
///
/// # Arguments
///
/// * `members` - Members to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_members_csv(members: &[Member], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["id", "name", "phone_number", "email", "balance", "active"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for member in members {
        writer
            .write_record(&[
                member.id.clone(),
                member.name.clone(),
                member.phone_number.clone(),
                member.email.clone(),
                format!("{:.2}", member.balance),
                member.active.to_string(),
            ])
            .map_err(|e| format!("Failed to write member record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
