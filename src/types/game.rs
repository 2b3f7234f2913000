//! Game catalog types

use crate::core::traits::Entity;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Game identifier
pub type GameId = String;

/// Minimum age recorded when a new game leaves it unset
pub const DEFAULT_MIN_AGE: i32 = 3;

pub const DEFAULT_PLATFORM: &str = "PC";
pub const DEFAULT_DEVELOPER: &str = "Unknown Developer";
pub const DEFAULT_PUBLISHER: &str = "Unknown Publisher";

/// Catalog availability of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    Active,
    Inactive,
    Maintenance,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Active => "ACTIVE",
            GameStatus::Inactive => "INACTIVE",
            GameStatus::Maintenance => "MAINTENANCE",
        }
    }
}

impl FromStr for GameStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ACTIVE" => Ok(GameStatus::Active),
            "INACTIVE" => Ok(GameStatus::Inactive),
            "MAINTENANCE" => Ok(GameStatus::Maintenance),
            other => Err(format!("Unknown game status '{}'", other)),
        }
    }
}

/// Stored catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub name: String,

    /// Zero for free-to-play titles
    pub price: Decimal,

    pub description: String,
    pub genre: String,
    pub status: GameStatus,
    pub image_url: Option<String>,
    pub platform: Option<String>,
    pub min_age: i32,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Game {
    const KIND: &'static str = "Game";

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

/// Candidate game submitted to create or update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub image_url: Option<String>,
    pub platform: Option<String>,
    pub min_age: Option<i32>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl GameInput {
    /// Candidate with the fields the catalog requires
    pub fn new(name: &str, price: Decimal, description: &str, genre: &str, platform: &str) -> Self {
        GameInput {
            name: Some(name.to_string()),
            price: Some(price),
            description: Some(description.to_string()),
            genre: Some(genre.to_string()),
            platform: Some(platform.to_string()),
            ..Default::default()
        }
    }
}
