//! Game catalog service

use crate::core::traits::GameStore;
use crate::core::validation::{validate_game, GameFields};
use crate::types::game::{DEFAULT_DEVELOPER, DEFAULT_MIN_AGE, DEFAULT_PLATFORM, DEFAULT_PUBLISHER};
use crate::types::member::non_blank;
use crate::types::{Game, GameInput, GameStatus, ServiceError};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Catalog operations over a shared game store
#[derive(Clone)]
pub struct GameService {
    store: Arc<dyn GameStore>,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        GameService { store }
    }

    /// Add a game to the catalog
    ///
    /// Blank status, minimum age, platform, developer and publisher take
    /// their catalog defaults before validation.
    pub fn create(&self, candidate: GameInput) -> Result<Game, ServiceError> {
        if non_blank(&candidate.id).is_some() {
            return Err(ServiceError::business_rule("Game id is assigned by the server."));
        }

        let candidate = GameInput {
            status: Some(
                non_blank(&candidate.status)
                    .unwrap_or(GameStatus::Active.as_str())
                    .to_string(),
            ),
            min_age: Some(candidate.min_age.unwrap_or(DEFAULT_MIN_AGE)),
            platform: or_default(&candidate.platform, DEFAULT_PLATFORM),
            developer: or_default(&candidate.developer, DEFAULT_DEVELOPER),
            publisher: or_default(&candidate.publisher, DEFAULT_PUBLISHER),
            ..candidate
        };

        let fields = validate_game(&candidate)
            .inspect_err(|e| warn!(reason = %e, "Rejected game create"))?;

        let now = Utc::now();
        let game = game_from_fields(String::new(), fields, candidate, now);

        self.persist(game, "Created game")
    }

    /// All games in store order
    pub fn find_all(&self) -> Vec<Game> {
        self.store.find_all()
    }

    pub fn find_by_id(&self, id: &str) -> Result<Game, ServiceError> {
        self.store
            .find_by_id(id)
            .ok_or_else(|| ServiceError::not_found("Game", "id", id))
    }

    /// Replace a game's catalog fields
    ///
    /// A missing minimum age counts as the catalog default. The id and
    /// creation time are kept.
    pub fn update(&self, id: &str, candidate: GameInput) -> Result<Game, ServiceError> {
        let existing = self.find_by_id(id)?;

        let candidate = GameInput {
            min_age: Some(candidate.min_age.unwrap_or(DEFAULT_MIN_AGE)),
            ..candidate
        };
        let fields = validate_game(&candidate)
            .inspect_err(|e| warn!(game_id = %id, reason = %e, "Rejected game update"))?;

        let game = game_from_fields(existing.id, fields, candidate, existing.created_at);

        self.persist(game, "Updated game")
    }

    pub fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.delete_by_id(id) {
            return Err(ServiceError::not_found("Game", "id", id));
        }
        info!(game_id = %id, "Deleted game");
        Ok(())
    }

    fn persist(&self, game: Game, action: &str) -> Result<Game, ServiceError> {
        let saved = self.store.save(game)?;
        info!(game_id = %saved.id, name = %saved.name, "{}", action);
        Ok(saved)
    }
}

fn or_default(value: &Option<String>, default: &str) -> Option<String> {
    Some(non_blank(value).unwrap_or(default).to_string())
}

fn game_from_fields(
    id: String,
    fields: GameFields,
    candidate: GameInput,
    created_at: chrono::DateTime<Utc>,
) -> Game {
    Game {
        id,
        name: fields.name,
        price: fields.price,
        description: fields.description,
        genre: fields.genre,
        status: fields.status,
        image_url: candidate.image_url,
        platform: candidate.platform,
        min_age: fields.min_age,
        developer: candidate.developer,
        publisher: candidate.publisher,
        release_date: candidate.release_date,
        created_at,
        updated_at: created_at,
    }
}
