//! Profile aggregator
//!
//! Joins a member with its recharges, its purchases and the game catalog into
//! a [`MemberProfile`]. The profile is computed on every call and never cached.

use crate::core::traits::{GameStore, LedgerStore, MemberStore};
use crate::types::{
    GameSummary, MemberProfile, MemberSummary, PlayedHistoryEntry, Recharge, RechargeSummary,
    ServiceError, Transaction,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Status label the catalog section of a profile is filtered by
///
/// Stored statuses are upper case, so this matches nothing and the catalog
/// section comes back empty. Kept as-is until the product decides which
/// games a profile should list.
pub const PROFILE_GAME_STATUS: &str = "active";

/// Read-only aggregation over the four entity stores
#[derive(Clone)]
pub struct ProfileAggregator {
    members: Arc<dyn MemberStore>,
    games: Arc<dyn GameStore>,
    recharges: Arc<dyn LedgerStore<Recharge>>,
    transactions: Arc<dyn LedgerStore<Transaction>>,
}

impl ProfileAggregator {
    pub fn new(
        members: Arc<dyn MemberStore>,
        games: Arc<dyn GameStore>,
        recharges: Arc<dyn LedgerStore<Recharge>>,
        transactions: Arc<dyn LedgerStore<Transaction>>,
    ) -> Self {
        ProfileAggregator {
            members,
            games,
            recharges,
            transactions,
        }
    }

    /// Build the profile of the member holding `phone_number`
    ///
    /// Play history entries whose game no longer exists carry no game name.
    /// Game names are fetched with one batched store call.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` ("Member not found with phone: ...") when no member
    /// holds the phone number.
    pub fn member_profile_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<MemberProfile, ServiceError> {
        let member = self
            .members
            .find_by_phone_number(phone_number)
            .ok_or_else(|| {
                warn!(phone = %phone_number, "Profile requested for unknown phone");
                ServiceError::not_found("Member", "phone", phone_number)
            })?;

        let recharge_history: Vec<RechargeSummary> = self
            .recharges
            .find_by_member_id(&member.id)
            .into_iter()
            .map(RechargeSummary::from)
            .collect();

        let games: Vec<GameSummary> = self
            .games
            .find_by_status(PROFILE_GAME_STATUS)
            .into_iter()
            .map(GameSummary::from)
            .collect();

        let purchases = self.transactions.find_by_member_id(&member.id);
        let game_ids: Vec<&str> = purchases.iter().map(|t| t.game_id.as_str()).collect();
        let game_names: HashMap<String, String> = self
            .games
            .find_many(&game_ids)
            .into_iter()
            .map(|game| (game.id, game.name))
            .collect();

        let played_history: Vec<PlayedHistoryEntry> = purchases
            .into_iter()
            .map(|transaction| {
                let game_name = game_names.get(&transaction.game_id).cloned();
                PlayedHistoryEntry::new(transaction, game_name)
            })
            .collect();

        debug!(
            member_id = %member.id,
            recharges = recharge_history.len(),
            purchases = played_history.len(),
            "Built member profile"
        );

        Ok(MemberProfile {
            member: MemberSummary::from(&member),
            recharge_history,
            games,
            played_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity_table::EntityTable;
    use crate::core::unique_table::MemberTable;
    use crate::core::traits::{LedgerEntry, Repository};
    use crate::types::{
        Game, GameStatus, Member, RechargeInput, TransactionInput,
    };
    use chrono::Utc;
    use rust_decimal::Decimal;

    struct Fixture {
        members: Arc<MemberTable>,
        games: Arc<EntityTable<Game>>,
        recharges: Arc<EntityTable<Recharge>>,
        transactions: Arc<EntityTable<Transaction>>,
        aggregator: ProfileAggregator,
    }

    fn fixture() -> Fixture {
        let members = Arc::new(MemberTable::new());
        let games = Arc::new(EntityTable::new());
        let recharges = Arc::new(EntityTable::new());
        let transactions = Arc::new(EntityTable::new());
        let aggregator = ProfileAggregator::new(
            members.clone(),
            games.clone(),
            recharges.clone(),
            transactions.clone(),
        );
        Fixture {
            members,
            games,
            recharges,
            transactions,
            aggregator,
        }
    }

    fn member(phone: &str, email: &str) -> Member {
        let now = Utc::now();
        Member {
            id: String::new(),
            name: "Ann Lee".to_string(),
            phone_number: phone.to_string(),
            email: email.to_string(),
            balance: Decimal::new(100, 0),
            joining_date: now,
            active: true,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            country: None,
            gender: None,
            role: "USER".to_string(),
            date_of_birth: None,
            profile_image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn game(name: &str) -> Game {
        let now = Utc::now();
        Game {
            id: String::new(),
            name: name.to_string(),
            price: Decimal::new(2999, 2),
            description: "A profile fixture game.".to_string(),
            genre: "Action".to_string(),
            status: GameStatus::Active,
            image_url: None,
            platform: Some("PC".to_string()),
            min_age: 3,
            developer: None,
            publisher: None,
            release_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn recharge(member_id: &str, amount: i64) -> Recharge {
        Recharge::from_input(
            RechargeInput::new(member_id, Decimal::new(amount, 0), "PayPal"),
            Utc::now(),
        )
    }

    fn purchase(member_id: &str, game_id: &str) -> Transaction {
        Transaction::from_input(
            TransactionInput::new(member_id, game_id, Decimal::new(2999, 2)),
            Utc::now(),
        )
    }

    #[test]
    fn test_unknown_phone_is_not_found() {
        let fx = fixture();

        let error = fx.aggregator.member_profile_by_phone("0000000000").unwrap_err();

        assert_eq!(
            error,
            ServiceError::NotFound("Member not found with phone: 0000000000".into())
        );
    }

    #[test]
    fn test_profile_collects_member_records() {
        let fx = fixture();
        let ann = fx.members.save(member("1234567890", "ann@x.com")).unwrap();
        let bob = fx.members.save(member("0987654321", "bob@x.com")).unwrap();
        let witcher = fx.games.save(game("The Witcher 3"));
        let gta = fx.games.save(game("Grand Theft Auto V"));

        fx.recharges.save(recharge(&ann.id, 50));
        fx.recharges.save(recharge(&bob.id, 10));
        fx.recharges.save(recharge(&ann.id, 75));
        fx.transactions.save(purchase(&ann.id, &gta.id));
        fx.transactions.save(purchase(&ann.id, &witcher.id));
        fx.transactions.save(purchase(&bob.id, &gta.id));

        let profile = fx.aggregator.member_profile_by_phone("1234567890").unwrap();

        assert_eq!(profile.member.id, ann.id);
        assert!(profile.member.is_active);
        let amounts: Vec<Decimal> = profile.recharge_history.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![Decimal::new(50, 0), Decimal::new(75, 0)]);
        let names: Vec<Option<&str>> = profile
            .played_history
            .iter()
            .map(|p| p.game_name.as_deref())
            .collect();
        assert_eq!(names, vec![Some("Grand Theft Auto V"), Some("The Witcher 3")]);
    }

    #[test]
    fn test_profile_catalog_filter_matches_lowercase_label_only() {
        let fx = fixture();
        fx.members.save(member("1234567890", "ann@x.com")).unwrap();
        fx.games.save(game("Minecraft"));

        let profile = fx.aggregator.member_profile_by_phone("1234567890").unwrap();

        assert!(profile.games.is_empty());
    }

    #[test]
    fn test_purchase_of_deleted_game_has_no_name() {
        let fx = fixture();
        let ann = fx.members.save(member("1234567890", "ann@x.com")).unwrap();
        let doomed = fx.games.save(game("Among Us"));
        fx.transactions.save(purchase(&ann.id, &doomed.id));
        fx.games.delete_by_id(&doomed.id);

        let profile = fx.aggregator.member_profile_by_phone("1234567890").unwrap();

        assert_eq!(profile.played_history.len(), 1);
        assert_eq!(profile.played_history[0].game_name, None);
    }

    #[test]
    fn test_profile_json_shape() {
        let fx = fixture();
        let ann = fx.members.save(member("1234567890", "ann@x.com")).unwrap();
        let game = fx.games.save(game("Valorant"));
        fx.recharges.save(recharge(&ann.id, 50));
        fx.transactions.save(purchase(&ann.id, &game.id));

        let profile = fx.aggregator.member_profile_by_phone("1234567890").unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["member"]["phoneNumber"], "1234567890");
        assert_eq!(json["member"]["isActive"], true);
        assert_eq!(json["recharge_history"][0]["paymentMethod"], "PayPal");
        assert!(json["recharge_history"][0]["dateTime"].is_string());
        assert_eq!(json["played_history"][0]["game_name"], "Valorant");
        assert!(json["played_history"][0]["date_time"].is_string());
        assert!(json["games"].as_array().unwrap().is_empty());
    }
}
