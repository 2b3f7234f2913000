//! Bootstrap seeding
//!
//! Two ways to start the service with data:
//!
//! - [`seed_samples`] loads the default administrator and the built-in sample
//!   catalog, members and ledger
//! - [`seed_from_dir`] streams `members.csv`, `games.csv`, `recharges.csv` and
//!   `transactions.csv` from a directory (any of them may be absent)
//!
//! Every record goes through the regular service create path, so seeded data
//! obeys the same validation and uniqueness rules as API writes. Rejected
//! records are logged and skipped.

use crate::core::Services;
use crate::io::{
    AsyncReader, GameRecord, MemberRecord, PurchaseRecord, PurchaseSeed, RechargeRecord,
    RechargeSeed, SeedRecord,
};
use crate::types::{AdminInput, GameInput, MemberInput, RechargeInput, TransactionInput};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio_util::compat::TokioAsyncReadCompatExt;
use tracing::{debug, info, warn};

/// Rows read per batch from a seed file
pub const SEED_BATCH_SIZE: usize = 500;

/// Sample members are only loaded while fewer than this many exist
const SAMPLE_MEMBER_TARGET: usize = 5;

/// Sample purchases: member i buys game i for the first few pairs
const SAMPLE_PURCHASES: usize = 3;

/// Counts of records created by one seeding run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub admins: usize,
    pub games: usize,
    pub members: usize,
    pub recharges: usize,
    pub transactions: usize,
}

/// Failure to read a seed directory
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to open seed file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

struct SampleGame {
    name: &'static str,
    price: Decimal,
    description: &'static str,
    genre: &'static str,
}

fn sample_games() -> Vec<SampleGame> {
    let game = |name: &'static str, cents: i64, description: &'static str, genre: &'static str| SampleGame {
        name,
        price: Decimal::new(cents, 2),
        description,
        genre,
    };
    vec![
        game("Cyberpunk 2077", 5999, "An open-world, action-adventure story set in Night City.", "RPG"),
        game("The Witcher 3", 3999, "A story-driven open world RPG set in a fantasy universe.", "RPG"),
        game("Grand Theft Auto V", 2999, "Experience the ultimate open-world adventure.", "Action"),
        game("Minecraft", 2695, "Build, explore, and survive in a blocky world.", "Sandbox"),
        game("Among Us", 499, "A multiplayer game of teamwork and betrayal.", "Social"),
        game("Valorant", 0, "A 5v5 character-based tactical shooter.", "FPS"),
        game("Fortnite", 0, "Battle royale game with building mechanics.", "Battle Royale"),
        game("Call of Duty: Warzone", 0, "Free-to-play battle royale game.", "Battle Royale"),
    ]
}

// (username, email, full name)
const DEFAULT_ADMIN: (&str, &str, &str) = ("admin", "admin@gamezone.com", "GameZone Administrator");

// (name, email, phone, balance)
const SAMPLE_MEMBERS: &[(&str, &str, &str, i64)] = &[
    ("John Doe", "john@example.com", "1234567890", 500),
    ("Jane Smith", "jane@example.com", "0987654321", 300),
    ("Mike Johnson", "mike@example.com", "1122334455", 400),
    ("Sarah Wilson", "sarah@example.com", "5566778899", 250),
    ("David Brown", "david@example.com", "9988776655", 350),
];

// (payment method, amount)
const SAMPLE_RECHARGES: &[(&str, i64)] = &[("Credit Card", 50), ("PayPal", 100), ("Bank Transfer", 75)];

/// Load the built-in sample data
///
/// Each kind is skipped when it already has data, so running this against a
/// seeded store is a no-op. Members are topped up to five, skipping sample
/// members whose email is already registered.
pub fn seed_samples(services: &Services) -> SeedReport {
    let mut report = SeedReport::default();

    if services.admins.find_all().is_empty() {
        let (username, email, full_name) = DEFAULT_ADMIN;
        match services.admins.create(AdminInput::new(username, email, full_name)) {
            Ok(_) => report.admins += 1,
            Err(e) => warn!(admin = username, error = %e, "Default admin rejected"),
        }
    }

    if services.games.find_all().is_empty() {
        for sample in sample_games() {
            let input = GameInput::new(
                sample.name,
                sample.price,
                sample.description,
                sample.genre,
                "PC",
            );
            match services.games.create(input) {
                Ok(_) => report.games += 1,
                Err(e) => warn!(game = sample.name, error = %e, "Sample game rejected"),
            }
        }
    }

    let existing = services.members.find_all();
    if existing.len() < SAMPLE_MEMBER_TARGET {
        for &(name, email, phone, balance) in SAMPLE_MEMBERS {
            if existing.iter().any(|m| m.email == email) {
                continue;
            }
            let input = MemberInput::new(name, phone, email, Decimal::new(balance, 0));
            match services.members.create(input) {
                Ok(_) => report.members += 1,
                Err(e) => warn!(member = name, error = %e, "Sample member rejected"),
            }
        }
    }

    let members = services.members.find_all();
    let games = services.games.find_all();

    if services.transactions.find_all().is_empty() {
        for (member, game) in members.iter().zip(games.iter()).take(SAMPLE_PURCHASES) {
            if member.balance < game.price {
                debug!(member = %member.name, game = %game.name, "Skipping sample purchase");
                continue;
            }
            let input = TransactionInput::new(&member.id, &game.id, game.price);
            match services.transactions.create(input) {
                Ok(_) => report.transactions += 1,
                Err(e) => warn!(member = %member.name, error = %e, "Sample purchase rejected"),
            }
        }
    }

    if services.recharges.find_all().is_empty() {
        for (member, &(method, amount)) in members.iter().zip(SAMPLE_RECHARGES) {
            let input = RechargeInput::new(&member.id, Decimal::new(amount, 0), method);
            match services.recharges.create(input) {
                Ok(_) => report.recharges += 1,
                Err(e) => warn!(member = %member.name, error = %e, "Sample recharge rejected"),
            }
        }
    }

    info!(
        admins = report.admins,
        games = report.games,
        members = report.members,
        transactions = report.transactions,
        recharges = report.recharges,
        "Loaded sample data"
    );
    report
}

/// Load seed CSV files from `dir`
///
/// Files are read in dependency order: games, members, recharges, then
/// transactions. A missing file is skipped.
///
/// # Errors
///
/// Returns `SeedError::Open` if a file exists but cannot be opened.
pub async fn seed_from_dir(services: &Services, dir: &Path) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    for input in read_seed_file::<GameRecord>(dir).await? {
        match services.games.create(input) {
            Ok(_) => report.games += 1,
            Err(e) => warn!(file = GameRecord::FILE_NAME, error = %e, "Seed game rejected"),
        }
    }

    for input in read_seed_file::<MemberRecord>(dir).await? {
        match services.members.create(input) {
            Ok(_) => report.members += 1,
            Err(e) => warn!(file = MemberRecord::FILE_NAME, error = %e, "Seed member rejected"),
        }
    }

    for RechargeSeed {
        phone_number,
        amount,
        payment_method,
    } in read_seed_file::<RechargeRecord>(dir).await?
    {
        match services.members.find_by_phone(&phone_number) {
            Ok(member) => {
                let input = RechargeInput::new(&member.id, amount, &payment_method);
                match services.recharges.create(input) {
                    Ok(_) => report.recharges += 1,
                    Err(e) => warn!(file = RechargeRecord::FILE_NAME, error = %e, "Seed recharge rejected"),
                }
            }
            Err(e) => warn!(file = RechargeRecord::FILE_NAME, error = %e, "Seed recharge skipped"),
        }
    }

    let game_ids: HashMap<String, String> = services
        .games
        .find_all()
        .into_iter()
        .rev()
        .map(|game| (game.name, game.id))
        .collect();

    for PurchaseSeed {
        phone_number,
        game_name,
        amount,
    } in read_seed_file::<PurchaseRecord>(dir).await?
    {
        let Some(game_id) = game_ids.get(&game_name) else {
            warn!(file = PurchaseRecord::FILE_NAME, game = %game_name, "Seed purchase names unknown game");
            continue;
        };
        match services.members.find_by_phone(&phone_number) {
            Ok(member) => {
                let input = TransactionInput::new(&member.id, game_id, amount);
                match services.transactions.create(input) {
                    Ok(_) => report.transactions += 1,
                    Err(e) => warn!(file = PurchaseRecord::FILE_NAME, error = %e, "Seed purchase rejected"),
                }
            }
            Err(e) => warn!(file = PurchaseRecord::FILE_NAME, error = %e, "Seed purchase skipped"),
        }
    }

    info!(
        dir = %dir.display(),
        games = report.games,
        members = report.members,
        transactions = report.transactions,
        recharges = report.recharges,
        "Loaded seed directory"
    );
    Ok(report)
}

async fn read_seed_file<S: SeedRecord>(dir: &Path) -> Result<Vec<S::Output>, SeedError> {
    let path = dir.join(S::FILE_NAME);
    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Seed file absent");
            return Ok(Vec::new());
        }
        Err(source) => return Err(SeedError::Open { path, source }),
    };

    // Wrap tokio file in a compatibility layer for csv-async
    let mut reader = AsyncReader::<_, S>::new(file.compat());
    Ok(reader.read_all(SEED_BATCH_SIZE).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Stores;
    use std::fs;
    use tempfile::TempDir;

    fn services() -> Services {
        Services::new(&Stores::in_memory())
    }

    #[test]
    fn test_seed_samples() {
        let services = services();

        let report = seed_samples(&services);

        assert_eq!(
            report,
            SeedReport {
                admins: 1,
                games: 8,
                members: 5,
                recharges: 3,
                transactions: 3,
            }
        );
        let admin = services.admins.find_by_username("admin").unwrap();
        assert_eq!(admin.email, "admin@gamezone.com");
        assert_eq!(admin.full_name.as_deref(), Some("GameZone Administrator"));
        let john = services.members.find_by_phone("1234567890").unwrap();
        assert_eq!(john.name, "John Doe");
        assert_eq!(john.balance, Decimal::new(500, 0));
        // Purchases are recorded without touching the balance
        let purchases = services.transactions.find_by_member_id(&john.id);
        assert_eq!(purchases.len(), 1);
        assert_eq!(purchases[0].amount, Decimal::new(5999, 2));
    }

    #[test]
    fn test_seed_samples_is_idempotent() {
        let services = services();
        seed_samples(&services);

        let second = seed_samples(&services);

        assert_eq!(second, SeedReport::default());
        assert_eq!(services.admins.find_all().len(), 1);
        assert_eq!(services.members.find_all().len(), 5);
        assert_eq!(services.games.find_all().len(), 8);
    }

    #[test]
    fn test_seed_samples_tops_up_members() {
        let services = services();
        services
            .members
            .create(MemberInput::new("Jane Smith", "0987654321", "jane@example.com", Decimal::ZERO))
            .unwrap();

        let report = seed_samples(&services);

        assert_eq!(report.members, 4);
        assert_eq!(services.members.find_all().len(), 5);
    }

    #[tokio::test]
    async fn test_seed_from_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("members.csv"),
            "name,phone_number,email,balance\n\
             Ann Lee,1234567890,ann@x.com,100\n\
             Bad Phone,12,bad@x.com,10\n\
             Bob Ray,0987654321,bob@x.com,\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("games.csv"),
            "name,price,description,genre\n\
             Minecraft,26.95,\"Build, explore, and survive in a blocky world.\",Sandbox\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("recharges.csv"),
            "phone_number,amount,payment_method\n\
             1234567890,50,PayPal\n\
             5555555555,20,PayPal\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("transactions.csv"),
            "phone_number,game_name,amount\n\
             1234567890,Minecraft,26.95\n\
             1234567890,Unknown Game,1\n",
        )
        .unwrap();

        let services = services();
        let report = seed_from_dir(&services, dir.path()).await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                admins: 0,
                games: 1,
                members: 2,
                recharges: 1,
                transactions: 1,
            }
        );
        let profile = services.profiles.member_profile_by_phone("1234567890").unwrap();
        assert_eq!(profile.recharge_history.len(), 1);
        assert_eq!(profile.played_history[0].game_name.as_deref(), Some("Minecraft"));
        assert_eq!(
            services.members.find_by_phone("0987654321").unwrap().balance,
            Decimal::ZERO
        );
    }

    #[tokio::test]
    async fn test_seed_from_dir_tolerates_missing_files() {
        let dir = TempDir::new().unwrap();

        let report = seed_from_dir(&services(), dir.path()).await.unwrap();

        assert_eq!(report, SeedReport::default());
    }
}
