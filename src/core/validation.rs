//! Validation engine for member, game and administrator candidates
//!
//! Every check is synchronous and fail-fast: the first violated rule is
//! returned as a `ServiceError::BusinessRule` with a reason suitable for API
//! clients. Field checks are pure; the uniqueness checks read the account
//! store and are repeated atomically by the store itself on write.

use crate::core::traits::{AdminStore, MemberStore};
use crate::types::member::non_blank;
use crate::types::{AdminInput, Gender, GameInput, GameStatus, MemberInput, ServiceError, UniqueField};
use rust_decimal::Decimal;

pub const MEMBER_NAME_MIN_LEN: usize = 2;
pub const MEMBER_NAME_MAX_LEN: usize = 50;
pub const GAME_NAME_MIN_LEN: usize = 2;
pub const GAME_NAME_MAX_LEN: usize = 100;
pub const GAME_DESCRIPTION_MIN_LEN: usize = 10;
pub const GAME_DESCRIPTION_MAX_LEN: usize = 500;
pub const PHONE_NUMBER_LEN: usize = 10;
pub const MIN_AGE_LIMIT: i32 = 18;

/// Upper bound for a member balance
pub fn max_balance() -> Decimal {
    Decimal::new(100_000, 0)
}

/// Upper bound for a game price
pub fn max_price() -> Decimal {
    Decimal::new(10_000, 0)
}

/// Which write the candidate is destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode<'a> {
    /// A new member: any existing holder of the phone or email is a conflict
    Create,
    /// An update of member `id`: only holders other than `id` conflict
    Update { id: &'a str },
}

impl ValidationMode<'_> {
    fn conflicts_with(&self, holder_id: &str) -> bool {
        match self {
            ValidationMode::Create => true,
            ValidationMode::Update { id } => *id != holder_id,
        }
    }
}

/// Member fields that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct MemberFields {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub balance: Decimal,
    pub gender: Option<Gender>,
}

/// The BusinessRule failure for a phone number or email already in use
pub fn uniqueness_violation(field: UniqueField, mode: ValidationMode<'_>) -> ServiceError {
    let message = match (field, mode) {
        (UniqueField::PhoneNumber, ValidationMode::Create) => "Phone number already exists.",
        (UniqueField::Email, ValidationMode::Create) => "Email already exists.",
        (UniqueField::PhoneNumber, ValidationMode::Update { .. }) => {
            "Phone number already exists for another member."
        }
        (UniqueField::Email, ValidationMode::Update { .. }) => {
            "Email already exists for another member."
        }
        (UniqueField::Username, _) => "Username already exists",
    };
    ServiceError::business_rule(message)
}

/// Validate a member candidate: field checks, then uniqueness against `store`
///
/// A missing balance counts as zero and a blank gender as absent.
pub fn validate_member(
    store: &dyn MemberStore,
    candidate: &MemberInput,
    mode: ValidationMode<'_>,
) -> Result<MemberFields, ServiceError> {
    let fields = validate_member_fields(candidate)?;
    check_member_uniqueness(store, &fields, mode)?;
    Ok(fields)
}

/// Field-level member checks, in order: name, balance, phone, email, gender
pub fn validate_member_fields(candidate: &MemberInput) -> Result<MemberFields, ServiceError> {
    let name = non_blank(&candidate.name)
        .ok_or_else(|| ServiceError::business_rule("Member name is required."))?;
    let name_len = name.trim().chars().count();
    if name_len < MEMBER_NAME_MIN_LEN {
        return Err(ServiceError::business_rule(
            "Member name must be at least 2 characters long.",
        ));
    }
    if name_len > MEMBER_NAME_MAX_LEN {
        return Err(ServiceError::business_rule(
            "Member name cannot exceed 50 characters.",
        ));
    }

    let balance = candidate.balance.unwrap_or(Decimal::ZERO);
    if balance.is_sign_negative() && !balance.is_zero() {
        return Err(ServiceError::business_rule("Balance cannot be negative."));
    }
    if balance > max_balance() {
        return Err(ServiceError::business_rule("Balance cannot exceed 100000."));
    }

    let phone_number = non_blank(&candidate.phone_number)
        .ok_or_else(|| ServiceError::business_rule("Phone number is required."))?;
    if !is_valid_phone_number(phone_number) {
        return Err(ServiceError::business_rule("Phone number must be 10 digits."));
    }

    let email = non_blank(&candidate.email)
        .ok_or_else(|| ServiceError::business_rule("Email is required."))?;
    if !is_valid_email(email) {
        return Err(ServiceError::business_rule("Invalid email format."));
    }

    let gender = non_blank(&candidate.gender)
        .map(str::parse::<Gender>)
        .transpose()?;

    Ok(MemberFields {
        name: name.to_string(),
        phone_number: phone_number.to_string(),
        email: email.to_string(),
        balance,
        gender,
    })
}

/// Phone and email must not be held by a conflicting member
pub fn check_member_uniqueness(
    store: &dyn MemberStore,
    fields: &MemberFields,
    mode: ValidationMode<'_>,
) -> Result<(), ServiceError> {
    if let Some(holder) = store.find_by_phone_number(&fields.phone_number) {
        if mode.conflicts_with(&holder.id) {
            return Err(uniqueness_violation(UniqueField::PhoneNumber, mode));
        }
    }
    if let Some(holder) = store.find_by_email(&fields.email) {
        if mode.conflicts_with(&holder.id) {
            return Err(uniqueness_violation(UniqueField::Email, mode));
        }
    }
    Ok(())
}

/// Exactly ten ASCII digits, nothing else
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    phone_number.len() == PHONE_NUMBER_LEN && phone_number.bytes().all(|b| b.is_ascii_digit())
}

/// `local@domain` where local is `[A-Za-z0-9+_.-]+` and domain is non-empty
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && local
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'))
        }
        None => false,
    }
}

/// Administrator fields that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct AdminFields {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// The BusinessRule failure for a username or email another administrator holds
pub fn admin_uniqueness_violation(field: UniqueField) -> ServiceError {
    match field {
        UniqueField::Username => ServiceError::business_rule("Username already exists"),
        UniqueField::Email | UniqueField::PhoneNumber => {
            ServiceError::business_rule("Email already exists")
        }
    }
}

/// Validate an administrator candidate, then check uniqueness against `store`
///
/// Order: username, email, then username and email uniqueness.
pub fn validate_admin(
    store: &dyn AdminStore,
    candidate: &AdminInput,
    mode: ValidationMode<'_>,
) -> Result<AdminFields, ServiceError> {
    let username = non_blank(&candidate.username)
        .ok_or_else(|| ServiceError::business_rule("Username is required"))?;
    let email = non_blank(&candidate.email)
        .ok_or_else(|| ServiceError::business_rule("Email is required"))?;
    if !is_valid_email(email) {
        return Err(ServiceError::business_rule("Invalid email format"));
    }

    if let Some(holder) = store.find_by_username(username) {
        if mode.conflicts_with(&holder.id) {
            return Err(admin_uniqueness_violation(UniqueField::Username));
        }
    }
    if let Some(holder) = store.find_by_email(email) {
        if mode.conflicts_with(&holder.id) {
            return Err(admin_uniqueness_violation(UniqueField::Email));
        }
    }

    Ok(AdminFields {
        username: username.to_string(),
        email: email.to_string(),
        full_name: non_blank(&candidate.full_name).map(str::to_string),
    })
}

/// Game fields that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct GameFields {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub genre: String,
    pub status: GameStatus,
    pub min_age: i32,
}

/// Field-level game checks
///
/// Order: name, price, description, genre, status, minimum age. A missing
/// minimum age counts as zero.
pub fn validate_game(candidate: &GameInput) -> Result<GameFields, ServiceError> {
    let name = non_blank(&candidate.name)
        .ok_or_else(|| ServiceError::business_rule("Game name is required."))?;
    let name_len = name.trim().chars().count();
    if !(GAME_NAME_MIN_LEN..=GAME_NAME_MAX_LEN).contains(&name_len) {
        return Err(ServiceError::business_rule(
            "Game name must be between 2 and 100 characters.",
        ));
    }

    let price = candidate
        .price
        .ok_or_else(|| ServiceError::business_rule("Price is required."))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ServiceError::business_rule("Price cannot be negative."));
    }
    if price > max_price() {
        return Err(ServiceError::business_rule("Price cannot exceed 10000."));
    }

    let description = non_blank(&candidate.description)
        .ok_or_else(|| ServiceError::business_rule("Game description is required."))?;
    let description_len = description.trim().chars().count();
    if !(GAME_DESCRIPTION_MIN_LEN..=GAME_DESCRIPTION_MAX_LEN).contains(&description_len) {
        return Err(ServiceError::business_rule(
            "Description must be between 10 and 500 characters.",
        ));
    }

    let genre = non_blank(&candidate.genre)
        .ok_or_else(|| ServiceError::business_rule("Game genre is required."))?;

    let status = non_blank(&candidate.status)
        .ok_or_else(|| ServiceError::business_rule("Game status is required."))?
        .parse::<GameStatus>()
        .map_err(|_| {
            ServiceError::business_rule(
                "Invalid game status. Must be ACTIVE, INACTIVE, or MAINTENANCE.",
            )
        })?;

    let min_age = candidate.min_age.unwrap_or(0);
    if !(0..=MIN_AGE_LIMIT).contains(&min_age) {
        return Err(ServiceError::business_rule(
            "Minimum age must be between 0 and 18.",
        ));
    }

    Ok(GameFields {
        name: name.to_string(),
        price,
        description: description.to_string(),
        genre: genre.to_string(),
        status,
        min_age,
    })
}
