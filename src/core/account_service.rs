//! Member account service
//!
//! `MemberAccountService` owns the member lifecycle: create, lookup, update
//! and delete. Every write runs the validation engine before touching the
//! store, and the store re-checks phone/email uniqueness atomically with the
//! write, so a rejected candidate never leaves a partial record behind.
//!
//! Deleting a member does not cascade: recharges and transactions that
//! reference the member stay queryable.

use crate::core::traits::MemberStore;
use crate::core::validation::{uniqueness_violation, validate_member, MemberFields, ValidationMode};
use crate::types::member::{non_blank, DEFAULT_COUNTRY, MEMBER_ROLE};
use crate::types::{Gender, Member, MemberInput, ServiceError, StoreError};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Member account operations over a shared member store
#[derive(Clone)]
pub struct MemberAccountService {
    store: Arc<dyn MemberStore>,
}

impl MemberAccountService {
    /// Create a service backed by `store`
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        MemberAccountService { store }
    }

    /// Create a member
    ///
    /// Applies the creation defaults (balance 0, joining date now, country
    /// "India", gender OTHER) before validating in create mode. A new member
    /// is always active, whatever the candidate says.
    ///
    /// # Errors
    ///
    /// Returns `BusinessRule` if the candidate carries an id, violates a
    /// field rule, or reuses a phone number or email.
    pub fn create(&self, candidate: MemberInput) -> Result<Member, ServiceError> {
        if non_blank(&candidate.id).is_some() {
            warn!("Rejected member create carrying a client id");
            return Err(ServiceError::business_rule(
                "Member id is assigned by the server.",
            ));
        }

        let candidate = MemberInput {
            gender: non_blank(&candidate.gender)
                .map(str::to_string)
                .or_else(|| Some(Gender::Other.as_str().to_string())),
            ..candidate
        };

        let fields = validate_member(self.store.as_ref(), &candidate, ValidationMode::Create)
            .inspect_err(|e| warn!(reason = %e, "Rejected member create"))?;

        let now = Utc::now();
        let member = Member {
            id: String::new(),
            joining_date: candidate.joining_date.unwrap_or(now),
            active: true,
            address: candidate.address,
            city: candidate.city,
            state: candidate.state,
            zip_code: candidate.zip_code,
            country: candidate
                .country
                .filter(|c| !c.trim().is_empty())
                .or_else(|| Some(DEFAULT_COUNTRY.to_string())),
            role: MEMBER_ROLE.to_string(),
            date_of_birth: candidate.date_of_birth,
            profile_image_url: candidate.profile_image_url,
            created_at: now,
            updated_at: now,
            ..member_from_fields(fields)
        };

        let saved = self.persist(member, ValidationMode::Create)?;
        info!(member_id = %saved.id, "Created member");
        Ok(saved)
    }

    /// All members in store order
    pub fn find_all(&self) -> Vec<Member> {
        self.store.find_all()
    }

    /// Look up a member by id
    pub fn find_by_id(&self, id: &str) -> Result<Member, ServiceError> {
        self.store.find_by_id(id).ok_or_else(|| {
            warn!(member_id = %id, "Member lookup by id missed");
            ServiceError::not_found("Member", "id", id)
        })
    }

    /// Look up a member by exact email
    pub fn find_by_email(&self, email: &str) -> Result<Member, ServiceError> {
        self.store
            .find_by_email(email)
            .ok_or_else(|| ServiceError::not_found("Member", "email", email))
    }

    /// Look up a member by exact phone number
    pub fn find_by_phone(&self, phone_number: &str) -> Result<Member, ServiceError> {
        self.store
            .find_by_phone_number(phone_number)
            .ok_or_else(|| ServiceError::not_found("Member", "phone", phone_number))
    }

    /// Update a member
    ///
    /// The candidate's fields replace the stored ones wholesale; a missing
    /// balance counts as zero and a missing active flag as true. The id,
    /// joining date, creation time and role are never overwritten.
    ///
    /// # Errors
    ///
    /// * `NotFound` if no member has `id`, including when a concurrent
    ///   delete removes it before the write
    /// * `BusinessRule` if the overlaid record fails validation, including
    ///   a phone number or email held by another member
    pub fn update(&self, id: &str, candidate: MemberInput) -> Result<Member, ServiceError> {
        let existing = self.find_by_id(id)?;
        let mode = ValidationMode::Update { id };

        let fields = validate_member(self.store.as_ref(), &candidate, mode)
            .inspect_err(|e| warn!(member_id = %id, reason = %e, "Rejected member update"))?;

        let member = Member {
            id: existing.id,
            joining_date: existing.joining_date,
            created_at: existing.created_at,
            role: existing.role,
            active: candidate.active.unwrap_or(true),
            address: candidate.address,
            city: candidate.city,
            state: candidate.state,
            zip_code: candidate.zip_code,
            country: candidate.country,
            date_of_birth: candidate.date_of_birth,
            profile_image_url: candidate.profile_image_url,
            updated_at: existing.updated_at,
            ..member_from_fields(fields)
        };

        let saved = self.persist(member, mode)?;
        info!(member_id = %saved.id, "Updated member");
        Ok(saved)
    }

    /// Delete a member, leaving its recharges and transactions in place
    pub fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.delete_by_id(id) {
            warn!(member_id = %id, "Delete of missing member");
            return Err(ServiceError::not_found("Member", "id", id));
        }
        info!(member_id = %id, "Deleted member");
        Ok(())
    }

    // A store-level conflict means a concurrent write took the value after
    // the pre-check passed
    fn persist(&self, member: Member, mode: ValidationMode<'_>) -> Result<Member, ServiceError> {
        self.store.save(member).map_err(|error| {
            warn!(%error, "Store rejected member write");
            match error {
                StoreError::UniqueViolation { field, .. } => uniqueness_violation(field, mode),
                missing @ StoreError::Missing { .. } => missing.into(),
            }
        })
    }
}

// Member carrying the validated fields; the remaining fields are placeholders
// that every caller overrides
fn member_from_fields(fields: MemberFields) -> Member {
    let now = Utc::now();
    Member {
        id: String::new(),
        name: fields.name,
        phone_number: fields.phone_number,
        email: fields.email,
        balance: fields.balance,
        joining_date: now,
        active: true,
        address: None,
        city: None,
        state: None,
        zip_code: None,
        country: None,
        gender: fields.gender,
        role: MEMBER_ROLE.to_string(),
        date_of_birth: None,
        profile_image_url: None,
        created_at: now,
        updated_at: now,
    }
}
