//! Administrator account service
//!
//! Administrators are identified by a unique username and a unique email.
//! The username lookup only sees active administrators; it backs the admin
//! login lookup, which checks no credential.

use crate::core::traits::AdminStore;
use crate::core::validation::{admin_uniqueness_violation, validate_admin, ValidationMode};
use crate::types::admin::ADMIN_ROLE;
use crate::types::member::non_blank;
use crate::types::{Admin, AdminInput, ServiceError, StoreError};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Administrator operations over a shared admin store
#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn AdminStore>,
}

impl AdminService {
    pub fn new(store: Arc<dyn AdminStore>) -> Self {
        AdminService { store }
    }

    /// Create an active administrator
    ///
    /// # Errors
    ///
    /// Returns `BusinessRule` if the candidate carries an id, misses a
    /// username or email, or reuses either.
    pub fn create(&self, candidate: AdminInput) -> Result<Admin, ServiceError> {
        if non_blank(&candidate.id).is_some() {
            return Err(ServiceError::business_rule("Admin id is assigned by the server."));
        }

        let fields = validate_admin(self.store.as_ref(), &candidate, ValidationMode::Create)
            .inspect_err(|e| warn!(reason = %e, "Rejected admin create"))?;

        let now = Utc::now();
        let admin = Admin {
            id: String::new(),
            username: fields.username,
            email: fields.email,
            full_name: fields.full_name,
            role: ADMIN_ROLE.to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        };

        let saved = self.persist(admin)?;
        info!(admin_id = %saved.id, username = %saved.username, "Created admin");
        Ok(saved)
    }

    pub fn find_all(&self) -> Vec<Admin> {
        self.store.find_all()
    }

    pub fn find_by_id(&self, id: &str) -> Result<Admin, ServiceError> {
        self.store
            .find_by_id(id)
            .ok_or_else(|| ServiceError::not_found("Admin", "id", id))
    }

    /// Look up an active administrator by exact username
    pub fn find_by_username(&self, username: &str) -> Result<Admin, ServiceError> {
        self.store
            .find_by_username(username)
            .filter(|admin| admin.active)
            .ok_or_else(|| ServiceError::not_found("Admin", "username", username))
    }

    /// Replace username, email and full name; role, status and creation
    /// time are kept
    pub fn update(&self, id: &str, candidate: AdminInput) -> Result<Admin, ServiceError> {
        let existing = self.find_by_id(id)?;

        let fields = validate_admin(self.store.as_ref(), &candidate, ValidationMode::Update { id })
            .inspect_err(|e| warn!(admin_id = %id, reason = %e, "Rejected admin update"))?;

        let admin = Admin {
            username: fields.username,
            email: fields.email,
            full_name: fields.full_name,
            ..existing
        };

        let saved = self.persist(admin)?;
        info!(admin_id = %saved.id, "Updated admin");
        Ok(saved)
    }

    pub fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.delete_by_id(id) {
            return Err(ServiceError::not_found("Admin", "id", id));
        }
        info!(admin_id = %id, "Deleted admin");
        Ok(())
    }

    fn persist(&self, admin: Admin) -> Result<Admin, ServiceError> {
        self.store.save(admin).map_err(|error| {
            warn!(%error, "Store rejected admin write");
            match error {
                StoreError::UniqueViolation { field, .. } => admin_uniqueness_violation(field),
                missing @ StoreError::Missing { .. } => missing.into(),
            }
        })
    }
}
