//! Error types for the GameZone account services
//!
//! Two failure kinds cover every core operation:
//!
//! - **NotFound**: the requested id, phone number or email has no matching record
//! - **BusinessRule**: a validation or uniqueness constraint rejected a write
//!
//! Both are local and non-retryable. The HTTP boundary is the only place that
//! turns them into status codes (see `api::error`).
//!
//! `StoreError` is the narrower failure the entity store reports when its
//! unique indexes reject a write, or when a replacement targets a record that
//! was deleted in the meantime. Services translate it into a BusinessRule or
//! a NotFound.

use thiserror::Error;

/// Failure returned by every service operation
///
/// The message is human-readable and is surfaced verbatim to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No record matches the requested identifier or unique attribute
    #[error("{0}")]
    NotFound(String),

    /// A validation or uniqueness rule prevented the write
    #[error("{0}")]
    BusinessRule(String),
}

impl ServiceError {
    /// Create a NotFound error in the form `"<kind> not found with <field>: <value>"`
    pub fn not_found(kind: &str, field: &str, value: &str) -> Self {
        ServiceError::NotFound(format!("{} not found with {}: {}", kind, field, value))
    }

    /// Create a BusinessRule error
    pub fn business_rule(message: impl Into<String>) -> Self {
        ServiceError::BusinessRule(message.into())
    }

    /// Whether this is a NotFound failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }

    /// The human-readable reason
    pub fn message(&self) -> &str {
        match self {
            ServiceError::NotFound(message) | ServiceError::BusinessRule(message) => message,
        }
    }
}

/// Account attribute guarded by a store-level unique index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    PhoneNumber,
    Email,
    Username,
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniqueField::PhoneNumber => f.write_str("phone number"),
            UniqueField::Email => f.write_str("email"),
            UniqueField::Username => f.write_str("username"),
        }
    }
}

/// Write rejected by the entity store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Another record already holds the value of a unique attribute
    #[error("Unique {field} '{value}' is already held by {holder}")]
    UniqueViolation {
        /// The indexed attribute
        field: UniqueField,
        /// The conflicting value
        value: String,
        /// Id of the record currently holding the value
        holder: String,
    },

    /// A replacement targeted an id that is no longer stored
    #[error("{kind} {id} no longer exists")]
    Missing { kind: &'static str, id: String },
}

impl StoreError {
    /// Create a UniqueViolation error
    pub fn unique_violation(field: UniqueField, value: &str, holder: &str) -> Self {
        StoreError::UniqueViolation {
            field,
            value: value.to_string(),
            holder: holder.to_string(),
        }
    }

    /// Create a Missing error
    pub fn missing(kind: &'static str, id: &str) -> Self {
        StoreError::Missing {
            kind,
            id: id.to_string(),
        }
    }
}

// A conflict reported on an insert reads the same as the create-time pre-check
impl From<StoreError> for ServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::UniqueViolation { field, .. } => match field {
                UniqueField::PhoneNumber => {
                    ServiceError::business_rule("Phone number already exists.")
                }
                UniqueField::Email => ServiceError::business_rule("Email already exists."),
                UniqueField::Username => ServiceError::business_rule("Username already exists"),
            },
            StoreError::Missing { kind, id } => ServiceError::not_found(kind, "id", &id),
        }
    }
}
