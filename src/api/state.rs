//! Shared handler state

use crate::core::{Services, Stores};

/// State cloned into every handler
///
/// Services hold `Arc` store handles, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
}

impl AppState {
    /// Wire every service to `stores`
    pub fn new(stores: &Stores) -> Self {
        AppState {
            services: Services::new(stores),
        }
    }

    /// State over fresh, empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(&Stores::in_memory())
    }
}
