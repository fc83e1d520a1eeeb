//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AdminService, DonationService, UserService};
use crate::domain::repositories::DocumentStore;

/// Handles shared by all requests.
///
/// The store is initialized once at startup and never torn down while the
/// process runs. Handlers reach it only through the services below.
#[derive(Clone)]
pub struct AppState {
    pub donation_service: Arc<DonationService<dyn DocumentStore>>,
    pub admin_service: Arc<AdminService<dyn DocumentStore>>,
    pub user_service: Arc<UserService<dyn DocumentStore>>,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Builds every service on top of one store handle.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            donation_service: Arc::new(DonationService::new(store.clone())),
            admin_service: Arc::new(AdminService::new(store.clone())),
            user_service: Arc::new(UserService::new(store.clone())),
            store,
        }
    }
}
