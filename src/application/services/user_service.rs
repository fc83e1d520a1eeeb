//! User registration service.

use std::sync::Arc;

use crate::domain::entities::{Collection, Document, DocumentId};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

/// Service for registering users.
///
/// Registration stores the submitted object as-is: there are no required
/// fields, no duplicate detection, and no credential handling.
pub struct UserService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
}

impl<S: DocumentStore + ?Sized> UserService<S> {
    /// Creates a new user service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Appends a user record to the users collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn register(&self, user: Document) -> Result<DocumentId, AppError> {
        let id = self.store.append(Collection::Users, user).await?;
        tracing::debug!(id = %id, "User registered");
        Ok(id)
    }
}
