//! Donation aggregation service.

use std::sync::Arc;

use crate::domain::entities::{Collection, DonationStats};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

/// Service computing summary statistics over all donations.
///
/// Every call is a full scan of the donations collection; nothing is cached.
pub struct AdminService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
}

impl<S: DocumentStore + ?Sized> AdminService<S> {
    /// Creates a new admin service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Counts donations and sums their `quantity` fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors. No partial result is produced.
    pub async fn donation_stats(&self) -> Result<DonationStats, AppError> {
        let donations = self.store.stream_all(Collection::Donations).await?;
        Ok(DonationStats::from_records(&donations))
    }
}
