//! Donation intake and query service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{
    Collection, Document, DocumentId, ExpiryPrediction, StoredDocument,
};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

/// Field matched by the provider name filter.
pub const PROVIDER_FIELD: &str = "providerName";
/// Field matched by the provider id filter.
pub const PROVIDER_ID_FIELD: &str = "providerId";

/// Criteria for listing donations. Empty values are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct DonationFilter<'a> {
    pub provider_name: Option<&'a str>,
    pub provider_id: Option<&'a str>,
}

impl<'a> DonationFilter<'a> {
    /// Keeps donations whose `providerName` equals `name`.
    pub fn by_provider_name(name: &'a str) -> Self {
        Self {
            provider_name: Some(name),
            ..Self::default()
        }
    }

    /// Keeps donations whose `providerId` equals `id`.
    pub fn by_provider_id(id: &'a str) -> Self {
        Self {
            provider_id: Some(id),
            ..Self::default()
        }
    }

    fn matches(&self, doc: &StoredDocument) -> bool {
        field_matches(doc, PROVIDER_FIELD, self.provider_name)
            && field_matches(doc, PROVIDER_ID_FIELD, self.provider_id)
    }
}

fn field_matches(doc: &StoredDocument, field: &str, expected: Option<&str>) -> bool {
    match expected.filter(|v| !v.is_empty()) {
        Some(v) => doc.str_field(field) == Some(v),
        None => true,
    }
}

/// Service for recording and listing donations.
///
/// Donation bodies are stored verbatim; no field is validated or defaulted.
pub struct DonationService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
}

impl<S: DocumentStore + ?Sized> DonationService<S> {
    /// Creates a new donation service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Appends a donation record to the donations collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create_donation(&self, donation: Document) -> Result<DocumentId, AppError> {
        let id = self.store.append(Collection::Donations, donation).await?;
        tracing::debug!(id = %id, "Donation added");
        Ok(id)
    }

    /// Lists donations, each with its identifier merged in under `id`.
    ///
    /// Each non-empty criterion of `filter` keeps only records whose field is a
    /// string exactly equal to it. Records without the field never match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_donations(
        &self,
        filter: DonationFilter<'_>,
    ) -> Result<Vec<Document>, AppError> {
        let donations = self
            .store
            .stream_all(Collection::Donations)
            .await?
            .into_iter()
            .filter(|doc| filter.matches(doc))
            .map(|doc| doc.into_record())
            .collect();

        Ok(donations)
    }

    /// Predicts the remaining shelf life of one donation as of `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id and
    /// [`AppError::Internal`] on store errors.
    pub async fn predict_expiry(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<ExpiryPrediction, AppError> {
        let donation = self
            .store
            .stream_all(Collection::Donations)
            .await?
            .into_iter()
            .find(|doc| doc.id == id)
            .ok_or_else(|| AppError::not_found("Donation not found", json!({ "id": id })))?;

        Ok(ExpiryPrediction::for_record(&donation, now))
    }
}
