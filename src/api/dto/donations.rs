//! DTOs for donation endpoints.

use serde::Serialize;

use crate::application::services::DonationFilter;
use crate::domain::entities::{ExpiryFactor, ExpiryPrediction, Urgency};

/// Query parameters for listing donations.
///
/// Built from the raw key/value pairs so that a repeated key resolves to its
/// first occurrence instead of failing.
#[derive(Debug, Default, PartialEq)]
pub struct DonationsQuery {
    /// Keep only donations whose `providerName` equals this value exactly.
    pub provider: Option<String>,
    /// Keep only donations whose `providerId` equals this value exactly.
    pub provider_id: Option<String>,
}

impl DonationsQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "provider" => &mut query.provider,
                "providerId" => &mut query.provider_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }

    pub fn filter(&self) -> DonationFilter<'_> {
        DonationFilter {
            provider_name: self.provider.as_deref(),
            provider_id: self.provider_id.as_deref(),
        }
    }
}

/// Response body for `GET /donations/{id}/expiry`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryResponse {
    pub id: String,
    pub remaining_hours: f64,
    pub urgency: Urgency,
    pub explanations: Vec<ExpiryFactor>,
}

impl ExpiryResponse {
    pub fn new(id: String, prediction: ExpiryPrediction) -> Self {
        Self {
            id,
            remaining_hours: prediction.remaining_hours,
            urgency: prediction.urgency,
            explanations: prediction.explanations,
        }
    }
}
