//! DTOs for the admin statistics endpoint.

use serde::Serialize;
use serde_json::Number;

use crate::domain::entities::DonationStats;

/// Summary of the donations collection.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_donations: u64,
    pub total_kg: Number,
}

impl From<DonationStats> for StatsResponse {
    fn from(stats: DonationStats) -> Self {
        Self {
            total_donations: stats.total_donations,
            total_kg: stats.total_kg,
        }
    }
}
