//! Shelf-life prediction for donated food.
//!
//! The estimate is derived from three donation fields, all optional:
//!
//! - `type` - food category, looked up in [`base_shelf_life_hours`]
//! - `storage` - one of [`StorageCondition`]'s labels
//! - `prepDate` - when the food was prepared
//!
//! Nothing is persisted; a prediction is computed on every read.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use super::StoredDocument;

pub const FOOD_TYPE_FIELD: &str = "type";
pub const STORAGE_FIELD: &str = "storage";
pub const PREP_DATE_FIELD: &str = "prepDate";

/// Shelf life assumed for unknown or missing food types.
pub const DEFAULT_SHELF_LIFE_HOURS: f64 = 12.0;

/// Below this many remaining hours urgency is [`Urgency::High`].
const HIGH_URGENCY_HOURS: f64 = 4.0;
/// Below this many remaining hours urgency is [`Urgency::Medium`].
const MEDIUM_URGENCY_HOURS: f64 = 12.0;

/// Base shelf life of a known food category, in hours.
pub fn base_shelf_life_hours(food_type: &str) -> Option<f64> {
    match food_type {
        "Cooked Meal" => Some(6.0),
        "Bakery Items" => Some(24.0),
        "Fruits & Vegetables" => Some(48.0),
        "Dairy Products" => Some(12.0),
        "Canned Goods" => Some(720.0),
        "Meats & Poultry" => Some(4.0),
        _ => None,
    }
}

/// How the donated food is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageCondition {
    RoomTemp,
    Refrigerated,
    Frozen,
}

impl StorageCondition {
    /// Parses the label used in donation records (`"Room Temp"`, `"Refrigerated"`, `"Frozen"`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Room Temp" => Some(Self::RoomTemp),
            "Refrigerated" => Some(Self::Refrigerated),
            "Frozen" => Some(Self::Frozen),
            _ => None,
        }
    }

    /// Shelf-life multiplier over room temperature.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::RoomTemp => 1.0,
            Self::Refrigerated => 4.0,
            Self::Frozen => 10.0,
        }
    }
}

/// Pickup urgency derived from the remaining shelf life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    fn from_remaining_hours(hours: f64) -> Self {
        if hours < HIGH_URGENCY_HOURS {
            Self::High
        } else if hours < MEDIUM_URGENCY_HOURS {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One input of the prediction and its contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryFactor {
    pub factor: &'static str,
    pub impact: String,
    pub score: f64,
}

/// Estimated remaining shelf life of a donation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryPrediction {
    /// Hours left, never negative, rounded to one decimal.
    pub remaining_hours: f64,
    pub urgency: Urgency,
    pub explanations: Vec<ExpiryFactor>,
}

impl ExpiryPrediction {
    /// Predicts expiry from raw inputs.
    ///
    /// Unknown food types get [`DEFAULT_SHELF_LIFE_HOURS`]; unknown storage
    /// labels get a multiplier of 1.
    pub fn predict(
        food_type: &str,
        storage: &str,
        prepared_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let base_hours = base_shelf_life_hours(food_type).unwrap_or(DEFAULT_SHELF_LIFE_HOURS);
        let multiplier =
            StorageCondition::from_label(storage).map_or(1.0, StorageCondition::multiplier);

        let elapsed_hours = (now - prepared_at).num_seconds() as f64 / 3600.0;
        let remaining_hours = (base_hours * multiplier - elapsed_hours).max(0.0);

        let explanations = vec![
            ExpiryFactor {
                factor: "Food Type Sensitivity",
                impact: format!("Base shelf life for {food_type} is {base_hours} hours."),
                score: base_hours,
            },
            ExpiryFactor {
                factor: "Storage Optimization",
                impact: format!("{storage} storage increases shelf life by {multiplier}x."),
                score: multiplier,
            },
            ExpiryFactor {
                factor: "Freshness Decay",
                impact: format!("{elapsed_hours:.1} hours have passed since preparation."),
                score: -elapsed_hours,
            },
        ];

        Self {
            remaining_hours: round_tenth(remaining_hours),
            urgency: Urgency::from_remaining_hours(remaining_hours),
            explanations,
        }
    }

    /// Predicts expiry for a stored donation.
    ///
    /// A missing or unparseable `prepDate` falls back to the record's creation time.
    pub fn for_record(record: &StoredDocument, now: DateTime<Utc>) -> Self {
        let prepared_at = record
            .str_field(PREP_DATE_FIELD)
            .and_then(parse_prep_date)
            .unwrap_or(record.created_at);

        Self::predict(
            record.str_field(FOOD_TYPE_FIELD).unwrap_or_default(),
            record.str_field(STORAGE_FIELD).unwrap_or_default(),
            prepared_at,
            now,
        )
    }
}

/// Parses RFC 3339 timestamps and zone-less `YYYY-MM-DDTHH:MM[:SS]` values (read as UTC).
fn parse_prep_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
