//! Aggregate statistics over the donations collection.

use serde_json::{Number, Value};

use super::StoredDocument;

/// Field summed into [`DonationStats::total_kg`].
pub const QUANTITY_FIELD: &str = "quantity";

/// Count and total quantity of all donations.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationStats {
    pub total_donations: u64,
    pub total_kg: Number,
}

impl DonationStats {
    /// Aggregates a full scan of donation records.
    ///
    /// Only JSON numbers contribute to `total_kg`; anything else, including a
    /// missing field, counts as zero. The total stays an integer while every
    /// contributing quantity is one.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a StoredDocument>) -> Self {
        let mut total_donations = 0u64;
        let mut sum = QuantitySum::default();

        for record in records {
            total_donations += 1;
            if let Some(Value::Number(quantity)) = record.body.get(QUANTITY_FIELD) {
                sum.add(quantity);
            }
        }

        Self {
            total_donations,
            total_kg: sum.into_number(),
        }
    }
}

#[derive(Debug, Default)]
struct QuantitySum {
    int: i64,
    float: f64,
    is_float: bool,
}

impl QuantitySum {
    fn add(&mut self, quantity: &Number) {
        if !self.is_float
            && let Some(n) = quantity.as_i64()
            && let Some(total) = self.int.checked_add(n)
        {
            self.int = total;
            return;
        }

        if !self.is_float {
            self.is_float = true;
            self.float = self.int as f64;
        }
        self.float += quantity.as_f64().unwrap_or(0.0);
    }

    fn into_number(self) -> Number {
        if self.is_float {
            // NaN and infinities have no JSON representation
            Number::from_f64(self.float).unwrap_or_else(|| Number::from(0))
        } else {
            Number::from(self.int)
        }
    }
}
