use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{
    catalog::HouseCategory,
    core::aggregates::ConsumptionResult,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Snapshot of one computed result together with the inputs that produced it.
#[derive(Clone, Debug, Serialize)]
pub struct UsageRecord {
    pub recorded_at: DateTime<Local>,
    pub name: String,
    pub category: HouseCategory,
    pub daily_energy: KilowattHours,
    pub daily_cost: Cost,
}

impl UsageRecord {
    pub fn new(name: impl Into<String>, category: HouseCategory, result: &ConsumptionResult) -> Self {
        Self {
            recorded_at: Local::now(),
            name: name.into(),
            category,
            daily_energy: result.daily_energy,
            daily_cost: result.daily_cost,
        }
    }
}

/// Append-only store of results computed during one session.
///
/// Owned by the caller and passed by reference to whoever appends or reads.
/// The calculation core never holds onto it. Unbounded and process-lifetime only.
#[derive(Debug, Default, Serialize)]
pub struct UsageHistory {
    records: Vec<UsageRecord>,
}

impl UsageHistory {
    pub fn push(&mut self, record: UsageRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Summary statistics over the recorded daily figures, `None` when empty.
    #[must_use]
    pub fn statistics(&self) -> Option<Statistics> {
        let first = self.records.first()?.daily_energy;
        let (sum, highest, lowest) = self.records.iter().skip(1).fold(
            (first, first, first),
            |(sum, highest, lowest), record| {
                (
                    sum + record.daily_energy,
                    highest.max(record.daily_energy),
                    lowest.min(record.daily_energy),
                )
            },
        );
        #[allow(clippy::cast_precision_loss)]
        let mean_daily_energy = sum / self.records.len() as f64;
        Some(Statistics {
            mean_daily_energy,
            highest_daily_energy: highest,
            lowest_daily_energy: lowest,
            n_records: self.records.len(),
        })
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Statistics {
    pub mean_daily_energy: KilowattHours,
    pub highest_daily_energy: KilowattHours,
    pub lowest_daily_energy: KilowattHours,
    pub n_records: usize,
}
