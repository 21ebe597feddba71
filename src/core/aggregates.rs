use serde::Serialize;

use crate::{
    core::breakdown::DailyBreakdown,
    quantity::{
        cost::Cost,
        emission::{EmissionFactor, Kilograms},
        energy::KilowattHours,
        rate::KilowattHourRate,
    },
};

pub const DAYS_PER_WEEK: f64 = 7.0;

/// Fixed 30-day month approximation, not calendar-aware.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Everything derived from one day's breakdown: linear weekly/monthly
/// extrapolations, costs at a flat rate, and the CO₂ estimate.
#[derive(Clone, Debug, Serialize)]
pub struct ConsumptionResult {
    pub daily_energy: KilowattHours,
    pub weekly_energy: KilowattHours,
    pub monthly_energy: KilowattHours,
    pub daily_cost: Cost,
    pub weekly_cost: Cost,
    pub monthly_cost: Cost,
    pub daily_emissions: Kilograms,
    pub breakdown: DailyBreakdown,
}

impl ConsumptionResult {
    /// Derive the aggregates from a daily breakdown.
    ///
    /// The rate is not validated: a non-positive rate degenerates to a zero
    /// or negative cost rather than failing. Bounding the rate is the input
    /// layer's job.
    pub fn derive(
        breakdown: DailyBreakdown,
        rate: KilowattHourRate,
        emission_factor: EmissionFactor,
    ) -> Self {
        let daily_energy = breakdown.total;
        let weekly_energy = daily_energy * DAYS_PER_WEEK;
        let monthly_energy = daily_energy * DAYS_PER_MONTH;
        Self {
            daily_energy,
            weekly_energy,
            monthly_energy,
            daily_cost: daily_energy * rate,
            weekly_cost: weekly_energy * rate,
            monthly_cost: monthly_energy * rate,
            daily_emissions: daily_energy * emission_factor,
            breakdown,
        }
    }
}
