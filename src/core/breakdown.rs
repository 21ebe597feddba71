use std::fmt;

use serde::Serialize;

use crate::{
    catalog::{REFRIGERATOR_POWER, WASHING_MACHINE_POWER},
    core::profile::UsageProfile,
    quantity::{energy::KilowattHours, power::Kilowatts, time::Hours},
};

/// Appliance classes that can contribute to the daily total.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplianceClass {
    Lights,
    Fans,
    WashingMachine,
    Refrigerator,
    AirConditioning,
}

impl fmt::Display for ApplianceClass {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lights => write!(formatter, "Lights"),
            Self::Fans => write!(formatter, "Fans"),
            Self::WashingMachine => write!(formatter, "Washing machine"),
            Self::Refrigerator => write!(formatter, "Refrigerator"),
            Self::AirConditioning => write!(formatter, "Air conditioning"),
        }
    }
}

/// One appliance class's contribution to the daily total.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BreakdownEntry {
    pub class: ApplianceClass,

    /// Combined power draw of the whole class, count × per-unit power.
    pub power: Kilowatts,

    pub hours: Hours,

    pub energy: KilowattHours,
}

impl BreakdownEntry {
    fn new(class: ApplianceClass, power: Kilowatts, hours: Hours) -> Self {
        Self { class, power, hours, energy: power * hours }
    }
}

/// Per-appliance-class decomposition of one day's energy consumption.
#[derive(Clone, Debug, Serialize)]
pub struct DailyBreakdown {
    /// Disabled optional appliances produce no entry at all.
    pub entries: Vec<BreakdownEntry>,

    pub total: KilowattHours,
}

impl DailyBreakdown {
    /// Proportion (0..=1) of the daily total consumed by the given entry.
    pub fn share_of(&self, entry: &BreakdownEntry) -> f64 {
        if self.total == KilowattHours::ZERO { 0.0 } else { entry.energy.0 / self.total.0 }
    }
}

impl UsageProfile {
    /// Decompose the day into per-class energy contributions.
    ///
    /// Pure and stateless: the only inputs are the profile itself and the
    /// catalog constants. Never fails: zero counts and hours simply zero out
    /// their term.
    pub fn daily_breakdown(&self) -> DailyBreakdown {
        let fixed = self.category.fixed_appliances();

        let mut entries = Vec::with_capacity(5);
        entries.push(BreakdownEntry::new(
            ApplianceClass::Lights,
            fixed.total_light_power(),
            self.light_hours,
        ));
        entries.push(BreakdownEntry::new(
            ApplianceClass::Fans,
            fixed.total_fan_power(),
            self.fan_hours,
        ));
        if let Some(hours) = self.washing_machine {
            entries.push(BreakdownEntry::new(
                ApplianceClass::WashingMachine,
                WASHING_MACHINE_POWER,
                hours,
            ));
        }
        if let Some(hours) = self.refrigerator {
            entries.push(BreakdownEntry::new(
                ApplianceClass::Refrigerator,
                REFRIGERATOR_POWER,
                hours,
            ));
        }
        if let Some(air_conditioning) = self.air_conditioning {
            entries.push(BreakdownEntry::new(
                ApplianceClass::AirConditioning,
                air_conditioning.total_power(),
                air_conditioning.hours,
            ));
        }

        let total = entries.iter().map(|entry| entry.energy).sum();
        DailyBreakdown { entries, total }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{catalog::HouseCategory, core::profile::AirConditioning};

    fn scaled(profile: &UsageProfile, factor: f64) -> UsageProfile {
        let mut scaled = *profile;
        scaled.light_hours = scaled.light_hours * factor;
        scaled.fan_hours = scaled.fan_hours * factor;
        scaled.washing_machine = scaled.washing_machine.map(|hours| hours * factor);
        scaled.refrigerator = scaled.refrigerator.map(|hours| hours * factor);
        scaled.air_conditioning = scaled.air_conditioning.map(|mut unit| {
            unit.hours = unit.hours * factor;
            unit
        });
        scaled
    }

    /// Small house, lights 8 h and fans 12 h only: 2×0.4×8 + 2×0.8×12 = 25.6 kWh.
    #[test]
    fn small_house_fixed_appliances_only() {
        let breakdown = UsageProfile::builder()
            .category(HouseCategory::Small)
            .light_hours(Hours(8.0))
            .fan_hours(Hours(12.0))
            .build()
            .daily_breakdown();
        assert_eq!(breakdown.entries.len(), 2);
        assert_abs_diff_eq!(breakdown.total.0, 25.6, epsilon = 1e-9);
    }

    /// Medium house, refrigerator 24 h only: 4.0×24 = 96 kWh.
    #[test]
    fn medium_house_refrigerator_only() {
        let breakdown = UsageProfile::builder()
            .category(HouseCategory::Medium)
            .refrigerator(Hours(24.0))
            .build()
            .daily_breakdown();
        assert_abs_diff_eq!(breakdown.total.0, 96.0, epsilon = 1e-9);
    }

    /// Large house, 2 AC units of 3 kW for 8 h only: 2×3×8 = 48 kWh.
    #[test]
    fn large_house_air_conditioning_only() {
        let breakdown = UsageProfile::builder()
            .category(HouseCategory::Large)
            .air_conditioning(AirConditioning {
                count: 2,
                power_each: Kilowatts(3.0),
                hours: Hours(8.0),
            })
            .build()
            .daily_breakdown();
        assert_abs_diff_eq!(breakdown.total.0, 48.0, epsilon = 1e-9);
    }

    /// All optional appliances disabled and all hours zero.
    #[test]
    fn all_zero_profile_totals_zero() {
        let breakdown =
            UsageProfile::builder().category(HouseCategory::Large).build().daily_breakdown();
        assert_eq!(breakdown.total, KilowattHours::ZERO);
        for entry in &breakdown.entries {
            assert_eq!(entry.energy, KilowattHours::ZERO);
        }
    }

    /// Scaling every class's hours by a factor scales the total by the same factor.
    #[test]
    fn total_is_linear_in_hours() {
        let profile = UsageProfile::builder()
            .category(HouseCategory::Medium)
            .light_hours(Hours(6.0))
            .fan_hours(Hours(10.0))
            .washing_machine(Hours(1.0))
            .refrigerator(Hours(24.0))
            .air_conditioning(AirConditioning {
                count: 3,
                power_each: Kilowatts(2.5),
                hours: Hours(4.0),
            })
            .build();
        let total = profile.daily_breakdown().total;
        let scaled_total = scaled(&profile, 3.0).daily_breakdown().total;
        assert_abs_diff_eq!(scaled_total.0, total.0 * 3.0, epsilon = 1e-9);
    }

    /// Disabling an optional appliance removes exactly its contribution.
    #[test]
    fn disabling_removes_exactly_one_contribution() {
        let with = UsageProfile::builder()
            .category(HouseCategory::Small)
            .light_hours(Hours(8.0))
            .fan_hours(Hours(12.0))
            .refrigerator(Hours(24.0))
            .build();
        let mut without = with;
        without.refrigerator = None;

        let delta = with.daily_breakdown().total - without.daily_breakdown().total;
        assert_abs_diff_eq!(delta.0, 4.0 * 24.0, epsilon = 1e-9);
    }

    #[test]
    fn shares_sum_to_one() {
        let breakdown = UsageProfile::builder()
            .category(HouseCategory::Small)
            .light_hours(Hours(8.0))
            .fan_hours(Hours(12.0))
            .washing_machine(Hours(1.0))
            .build()
            .daily_breakdown();
        let sum: f64 = breakdown.entries.iter().map(|entry| breakdown.share_of(entry)).sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn share_of_empty_total_is_zero() {
        let breakdown =
            UsageProfile::builder().category(HouseCategory::Small).build().daily_breakdown();
        assert_abs_diff_eq!(breakdown.share_of(&breakdown.entries[0]), 0.0);
    }
}
