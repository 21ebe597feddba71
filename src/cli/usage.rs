use clap::Parser;

use crate::{
    catalog::HouseCategory,
    core::profile::{AirConditioning, UsageProfile},
    quantity::{power::Kilowatts, time::Hours},
};

/// Appliance selection and daily usage hours, shared by the estimation commands.
///
/// All numeric ranges are clamped here: the calculation core trusts them.
#[derive(Parser)]
pub struct UsageArgs {
    /// Daily lighting hours.
    #[clap(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(0..=24))]
    pub light_hours: u8,

    /// Daily fan hours.
    #[clap(long, default_value_t = 12, value_parser = clap::value_parser!(u8).range(0..=24))]
    pub fan_hours: u8,

    /// Washing machine present (fixed 2 kW unit).
    #[clap(long)]
    pub washing_machine: bool,

    /// Daily washing machine hours.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=8))]
    pub washing_machine_hours: u8,

    /// Refrigerator present (fixed 4 kW unit).
    #[clap(long)]
    pub fridge: bool,

    /// Daily refrigerator hours.
    #[clap(long, default_value_t = 24, value_parser = clap::value_parser!(u8).range(0..=24))]
    pub fridge_hours: u8,

    /// Air conditioning present.
    #[clap(long)]
    pub ac: bool,

    /// Number of air-conditioning units.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub ac_count: u8,

    /// Per-unit air-conditioning power, kW.
    #[clap(long, default_value_t = 3.0, value_parser = parse_ac_power)]
    pub ac_power: f64,

    /// Daily air-conditioning hours.
    #[clap(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(0..=24))]
    pub ac_hours: u8,
}

impl UsageArgs {
    pub fn profile(&self, category: HouseCategory) -> UsageProfile {
        UsageProfile::builder()
            .category(category)
            .light_hours(Hours::from(self.light_hours))
            .fan_hours(Hours::from(self.fan_hours))
            .maybe_washing_machine(
                self.washing_machine.then(|| Hours::from(self.washing_machine_hours)),
            )
            .maybe_refrigerator(self.fridge.then(|| Hours::from(self.fridge_hours)))
            .maybe_air_conditioning(self.ac.then(|| AirConditioning {
                count: u32::from(self.ac_count),
                power_each: Kilowatts(self.ac_power),
                hours: Hours::from(self.ac_hours),
            }))
            .build()
    }
}

fn parse_ac_power(value: &str) -> Result<f64, String> {
    let power: f64 = value.parse().map_err(|_| format!("{value:?} is not a number"))?;
    if (1.0..=5.0).contains(&power) {
        Ok(power)
    } else {
        Err(format!("AC power must be within 1.0–5.0 kW, got {power}"))
    }
}
