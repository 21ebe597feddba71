use clap::Parser;

use crate::quantity::{emission::EmissionFactor, rate::KilowattHourRate};

#[derive(Parser)]
pub struct RateArgs {
    /// Flat electricity rate, ₹/kWh.
    #[clap(long, env = "ELECTRICITY_RATE", default_value = "6.5", value_parser = parse_rate)]
    pub rate: KilowattHourRate,

    /// Grid emission factor, kg CO₂ per kWh.
    #[clap(long, env = "EMISSION_FACTOR", default_value = "0.82")]
    pub emission_factor: EmissionFactor,
}

fn parse_rate(value: &str) -> Result<KilowattHourRate, String> {
    let rate: f64 = value.parse().map_err(|_| format!("{value:?} is not a number"))?;
    if (1.0..=20.0).contains(&rate) {
        Ok(KilowattHourRate(rate))
    } else {
        Err(format!("rate must be within 1.0–20.0 ₹/kWh, got {rate}"))
    }
}
