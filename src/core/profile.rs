use bon::Builder;
use serde::Serialize;

use crate::{
    catalog::HouseCategory,
    quantity::{power::Kilowatts, time::Hours},
};

/// One household's appliance selection and daily usage hours.
///
/// Hour and power ranges are clamped by the input layer; the profile itself
/// trusts its values and never validates them.
#[derive(Builder, Clone, Copy, Debug, Serialize)]
pub struct UsageProfile {
    pub category: HouseCategory,

    #[builder(default = Hours::ZERO)]
    pub light_hours: Hours,

    #[builder(default = Hours::ZERO)]
    pub fan_hours: Hours,

    /// Daily usage hours, when a washing machine is present.
    pub washing_machine: Option<Hours>,

    /// Daily usage hours, when a refrigerator is present.
    pub refrigerator: Option<Hours>,

    pub air_conditioning: Option<AirConditioning>,
}

/// User-configurable air-conditioning setup, unlike the fixed-power appliances.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AirConditioning {
    pub count: u32,

    /// Per-unit power draw.
    pub power_each: Kilowatts,

    pub hours: Hours,
}

impl AirConditioning {
    /// Combined power draw of all the units.
    pub fn total_power(self) -> Kilowatts {
        self.power_each * f64::from(self.count)
    }
}
