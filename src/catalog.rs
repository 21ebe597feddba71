use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::quantity::power::Kilowatts;

/// Per-unit power draw of one light point.
pub const LIGHT_POWER: Kilowatts = Kilowatts(0.4);

/// Per-unit power draw of one ceiling fan.
pub const FAN_POWER: Kilowatts = Kilowatts(0.8);

/// Single unit, not configurable.
pub const WASHING_MACHINE_POWER: Kilowatts = Kilowatts(2.0);

/// Single unit, not configurable.
pub const REFRIGERATOR_POWER: Kilowatts = Kilowatts(4.0);

/// Coarse classification of home size, used to select the default counts of fixed appliances.
///
/// The set is closed: anything else is rejected at parse time with [`UnknownCategoryError`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum HouseCategory {
    /// 1 BHK.
    Small,

    /// 2 BHK.
    Medium,

    /// 3 BHK.
    Large,
}

impl HouseCategory {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Look up the fixed appliance configuration for this category.
    ///
    /// The match is exhaustive, so adding a category without extending
    /// the table is a compile error.
    pub const fn fixed_appliances(self) -> FixedAppliances {
        match self {
            Self::Small => FixedAppliances { lights: 2, fans: 2 },
            Self::Medium => FixedAppliances { lights: 3, fans: 3 },
            Self::Large => FixedAppliances { lights: 4, fans: 4 },
        }
    }
}

impl fmt::Display for HouseCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => write!(formatter, "small (1 BHK)"),
            Self::Medium => write!(formatter, "medium (2 BHK)"),
            Self::Large => write!(formatter, "large (3 BHK)"),
        }
    }
}

impl FromStr for HouseCategory {
    type Err = UnknownCategoryError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_ascii_lowercase().as_str() {
            "small" | "1bhk" => Ok(Self::Small),
            "medium" | "2bhk" => Ok(Self::Medium),
            "large" | "3bhk" => Ok(Self::Large),
            _ => Err(UnknownCategoryError(label.to_string())),
        }
    }
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown house category: {0:?}")]
pub struct UnknownCategoryError(pub String);

/// Fixed appliance counts of a house category. Per-unit powers are the same for every category.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct FixedAppliances {
    pub lights: u32,
    pub fans: u32,
}

impl FixedAppliances {
    /// Combined power draw of all the light points.
    pub fn total_light_power(self) -> Kilowatts {
        LIGHT_POWER * f64::from(self.lights)
    }

    /// Combined power draw of all the fans.
    pub fn total_fan_power(self) -> Kilowatts {
        FAN_POWER * f64::from(self.fans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify the fixed table from the catalog contract.
    #[test]
    fn fixed_table() {
        assert_eq!(
            HouseCategory::Small.fixed_appliances(),
            FixedAppliances { lights: 2, fans: 2 },
        );
        assert_eq!(
            HouseCategory::Medium.fixed_appliances(),
            FixedAppliances { lights: 3, fans: 3 },
        );
        assert_eq!(
            HouseCategory::Large.fixed_appliances(),
            FixedAppliances { lights: 4, fans: 4 },
        );
    }

    #[test]
    fn lookup_is_deterministic() {
        for category in HouseCategory::ALL {
            assert_eq!(category.fixed_appliances(), category.fixed_appliances());
        }
    }

    #[test]
    fn class_powers() {
        let fixed = HouseCategory::Small.fixed_appliances();
        assert_eq!(fixed.total_light_power(), Kilowatts(0.8));
        assert_eq!(fixed.total_fan_power(), Kilowatts(1.6));
    }

    #[test]
    fn parse_known_labels() {
        assert_eq!("small".parse(), Ok(HouseCategory::Small));
        assert_eq!("Medium".parse(), Ok(HouseCategory::Medium));
        assert_eq!("3bhk".parse(), Ok(HouseCategory::Large));
    }

    /// A label outside the closed set must fail loudly, not default silently.
    #[test]
    fn parse_unknown_label() {
        assert_eq!(
            "mansion".parse::<HouseCategory>(),
            Err(UnknownCategoryError("mansion".to_string())),
        );
    }
}
