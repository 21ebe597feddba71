use crate::quantity::{cost::Cost, energy::KilowattHours};

quantity!(
    /// Flat electricity tariff.
    KilowattHourRate, via: f64, suffix: "₹/kWh", precision: 2
);

implement_mul!(KilowattHourRate, KilowattHours, Cost);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_energy_times_rate() {
        assert_eq!(KilowattHours(48.0) * KilowattHourRate(6.5), Cost(312.0));
    }
}
