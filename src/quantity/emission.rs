use crate::quantity::energy::KilowattHours;

quantity!(Kilograms, via: f64, suffix: "kg", precision: 2);

quantity!(
    /// Estimated CO₂ mass emitted per unit of grid energy consumed.
    EmissionFactor, via: f64, suffix: "kg/kWh", precision: 2
);

impl EmissionFactor {
    /// Average for the Indian grid.
    pub const INDIA_GRID: Self = Self(0.82);
}

implement_mul!(EmissionFactor, KilowattHours, Kilograms);
