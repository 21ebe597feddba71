use crate::quantity::{energy::KilowattHours, time::Hours};

quantity!(Kilowatts, via: f64, suffix: "kW", precision: 1);

implement_mul!(Kilowatts, Hours, KilowattHours);
