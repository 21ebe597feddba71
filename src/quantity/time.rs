quantity!(Hours, via: f64, suffix: "h", precision: 1);

impl From<u8> for Hours {
    fn from(hours: u8) -> Self {
        Self(f64::from(hours))
    }
}
