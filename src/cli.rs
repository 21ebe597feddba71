mod catalog;
mod compare;
mod estimate;
mod rate;
mod usage;

use clap::{Parser, Subcommand};

pub use self::{
    catalog::catalog,
    compare::{CompareArgs, compare},
    estimate::{EstimateArgs, estimate},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate consumption, cost, and emissions for one household profile.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Run the same usage pattern through every house category and compare.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Show the fixed appliance catalog.
    #[clap(name = "catalog")]
    Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_estimate() {
        let args = Args::try_parse_from(["electritrack", "estimate", "--category", "small"]);
        assert!(args.is_ok());
    }

    /// Hour ranges are clamped at the input layer, the core never sees them.
    #[test]
    fn rejects_out_of_range_hours() {
        let args = Args::try_parse_from([
            "electritrack",
            "estimate",
            "--category",
            "small",
            "--light-hours",
            "25",
        ]);
        assert!(args.is_err());
    }

    #[test]
    fn rejects_out_of_range_ac_power() {
        let args = Args::try_parse_from([
            "electritrack",
            "compare",
            "--ac",
            "--ac-power",
            "7.5",
        ]);
        assert!(args.is_err());
    }
}
