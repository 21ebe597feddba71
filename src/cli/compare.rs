use clap::Parser;

use crate::{
    catalog::HouseCategory,
    cli::{rate::RateArgs, usage::UsageArgs},
    core::aggregates::ConsumptionResult,
    history::{UsageHistory, UsageRecord},
    prelude::*,
    tables::{build_history_table, build_statistics_table},
};

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    pub usage: UsageArgs,

    #[clap(flatten)]
    pub rate: RateArgs,
}

/// Estimate the same usage pattern for every house category, recording each
/// result into the caller-owned history.
#[instrument(skip_all)]
pub fn compare(args: &CompareArgs, history: &mut UsageHistory) -> Result {
    for category in HouseCategory::ALL {
        let profile = args.usage.profile(category);
        let result = ConsumptionResult::derive(
            profile.daily_breakdown(),
            args.rate.rate,
            args.rate.emission_factor,
        );
        info!(category = %category, daily_energy = %result.daily_energy, "estimated");
        history.push(UsageRecord::new(category.to_string(), category, &result));
    }

    println!("{}", build_history_table(history));
    let statistics = history.statistics().context("the history is empty")?;
    println!("{}", build_statistics_table(&statistics));
    Ok(())
}
