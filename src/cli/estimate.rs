use clap::Parser;

use crate::{
    catalog::HouseCategory,
    cli::{rate::RateArgs, usage::UsageArgs},
    core::aggregates::ConsumptionResult,
    history::{UsageHistory, UsageRecord},
    prelude::*,
    tables::{build_breakdown_table, build_history_table, build_metrics_table},
};

#[derive(Parser)]
pub struct EstimateArgs {
    /// House size category.
    #[clap(long, value_enum)]
    pub category: HouseCategory,

    #[clap(flatten)]
    pub usage: UsageArgs,

    #[clap(flatten)]
    pub rate: RateArgs,

    /// Label the run and record it into the session history.
    #[clap(long)]
    pub name: Option<String>,

    /// Emit the result as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

#[instrument(skip_all)]
pub fn estimate(args: &EstimateArgs, history: &mut UsageHistory) -> Result {
    let profile = args.usage.profile(args.category);
    let result = ConsumptionResult::derive(
        profile.daily_breakdown(),
        args.rate.rate,
        args.rate.emission_factor,
    );
    info!(
        category = %args.category,
        daily_energy = %result.daily_energy,
        daily_cost = %result.daily_cost,
        daily_emissions = %result.daily_emissions,
        "estimated"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", build_breakdown_table(&result));
        println!("{}", build_metrics_table(&result));
    }

    if let Some(name) = &args.name {
        ensure!(!name.trim().is_empty(), "the record name must not be empty");
        history.push(UsageRecord::new(name.clone(), args.category, &result));
        info!(n_records = history.len(), "recorded");
        if !args.json {
            println!("{}", build_history_table(history));
        }
    }

    Ok(())
}
