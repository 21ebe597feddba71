use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    catalog::{FAN_POWER, HouseCategory, LIGHT_POWER},
    core::aggregates::ConsumptionResult,
    history::{Statistics, UsageHistory},
    quantity::energy::KilowattHours,
};

/// Daily consumption above this reads as "high" in the metrics table.
const GOOD_DAILY_USAGE: KilowattHours = KilowattHours(15.0);

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_breakdown_table(result: &ConsumptionResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Appliance", "Power", "Hours", "Daily energy", "Share"]);
    for entry in &result.breakdown.entries {
        let share = result.breakdown.share_of(entry);
        table.add_row(vec![
            Cell::new(entry.class),
            Cell::new(entry.power).set_alignment(CellAlignment::Right),
            Cell::new(entry.hours).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(entry.energy).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", share * 100.0)).set_alignment(CellAlignment::Right).fg(
                if share >= 0.5 {
                    Color::Red
                } else if share >= 0.25 {
                    Color::DarkYellow
                } else {
                    Color::Green
                },
            ),
        ]);
    }
    table
}

pub fn build_metrics_table(result: &ConsumptionResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Period", "Energy", "Cost"]);
    for (period, energy, cost) in [
        ("Daily", result.daily_energy, result.daily_cost),
        ("Weekly", result.weekly_energy, result.weekly_cost),
        ("Monthly", result.monthly_energy, result.monthly_cost),
    ] {
        table.add_row(vec![
            Cell::new(period),
            Cell::new(energy).set_alignment(CellAlignment::Right),
            Cell::new(cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Daily CO₂"),
        Cell::new(result.daily_emissions).set_alignment(CellAlignment::Right),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Efficiency"),
        if result.daily_energy < GOOD_DAILY_USAGE {
            Cell::new("Good").fg(Color::Green)
        } else {
            Cell::new("High").fg(Color::Red)
        },
        Cell::new(""),
    ]);
    table
}

pub fn build_catalog_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Category", "Lights", "Light power", "Fans", "Fan power"]);
    for category in HouseCategory::ALL {
        let fixed = category.fixed_appliances();
        table.add_row(vec![
            Cell::new(category),
            Cell::new(fixed.lights).set_alignment(CellAlignment::Right),
            Cell::new(LIGHT_POWER).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(fixed.fans).set_alignment(CellAlignment::Right),
            Cell::new(FAN_POWER).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_history_table(history: &UsageHistory) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Name", "Category", "Daily energy", "Daily cost"]);
    for record in history.records() {
        table.add_row(vec![
            Cell::new(record.recorded_at.format("%H:%M:%S")).add_attribute(Attribute::Dim),
            Cell::new(&record.name),
            Cell::new(record.category),
            Cell::new(record.daily_energy).set_alignment(CellAlignment::Right),
            Cell::new(record.daily_cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_statistics_table(statistics: &Statistics) -> Table {
    let mut table = new_table();
    table
        .set_header(vec!["Average daily", "Highest", "Lowest", "Records"])
        .add_row(vec![
            Cell::new(statistics.mean_daily_energy).set_alignment(CellAlignment::Right),
            Cell::new(statistics.highest_daily_energy)
                .set_alignment(CellAlignment::Right)
                .fg(Color::Red),
            Cell::new(statistics.lowest_daily_energy)
                .set_alignment(CellAlignment::Right)
                .fg(Color::Green),
            Cell::new(statistics.n_records).set_alignment(CellAlignment::Right),
        ]);
    table
}
