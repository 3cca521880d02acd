use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{dispatch::Dispatch, request::DispatchRequest},
    quantity::{Zero, cost::Cost, energy::KilowattHours},
    simulation::{Simulation, Totals},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn dispatch_row(name: &str, dispatch: &Dispatch) -> Vec<Cell> {
    let storage_mode = dispatch.storage_mode();
    vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        Cell::new(storage_mode).fg(storage_mode.color()),
        Cell::new(dispatch.storage_flow).set_alignment(CellAlignment::Right),
        Cell::new(dispatch.new_storage_charge).set_alignment(CellAlignment::Right),
        Cell::new(dispatch.curtailment).set_alignment(CellAlignment::Right).fg(
            if dispatch.curtailment > KilowattHours::ZERO { Color::DarkYellow } else { Color::Reset },
        ),
        Cell::new(dispatch.metrics.total_cost).set_alignment(CellAlignment::Right),
        Cell::new(dispatch.metrics.efficiency).set_alignment(CellAlignment::Right),
        Cell::new(dispatch.metrics.emissions).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:?}", dispatch.metrics.compute_time)).add_attribute(Attribute::Dim),
    ]
}

/// Side-by-side dispatches of the same request.
pub fn build_dispatch_table(request: &DispatchRequest, dispatches: &[(&str, &Dispatch)]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Strategy", "Storage", "Flow", "Charge", "Curtailed", "Cost", "Efficiency", "Emissions",
        "Time",
    ]);
    for (name, dispatch) in dispatches {
        table.add_row(dispatch_row(name, dispatch));
    }
    table.add_row(vec![
        Cell::new("Request").add_attribute(Attribute::Dim),
        Cell::new(format!("surplus {}", request.surplus())).add_attribute(Attribute::Dim),
        Cell::new(""),
        Cell::new(request.storage_charge).add_attribute(Attribute::Dim),
        Cell::new(format!("of {}", request.storage_capacity)).add_attribute(Attribute::Dim),
    ]);
    table
}

pub fn build_simulation_table(simulation: &Simulation) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Hour", "Solar", "Wind", "Demand", "Mode", "Flow", "Charge", "Curtailed", "Cost",
        "Baseline",
    ]);
    for step in &simulation.steps {
        let dispatch = step.outcome.dispatch();
        let storage_mode = dispatch.storage_mode();
        table.add_row(vec![
            Cell::new(format!("{:02}:00", step.hour)),
            Cell::new(step.request.solar_gen).set_alignment(CellAlignment::Right),
            Cell::new(step.request.wind_gen).set_alignment(CellAlignment::Right),
            Cell::new(step.request.demand).set_alignment(CellAlignment::Right),
            if step.outcome.is_fallback() {
                Cell::new("Fallback").fg(Color::Red)
            } else {
                Cell::new(storage_mode).fg(storage_mode.color())
            },
            Cell::new(dispatch.storage_flow).set_alignment(CellAlignment::Right),
            Cell::new(dispatch.new_storage_charge).set_alignment(CellAlignment::Right),
            Cell::new(dispatch.curtailment).set_alignment(CellAlignment::Right),
            Cell::new(dispatch.metrics.total_cost).set_alignment(CellAlignment::Right).fg(
                if dispatch.metrics.total_cost <= step.baseline.metrics.total_cost {
                    Color::Green
                } else {
                    Color::Red
                },
            ),
            Cell::new(step.baseline.metrics.total_cost)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_totals_table(totals: &Totals, baseline_totals: &Totals) -> Table {
    let savings = baseline_totals.total_cost - totals.total_cost;
    let mut table = new_table();
    table.set_header(vec!["", "Cost", "Curtailed", "Emissions", "Efficiency"]);
    for (name, totals) in [("Solver", totals), ("Baseline", baseline_totals)] {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(totals.total_cost),
            Cell::new(totals.curtailment),
            Cell::new(totals.emissions),
            Cell::new(totals.mean_efficiency),
        ]);
    }
    table.add_row(vec![
        Cell::new("Savings").add_attribute(Attribute::Bold),
        Cell::new(savings).fg(if savings >= Cost::ZERO { Color::Green } else { Color::Red }),
    ]);
    table
}
