//! Flight Time Estimate Tool
//!
//! Prints the power breakdown and flight time for a build.
//!
//! Usage:
//!   cargo run --example estimate -- [OPTIONS]
//!
//! Options:
//!   --catalog PATH    Catalog JSON (default: built-in catalog)
//!   --config PATH     Calculator config JSON (default: built-in defaults)
//!   --payload ID      Fit a payload item (repeatable)
//!   --battery ID      Select a battery preset
//!   --kg              Show masses in kilograms

use anyhow::{bail, Context};
use flightcalc_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut catalog_path: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut payload_ids = Vec::new();
    let mut battery_id: Option<String> = None;
    let mut unit = MassUnit::Grams;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" => {
                i += 1;
                catalog_path = args.get(i).cloned();
            }
            "--config" => {
                i += 1;
                config_path = args.get(i).cloned();
            }
            "--payload" => {
                i += 1;
                if let Some(id) = args.get(i) {
                    payload_ids.push(id.clone());
                }
            }
            "--battery" => {
                i += 1;
                battery_id = args.get(i).cloned();
            }
            "--kg" => unit = MassUnit::Kilograms,
            other => bail!("Unknown argument: {}", other),
        }
        i += 1;
    }

    let catalog = match catalog_path {
        Some(path) => Catalog::load(&path).with_context(|| format!("loading {}", path))?,
        None => Catalog::default(),
    };
    let config = match config_path {
        Some(path) => CalculatorConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => CalculatorConfig::default(),
    };

    let mut calc = Calculator::new(catalog, config);
    for id in &payload_ids {
        calc.toggle_payload_item(id)?;
    }
    if let Some(id) = battery_id {
        calc.select_battery(&id)?;
    }
    let result = calc.set_display_unit(unit);
    let display = result.display();

    println!("Total mass:         {}", display.total_mass);
    println!("Mass / 100:         {}", display.mass_over_100);
    println!("6.3 x m:            {}", display.term1);
    println!("0.66 x m^2:         {}", display.term2);
    println!("Aux power:          {}", display.aux_power);
    println!("Lighting power:     {}", display.lighting_power);
    println!("Total power:        {}", display.total_power);
    println!("Effective capacity: {}", display.effective_capacity);
    println!("Flight time:        {}", display.flight_time);

    for advisory in &result.advisories {
        println!("Note: {:?}", advisory);
    }

    Ok(())
}
