//! Simulation driver: ages an inventory day by day and prints the ledger.
//!
//! Usage: `innkeeper [days] [--json]`. Defaults to the built-in demo batch
//! and two days; set `INNKEEPER_INVENTORY` to a file of
//! `name, sell_in, quality` lines to simulate other stock.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use innkeeper_inventory::category::{AGED_BRIE_NAME, BACKSTAGE_PASS_NAME, LEGENDARY_NAME};
use innkeeper_inventory::{Inventory, Item};

const DEFAULT_DAYS: u32 = 2;
const INVENTORY_FILE_VAR: &str = "INNKEEPER_INVENTORY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Options {
    days: u32,
    json: bool,
}

fn main() -> Result<()> {
    innkeeper_observability::init();

    let options = parse_args(std::env::args().skip(1))?;
    let mut inventory = load_inventory()?;

    tracing::info!(
        days = options.days,
        items = inventory.len(),
        "starting simulation"
    );

    // Fixture loop shape: print the day's snapshot, then age once, so a run
    // of N days shows snapshots for days 0 through N.
    for day in 0..=options.days {
        if options.json {
            println!("{}", render_day_json(day, &inventory)?);
        } else {
            print!("{}", render_day(day, &inventory));
        }
        inventory.advance_day();
    }

    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options {
        days: DEFAULT_DAYS,
        json: false,
    };
    for arg in args {
        match arg.as_str() {
            "--json" => options.json = true,
            raw => {
                options.days = raw
                    .parse()
                    .with_context(|| format!("invalid day count {raw:?}"))?;
            }
        }
    }
    Ok(options)
}

fn load_inventory() -> Result<Inventory> {
    match std::env::var_os(INVENTORY_FILE_VAR) {
        Some(path) => {
            let path = Path::new(&path);
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading inventory file {}", path.display()))?;
            parse_inventory(&text)
        }
        None => Ok(demo_inventory()),
    }
}

/// Parse one item per non-blank line, in ledger line format.
fn parse_inventory(text: &str) -> Result<Inventory> {
    let mut items = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let item: Item = line
            .parse()
            .with_context(|| format!("inventory line {}", idx + 1))?;
        items.push(item);
    }
    Ok(Inventory::new(items))
}

/// The classic demo batch: one item per rule, plus the boundary cases.
fn demo_inventory() -> Inventory {
    Inventory::new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE_NAME, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(LEGENDARY_NAME, 0, 80),
        Item::new(LEGENDARY_NAME, -1, 80),
        Item::new(BACKSTAGE_PASS_NAME, 15, 20),
        Item::new(BACKSTAGE_PASS_NAME, 10, 49),
        Item::new(BACKSTAGE_PASS_NAME, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ])
}

fn render_day(day: u32, inventory: &Inventory) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "-------- day {day} --------");
    let _ = writeln!(out, "name, sellIn, quality");
    for item in inventory.items() {
        let _ = writeln!(out, "{item}");
    }
    let _ = writeln!(out);
    out
}

#[derive(Debug, Serialize)]
struct DaySnapshot<'a> {
    day: u32,
    items: &'a [Item],
}

fn render_day_json(day: u32, inventory: &Inventory) -> Result<String> {
    serde_json::to_string(&DaySnapshot {
        day,
        items: inventory.items(),
    })
    .context("serializing day snapshot")
}
