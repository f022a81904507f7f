//! One-shot `report` command: load, print totals, leave the file untouched.

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use tally_infra::InventoryStore;
use tally_inventory::{Inventory, Item, Totals};

use crate::render;

/// JSON shape of the report.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub items: &'a [Item],
    pub totals: &'a Totals,
    pub grand_total: u64,
}

pub fn run(store: &impl InventoryStore, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let inventory = store
        .load()
        .context("failed to load inventory")?
        .unwrap_or_default();

    write_report(&inventory, json, out)
}

pub fn write_report(inventory: &Inventory, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let totals = inventory.totals();

    if json {
        let report = Report {
            items: inventory.items(),
            totals: &totals,
            grand_total: totals.grand_total(),
        };
        serde_json::to_writer_pretty(&mut *out, &report).context("failed to encode report")?;
        writeln!(out)?;
    } else {
        render::write_totals(out, &totals)?;
    }

    Ok(())
}
