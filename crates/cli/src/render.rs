//! Text rendering for shell and report output.

use std::io::{self, Write};

use tally_inventory::{Inventory, ItemKind, Totals};

pub const MENU: &str = "\nAdd items (add)\n\
Remove items (remove)\n\
Show inventory totals (total)\n\
Change item type (change)\n\
List items (list)\n\
Or save and exit (exit)? ";

pub const LOAD_FAILED_NOTICE: &str =
    "Starting with an empty inventory. Saving on exit will replace the stored inventory.";

pub const HELP: &str = "Commands: add, remove, total, change, list, help, exit (case-insensitive).";

pub const USAGE: &str =
    "Invalid option. Try again with 'add', 'remove', 'total', 'change', 'list', 'help' or 'exit'.";

pub fn write_totals(out: &mut impl Write, totals: &Totals) -> io::Result<()> {
    writeln!(out, "\nTotal per item:")?;
    for entry in &totals.per_name {
        writeln!(out, "{}: {}", entry.name, entry.quantity)?;
    }

    writeln!(out, "\nTotal per kind:")?;
    for kind in [ItemKind::Consumable, ItemKind::Durable] {
        writeln!(out, "{}: {}", kind, totals.for_kind(kind))?;
    }

    writeln!(out, "\nInventory total: {}", totals.grand_total())
}

pub fn write_listing(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    if inventory.is_empty() {
        return writeln!(out, "Inventory is empty.");
    }
    for item in inventory {
        writeln!(out, "{item}")?;
    }
    Ok(())
}
