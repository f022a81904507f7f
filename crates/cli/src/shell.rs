//! Interactive shell.
//!
//! The shell is generic over its input (`BufRead`) and output (`Write`), so a
//! whole session can be driven from memory in tests.

use std::io::{self, BufRead, Write};

use tally_core::DomainError;
use tally_infra::InventoryStore;
use tally_inventory::{Inventory, ItemKind, ItemName, Quantity, Removal};

use crate::command::ShellCommand;
use crate::render;

/// How a session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Saved,
    /// The save on exit failed; in-memory changes were not persisted.
    SaveFailed,
}

pub struct Shell<S, R, W> {
    store: S,
    input: R,
    output: W,
    inventory: Inventory,
}

impl<S, R, W> Shell<S, R, W>
where
    S: InventoryStore,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, input: R, output: W, inventory: Inventory) -> Self {
        Self {
            store,
            input,
            output,
            inventory,
        }
    }

    /// Load the inventory from `store` and build a shell around it.
    ///
    /// A missing store is a normal first run; a failed load is reported and the
    /// session starts empty.
    pub fn open(store: S, input: R, mut output: W) -> io::Result<Self> {
        let inventory = match store.load() {
            Ok(Some(inventory)) => inventory,
            Ok(None) => {
                writeln!(output, "No items yet.")?;
                Inventory::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load inventory");
                writeln!(output, "Failed to load inventory: {e}")?;
                writeln!(output, "{}", render::LOAD_FAILED_NOTICE)?;
                Inventory::new()
            }
        };

        Ok(Self::new(store, input, output, inventory))
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_parts(self) -> (S, W, Inventory) {
        (self.store, self.output, self.inventory)
    }

    /// Run until `exit` (or end of input), then save.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        loop {
            let Some(answer) = self.prompt(render::MENU)? else {
                tracing::debug!("end of input; saving and exiting");
                return self.exit();
            };

            match ShellCommand::parse(&answer) {
                Some(ShellCommand::Add) => self.add()?,
                Some(ShellCommand::Remove) => self.remove()?,
                Some(ShellCommand::Total) => {
                    render::write_totals(&mut self.output, &self.inventory.totals())?
                }
                Some(ShellCommand::Change) => self.change()?,
                Some(ShellCommand::List) => render::write_listing(&mut self.output, &self.inventory)?,
                Some(ShellCommand::Help) => writeln!(self.output, "\n{}", render::HELP)?,
                Some(ShellCommand::Exit) => return self.exit(),
                None => writeln!(self.output, "\n{}", render::USAGE)?,
            }
        }
    }

    /// Ask all three questions, then validate quantity, kind and name in that order.
    fn add(&mut self) -> io::Result<()> {
        let Some(selector) = self.prompt("Consumable (c) or durable (d)? ")? else {
            return Ok(());
        };
        let Some(raw_name) = self.prompt("Item name: ")? else {
            return Ok(());
        };
        let Some(raw_quantity) = self.prompt("Quantity: ")? else {
            return Ok(());
        };

        let parsed = Quantity::parse(&raw_quantity).and_then(|quantity| {
            let kind = ItemKind::from_selector(&selector)?;
            let name = ItemName::parse(&raw_name)?;
            Ok((name, quantity, kind))
        });

        match parsed {
            Ok((name, quantity, kind)) => {
                writeln!(self.output, "Added {quantity} of '{name}' ({kind}).")?;
                self.inventory.add(name, quantity, kind);
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    fn remove(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Name of the item to remove: ")? else {
            return Ok(());
        };
        let Some(raw_quantity) = self.prompt("Quantity to remove: ")? else {
            return Ok(());
        };
        let quantity = match Quantity::parse(&raw_quantity) {
            Ok(quantity) => quantity,
            Err(e) => return self.report(&e),
        };

        let name = name.trim();
        match self.inventory.remove(name, quantity) {
            Ok(Removal::Decremented { remaining }) => writeln!(
                self.output,
                "Removed {quantity} of {name}. {remaining} left."
            ),
            Ok(Removal::Depleted) => writeln!(
                self.output,
                "Removed {quantity} of {name}. None left; item deleted."
            ),
            Err(e) => self.report(&e),
        }
    }

    fn change(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Name of the item to change type: ")? else {
            return Ok(());
        };

        let name = name.trim();
        match self.inventory.change_kind(name) {
            Ok(kind) => writeln!(self.output, "Item '{name}' changed type to '{kind}'."),
            Err(e) => self.report(&e),
        }
    }

    fn exit(&mut self) -> io::Result<SessionOutcome> {
        match self.store.save(&self.inventory) {
            Ok(()) => {
                writeln!(self.output, "Inventory saved.")?;
                writeln!(self.output, "\nInventory stored. Bye.")?;
                Ok(SessionOutcome::Saved)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save inventory");
                writeln!(self.output, "Failed to save inventory: {e}")?;
                Ok(SessionOutcome::SaveFailed)
            }
        }
    }

    fn report(&mut self, err: &DomainError) -> io::Result<()> {
        tracing::debug!(error = %err, "operation aborted");
        writeln!(self.output, "{err}")
    }

    /// Print `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
