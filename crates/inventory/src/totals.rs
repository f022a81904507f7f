use std::collections::HashMap;

use serde::Serialize;

use crate::item::{Item, ItemKind};

/// Per-name total, across every record carrying that name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameTotal {
    pub name: String,
    pub quantity: u64,
}

/// Read-only quantity report over an inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum per distinct name, in first-seen order, regardless of kind.
    pub per_name: Vec<NameTotal>,
    pub consumable: u64,
    pub durable: u64,
}

impl Totals {
    /// Compute all groupings in a single pass.
    pub fn compute<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut totals = Totals::default();
        let mut positions: HashMap<&'a str, usize> = HashMap::new();

        for item in items {
            let quantity = u64::from(item.quantity().get());

            match item.kind() {
                ItemKind::Consumable => totals.consumable += quantity,
                ItemKind::Durable => totals.durable += quantity,
            }

            let name = item.name().as_str();
            match positions.get(name) {
                Some(&idx) => totals.per_name[idx].quantity += quantity,
                None => {
                    positions.insert(name, totals.per_name.len());
                    totals.per_name.push(NameTotal {
                        name: name.to_string(),
                        quantity,
                    });
                }
            }
        }

        totals
    }

    pub fn grand_total(&self) -> u64 {
        self.consumable + self.durable
    }

    pub fn for_kind(&self, kind: ItemKind) -> u64 {
        match kind {
            ItemKind::Consumable => self.consumable,
            ItemKind::Durable => self.durable,
        }
    }

    pub fn for_name(&self, name: &str) -> Option<u64> {
        self.per_name
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.quantity)
    }
}
