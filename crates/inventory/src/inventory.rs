use tally_core::{DomainError, DomainResult};

use crate::item::{Item, ItemKind, ItemName, Quantity};
use crate::totals::Totals;

/// Outcome of a successful removal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The item is still held with the given remaining quantity.
    Decremented { remaining: Quantity },
    /// The quantity reached zero and the record was deleted.
    Depleted,
}

/// Ordered item list.
///
/// Names are not unique: `add` never merges, and `remove` / `change_kind` act on
/// the first record whose name matches exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First record with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.position(name).map(|idx| &self.items[idx])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    /// Append a new record. Same-named records are kept side by side.
    pub fn add(&mut self, name: ItemName, quantity: Quantity, kind: ItemKind) {
        tracing::debug!(name = %name, quantity = quantity.get(), kind = kind.label(), "adding item");
        self.items.push(Item::new(name, quantity, kind));
    }

    /// Take `quantity` away from the first record named `name`.
    ///
    /// A record that reaches zero is deleted rather than kept at zero.
    pub fn remove(&mut self, name: &str, quantity: Quantity) -> DomainResult<Removal> {
        let idx = self
            .position(name)
            .ok_or_else(|| DomainError::not_found(name))?;

        let held = self.items[idx].quantity();
        let remaining = held
            .checked_sub(quantity)
            .ok_or_else(|| DomainError::insufficient(name, held.get(), quantity.get()))?;

        tracing::debug!(name, removed = quantity.get(), remaining = remaining.get(), "removing item quantity");

        if remaining.is_zero() {
            self.items.remove(idx);
            Ok(Removal::Depleted)
        } else {
            self.items[idx].set_quantity(remaining);
            Ok(Removal::Decremented { remaining })
        }
    }

    /// Flip the kind of the first record named `name`.
    ///
    /// The record is removed and re-appended, so it ends up last. Returns the new kind.
    pub fn change_kind(&mut self, name: &str) -> DomainResult<ItemKind> {
        let idx = self
            .position(name)
            .ok_or_else(|| DomainError::not_found(name))?;

        let old = self.items.remove(idx);
        let kind = old.kind().toggled();
        tracing::debug!(name, from = old.kind().label(), to = kind.label(), "changing item kind");
        self.items.push(old.with_kind(kind));
        Ok(kind)
    }

    pub fn totals(&self) -> Totals {
        Totals::compute(&self.items)
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ItemName {
        ItemName::parse(s).unwrap()
    }

    fn qty(n: u32) -> Quantity {
        Quantity::new(n)
    }

    fn snapshot(inv: &Inventory) -> Vec<(String, u32, ItemKind)> {
        inv.iter()
            .map(|i| (i.name().to_string(), i.quantity().get(), i.kind()))
            .collect()
    }

    #[test]
    fn add_appends_a_record() {
        let mut inv = Inventory::new();
        inv.add(name("Apple"), qty(10), ItemKind::Consumable);

        assert_eq!(snapshot(&inv), vec![("Apple".to_string(), 10, ItemKind::Consumable)]);
    }

    #[test]
    fn add_does_not_merge_same_names() {
        let mut inv = Inventory::new();
        inv.add(name("Apple"), qty(5), ItemKind::Consumable);
        inv.add(name("Apple"), qty(5), ItemKind::Consumable);

        assert_eq!(inv.len(), 2);
        assert_eq!(inv.totals().for_name("Apple"), Some(10));
    }

    #[test]
    fn removing_everything_deletes_the_record() {
        let mut inv = Inventory::new();
        inv.add(name("Apple"), qty(10), ItemKind::Consumable);

        assert_eq!(inv.remove("Apple", qty(10)).unwrap(), Removal::Depleted);
        assert!(inv.is_empty());
    }

    #[test]
    fn partial_remove_decrements() {
        let mut inv = Inventory::new();
        inv.add(name("Apple"), qty(10), ItemKind::Consumable);

        let outcome = inv.remove("Apple", qty(4)).unwrap();
        assert_eq!(outcome, Removal::Decremented { remaining: qty(6) });
        assert_eq!(inv.find("Apple").unwrap().quantity(), qty(6));
    }

    #[test]
    fn remove_more_than_held_is_rejected_without_change() {
        let mut inv = Inventory::new();
        inv.add(name("Apple"), qty(3), ItemKind::Consumable);
        let before = inv.clone();

        let err = inv.remove("Apple", qty(5)).unwrap_err();
        assert_eq!(err, DomainError::insufficient("Apple", 3, 5));
        assert_eq!(inv, before);
    }

    #[test]
    fn remove_unknown_name_is_not_found() {
        let mut inv = Inventory::new();
        inv.add(name("Apple"), qty(3), ItemKind::Consumable);

        assert_eq!(inv.remove("Pear", qty(1)).unwrap_err(), DomainError::not_found("Pear"));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn remove_matches_names_exactly() {
        let mut inv = Inventory::new();
        inv.add(name("Apple"), qty(3), ItemKind::Consumable);

        assert!(matches!(inv.remove("apple", qty(1)), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn remove_acts_on_first_match_only() {
        let mut inv = Inventory::new();
        inv.add(name("Apple"), qty(2), ItemKind::Consumable);
        inv.add(name("Apple"), qty(7), ItemKind::Durable);

        assert_eq!(inv.remove("Apple", qty(2)).unwrap(), Removal::Depleted);
        assert_eq!(snapshot(&inv), vec![("Apple".to_string(), 7, ItemKind::Durable)]);
    }

    #[test]
    fn insufficient_first_match_does_not_fall_through_to_later_duplicates() {
        let mut inv = Inventory::new();
        inv.add(name("Apple"), qty(1), ItemKind::Consumable);
        inv.add(name("Apple"), qty(50), ItemKind::Consumable);

        assert!(matches!(
            inv.remove("Apple", qty(10)),
            Err(DomainError::InsufficientQuantity { available: 1, .. })
        ));
        assert_eq!(inv.items()[1].quantity(), qty(50));
    }

    #[test]
    fn removing_zero_from_an_empty_record_deletes_it() {
        let mut inv = Inventory::new();
        inv.add(name("Ghost"), Quantity::ZERO, ItemKind::Durable);

        assert_eq!(inv.remove("Ghost", Quantity::ZERO).unwrap(), Removal::Depleted);
        assert!(inv.is_empty());
    }

    #[test]
    fn change_kind_moves_record_to_the_end() {
        let mut inv = Inventory::new();
        inv.add(name("Hammer"), qty(3), ItemKind::Durable);
        inv.add(name("Apple"), qty(10), ItemKind::Consumable);

        assert_eq!(inv.change_kind("Hammer").unwrap(), ItemKind::Consumable);
        assert_eq!(
            snapshot(&inv),
            vec![
                ("Apple".to_string(), 10, ItemKind::Consumable),
                ("Hammer".to_string(), 3, ItemKind::Consumable),
            ]
        );
    }

    #[test]
    fn change_kind_unknown_name_is_not_found() {
        let mut inv = Inventory::new();
        assert_eq!(inv.change_kind("Hammer").unwrap_err(), DomainError::not_found("Hammer"));
    }

    #[test]
    fn totals_group_by_name_and_kind() {
        let mut inv = Inventory::new();
        inv.add(name("Apple"), qty(5), ItemKind::Consumable);
        inv.add(name("Hammer"), qty(3), ItemKind::Durable);
        inv.add(name("Apple"), qty(5), ItemKind::Durable);

        let totals = inv.totals();
        let names: Vec<_> = totals.per_name.iter().map(|t| (t.name.as_str(), t.quantity)).collect();
        assert_eq!(names, vec![("Apple", 10), ("Hammer", 3)]);
        assert_eq!(totals.consumable, 5);
        assert_eq!(totals.durable, 8);
        assert_eq!(totals.grand_total(), 13);
    }

    #[test]
    fn totals_of_empty_inventory_are_zero() {
        let totals = Inventory::new().totals();
        assert!(totals.per_name.is_empty());
        assert_eq!(totals.grand_total(), 0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn kind_strategy() -> impl Strategy<Value = ItemKind> {
            prop_oneof![Just(ItemKind::Consumable), Just(ItemKind::Durable)]
        }

        fn inventory_strategy() -> impl Strategy<Value = Inventory> {
            prop::collection::vec(("[A-C]", 0u32..1_000, kind_strategy()), 0..20).prop_map(|rows| {
                let mut inv = Inventory::new();
                for (n, q, k) in rows {
                    inv.add(name(&n), qty(q), k);
                }
                inv
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: removing q from Q >= q leaves Q - q, and zero deletes the record.
            #[test]
            fn remove_subtracts_or_deletes(held in 0u32..10_000, take in 0u32..10_000) {
                let mut inv = Inventory::new();
                inv.add(name("Item"), qty(held), ItemKind::Consumable);
                let before = inv.clone();

                let result = inv.remove("Item", qty(take));

                if take > held {
                    prop_assert_eq!(result, Err(DomainError::insufficient("Item", held, take)));
                    prop_assert_eq!(&inv, &before);
                } else if take == held {
                    prop_assert_eq!(result, Ok(Removal::Depleted));
                    prop_assert!(inv.find("Item").is_none());
                } else {
                    prop_assert_eq!(result, Ok(Removal::Decremented { remaining: qty(held - take) }));
                    prop_assert_eq!(inv.find("Item").map(|i| i.quantity().get()), Some(held - take));
                }
            }

            /// Property: changing kind twice restores the kind and keeps the quantity.
            #[test]
            fn change_kind_twice_is_identity_on_kind(q in 0u32..10_000, kind in kind_strategy()) {
                let mut inv = Inventory::new();
                inv.add(name("Item"), qty(q), kind);

                inv.change_kind("Item").unwrap();
                inv.change_kind("Item").unwrap();

                let item = inv.find("Item").unwrap();
                prop_assert_eq!(item.kind(), kind);
                prop_assert_eq!(item.quantity(), qty(q));
            }

            /// Property: grand total equals the sum of all quantities and of both kinds.
            #[test]
            fn grand_total_matches_sum_of_quantities(inv in inventory_strategy()) {
                let totals = inv.totals();
                let sum: u64 = inv.iter().map(|i| u64::from(i.quantity().get())).sum();
                let per_name: u64 = totals.per_name.iter().map(|t| t.quantity).sum();

                prop_assert_eq!(totals.grand_total(), sum);
                prop_assert_eq!(totals.grand_total(), totals.consumable + totals.durable);
                prop_assert_eq!(per_name, sum);
            }
        }
    }
}
