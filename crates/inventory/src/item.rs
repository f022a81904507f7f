use serde::Serialize;

use tally_core::{DomainError, DomainResult};

/// Item kind (consumable vs durable).
///
/// The kind is plain data: it picks the file label, the totals bucket, and is
/// what `Inventory::change_kind` flips. No behavior differs between kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ItemKind {
    Consumable,
    Durable,
}

impl ItemKind {
    /// Label used in the storage file and in user-facing output.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Consumable => "Consumable",
            ItemKind::Durable => "Durable",
        }
    }

    /// Parse a storage label. Exact match only.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Consumable" => Some(ItemKind::Consumable),
            "Durable" => Some(ItemKind::Durable),
            _ => None,
        }
    }

    /// Parse the interactive single-character selector (`c` / `d`).
    pub fn from_selector(input: &str) -> DomainResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(ItemKind::Consumable),
            "d" => Ok(ItemKind::Durable),
            _ => Err(DomainError::validation(
                "invalid kind: use 'c' for consumable or 'd' for durable",
            )),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ItemKind::Consumable => ItemKind::Durable,
            ItemKind::Durable => ItemKind::Consumable,
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Item name: non-empty once trimmed, and free of `,` and line breaks (the
/// storage format has no escaping).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Parse a name typed by the user. Surrounding whitespace is dropped.
    pub fn parse(input: &str) -> DomainResult<Self> {
        Self::from_stored(input.trim())
    }

    /// Accept a name read back from storage, kept exactly as written.
    pub fn from_stored(raw: &str) -> DomainResult<Self> {
        if raw.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if raw.contains(',') {
            return Err(DomainError::validation("name cannot contain ','"));
        }
        if raw.contains(['\n', '\r']) {
            return Err(DomainError::validation("name cannot contain line breaks"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ItemName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Non-negative item quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Parse a whole, non-negative number (surrounding whitespace allowed).
    pub fn parse(input: &str) -> DomainResult<Self> {
        input
            .trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| DomainError::validation("invalid quantity: must be a whole number"))
    }

    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A named, quantified inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: ItemName,
    quantity: Quantity,
    kind: ItemKind,
}

impl Item {
    pub fn new(name: ItemName, quantity: Quantity, kind: ItemKind) -> Self {
        Self {
            name,
            quantity,
            kind,
        }
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Same name and quantity, different kind.
    pub fn with_kind(&self, kind: ItemKind) -> Self {
        Self {
            name: self.name.clone(),
            quantity: self.quantity,
            kind,
        }
    }

    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}, Quantity: {}", self.kind, self.name, self.quantity)
    }
}
