//! Line-oriented storage format.
//!
//! One record per line, `name,quantity,kind_label`, no header and no escaping.

use thiserror::Error;

use tally_inventory::{Item, ItemKind, ItemName, Quantity};

const FIELD_SEPARATOR: char = ',';

/// A record that could not be decoded. Fails the whole file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct FormatError {
    /// 1-based line number.
    pub line: usize,
    pub reason: String,
}

pub fn encode_item(item: &Item) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        item.name(),
        item.quantity(),
        item.kind().label(),
        sep = FIELD_SEPARATOR
    )
}

/// Serialize items in order, each line terminated by `\n`.
pub fn encode<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&encode_item(item));
        out.push('\n');
    }
    out
}

/// Decode a single record (line terminator already removed).
///
/// The name is kept as written so a loaded file saves back byte for byte.
/// Trailing whitespace after the kind label is ignored.
pub fn decode_line(line: &str) -> Result<Item, String> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [name, quantity, label] = fields.as_slice() else {
        return Err(format!(
            "expected 3 comma-separated fields, found {}",
            fields.len()
        ));
    };

    let name = ItemName::from_stored(name).map_err(|e| e.to_string())?;
    let quantity = Quantity::parse(quantity).map_err(|e| e.to_string())?;
    let label = label.trim_end();
    let kind = ItemKind::from_label(label).ok_or_else(|| format!("unknown item kind '{label}'"))?;

    Ok(Item::new(name, quantity, kind))
}

/// Decode a whole file. The first bad record, blank lines included, aborts.
pub fn decode(text: &str) -> Result<Vec<Item>, FormatError> {
    text.lines()
        .enumerate()
        .map(|(idx, record)| {
            decode_line(record).map_err(|reason| FormatError {
                line: idx + 1,
                reason,
            })
        })
        .collect()
}
