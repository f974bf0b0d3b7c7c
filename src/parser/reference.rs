// Author: Dustin Pilgrim
// License: MIT

use log::warn;

use crate::TomlError;
use crate::ast::{Document, Table, Value};

/// Walk a dotted path. Tables are indexed by key, arrays by a numeric segment
/// written the way the index prints (`1`, not `01` or `+1`).
pub(crate) fn resolve_path<'a>(document: &'a Document, path: &str) -> Result<&'a Value, TomlError> {
    let not_found = || TomlError::path_not_found(path);
    let mut segments = path.split('.');

    let first = segments.next().ok_or_else(not_found)?;
    let mut current = document.root.get(first).ok_or_else(not_found)?;

    for seg in segments {
        let next = match current {
            Value::Table(table) => table.get(seg),
            Value::Array(items) => seg
                .parse::<usize>()
                .ok()
                .filter(|i| i.to_string() == seg)
                .and_then(|i| items.get(i)),
            _ => None,
        };
        current = next.ok_or_else(not_found)?;
    }

    Ok(current)
}

/// Assign `value` at a dotted path, creating (or replacing non-table values
/// with) empty tables along the way.
pub(crate) fn store_path(document: &mut Document, path: &str, value: Value) {
    let mut segments: Vec<&str> = path.split('.').collect();
    let Some(last) = segments.pop() else {
        return;
    };

    let mut table = &mut document.root;
    for seg in segments {
        let entry = table
            .entry(seg.to_string())
            .or_insert_with(|| Value::Table(Table::new()));

        if !matches!(entry, Value::Table(_)) {
            warn!("Replacing {} at '{}' with a table to store '{}'", entry.type_name(), seg, path);
            *entry = Value::Table(Table::new());
        }

        table = match entry {
            Value::Table(next) => next,
            _ => return,
        };
    }

    table.insert(last.to_string(), value);
}
