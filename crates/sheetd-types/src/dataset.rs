use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the dataset: an ordered mapping from column name to value.
///
/// Key order follows the column order at the time the record was written,
/// so serialized output reads in the same order as the column list.
pub type Record = IndexMap<String, String>;

/// The full persisted document: ordered columns plus ordered records.
///
/// Column order is display order. Record order is insertion order; a
/// record's identity for deletion is its current array index. Column
/// uniqueness is a soft invariant — the dataset never deduplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    /// An empty dataset: no columns, no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the column set, pruning keys of removed columns from every
    /// record.
    ///
    /// `removed` is the membership set difference `old − new`; keys for
    /// columns that survive are left untouched, so existing values are not
    /// revalidated or back-filled. Records only gain keys for new columns
    /// the next time they are written.
    pub fn replace_columns(&mut self, columns: Vec<String>) {
        let removed: Vec<String> = self
            .columns
            .iter()
            .filter(|c| !columns.contains(c))
            .cloned()
            .collect();
        for record in &mut self.records {
            for key in &removed {
                record.shift_remove(key);
            }
        }
        self.columns = columns;
    }

    /// Append a record built from `fields`.
    ///
    /// The new record contains exactly the current columns, each populated
    /// from the same-named field when present and truthy, else the empty
    /// string. Extraneous fields are ignored.
    pub fn append_record(&mut self, fields: &serde_json::Map<String, Value>) {
        let record: Record = self
            .columns
            .iter()
            .map(|col| (col.clone(), cell_value(fields.get(col))))
            .collect();
        self.records.push(record);
    }

    /// Remove the record at `index`, shifting subsequent records down.
    ///
    /// Returns `None` when the index is out of bounds.
    pub fn remove_record(&mut self, index: usize) -> Option<Record> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }
}

/// Coerce a request body field to a cell value.
///
/// Truthy values keep their text form; falsy JSON (`""`, `0`, `false`,
/// `null`) and absent fields coerce to the empty string.
fn cell_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(Value::Number(n)) if n.as_f64().map(|f| f != 0.0).unwrap_or(true) => n.to_string(),
        Some(v @ (Value::Array(_) | Value::Object(_))) => v.to_string(),
        _ => String::new(),
    }
}
