//! Keyed data tables
//!
//! A `DataTable` has a fixed list of named fields and one row of string
//! values per key. Rows keep their insertion order. Once built, individual
//! fields can be rewritten in place through a [`RowRef`]; every such write is
//! also appended to a change journal so a transport can push only the rows
//! that moved since the last sync.
//!
//! # Example
//!
//! ```rust
//! use vellum_core::DataTable;
//!
//! let mut table = DataTable::new(
//!     "name score",
//!     [
//!         ("a", vec!["alpha".to_string(), "1".to_string()]),
//!         ("b", vec!["beta".to_string(), "2".to_string()]),
//!     ],
//! )
//! .unwrap();
//!
//! let b = table.row_ref("b").unwrap();
//! table.set(&b, "score", "3").unwrap();
//!
//! assert_eq!(table.row("b").unwrap(), ["beta", "3"]);
//! ```

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::{CoreError, Result};

/// Lookup-only handle to one row of a [`DataTable`]
///
/// Holds the row key and nothing else; it owns no part of the table and
/// stays valid only as long as the table still has a row with that key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowRef {
    key: String,
}

impl RowRef {
    /// The key of the referenced row
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// One recorded field write
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowChange {
    /// Row key
    pub key: String,
    /// Field name
    pub field: String,
    /// Value written
    pub value: String,
}

/// A table of string rows keyed by string, with named fields
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataTable {
    fields: Vec<String>,
    rows: IndexMap<String, Vec<String>>,
    changes: Vec<RowChange>,
}

impl DataTable {
    /// Build a table from space-separated field names and keyed rows.
    ///
    /// Every row must carry exactly one value per field and every key must
    /// be unique.
    pub fn new<I, K>(fields: &str, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        let fields: Vec<String> = fields.split_whitespace().map(str::to_string).collect();
        let mut table_rows = IndexMap::new();

        for (key, values) in rows {
            let key = key.into();
            if values.len() != fields.len() {
                return Err(CoreError::RowShape {
                    key,
                    expected: fields.len(),
                    actual: values.len(),
                });
            }
            if table_rows.contains_key(&key) {
                return Err(CoreError::DuplicateRow(key));
            }
            table_rows.insert(key, values);
        }

        Ok(Self {
            fields,
            rows: table_rows,
            changes: Vec::new(),
        })
    }

    /// Field names, in column order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row keys, in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// All values of a row, in field order
    pub fn row(&self, key: &str) -> Option<&[String]> {
        self.rows.get(key).map(Vec::as_slice)
    }

    /// Get a handle to the row with this key, if it exists
    pub fn row_ref(&self, key: &str) -> Option<RowRef> {
        self.rows.contains_key(key).then(|| RowRef {
            key: key.to_string(),
        })
    }

    /// Read one field of a row
    pub fn get(&self, row: &RowRef, field: &str) -> Result<&str> {
        let index = self.field_index(field)?;
        let values = self
            .rows
            .get(&row.key)
            .ok_or_else(|| CoreError::UnknownRow(row.key.clone()))?;
        Ok(&values[index])
    }

    /// Overwrite one field of a row and record the write in the journal
    pub fn set(&mut self, row: &RowRef, field: &str, value: impl Into<String>) -> Result<()> {
        let index = self.field_index(field)?;
        let values = self
            .rows
            .get_mut(&row.key)
            .ok_or_else(|| CoreError::UnknownRow(row.key.clone()))?;
        let value = value.into();

        tracing::trace!(key = %row.key, field, bytes = value.len(), "row field set");
        values[index] = value.clone();
        self.changes.push(RowChange {
            key: row.key.clone(),
            field: field.to_string(),
            value,
        });
        Ok(())
    }

    /// Field writes recorded since the last [`take_changes`](Self::take_changes)
    pub fn pending_changes(&self) -> &[RowChange] {
        &self.changes
    }

    /// Drain the change journal, oldest write first
    pub fn take_changes(&mut self) -> Vec<RowChange> {
        std::mem::take(&mut self.changes)
    }

    fn field_index(&self, field: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| f == field)
            .ok_or_else(|| CoreError::UnknownField(field.to_string()))
    }
}

/// Wire layout: `{"fields": [...], "rows": {key: [values...]}}`
impl Serialize for DataTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a> {
            fields: &'a [String],
            rows: &'a IndexMap<String, Vec<String>>,
        }

        Wire {
            fields: &self.fields,
            rows: &self.rows,
        }
        .serialize(serializer)
    }
}
