use std::collections::BTreeMap;

use crate::field::Field;
use crate::row::Row;
use crate::value::Value;

/// All column metadata and rows for one query response.
///
/// Populated by appending (field descriptors first, then rows, in server
/// order) and read-only afterwards. Sequential access goes through
/// [`RowCursor`], obtained from [`ResultSet::cursor`].
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    affected_rows: u64,
    insert_id: u64,
    warning_count: u16,
    message: String,
    fields: Vec<Field>,
    rows: Vec<Row>,
}

impl ResultSet {
    pub fn new(affected_rows: u64, insert_id: u64, warning_count: u16, message: String) -> Self {
        Self {
            affected_rows,
            insert_id,
            warning_count,
            message,
            fields: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Rows affected by a non-SELECT statement; 0 for SELECT.
    pub fn affected_rows(&self) -> u64 {
        self.affected_rows
    }

    /// Last auto-generated identifier, 0 if none.
    pub fn insert_id(&self) -> u64 {
        self.insert_id
    }

    pub fn warning_count(&self) -> u16 {
        self.warning_count
    }

    /// Server status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Append a column descriptor. Fields must be appended in ordinal order
    /// before any row.
    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Append a row in server-delivered order.
    ///
    /// # Panics
    ///
    /// Panics if the value count does not match the column count. That is a
    /// producer-side protocol-decoding bug, not a data condition.
    pub fn push_row(&mut self, values: Vec<Value>) {
        assert_eq!(
            values.len(),
            self.fields.len(),
            "row arity does not match column count"
        );
        self.rows.push(Row::new(values));
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_count(&self) -> u64 {
        self.fields.len() as u64
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> u64 {
        self.rows.len() as u64
    }

    /// A fresh cursor positioned at the first row.
    pub fn cursor(&self) -> RowCursor<'_> {
        RowCursor {
            resultset: self,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Row;
    type IntoIter = RowCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

/// Forward cursor over the rows of a [`ResultSet`].
///
/// Borrows the result set, so rows cannot be mutated while a cursor is live.
/// Exhaustion is a normal `None` return, never an error; [`RowCursor::reset`]
/// restarts from the first row. Independent cursors over the same result set
/// track independent positions.
#[derive(Debug, Clone)]
pub struct RowCursor<'a> {
    resultset: &'a ResultSet,
    next: usize,
}

impl<'a> RowCursor<'a> {
    /// The row at the cursor as a read-only slice of values, advancing the
    /// cursor by one. `None` once exhausted, and always `None` on an empty
    /// result set.
    pub fn fetch_row(&mut self) -> Option<&'a [Value]> {
        let row = self.resultset.rows.get(self.next)?;
        self.next += 1;
        Some(row.values())
    }

    /// Like [`RowCursor::fetch_row`], but keyed by field name.
    ///
    /// Built fresh per call by pairing each value with its column's name;
    /// when two columns share a name the later ordinal wins.
    pub fn fetch_map(&mut self) -> Option<BTreeMap<&'a str, &'a Value>> {
        let row = self.resultset.rows.get(self.next)?;
        self.next += 1;

        let mut map = BTreeMap::new();
        for (field, value) in self.resultset.fields.iter().zip(row.values()) {
            map.insert(field.name(), value);
        }
        Some(map)
    }

    /// Move the cursor back to the first row. Idempotent.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Zero-based index of the next row to be fetched.
    pub fn position(&self) -> usize {
        self.next
    }
}

impl<'a> Iterator for RowCursor<'a> {
    type Item = &'a Row;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.resultset.rows.get(self.next)?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.resultset.rows.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowCursor<'_> {}
