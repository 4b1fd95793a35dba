//! Row-of-named-values table used as the training data source.

use std::collections::HashSet;

use crate::error::{PlacementError, Result};

/// A table of string cells with named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create an empty table with the given column names.
    ///
    /// Column names must be unique.
    pub fn new<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(PlacementError::dataset(format!(
                    "duplicate column '{header}'"
                )));
            }
        }

        Ok(RawTable {
            headers,
            rows: Vec::new(),
        })
    }

    /// Create a table and append every row.
    pub fn from_rows<H, S, R>(headers: H, rows: R) -> Result<Self>
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Vec<String>>,
    {
        let mut table = Self::new(headers)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row. The row must have exactly one cell per column.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(PlacementError::dataset(format!(
                "row {} has {} values, expected {}",
                self.rows.len() + 1,
                row.len(),
                self.headers.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get the record at a row index.
    pub fn record(&self, index: usize) -> Option<RawRecord<'_>> {
        self.rows.get(index).map(|values| RawRecord {
            headers: &self.headers,
            values,
        })
    }

    /// Iterate over all records in row order.
    pub fn records(&self) -> impl Iterator<Item = RawRecord<'_>> {
        self.rows.iter().map(|values| RawRecord {
            headers: &self.headers,
            values,
        })
    }
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> RawRecord<'a> {
    /// Look up a cell by column name.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|i| self.values[i].as_str())
    }

    /// Look up a cell by column position.
    pub fn get_at(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).map(String::as_str)
    }

    /// Iterate over `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_table_records() {
        let table = RawTable::from_rows(
            ["StudentID", "CGPA"],
            vec![row(&["1", "7.5"]), row(&["2", "8.9"])],
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.column_index("CGPA"), Some(1));

        let second = table.record(1).unwrap();
        assert_eq!(second.get("CGPA"), Some("8.9"));
        assert_eq!(second.get("Projects"), None);

        let pairs: Vec<_> = table.records().next().unwrap().iter().collect();
        assert_eq!(pairs, vec![("StudentID", "1"), ("CGPA", "7.5")]);
    }

    #[test]
    fn test_ragged_row_rejected() {
        let mut table = RawTable::new(["a", "b"]).unwrap();
        let err = table.push_row(row(&["1"])).unwrap_err();
        assert!(matches!(err, PlacementError::Dataset(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_header_rejected() {
        let err = RawTable::new(["CGPA", "CGPA"]).unwrap_err();
        assert!(err.to_string().contains("duplicate column 'CGPA'"));
    }
}
