//! CSV loader for training tables.
//!
//! The first row is treated as the header containing column names:
//! ```csv
//! StudentID,CGPA,Internships,ExtracurricularActivities,PlacementStatus
//! 1,7.5,1,No,NotPlaced
//! 2,8.9,2,Yes,Placed
//! ```

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::dataset::table::RawTable;
use crate::error::{PlacementError, Result};

/// Reads a [`RawTable`] from CSV input.
#[derive(Debug, Clone)]
pub struct CsvTableReader {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
    /// Whether to trim whitespace from cells
    trim: bool,
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvTableReader {
    /// Create a new reader with comma delimiter and trimming enabled.
    pub fn new() -> Self {
        CsvTableReader {
            delimiter: b',',
            trim: true,
        }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter as u8;
        self
    }

    /// Set whether to trim whitespace from cells.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Read a table from a CSV file.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<RawTable> {
        let path = path.as_ref();
        debug!("Reading training table from {}", path.display());
        let file = std::fs::File::open(path)?;
        self.read(file)
    }

    /// Read a table from CSV text.
    pub fn read_str(&self, input: &str) -> Result<RawTable> {
        self.read(input.as_bytes())
    }

    /// Read a table from any reader.
    pub fn read<R: Read>(&self, input: R) -> Result<RawTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            // Row widths are checked by RawTable so the error names the row.
            .flexible(true)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(PlacementError::dataset("CSV header is empty"));
        }

        let mut table = RawTable::new(headers.iter())?;
        for record in reader.records() {
            let record = record?;
            table.push_row(record.iter().map(str::to_string).collect())?;
        }

        debug!(
            "Read {} rows with {} columns",
            table.len(),
            table.headers().len()
        );
        Ok(table)
    }
}
