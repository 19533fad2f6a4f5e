use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Shared x-domain: percentage of multi-partition transactions.
pub const X_COLUMN: &str = "Remote_Ratio";

/// The columns a results file must provide. Only these are retained.
pub const REQUIRED_COLUMNS: &[&str] = &[
    X_COLUMN,
    "Tigon",
    "Sundial-CXL-improved",
    "TwoPL-CXL-improved",
    "Motor",
    "Sundial-NET",
    "TwoPL-NET",
    "Tigon-NET",
];

/// One loaded benchmark result: an x-domain column plus the named throughput
/// series, all positionally aligned and of equal length.
pub struct ResultTable {
    columns: HashMap<String, Vec<f64>>,
    rows: usize,
}

impl ResultTable {
    pub fn from_csv(path: &Path) -> Result<ResultTable> {
        debug!("loading results from {}", path.display());
        let file = File::open(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(file)
    }

    /// Parses a results table from any CSV source. The header row must name
    /// every required column; values in required columns must be numeric.
    pub fn from_reader<R: Read>(source: R) -> Result<ResultTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        let mut indices = Vec::with_capacity(REQUIRED_COLUMNS.len());
        for &name in REQUIRED_COLUMNS {
            let index = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(Error::MissingColumn(name))?;
            indices.push((name, index));
        }

        let mut records = Vec::new();
        for record in reader.records() {
            records.push(record?);
        }

        let mut columns = HashMap::with_capacity(indices.len());
        for &(name, index) in &indices {
            let mut values = Vec::with_capacity(records.len());
            for (row, record) in records.iter().enumerate() {
                let field = record.get(index).unwrap_or("");
                let value = field.trim().parse::<f64>().map_err(|_| Error::InvalidValue {
                    column: name.to_string(),
                    record: row + 1,
                    value: field.to_string(),
                })?;
                values.push(value);
            }
            columns.insert(name.to_string(), values);
        }

        debug!("loaded {} records", records.len());
        Ok(ResultTable {
            columns,
            rows: records.len(),
        })
    }

    /// Builds a table from pre-split columns. The x-domain column must be
    /// present and all columns must have the same length.
    pub fn from_columns<I>(columns: I) -> Result<ResultTable>
    where
        I: IntoIterator<Item = (String, Vec<f64>)>,
    {
        let columns: HashMap<String, Vec<f64>> = columns.into_iter().collect();
        let rows = columns
            .get(X_COLUMN)
            .ok_or(Error::MissingColumn(X_COLUMN))?
            .len();
        for (name, values) in &columns {
            if values.len() != rows {
                return Err(Error::ColumnLength {
                    column: name.clone(),
                    expected: rows,
                    actual: values.len(),
                });
            }
        }
        Ok(ResultTable { columns, rows })
    }

    pub fn x(&self) -> &[f64] {
        self.columns
            .get(X_COLUMN)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn series(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::MissingSeries(name.to_string()))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}
