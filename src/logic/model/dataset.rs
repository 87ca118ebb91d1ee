//! Survey Table
//!
//! Header-keyed view over an uploaded survey, read from CSV or from the
//! first worksheet of a spreadsheet (`.xlsx`, `.xls`, `.ods`).

use std::collections::HashMap;
use std::io::{Cursor, Read};

use calamine::Reader;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("Spreadsheet has no worksheet")]
    NoWorksheet,
    #[error("Dataset has no header row")]
    MissingHeader,
}

#[derive(Debug, Clone, Default)]
pub struct SurveyTable {
    columns: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl SurveyTable {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Self::from_rows(headers, rows)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatasetError> {
        Self::from_reader(bytes)
    }

    /// First worksheet; the first row holds the headers and every cell is
    /// read as its display string
    pub fn from_spreadsheet(bytes: &[u8]) -> Result<Self, DatasetError> {
        let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(DatasetError::NoWorksheet)??;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string().trim().to_string()).collect::<Vec<_>>());
        let headers = rows.next().ok_or(DatasetError::MissingHeader)?;

        Self::from_rows(headers, rows.collect())
    }

    fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, DatasetError> {
        if headers.is_empty() {
            return Err(DatasetError::MissingHeader);
        }
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim_start_matches('\u{feff}').to_string(), i))
            .collect();

        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Cell value; short rows read as blank
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = *self.columns.get(column)?;
        let row = self.rows.get(row)?;
        Some(row.get(idx).map(String::as_str).unwrap_or(""))
    }
}
