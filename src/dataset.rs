//! A `Dataset` is a table of fully observed categorical examples: a header naming the columns and
//! one row of short string codes per example.

use crate::util::{MorelError, Result};
use crate::variable::Assignment;

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use std::fs::File;
use std::io::Read;
use std::path::Path;


/// A complete, rectangular table of categorical values.
#[derive(Clone, Debug)]
pub struct Dataset {

    /// The column names, in header order, mapped to their position in a row
    columns: IndexMap<String, usize>,

    /// The cells of the table. Every row has exactly one cell per column.
    rows: Vec<Vec<String>>

}

impl Dataset {

    /// Construct a `Dataset` from a header and rows of cells.
    ///
    /// # Errors
    /// * `MorelError::DuplicateVariable`, if a column name is repeated
    /// * `MorelError::MalformedData`, if a row does not have one non-empty cell per column
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut columns = IndexMap::new();
        for (idx, name) in header.into_iter().enumerate() {
            if columns.contains_key(&name) {
                return Err(MorelError::DuplicateVariable(name));
            }
            columns.insert(name, idx);
        }

        for (r, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(MorelError::MalformedData(format!(
                    "row {} has {} cells, expected {}", r, row.len(), columns.len()
                )));
            }

            if let Some(c) = row.iter().position(|cell| cell.is_empty()) {
                return Err(MorelError::MalformedData(format!(
                    "row {} is missing a value for column {}", r, header_name(&columns, c)
                )));
            }
        }

        Ok(Dataset { columns, rows })
    }

    /// Read a `Dataset` from CSV text with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header: Vec<String> = reader.headers()?.iter().map(String::from).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }

        let dataset = Dataset::new(header, rows)?;
        debug!(rows = dataset.len(), columns = dataset.columns.len(), "read dataset");
        Ok(dataset)
    }

    /// Read a `Dataset` from a CSV file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Dataset::from_reader(File::open(path)?)
    }

    /// The column names, in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|s| s.as_str())
    }

    /// The position of the column `name` in a row.
    ///
    /// # Errors
    /// * `MorelError::UnknownVariable`, if there is no such column
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns.get(name)
                    .cloned()
                    .ok_or_else(|| MorelError::UnknownVariable(String::from(name)))
    }

    /// The number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the rows. Cells are in header order.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// The values of a row keyed by column name, leaving out the columns in `skip`.
    pub fn assignment(&self, row: &[String], skip: &[&str]) -> Assignment {
        self.columns.iter()
                    .filter(|(name, _)| ! skip.contains(&name.as_str()))
                    .map(|(name, &idx)| (name.as_str(), row[idx].as_str()))
                    .collect()
    }

    /// Randomly partition the rows into two `Dataset`s with the same columns. The second holds
    /// `round(holdout * len)` rows.
    ///
    /// # Errors
    /// * `MorelError::General`, if `holdout` is not within `[0, 1]`
    pub fn split<R: Rng>(&self, holdout: f64, rng: &mut R) -> Result<(Dataset, Dataset)> {
        if !(0.0..=1.0).contains(&holdout) {
            return Err(MorelError::General(format!("Invalid holdout fraction: {}", holdout)));
        }

        let mut rows = self.rows.clone();
        rows.shuffle(rng);

        let held = (holdout * rows.len() as f64).round() as usize;
        let test = rows.split_off(rows.len() - held);

        let train = Dataset { columns: self.columns.clone(), rows };
        let test = Dataset { columns: self.columns.clone(), rows: test };

        Ok((train, test))
    }
}

fn header_name(columns: &IndexMap<String, usize>, idx: usize) -> &str {
    columns.get_index(idx).map(|(name, _)| name.as_str()).unwrap_or("?")
}
