//! Delimited measurement-table reader and writer.
//!
//! The default layout is the patient table used throughout the tutorials:
//! a tab-separated file with `idPatient`, `timeDiagnosis`, `timeCollection`
//! and `measure` columns. Any layout with one label column plus numeric
//! columns can be read by adjusting [`TableReaderConfig`].
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::TabselError;
use crate::math::{Array1, Array2};

/// A labelled numeric table: one id per row, one name per column.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureTable {
    pub ids: Vec<String>,
    pub column_names: Vec<String>,
    pub values: Array2<f64>,
}

/// Configuration for reading delimited measurement tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableReaderConfig {
    /// Field delimiter; a single ASCII character.
    pub delimiter: char,
    /// Column holding the row label.
    pub id_column: String,
    /// Numeric columns to load, in order.
    /// When `None`, every column other than `id_column` is loaded.
    pub value_columns: Option<Vec<String>>,
}

impl Default for TableReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            id_column: "idPatient".to_string(),
            value_columns: Some(vec![
                "timeDiagnosis".to_string(),
                "timeCollection".to_string(),
                "measure".to_string(),
            ]),
        }
    }
}

impl TableReaderConfig {
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(anyhow!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))
        }
    }
}

impl MeasureTable {
    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
    }

    /// Map column names to indices, preserving order.
    pub fn resolve_columns<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>, TabselError> {
        names
            .iter()
            .map(|name| {
                self.column_index(name.as_ref())
                    .ok_or_else(|| TabselError::UnknownColumn(name.as_ref().to_string()))
            })
            .collect()
    }

    pub fn column(&self, name: &str) -> Result<Array1<f64>, TabselError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| TabselError::UnknownColumn(name.to_string()))?;
        self.values.column(idx)
    }

    /// Subset rows and columns; ids and column names follow the selection.
    pub fn subset(&self, rows: &[usize], cols: &[usize]) -> Result<MeasureTable, TabselError> {
        let values = self.values.subset(rows, cols)?;
        Ok(MeasureTable {
            ids: rows.iter().map(|&r| self.ids[r].clone()).collect(),
            column_names: cols.iter().map(|&c| self.column_names[c].clone()).collect(),
            values,
        })
    }

    /// Copy of the table with one column multiplied by `factor`.
    pub fn scale_column(&self, name: &str, factor: f64) -> Result<MeasureTable, TabselError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| TabselError::UnknownColumn(name.to_string()))?;
        let mut out = self.clone();
        for row in 0..out.nrows() {
            out.values[(row, idx)] *= factor;
        }
        Ok(out)
    }

    pub fn log_summary(&self) {
        log::info!(
            "Loaded {} rows x {} value columns ({})",
            self.nrows(),
            self.ncols(),
            self.column_names.join(", ")
        );
        for (idx, name) in self.column_names.iter().enumerate() {
            if let Ok(col) = self.values.column(idx) {
                if let Some(mean) = col.mean() {
                    log::debug!("  {}: mean {:.3}", name, mean);
                }
            }
        }
    }
}

/// Read a tab-separated patient table using the default configuration.
pub fn read_measure_tsv<P: AsRef<Path>>(path: P) -> Result<MeasureTable> {
    read_measure_table_with_config(path, &TableReaderConfig::default())
}

/// Read a delimited table from disk using a custom configuration.
pub fn read_measure_table_with_config<P: AsRef<Path>>(
    path: P,
    config: &TableReaderConfig,
) -> Result<MeasureTable> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open table: {}", path.as_ref().display()))?;
    let table = read_measure_table_from_reader(file, config)
        .with_context(|| format!("Failed to read table: {}", path.as_ref().display()))?;
    table.log_summary();
    Ok(table)
}

/// Read a delimited table from any reader.
pub fn read_measure_table_from_reader<R: Read>(
    source: R,
    config: &TableReaderConfig,
) -> Result<MeasureTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .context("Failed to read header row")?
        .clone();

    let id_idx = find_column(&headers, &config.id_column)
        .ok_or_else(|| anyhow!("Missing id column '{}'", config.id_column))?;

    let value_indices = resolve_value_indices(&headers, config, id_idx)?;
    if value_indices.is_empty() {
        return Err(anyhow!("No value columns detected in header"));
    }

    let mut ids = Vec::new();
    let mut values = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let id = record
            .get(id_idx)
            .ok_or_else(|| anyhow!("Missing id value at row {}", row_idx + 1))?;
        ids.push(id.trim().to_string());

        for &idx in &value_indices {
            let raw = record
                .get(idx)
                .ok_or_else(|| anyhow!("Missing value at row {}", row_idx + 1))?;
            let parsed = raw.trim().parse::<f64>().map_err(|_| {
                anyhow::Error::new(TabselError::TypeMismatch {
                    position: idx,
                    found: raw.to_string(),
                })
                .context(format!(
                    "Invalid value in column '{}' at row {}",
                    headers.get(idx).unwrap_or(""),
                    row_idx + 1
                ))
            })?;
            values.push(parsed);
        }
    }

    let column_names = value_indices
        .iter()
        .map(|&idx| headers.get(idx).unwrap_or("").to_string())
        .collect();
    let values = Array2::from_shape_vec((ids.len(), value_indices.len()), values)
        .context("Failed to build value matrix")?;

    Ok(MeasureTable {
        ids,
        column_names,
        values,
    })
}

/// Write the table as delimited text with a header row.
pub fn write_measure_table<W: Write>(
    table: &MeasureTable,
    writer: W,
    id_column: &str,
    delimiter: u8,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let mut header = Vec::with_capacity(table.ncols() + 1);
    header.push(id_column.to_string());
    header.extend(table.column_names.iter().cloned());
    wtr.write_record(&header).context("Failed to write header")?;

    for (row, id) in table.ids.iter().enumerate() {
        let mut record = Vec::with_capacity(table.ncols() + 1);
        record.push(id.clone());
        record.extend(table.values.row_slice(row).iter().map(|v| v.to_string()));
        wtr.write_record(&record)
            .with_context(|| format!("Failed to write row {}", row + 1))?;
    }
    wtr.flush().context("Failed to flush table output")?;
    Ok(())
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn resolve_value_indices(
    headers: &StringRecord,
    config: &TableReaderConfig,
    id_idx: usize,
) -> Result<Vec<usize>> {
    if let Some(names) = &config.value_columns {
        let mut indices = Vec::with_capacity(names.len());
        for name in names {
            let idx = find_column(headers, name)
                .ok_or_else(|| anyhow!("Missing value column '{}'", name))?;
            indices.push(idx);
        }
        return Ok(indices);
    }

    Ok((0..headers.len()).filter(|&idx| idx != id_idx).collect())
}
