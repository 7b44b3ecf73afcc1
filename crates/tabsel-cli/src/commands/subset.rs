//! `tabsel subset`: pick rows and columns of a measurement table.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tabsel_core::io::{read_measure_table_with_config, write_measure_table, MeasureTable};

use crate::config::TabselConfig;
use crate::util::{output_writer, parse_column_list, parse_index_list};

/// Parsed arguments for the subset command.
#[derive(Debug, Clone, Default)]
pub struct SubsetArgs {
    pub input: PathBuf,
    /// Row list; `None` keeps every row.
    pub rows: Option<String>,
    /// Column list (indices or names); `None` keeps every column.
    pub cols: Option<String>,
    pub output: Option<PathBuf>,
}

/// Load the input and apply the row/column selection.
pub fn run_subset(config: &TabselConfig, args: &SubsetArgs) -> Result<MeasureTable> {
    let table = read_measure_table_with_config(&args.input, &config.table)?;

    let rows = match &args.rows {
        Some(list) => parse_index_list(list, table.nrows(), config.one_based)
            .with_context(|| format!("Invalid --rows '{}'", list))?,
        None => (0..table.nrows()).collect(),
    };
    let cols = match &args.cols {
        Some(list) => parse_column_list(list, &table, config.one_based)
            .with_context(|| format!("Invalid --cols '{}'", list))?,
        None => (0..table.ncols()).collect(),
    };

    log::info!(
        "[tabsel::subset] Selecting {} rows x {} columns from {:?}",
        rows.len(),
        cols.len(),
        args.input
    );
    let selected = table
        .subset(&rows, &cols)
        .with_context(|| format!("Failed to subset {}", args.input.display()))?;
    Ok(selected)
}

/// Write a table to `output`, or stdout.
pub fn write_output(config: &TabselConfig, table: &MeasureTable, output: Option<&Path>) -> Result<()> {
    let writer = output_writer(output)?;
    write_measure_table(
        table,
        writer,
        &config.table.id_column,
        config.table.delimiter_byte()?,
    )?;
    if let Some(path) = output {
        log::info!("[tabsel] Wrote {} rows to {:?}", table.nrows(), path);
    }
    Ok(())
}
