//! `tabsel scale`: multiply a value list or one table column by a factor.
use std::path::Path;

use anyhow::{Context, Result};

use tabsel_core::io::{read_measure_table_with_config, MeasureTable};
use tabsel_core::math::Array1;
use tabsel_core::{parse_values, scale_values};

use crate::config::TabselConfig;
use crate::util::split_list;

/// Scale a comma-separated list of tokens. Text tokens are a type error.
pub fn run_scale_values(values: &str, factor: f64) -> Result<Array1<f64>> {
    let tokens = split_list(values);
    let parsed = parse_values(&tokens);
    let scaled = scale_values(&parsed, factor)
        .with_context(|| format!("Cannot scale '{}'", values))?;
    log::debug!("[tabsel::scale] scaled {} values by {}", scaled.len(), factor);
    Ok(Array1::from_vec(scaled))
}

/// Scale one named column of the input table, keeping every other column.
pub fn run_scale_column(
    config: &TabselConfig,
    input: &Path,
    column: &str,
    factor: f64,
) -> Result<MeasureTable> {
    let table = read_measure_table_with_config(input, &config.table)?;
    log::info!(
        "[tabsel::scale] Scaling column '{}' of {:?} by {}",
        column,
        input,
        factor
    );
    let scaled = table.scale_column(column, factor)?;
    Ok(scaled)
}
