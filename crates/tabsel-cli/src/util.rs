use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use tabsel_core::io::MeasureTable;
use tabsel_core::{Axis, TabselError};

pub fn validate_tsv_or_csv_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("tsv") | Some("csv") | Some("txt") => {}
        _ => bail!("File must have a .tsv, .csv or .txt extension: {}", path),
    }

    if !pb.exists() {
        bail!("File does not exist: {}", path);
    }

    Ok(())
}

/// Split a comma-separated argument into trimmed, non-empty tokens.
pub fn split_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parse `0,2,5..8,10..=11` into 0-based row indices below `len`.
///
/// `a..b` excludes `b`, `a..=b` includes it. With `one_based`, every index
/// is shifted down by one and `0` is rejected. Indices at or past `len` are
/// reported as `OutOfBounds` before any range is expanded.
pub fn parse_index_list(list: &str, len: usize, one_based: bool) -> Result<Vec<usize>> {
    let mut out = Vec::new();
    for token in split_list(list) {
        out.extend(parse_index_token(token, len, Axis::Row, one_based)?);
    }
    Ok(out)
}

fn parse_index_token(token: &str, len: usize, axis: Axis, one_based: bool) -> Result<Vec<usize>> {
    if let Some((start, end)) = token.split_once("..") {
        let (end, inclusive) = match end.strip_prefix('=') {
            Some(e) => (e, true),
            None => (end, false),
        };
        let raw_start = parse_index(start, token)?;
        let raw_end = parse_index(end, token)?;
        if inclusive && raw_end < raw_start {
            bail!("Descending range '{}' is not supported; list indices explicitly", token);
        }

        let start = to_zero_based(raw_start, one_based, token)?;
        // Exclusive 1-based `a..b` and 0-based `a..b` both stop before `b`.
        let stop = match (inclusive, one_based) {
            (true, true) => raw_end,
            (true, false) => match raw_end.checked_add(1) {
                Some(v) => v,
                None => bail!("Range '{}' ends past the largest supported index", token),
            },
            (false, true) => to_zero_based(raw_end, one_based, token)?,
            (false, false) => raw_end,
        };
        if stop < start {
            bail!("Descending range '{}' is not supported; list indices explicitly", token);
        }
        if stop > len {
            return Err(TabselError::OutOfBounds {
                axis,
                index: stop - 1,
                len,
            }
            .into());
        }
        return Ok((start..stop).collect());
    }
    let idx = to_zero_based(parse_index(token, token)?, one_based, token)?;
    if idx >= len {
        return Err(TabselError::OutOfBounds {
            axis,
            index: idx,
            len,
        }
        .into());
    }
    Ok(vec![idx])
}

fn parse_index(raw: &str, token: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid index '{}' in '{}'", raw.trim(), token))
}

fn to_zero_based(idx: usize, one_based: bool, token: &str) -> Result<usize> {
    if !one_based {
        return Ok(idx);
    }
    match idx.checked_sub(1) {
        Some(v) => Ok(v),
        None => bail!("Index 0 in '{}' is invalid with 1-based indexing", token),
    }
}

/// Only digits, `.` and `=` make an index token; anything else is a name.
fn looks_like_index(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '=')
}

/// Resolve a column list that may mix names and numeric indices.
pub fn parse_column_list(list: &str, table: &MeasureTable, one_based: bool) -> Result<Vec<usize>> {
    let mut out = Vec::new();
    for token in split_list(list) {
        if looks_like_index(token) {
            out.extend(parse_index_token(token, table.ncols(), Axis::Column, one_based)?);
        } else {
            out.extend(table.resolve_columns(&[token])?);
        }
    }
    Ok(out)
}

/// Open `path` for writing, or stdout when `None`.
pub fn output_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = File::create(p)
                .with_context(|| format!("Failed to create output: {}", p.display()))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
