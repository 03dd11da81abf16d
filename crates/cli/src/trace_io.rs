//! Trace files: JSON via serde, CSV/Parquet via polars.
//!
//! - JSON: `[[x, y], ...]` or `{"vertices": [[x, y], ...]}`.
//! - CSV/Parquet: numeric `x` and `y` columns, one row per vertex in
//!   traversal order.

use anyhow::{anyhow, bail, Context, Result};
use faultgeom::trace::Polyline;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum TraceDoc {
    Bare(Vec<[f64; 2]>),
    Wrapped { vertices: Vec<[f64; 2]> },
}

#[derive(Serialize)]
struct TraceOut {
    vertices: Vec<[f64; 2]>,
}

/// Load a directed trace from `path`, dispatching on the extension.
pub fn read_trace(path: &Path) -> Result<Polyline> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let points = match ext.as_deref() {
        Some("json") => read_json(path)?,
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("reading {}", path.display()))?;
            xy_from_frame(lf.collect()?)?
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("reading {}", path.display()))?;
            xy_from_frame(lf.collect()?)?
        }
        _ => bail!(
            "unsupported trace format {} (expected .json, .csv or .parquet)",
            path.display()
        ),
    };
    tracing::debug!(path = %path.display(), vertices = points.len(), "trace loaded");
    Polyline::from_xy(&points).with_context(|| format!("invalid trace in {}", path.display()))
}

fn read_json(path: &Path) -> Result<Vec<[f64; 2]>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: TraceDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(match doc {
        TraceDoc::Bare(v) => v,
        TraceDoc::Wrapped { vertices } => vertices,
    })
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("null `{name}` at row {row}")))
        .collect()
}

fn xy_from_frame(df: DataFrame) -> Result<Vec<[f64; 2]>> {
    let xs = float_column(&df, "x")?;
    let ys = float_column(&df, "y")?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect())
}

/// Write `line` as `{"vertices": [[x, y], ...]}`.
pub fn write_trace(path: &Path, line: &Polyline) -> Result<()> {
    ensure_parent(path)?;
    let doc = TraceOut {
        vertices: line.to_xy(),
    };
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
