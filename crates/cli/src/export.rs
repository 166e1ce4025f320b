//! Shape documents (`<id>.json`) and the batch summary table.

use anyhow::{Context, Result};
use polars::prelude::*;
use polycat::{BuildError, BuiltShape, ShapeEntry};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Serialized form of one built shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDocument {
    pub id: String,
    pub name: String,
    pub category: String,
    pub call: String,
    pub vertices: Vec<[f64; 3]>,
    /// Vertex cycles, counter-clockwise seen from outside.
    pub faces: Vec<Vec<usize>>,
    pub edges: Vec<[usize; 2]>,
}

impl ShapeDocument {
    pub fn from_built(shape: &BuiltShape) -> Self {
        Self {
            id: shape.id.to_string(),
            name: shape.display_name.to_string(),
            category: shape.category.label().to_string(),
            call: shape.call.to_string(),
            vertices: shape.handle.vertices(),
            faces: shape.handle.facets(),
            edges: shape
                .handle
                .edges()
                .into_iter()
                .map(|(i, j)| [i, j])
                .collect(),
        }
    }
}

/// Write `<dir>/<id>.json`; returns the path written.
pub fn write_document(dir: &Path, doc: &ShapeDocument) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", doc.id));
    fs::write(&path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// One line of the batch summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub vertices: Option<u32>,
    pub edges: Option<u32>,
    pub facets: Option<u32>,
}

impl SummaryRow {
    pub fn built(shape: &BuiltShape) -> Self {
        Self {
            id: shape.id.to_string(),
            name: shape.display_name.to_string(),
            category: shape.category.label().to_string(),
            status: "built".to_string(),
            vertices: Some(shape.handle.n_vertices() as u32),
            edges: Some(shape.handle.n_edges() as u32),
            facets: Some(shape.handle.n_facets() as u32),
        }
    }

    /// Row for a failed build; `entry` is `None` for unknown identifiers.
    pub fn failed(id: &str, entry: Option<&ShapeEntry>, err: &BuildError) -> Self {
        Self {
            id: id.to_string(),
            name: entry.map_or_else(|| err.label(), |e| e.display_name.to_string()),
            category: entry.map(|e| e.category.label()).unwrap_or("").to_string(),
            status: err.label(),
            vertices: None,
            edges: None,
            facets: None,
        }
    }
}

pub fn summary_frame(rows: &[SummaryRow]) -> PolarsResult<DataFrame> {
    df!(
        "id" => rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        "name" => rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        "category" => rows.iter().map(|r| r.category.as_str()).collect::<Vec<_>>(),
        "status" => rows.iter().map(|r| r.status.as_str()).collect::<Vec<_>>(),
        "vertices" => rows.iter().map(|r| r.vertices).collect::<Vec<_>>(),
        "edges" => rows.iter().map(|r| r.edges).collect::<Vec<_>>(),
        "facets" => rows.iter().map(|r| r.facets).collect::<Vec<_>>()
    )
}

/// Write the summary as Parquet for a `.parquet` path, CSV otherwise.
pub fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating summary dir {}", parent.display()))?;
        }
    }
    let mut df = summary_frame(rows)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "parquet") {
        ParquetWriter::new(file).finish(&mut df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    }
    tracing::info!(path = %path.display(), rows = df.height(), "summary_written");
    Ok(())
}
