pub mod dataset;
pub mod stats;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use rayon::prelude::*;
use serde_json::{Map, Value};

pub fn scan_parquet(path: impl AsRef<Path>) -> Result<LazyFrame> {
    let path = path.as_ref();
    let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
        .with_context(|| format!("could not scan parquet file {}", path.display()))?;

    Ok(lf)
}

pub fn scan_csv(path: impl AsRef<Path>) -> Result<LazyFrame> {
    let path = path.as_ref();
    let lf = LazyCsvReader::new(path)
        .has_header(true)
        .finish()
        .with_context(|| format!("could not scan csv file {}", path.display()))?;

    Ok(lf)
}

pub fn schema_of(mut lf: LazyFrame) -> Result<SchemaRef> {
    let schema = lf.schema().context("could not resolve schema")?;

    Ok(schema)
}

pub fn schema_json(lf: LazyFrame) -> Result<String> {
    let schema = schema_of(lf)?;
    let mut fields = Map::new();
    for field in schema.iter_fields() {
        fields.insert(
            field.name().to_string(),
            Value::String(field.data_type().to_string()),
        );
    }
    let rendered = serde_json::to_string_pretty(&Value::Object(fields))
        .context("could not serialize schema")?;

    Ok(rendered)
}

pub fn preview(lf: LazyFrame, rows: u32) -> Result<DataFrame> {
    let df = lf
        .limit(rows)
        .collect()
        .context("could not collect preview rows")?;

    Ok(df)
}

pub fn grouped_mean(lf: LazyFrame, keys: &[&str], value_col: &str) -> LazyFrame {
    let keys = keys
        .iter()
        .map(|x| col(x))
        .collect::<Vec<Expr>>();

    lf.group_by_stable(keys)
        .agg([col(value_col).mean().alias(&format!("mean_{value_col}"))])
}

pub fn write_parquet(df: &mut DataFrame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)
        .with_context(|| format!("could not create file {}", path.display()))?;
    ParquetWriter::new(&mut file)
        .finish(df)
        .with_context(|| format!("could not write parquet file {}", path.display()))?;

    Ok(())
}

pub fn write_csv(df: &mut DataFrame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)
        .with_context(|| format!("could not create file {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(df)
        .with_context(|| format!("could not write csv file {}", path.display()))?;

    Ok(())
}

// One parquet file per key combination, named after the key values.
pub fn write_partitioned(
    df: &DataFrame,
    keys: &[&str],
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("could not create directory {}", dir.display()))?;

    let parts = df
        .partition_by(keys, true)
        .context("could not partition frame")?;

    let mut paths = parts
        .into_par_iter()
        .map(|mut part| -> Result<PathBuf> {
            let tag = partition_tag(&part, keys)?;
            let path = dir.join(format!("{tag}.parquet"));
            write_parquet(&mut part, &path)?;
            Ok(path)
        })
        .collect::<Result<Vec<PathBuf>>>()?;
    paths.sort();

    Ok(paths)
}

fn partition_tag(part: &DataFrame, keys: &[&str]) -> Result<String> {
    let mut pieces = Vec::with_capacity(keys.len());
    for key in keys {
        let piece = match part.column(key)?.get(0)? {
            AnyValue::String(s) => s.to_string(),
            other => other.to_string(),
        };
        pieces.push(piece);
    }

    Ok(pieces.join("-"))
}

pub fn chunk_frame(df: &DataFrame, rows_per_chunk: usize) -> Vec<DataFrame> {
    if rows_per_chunk == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut offset = 0usize;
    while offset < df.height() {
        chunks.push(df.slice_par(offset as i64, rows_per_chunk));
        offset += rows_per_chunk;
    }

    chunks
}

pub fn write_chunked(
    df: &DataFrame,
    rows_per_chunk: usize,
    dir: impl AsRef<Path>,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("could not create directory {}", dir.display()))?;

    chunk_frame(df, rows_per_chunk)
        .into_par_iter()
        .enumerate()
        .map(|(idx, mut chunk)| -> Result<PathBuf> {
            let path = dir.join(format!("{stem}-{idx:04}.parquet"));
            write_parquet(&mut chunk, &path)?;
            Ok(path)
        })
        .collect()
}
