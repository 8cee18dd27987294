use std::path::Path;

use anyhow::Result;
use polars::prelude::*;

use polars_lazy_demo::dataset::ensure_sample_files;
use polars_lazy_demo::{preview, scan_parquet, schema_json, schema_of};

fn main() -> Result<()> {
    let (parquet, _) = ensure_sample_files(Path::new("data"))?;

    show_plan(&parquet)?;
    show_schema(&parquet)?;
    peek_rows(&parquet)?;

    Ok(())
}

// Scanning records where the data lives without reading any of it.
pub fn show_plan(path: &Path) -> Result<()> {
    let lf = scan_parquet(path)?;
    println!("{}", lf.explain(false)?);

    Ok(())
}

// Column names and dtypes resolve without executing the plan.
pub fn show_schema(path: &Path) -> Result<()> {
    let schema = schema_of(scan_parquet(path)?)?;
    for field in schema.iter_fields() {
        println!("{}: {}", field.name(), field.data_type());
    }

    println!("{}", schema_json(scan_parquet(path)?)?);

    Ok(())
}

// A small sample is enough to see what the data looks like. For quick tests
// on real questions, a filter on a single state is usually the better cut.
pub fn peek_rows(path: &Path) -> Result<()> {
    let df = preview(scan_parquet(path)?, 100)?;
    println!("{:?}", df);

    Ok(())
}
