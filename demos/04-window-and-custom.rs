use std::path::Path;

use anyhow::Result;
use polars::prelude::*;

use polars_lazy_demo::dataset::ensure_sample_files;
use polars_lazy_demo::scan_parquet;
use polars_lazy_demo::stats::{standardize, standardize_batch, standardize_over};

fn main() -> Result<()> {
    let (parquet, _) = ensure_sample_files(Path::new("data"))?;

    filter_above_global_mean(&parquet)?;
    filter_above_yearly_mean(&parquet)?;
    standardize_with_expressions(&parquet)?;
    standardize_with_udf(&parquet)?;
    string_expressions(&parquet)?;

    Ok(())
}

// The aggregation on the right side broadcasts: every row is compared against
// one number.
pub fn filter_above_global_mean(path: &Path) -> Result<()> {
    let df = scan_parquet(path)?
        .filter(col("income").gt_eq(col("income").mean()))
        .collect()?;
    println!("{:?}", df);

    Ok(())
}

// over() turns the aggregation into a window: each row is compared against the
// mean of its own year without collapsing any rows.
pub fn filter_above_yearly_mean(path: &Path) -> Result<()> {
    let df = scan_parquet(path)?
        .filter(col("income").gt_eq(col("income").mean().over([col("year")])))
        .collect()?;
    println!("{:?}", df);

    Ok(())
}

pub fn standardize_with_expressions(path: &Path) -> Result<()> {
    let df = scan_parquet(path)?
        .with_columns([
            standardize(col("income")).alias("income_std"),
            standardize_over(col("income"), &["year"]).alias("income_std_by_year"),
        ])
        .collect()?;
    println!("{:?}", df);

    Ok(())
}

// Same result as the expression version, but the closure runs once per window
// partition on a materialized Series.
pub fn standardize_with_udf(path: &Path) -> Result<()> {
    let df = scan_parquet(path)?
        .with_column(
            standardize_batch(col("income"))
                .over([col("year")])
                .alias("income_std_by_year"),
        )
        .collect()?;
    println!("{:?}", df);

    Ok(())
}

// String functions live in the str namespace and chain one call at a time.
pub fn string_expressions(path: &Path) -> Result<()> {
    let df = scan_parquet(path)?
        .with_column(col("state").str().to_lowercase().alias("state_code"))
        .with_column(
            col("state_code")
                .str()
                .contains(lit("a"), true)
                .alias("has_a"),
        )
        .collect()?;
    println!("{:?}", df);

    Ok(())
}
