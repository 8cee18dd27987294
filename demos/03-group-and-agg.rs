use std::path::Path;

use anyhow::Result;
use polars::prelude::*;

use polars_lazy_demo::dataset::ensure_sample_files;
use polars_lazy_demo::{grouped_mean, scan_parquet};

fn main() -> Result<()> {
    let (parquet, _) = ensure_sample_files(Path::new("data"))?;

    group_and_aggregate(&parquet)?;
    group_in_written_order(&parquet)?;
    aggregate_then_filter(&parquet)?;

    Ok(())
}

// group_by + agg collapses each group to one row. Groups come back in no
// particular order.
pub fn group_and_aggregate(path: &Path) -> Result<()> {
    let df = scan_parquet(path)?
        .group_by([col("state"), col("year")])
        .agg([
            col("income").mean().alias("mean_income"),
            col("income").count().alias("households"),
        ])
        .collect()?;
    println!("{:?}", df);

    Ok(())
}

// group_by_stable keeps the order in which groups appear in the data. A bit
// slower, deterministic output.
pub fn group_in_written_order(path: &Path) -> Result<()> {
    let df = scan_parquet(path)?
        .group_by_stable([col("state"), col("year")])
        .agg([col("income").mean().alias("mean_income")])
        .collect()?;
    println!("{:?}", df);

    Ok(())
}

// An aggregation is a plan like any other: filter the grouped result before
// collecting.
pub fn aggregate_then_filter(path: &Path) -> Result<()> {
    let df = grouped_mean(scan_parquet(path)?, &["year", "state"], "income")
        .filter(col("year").eq(lit(1900)))
        .collect()?;
    println!("{:?}", df);

    Ok(())
}
