use std::path::Path;

use anyhow::Result;
use polars::prelude::*;

use polars_lazy_demo::dataset::ensure_sample_files;
use polars_lazy_demo::scan_parquet;

fn main() -> Result<()> {
    let (parquet, _) = ensure_sample_files(Path::new("data"))?;

    chained_pipeline(&parquet)?;
    staged_pipeline(&parquet)?;
    multi_predicate_filter(&parquet)?;
    dependent_columns(&parquet)?;

    Ok(())
}

// Chain filter, sort and a derived column in one go. The engine decides the
// actual execution order; nothing runs until collect.
pub fn chained_pipeline(path: &Path) -> Result<()> {
    let df = scan_parquet(path)?
        .filter(col("state").eq(lit("AL")))
        .sort("county", SortOptions::default())
        .with_column(col("income").mean().alias("mean_income"))
        .collect()?;
    println!("{:?}", df);

    Ok(())
}

// The same pipeline split over intermediate variables. Each variable is still
// only a plan; collect once at the very end.
pub fn staged_pipeline(path: &Path) -> Result<()> {
    let alabama = scan_parquet(path)?
        .filter(col("state").eq(lit("AL")))
        .sort("county", SortOptions::default());

    let with_mean = alabama.with_column(col("income").mean().alias("mean_income"));

    let df = with_mean.collect()?;
    println!("{:?}", df);

    Ok(())
}

// Several predicates, a membership test and a derived ratio column. The
// unoptimized plan prints the steps in written order.
pub fn multi_predicate_filter(path: &Path) -> Result<()> {
    let lf = scan_parquet(path)?
        .sort("state", SortOptions::default())
        .filter(
            col("income")
                .gt(lit(30_000.0))
                .and(col("state").is_in(lit(Series::new("wanted", &["AL", "GA", "TX"])))),
        )
        .with_column((col("income") / col("members")).alias("income_per_member"));

    println!("{}", lf.explain(false)?);
    let df = lf.collect()?;
    println!("{:?}", df);

    Ok(())
}

// Expressions in one with_columns step run independently and cannot read each
// other's output. A column built on a new column needs its own step.
pub fn dependent_columns(path: &Path) -> Result<()> {
    let df = scan_parquet(path)?
        .with_columns([
            lit(1i32).alias("flag"),
            (col("income") / lit(1_000.0)).alias("income_k"),
        ])
        .with_column((col("flag") + lit(1i32)).alias("flag_next"))
        .collect()?;
    println!("{:?}", df);

    Ok(())
}
