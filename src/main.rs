use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use polars::prelude::*;

use polars_lazy_demo::dataset::ensure_sample_files;
use polars_lazy_demo::scan_csv;
use polars_lazy_demo::stats::standardize_over;

fn main() -> Result<()> {
    let (_, csv_path) = ensure_sample_files(Path::new("data"))?;

    let now = Instant::now();

    let out = scan_csv(&csv_path)?
        .with_column(standardize_over(col("income"), &["year", "state"]).alias("income_std"))
        .filter(col("year").eq(lit(1910)).and(col("state").eq(lit("AL"))))
        .collect()?;
    println!("{:?}", out);

    println!("end processing elapsed: {:.2?}", now.elapsed());

    Ok(())
}
