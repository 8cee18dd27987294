use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use polars::prelude::*;

use polars_lazy_demo::dataset::ensure_sample_files;
use polars_lazy_demo::{
    grouped_mean, scan_csv, scan_parquet, write_chunked, write_parquet, write_partitioned,
};

fn main() -> Result<()> {
    let data_dir = Path::new("data");
    let (parquet, csv) = ensure_sample_files(data_dir)?;

    export_filtered(&parquet, data_dir)?;
    export_partitioned(&parquet, data_dir)?;
    export_chunked(&parquet, data_dir)?;
    streaming_aggregation(&csv)?;

    Ok(())
}

pub fn export_filtered(path: &Path, out_dir: &Path) -> Result<()> {
    let mut df = scan_parquet(path)?
        .filter(col("state").eq(lit("AL")))
        .filter(col("income").gt_eq(col("income").mean().over([col("year")])))
        .collect()?;
    let out = out_dir.join("alabama_above_mean.parquet");
    write_parquet(&mut df, &out)?;
    println!("wrote {} rows to {}", df.height(), out.display());

    Ok(())
}

// One file per year, written in parallel.
pub fn export_partitioned(path: &Path, out_dir: &Path) -> Result<()> {
    let df = scan_parquet(path)?.collect()?;
    let paths = write_partitioned(&df, &["year"], out_dir.join("by_year"))?;
    for p in &paths {
        println!("wrote {}", p.display());
    }

    Ok(())
}

// Fixed-size row chunks, useful when a downstream consumer caps file sizes.
pub fn export_chunked(path: &Path, out_dir: &Path) -> Result<()> {
    let df = scan_parquet(path)?.collect()?;
    let paths = write_chunked(&df, 5_000, out_dir.join("chunks"), "survey")?;
    println!("wrote {} chunk files", paths.len());

    Ok(())
}

// The streaming engine evaluates the same plan in batches, which keeps memory
// flat on inputs larger than RAM.
pub fn streaming_aggregation(csv_path: &Path) -> Result<()> {
    let now = Instant::now();
    let df = grouped_mean(scan_csv(csv_path)?, &["year", "state"], "income")
        .with_streaming(true)
        .collect()?;
    println!("{:?}", df);
    println!("streamed aggregation elapsed: {:.2?}", now.elapsed());

    Ok(())
}
