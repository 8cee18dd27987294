use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const YEARS: [i32; 4] = [1890, 1900, 1910, 1920];
pub const STATES: [&str; 8] = ["AL", "AR", "CA", "CO", "FL", "GA", "NY", "TX"];

pub const DEFAULT_ROWS_PER_YEAR: usize = 5_000;
pub const DEFAULT_SEED: u64 = 7;

const PARQUET_NAME: &str = "survey_samples.parquet";
const CSV_NAME: &str = "survey_samples.csv";

// Household survey samples: one frame per decennial year, combined into one
// dataset. Same seed, same data.
pub fn sample_frame(rows_per_year: usize, seed: u64) -> Result<DataFrame> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut frames = Vec::with_capacity(YEARS.len());
    for year in YEARS {
        let mut states = Vec::with_capacity(rows_per_year);
        let mut counties = Vec::with_capacity(rows_per_year);
        let mut incomes = Vec::with_capacity(rows_per_year);
        let mut members = Vec::with_capacity(rows_per_year);
        for _ in 0..rows_per_year {
            let state_idx = rng.gen_range(0..STATES.len());
            states.push(STATES[state_idx]);
            counties.push(rng.gen_range(1..=24));
            // Income scales with the state and drifts upward by decade.
            let base = 18_000.0 + 1_400.0 * state_idx as f64 + 35.0 * f64::from(year - YEARS[0]);
            incomes.push((base * rng.gen_range(0.45..2.6)).round());
            members.push(rng.gen_range(1..=7));
        }

        let df = df!(
            "year" => vec![year; rows_per_year],
            "state" => states,
            "county" => counties,
            "income" => incomes,
            "members" => members,
        )?;
        frames.push(df.lazy());
    }

    let lf = concat(
        frames,
        UnionArgs {
            parallel: true,
            rechunk: true,
            to_supertypes: true,
        },
    )
    .context("could not combine yearly frames")?;

    Ok(lf.collect()?)
}

pub fn write_sample_files(
    dir: impl AsRef<Path>,
    rows_per_year: usize,
    seed: u64,
) -> Result<(PathBuf, PathBuf)> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("could not create directory {}", dir.display()))?;

    let mut df = sample_frame(rows_per_year, seed)?;
    let parquet = dir.join(PARQUET_NAME);
    let csv = dir.join(CSV_NAME);
    crate::write_parquet(&mut df, &parquet)?;
    crate::write_csv(&mut df, &csv)?;

    Ok((parquet, csv))
}

pub fn ensure_sample_files(dir: impl AsRef<Path>) -> Result<(PathBuf, PathBuf)> {
    let dir = dir.as_ref();
    let parquet = dir.join(PARQUET_NAME);
    let csv = dir.join(CSV_NAME);
    if parquet.exists() && csv.exists() {
        return Ok((parquet, csv));
    }

    write_sample_files(dir, DEFAULT_ROWS_PER_YEAR, DEFAULT_SEED)
}
