use polars::prelude::*;

/// `(x - mean(x)) / std(x)` with the sample standard deviation (ddof 1).
pub fn standardize(value: Expr) -> Expr {
    (value.clone() - value.clone().mean()) / value.std(1)
}

/// Standardize within each partition instead of over the whole column.
pub fn standardize_over(value: Expr, partitions: &[&str]) -> Expr {
    let partitions = partitions
        .iter()
        .map(|x| col(x))
        .collect::<Vec<Expr>>();

    standardize(value).over(partitions)
}

// Same arithmetic as a column-at-a-time closure, for computations that cannot
// be written as a single expression. Group-aware: under `.over(..)` the
// closure sees one partition at a time, so aggregates inside stay local.
pub fn standardize_batch(value: Expr) -> Expr {
    value.apply(
        |s| {
            let floats = s.cast(&DataType::Float64)?;
            let ca = floats.f64()?;
            let (Some(mean), Some(std)) = (ca.mean(), ca.std(1)) else {
                return Ok(Some(Series::full_null(s.name(), s.len(), &DataType::Float64)));
            };
            let mut out = ca
                .into_iter()
                .map(|opt| opt.map(|v| (v - mean) / std))
                .collect::<Float64Chunked>();
            out.rename(s.name());
            Ok(Some(out.into_series()))
        },
        GetOutput::from_type(DataType::Float64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(left: f64, right: f64) {
        assert!((left - right).abs() < 1e-9, "{left} vs {right}");
    }

    #[test]
    fn test_standardize_zero_mean_unit_std() {
        let df = df!("income" => [10.0, 20.0, 30.0, 40.0]).unwrap();
        let out = df
            .lazy()
            .with_column(standardize(col("income")).alias("income_std"))
            .collect()
            .unwrap();

        let vals = out.column("income_std").unwrap().f64().unwrap();
        assert_close(vals.mean().unwrap(), 0.0);
        assert_close(vals.std(1).unwrap(), 1.0);
    }

    #[test]
    fn test_standardize_over_matches_per_group() {
        // Two partitions on very different scales standardize to the same values.
        let df = df!(
            "year" => [1900, 1900, 1900, 1910, 1910, 1910],
            "income" => [10.0, 20.0, 30.0, 1000.0, 2000.0, 3000.0],
        )
        .unwrap();

        let out = df
            .lazy()
            .with_column(standardize_over(col("income"), &["year"]).alias("income_std"))
            .collect()
            .unwrap();

        let vals = out.column("income_std").unwrap().f64().unwrap();
        for idx in 0..3 {
            assert_close(vals.get(idx).unwrap(), vals.get(idx + 3).unwrap());
        }
        assert_close(vals.get(0).unwrap(), -1.0);
        assert_close(vals.get(1).unwrap(), 0.0);
        assert_close(vals.get(2).unwrap(), 1.0);
    }

    #[test]
    fn test_standardize_property_within_groups() {
        let df = df!(
            "year" => [1900, 1900, 1900, 1900, 1910, 1910, 1910],
            "income" => [12.0, 48.0, 31.0, 9.0, 420.0, 380.0, 515.0],
        )
        .unwrap();

        let out = df
            .lazy()
            .with_column(standardize_over(col("income"), &["year"]).alias("income_std"))
            .collect()
            .unwrap();

        for year in [1900, 1910] {
            let group = out
                .clone()
                .lazy()
                .filter(col("year").eq(lit(year)))
                .collect()
                .unwrap();
            let vals = group.column("income_std").unwrap().f64().unwrap();
            assert_close(vals.mean().unwrap(), 0.0);
            assert_close(vals.std(1).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_standardize_batch_matches_expr() {
        let df = df!(
            "year" => [1900, 1900, 1910, 1910, 1910],
            "income" => [15.0, 45.0, 200.0, 350.0, 275.0],
        )
        .unwrap();

        let out = df
            .lazy()
            .with_columns([
                standardize_over(col("income"), &["year"]).alias("by_expr"),
                standardize_batch(col("income"))
                    .over([col("year")])
                    .alias("by_batch"),
            ])
            .collect()
            .unwrap();

        let by_expr = out.column("by_expr").unwrap().f64().unwrap();
        let by_batch = out.column("by_batch").unwrap().f64().unwrap();
        for (left, right) in by_expr.into_iter().zip(by_batch.into_iter()) {
            assert_close(left.unwrap(), right.unwrap());
        }
    }

    #[test]
    fn test_standardize_single_row_group_is_null() {
        let df = df!(
            "year" => [1900, 1910, 1910],
            "income" => [42.0, 10.0, 20.0],
        )
        .unwrap();

        let out = df
            .lazy()
            .with_column(standardize_over(col("income"), &["year"]).alias("income_std"))
            .collect()
            .unwrap();

        let vals = out.column("income_std").unwrap().f64().unwrap();
        assert!(vals.get(0).is_none());
        assert!(vals.get(1).is_some());
    }

    #[test]
    fn test_standardize_batch_keeps_nulls() {
        let df = df!(
            "income" => [Some(10.0), None, Some(30.0), Some(20.0)],
        )
        .unwrap();

        let out = df
            .lazy()
            .with_column(standardize_batch(col("income")).alias("income_std"))
            .collect()
            .unwrap();

        let vals = out.column("income_std").unwrap().f64().unwrap();
        assert!(vals.get(1).is_none());
        assert_eq!(vals.null_count(), 1);
    }
}
