//! Print every sample quantile definition side by side, plus a few normal quantiles
//!
//! Run with `RUST_LOG=stats_quantile=trace` to see each plotting position.

use sample_stats::{normal_quantile, percentile, QuantileEstimator, QuantileMethod, Summary};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sample = [35.0, 20.0, 50.0, 40.0, 15.0, 22.5, 61.0, 18.0];
    let probabilities = [0.0, 0.1, 0.25, 0.4, 0.5, 0.75, 0.9, 1.0];
    tracing::info!(n = sample.len(), grid = probabilities.len(), "building quantile table");

    println!("=== Sample Quantiles ===\n");
    println!("  Sample: {sample:?}\n");

    print!("  {:<8}", "method");
    for p in probabilities {
        print!("{p:>9.2}");
    }
    println!();

    for method in QuantileMethod::ALL {
        let row = method.quantiles(&sample, &probabilities)?;
        print!("  {:<8}", method.name());
        for q in row {
            print!("{q:>9.3}");
        }
        println!();
    }

    println!("\n  Spreadsheet percentile(0.4) = {}", percentile(&sample, 0.4)?);

    let summary = Summary::from_sample(&sample)?;
    println!("\n=== Summary ===\n");
    println!("  {}", describe(&summary));

    println!("\n=== Normal Quantiles ===\n");
    for p in [0.0, 1e-10, 0.025, 0.5, 0.975, 1.0] {
        println!("  N(100, 15²) at p = {p:<8} -> {:.6}", normal_quantile(p, 100.0, 15.0)?);
    }

    match normal_quantile(0.5, 0.0, 0.0) {
        Ok(q) => println!("  unexpected value for zero scale: {q}"),
        Err(e) => println!("  zero scale is undefined: {e}"),
    }

    Ok(())
}

fn describe(s: &Summary) -> String {
    format!(
        "n = {}, mean = {:.3}, q1 = {}, median = {}, q3 = {}, iqr = {}",
        s.count,
        s.mean,
        s.q1,
        s.median,
        s.q3,
        s.iqr()
    )
}
