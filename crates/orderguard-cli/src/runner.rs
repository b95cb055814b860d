use anyhow::Result;
use orderguard_core::{LoadAttempt, ReaderConfig, load_first_available, run_checks};
use orderguard_reports::{Reporter, StdOutFormatter};

/// Primary dataset path.
const PRIMARY_SOURCE: &str = "test_amazon_orders.csv";

/// Fallback dataset path, read leniently.
const FALLBACK_SOURCE: &str = "amazon_orders.csv";

/// Run the full validation pass. Returns whether the run passed.
pub fn run() -> Result<bool> {
    let formatter = StdOutFormatter::new();
    formatter.on_start();

    let attempts = [
        LoadAttempt::strict(PRIMARY_SOURCE),
        LoadAttempt::lenient(FALLBACK_SOURCE),
    ];
    let config = ReaderConfig::default();

    let loaded = match load_first_available(&attempts, &config) {
        Ok(loaded) => loaded,
        Err(failure) => {
            // Only the primary failure is narrated on stdout; the rest
            // reaches stderr through the returned error.
            if let Some((_, err)) = failure.failures.first() {
                formatter.on_attempt_failed(err);
            }
            return Err(failure.into());
        }
    };
    for (_, err) in &loaded.failures {
        formatter.on_attempt_failed(err);
    }
    formatter.on_load(&loaded);

    formatter.on_checks_start();
    let result = run_checks(&loaded.table)?;
    for outcome in result.outcomes() {
        formatter.on_check(outcome);
    }
    formatter.on_summary(&result);

    Ok(result.passed())
}
