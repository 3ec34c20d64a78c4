use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::debug;

use crate::config::{ConfigError, SeparatorStyle, SweepConfig};
use crate::observability::labels::SweepLabels;
use crate::observability::metrics::SweepMetrics;
use crate::validator::{NhsCheckDigit, Validator};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepReport {
    pub checked: u64,
    pub valid: u64,
    pub elapsed: Duration,
}

impl SweepReport {
    pub fn invalid(&self) -> u64 {
        self.checked - self.valid
    }
}

/// Renders a number the way a user would type it. Separators are only inserted
/// into 10-digit numbers, as `XXX XXX XXXX`.
pub fn format_candidate(value: u64, style: SeparatorStyle) -> String {
    let digits = value.to_string();
    match style.separator() {
        Some(separator) if digits.len() == 10 => format!(
            "{}{separator}{}{separator}{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..]
        ),
        _ => digits,
    }
}

/// Validates every number in the configured range, one call per candidate, and
/// reports how many were valid along with the time it took.
pub fn sweep(config: &SweepConfig) -> Result<SweepReport, ConfigError> {
    let range = config.range()?;
    let validator = NhsCheckDigit::new(config.validator.clone());
    let style = config.separator_style;
    let is_valid = |value: u64| validator.is_valid_match(&format_candidate(value, style));

    let labels = SweepLabels::new(config);
    let mode = labels.mode();
    let metrics = SweepMetrics::new(labels);
    debug!(start = range.start, count = config.count, mode, "Starting sweep");

    let started = Instant::now();
    let valid = if config.parallel {
        range
            .into_par_iter()
            .filter(|value| is_valid(*value))
            .count() as u64
    } else {
        let mut valid = 0;
        for value in range {
            if is_valid(value) {
                valid += 1;
            }
        }
        valid
    };
    let elapsed = started.elapsed();

    let report = SweepReport {
        checked: config.count,
        valid,
        elapsed,
    };
    metrics.checked.increment(report.checked);
    metrics.valid.increment(report.valid);
    metrics.invalid.increment(report.invalid());
    metrics.duration.increment(elapsed.as_nanos() as u64);
    debug!(
        checked = report.checked,
        valid = report.valid,
        elapsed_secs = elapsed.as_secs_f64(),
        "Finished sweep"
    );

    Ok(report)
}
