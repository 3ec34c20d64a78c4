use crate::observability::labels::SweepLabels;
use metrics::{counter, Counter};

/// Counters reported once per sweep.
pub struct SweepMetrics {
    pub checked: Counter,
    pub valid: Counter,
    pub invalid: Counter,
    // Elapsed time, in nanoseconds
    pub duration: Counter,
}

impl SweepMetrics {
    pub fn new(labels: SweepLabels) -> Self {
        SweepMetrics {
            checked: counter!("sweep.checked", labels),
            valid: counter!("sweep.valid", labels),
            invalid: counter!("sweep.invalid", labels),
            duration: counter!("sweep.duration", labels),
        }
    }
}
