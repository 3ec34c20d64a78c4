use metrics::{IntoLabels, Label};

use crate::config::{SeparatorStyle, SweepConfig};

const MODE: &str = "mode";
const SEPARATOR_STYLE: &str = "separator_style";

/// Labels attached to every metric a sweep reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepLabels {
    parallel: bool,
    separator_style: SeparatorStyle,
}

impl SweepLabels {
    pub fn new(config: &SweepConfig) -> Self {
        SweepLabels {
            parallel: config.parallel,
            separator_style: config.separator_style,
        }
    }

    pub fn mode(&self) -> &'static str {
        if self.parallel {
            "parallel"
        } else {
            "sequential"
        }
    }
}

impl IntoLabels for SweepLabels {
    fn into_labels(self) -> Vec<Label> {
        vec![
            Label::new(MODE, self.mode()),
            Label::new(SEPARATOR_STYLE, <&'static str>::from(self.separator_style)),
        ]
    }
}
