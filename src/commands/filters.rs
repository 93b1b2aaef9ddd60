//! List the filter battery

use nonsense::config::Config;
use nonsense::output::{FiltersOutput, OutputMode};

/// Show every filter, in registration order, with its thresholds
pub fn filters(config: &Config, mode: OutputMode) {
    FiltersOutput {
        filters: config.filters.entries(),
    }
    .render(mode);
}
