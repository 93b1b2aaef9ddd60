//! Classify a single text

use nonsense::config::Config;
use nonsense::output::{CheckOutput, FilterLine, OutputMode};

use super::read_stdin;

/// Classify `text`, or stdin when no text is given
pub fn check(
    config: &Config,
    text: Option<String>,
    explain: bool,
    strict: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => strip_line_ending(read_stdin()?),
    };

    let classifier = config.classifier();
    let result = classifier.classify(&text);
    let filters = if explain {
        classifier.evaluate(&text).iter().map(FilterLine::from).collect()
    } else {
        Vec::new()
    };

    let is_nonsense = result.is_nonsense;
    CheckOutput { result, filters }.render(mode);

    if strict && is_nonsense {
        std::process::exit(1);
    }

    Ok(())
}

/// Drop the single trailing newline a shell pipe adds
fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
