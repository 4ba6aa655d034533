use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::icon::{recolor_icon, RecolorOutcome};

/// Recolor every configured icon in order, printing one status line per icon.
///
/// A missing input is reported and skipped. Any other failure stops the batch;
/// icons already written stay on disk.
pub fn run(config: &Config) -> Result<()> {
    for (input, output) in config.job_paths() {
        let outcome = recolor_icon(&input, &output, config.bg_color)?;
        println!("{}", report(&outcome));
    }
    Ok(())
}

pub fn report(outcome: &RecolorOutcome) -> String {
    match outcome {
        RecolorOutcome::Saved { output, replaced } => format!(
            "{} Saved recolored icon to: {} ({} pixels replaced)",
            "✓".green(),
            output.display(),
            replaced
        ),
        RecolorOutcome::MissingInput { input } => {
            format!("{} File not found: {}", "!".yellow(), input.display())
        }
    }
}
