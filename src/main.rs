use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

mod extract;

/// Source documents and their destination text files, processed in order.
const JOBS: &[(&str, &str)] = &[
    ("question_bank/reading_question.pdf", "reading_sample.txt"),
    ("question_bank/math_question.pdf", "math_sample.txt"),
];

/// Create a spinner for indeterminate progress
fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

fn main() -> Result<()> {
    for (source, dest) in JOBS {
        let spinner = create_spinner(&format!("Extracting {}...", source));
        let count = extract::extract(Path::new(source), Path::new(dest))
            .with_context(|| format!("Failed to extract {}", source))?;
        spinner.finish_and_clear();

        println!(
            "{} {} chars to {}",
            "Extracted".green().bold(),
            count,
            dest.cyan()
        );
    }

    Ok(())
}
