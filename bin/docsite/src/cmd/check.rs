//! Check-links command - verify internal links resolve to pages

use std::{path::Path, process::ExitCode};

use color_eyre::eyre::{Result, WrapErr};
use docsite_core::Config;
use docsite_generator::{BrokenLink, LinkChecker, LinkReport};

/// Run the check-links command.
///
/// Exits with failure when any internal link points at a route with no page.
pub fn run(config_path: &Path) -> Result<ExitCode> {
    let config =
        Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
    tracing::info!(root = %config.content.root.display(), "Checking internal links");

    let report = LinkChecker::new(&config.content)
        .check()
        .wrap_err("Link check failed")?;

    print_report(&report);

    if report.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_report(report: &LinkReport) {
    if report.is_ok() {
        println!("All internal links OK.");
        return;
    }

    for broken in &report.broken {
        eprintln!("{}", broken_link_message(broken));
    }
    eprintln!("\n{} broken internal link(s) found.", report.broken.len());
}

fn broken_link_message(broken: &BrokenLink) -> String {
    format!("Broken link: \"{}\" in {}", broken.link, broken.file.display())
}
