use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use zodiac_compat_lib::{ExtractReport, PipelineSettings, Sign};

use crate::CliError;

pub(crate) fn run_extract(settings: &PipelineSettings) -> Result<(), CliError> {
    let report = zodiac_compat_lib::run_extract(settings)?;
    print_summary(&report);
    log::info!(
        "Saved to {}",
        settings
            .artifact_path
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

fn print_summary(report: &ExtractReport) {
    log::info!("");
    log::info!(
        "Extracted {} Chinese compatibility entries from {} of {} signs",
        report.entries.if_supports_color(Stdout, |t| t.bold()),
        report.processed.len(),
        Sign::all().len(),
    );

    if !report.skipped.is_empty() {
        let names: Vec<&str> = report.skipped.iter().map(|s| s.slug()).collect();
        log::warn!("No page found for: {}", names.join(", "));
    }

    let conflicts = report.conflicting().count();
    if conflicts > 0 {
        log::warn!(
            "{} pair(s) had different text on two pages; the later page was kept",
            conflicts
        );
    }
    if !report.unreachable.is_empty() {
        let keys: Vec<&str> = report.unreachable.iter().map(|k| k.as_str()).collect();
        log::warn!(
            "{} entr(ies) use names the sign lookup cannot produce: {}",
            keys.len(),
            keys.join(", ")
        );
    }

    let duplicates = report.collisions.len() - conflicts;
    if duplicates > 0 {
        log::info!(
            "{}",
            format!("{duplicates} pair(s) repeated verbatim on two pages")
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
