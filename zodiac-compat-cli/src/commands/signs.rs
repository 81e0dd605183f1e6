use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use zodiac_compat_lib::{DocumentLayout, PipelineSettings, Sign};

pub(crate) fn run_signs(settings: &PipelineSettings) {
    let layout = DocumentLayout::new(&settings.source_root, &settings.document_name);

    log::info!("Zodiac signs:");
    log::info!("");
    for &sign in Sign::all() {
        let path = layout.document_path(sign);
        let status = if path.is_file() {
            format!("{}", "(found)".if_supports_color(Stdout, |t| t.green()))
        } else {
            format!("{}", "(missing)".if_supports_color(Stdout, |t| t.dimmed()))
        };
        log::info!(
            "  {} {} {}",
            format!("{:<8}", sign.name()).if_supports_color(Stdout, |t| t.bold()),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            status,
        );
        let extra = &sign.aliases()[1..];
        if !extra.is_empty() {
            log::info!("           Aliases: {}", extra.join(", "));
        }
    }
}
