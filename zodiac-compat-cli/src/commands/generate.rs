use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use zodiac_compat_lib::PipelineSettings;

use crate::CliError;

pub(crate) fn run_generate(settings: &PipelineSettings) -> Result<(), CliError> {
    let module = zodiac_compat_lib::run_generate(settings)?;
    log::info!(
        "Generated {}",
        module.display().if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}
