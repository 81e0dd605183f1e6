use zodiac_compat_lib::PipelineSettings;

use crate::CliError;

/// Print the effective settings; the output is a valid settings file.
pub(crate) fn run_config_show(settings: &PipelineSettings) -> Result<(), CliError> {
    let toml = settings.to_toml()?;
    for line in toml.lines() {
        log::info!("{line}");
    }
    Ok(())
}
