use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - a sample store settings file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.settings.clone(), cli.test)?;

    info("Edit the settings file to match your store's working hours.");
    Ok(())
}
