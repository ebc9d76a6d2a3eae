use crate::cli::parser::{Cli, Commands};
use crate::core::theme::{apply_theme_vars, render_css};
use crate::errors::AppResult;
use crate::export::write_output;
use crate::models::theme::ThemeSettings;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// Handle the `theme` command
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Theme {
        file,
        style,
        output,
        force,
    } = &cli.command
    else {
        return Ok(());
    };

    let theme = ThemeSettings::load(&expand_tilde(file))?;
    let vars = apply_theme_vars(&theme, *style);

    if vars.is_empty() {
        warning(format!("No theme variables found in {file}"));
    }

    write_output(&render_css(&vars), "CSS", output.as_deref(), *force)
}
