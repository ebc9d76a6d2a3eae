use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::hours::{group_working_hours, opening_hours_spec};
use crate::core::store::StoreContext;
use crate::errors::AppResult;
use crate::models::store_settings::display_amount;
use crate::models::working_hours::DaySchedule;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::colorize_status;
use crate::utils::table::Table;

/// Handle the `hours` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Hours { schema } = &cli.command else {
        return Ok(());
    };

    let ctx = StoreContext::load(cfg, cli.tz.as_deref())?;
    let markers = &ctx.policy.closed_markers;

    let Some(hours) = ctx
        .settings
        .working_hours
        .as_ref()
        .filter(|h| !h.is_empty())
    else {
        warning("Working hours not configured");
        return Ok(());
    };

    if *schema {
        for line in opening_hours_spec(hours, markers) {
            println!("{line}");
        }
        return Ok(());
    }

    let title = ctx
        .settings
        .store_name
        .clone()
        .unwrap_or_else(|| ctx.settings_path.display().to_string());
    header(format!("Working hours: {title}"));

    let mut table = Table::new(&["DAYS", "HOURS"]);
    for group in group_working_hours(hours, ctx.policy.week_start) {
        let open = group
            .days
            .first()
            .map(|day| matches!(hours.schedule_for(*day, markers), Ok(DaySchedule::Open(_))))
            .unwrap_or(false);
        table.add_row(vec![group.label(), colorize_status(&group.hours, open)]);
    }

    if table.is_empty() {
        info("No day has working hours set");
    } else {
        print!("{}", table.render());
    }

    if let Some(fee) = ctx.settings.delivery_fee.as_ref().and_then(display_amount) {
        info(format!("Delivery fee: {fee}"));
    }
    if let Some(free) = ctx
        .settings
        .free_delivery_from
        .as_ref()
        .and_then(display_amount)
    {
        info(format!("Free delivery from: {free}"));
    }

    Ok(())
}
