use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::dates::{DeliveryDate, available_dates};
use crate::core::store::StoreContext;
use crate::errors::AppResult;
use crate::export::{DateRow, OutputFormat, to_csv, to_json, write_output};
use crate::utils::colors::colorize_selectable;
use crate::utils::date::parse_now;
use crate::utils::table::Table;

/// Handle the `dates` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Dates {
        now,
        days,
        format,
        output,
        force,
    } = &cli.command
    else {
        return Ok(());
    };

    let ctx = StoreContext::load(cfg, cli.tz.as_deref())?;
    let now = parse_now(now.as_deref(), ctx.policy.timezone)?;
    let max_days = days.unwrap_or_else(|| ctx.max_delivery_days(cfg));

    let dates = available_dates(
        ctx.settings.working_hours.as_ref(),
        &ctx.policy,
        max_days,
        now,
    );
    let rows: Vec<DateRow> = dates.iter().map(DateRow::from).collect();

    let content = match format {
        OutputFormat::Text => render_text(&dates),
        OutputFormat::Json => to_json(&rows)?,
        OutputFormat::Csv => to_csv(&rows)?,
    };

    write_output(
        &content,
        &format.as_str().to_uppercase(),
        output.as_deref(),
        *force,
    )
}

fn render_text(dates: &[DeliveryDate]) -> String {
    let mut table = Table::new(&["DATE", "DAY", "SLOTS", "STATUS"]);

    for d in dates {
        let status = match (&d.reason, d.selectable) {
            (_, true) => "available".to_string(),
            (Some(reason), false) => reason.clone(),
            (None, false) => "unavailable".to_string(),
        };
        table.add_row(vec![
            colorize_selectable(&d.date.to_string(), d.selectable),
            d.weekday.to_string(),
            d.slots.to_string(),
            colorize_selectable(&status, d.selectable),
        ]);
    }

    let selectable = dates.iter().filter(|d| d.selectable).count();
    format!(
        "{}\n{selectable} of {} date(s) can be booked\n",
        table.render(),
        dates.len()
    )
}
