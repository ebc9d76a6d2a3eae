use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::slots::compute_slots;
use crate::core::store::StoreContext;
use crate::errors::AppResult;
use crate::export::{OutputFormat, SlotRow, to_csv, to_json, write_output};
use crate::models::slot::SlotOutcome;
use crate::models::weekday::weekday_name;
use crate::utils::colors::colorize_selectable;
use crate::utils::date::{parse_date_arg, parse_now};
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Handle the `slots` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Slots {
        date,
        now,
        format,
        output,
        force,
    } = &cli.command
    else {
        return Ok(());
    };

    let ctx = StoreContext::load(cfg, cli.tz.as_deref())?;
    let tz = ctx.policy.timezone;
    let now = parse_now(now.as_deref(), tz)?;
    let date = date
        .as_deref()
        .map(|d| parse_date_arg(d, tz, now))
        .transpose()?;

    let outcomes = compute_slots(ctx.settings.working_hours.as_ref(), date, &ctx.policy, now);

    let content = match format {
        OutputFormat::Text => render_text(date, &outcomes, &ctx),
        OutputFormat::Json => to_json(&rows(date, &outcomes))?,
        OutputFormat::Csv => to_csv(&rows(date, &outcomes))?,
    };

    write_output(
        &content,
        &format.as_str().to_uppercase(),
        output.as_deref(),
        *force,
    )
}

fn rows(date: Option<NaiveDate>, outcomes: &[SlotOutcome]) -> Vec<SlotRow> {
    outcomes
        .iter()
        .map(|o| SlotRow::from_outcome(date, o))
        .collect()
}

fn render_text(date: Option<NaiveDate>, outcomes: &[SlotOutcome], ctx: &StoreContext) -> String {
    let title = match date {
        Some(d) => format!(
            "Delivery slots for {} ({})",
            d,
            weekday_name(ctx.policy.week_start.weekday_of(d))
        ),
        None => "Delivery slots".to_string(),
    };

    let mut table = Table::new(&["VALUE", "LABEL"]);
    for outcome in outcomes {
        let selectable = outcome.is_selectable();
        table.add_row(vec![
            colorize_selectable(&outcome.value(), selectable),
            colorize_selectable(&outcome.label(), selectable),
        ]);
    }

    let available = outcomes
        .iter()
        .filter(|o| matches!(o, SlotOutcome::Available(_)))
        .count();

    format!(
        "{title} [{}]\n\n{}\n{available} window(s) available\n",
        ctx.policy.timezone,
        table.render()
    )
}
