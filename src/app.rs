//! Command handlers
//!
//! Handlers work against any [`TimesheetStore`] and write their report to
//! `out`, so `main` only has to open the store and pick stdout.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::cli::{
    AppendArgs, Commands, CreateArgs, DeleteArgs, ExportArgs, MergeArgs, OutputFormat, StampArgs,
    SummarizeArgs,
};
use crate::consts::DEFAULT_NAME_STEM;
use crate::core::{DateFilter, Timesheet, summarize};
use crate::error::AppError;
use crate::output::{
    output_summary_csv, output_summary_json, render_list_table, render_summary_table,
    render_timesheet_table,
};
use crate::store::{TimesheetStore, default_name, validate_name};
use crate::utils::{confirm, parse_date, parse_time};

pub(crate) struct CommandContext<'a> {
    /// Timesheet named with `--name`
    pub(crate) name: Option<&'a str>,
    /// Config `default_timesheet`, a fallback target but never a name to create
    pub(crate) default_timesheet: Option<&'a str>,
    /// Wall-clock "now" in the selected timezone
    pub(crate) now: NaiveDateTime,
    pub(crate) use_color: bool,
    /// Stdin is a terminal, so confirmations can be asked
    pub(crate) interactive: bool,
}

impl CommandContext<'_> {
    fn today(&self) -> NaiveDate {
        self.now.date()
    }

    fn date_or_today(&self, date: Option<&str>) -> Result<NaiveDate, AppError> {
        date.map_or_else(|| Ok(self.today()), parse_date)
    }

    fn time_or_now(&self, time: Option<&str>) -> Result<NaiveTime, AppError> {
        time.map_or_else(|| Ok(self.now.time()), parse_time)
    }
}

pub(crate) fn run(
    command: &Commands,
    store: &mut dyn TimesheetStore,
    ctx: &CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match command {
        Commands::Create(args) => handle_create(args, store, ctx, out),
        Commands::Append(args) => handle_append(args, store, ctx, out),
        Commands::Start(args) => handle_stamp(args, Stamp::Start, store, ctx, out),
        Commands::Stop(args) => handle_stamp(args, Stamp::Stop, store, ctx, out),
        Commands::Summarize(args) => handle_summarize(args, store, ctx, out),
        Commands::Show => handle_show(store, ctx, out),
        Commands::Export(args) => handle_export(args, store, ctx, out),
        Commands::List => handle_list(store, ctx, out),
        Commands::Delete(args) => handle_delete(args, store, ctx, out),
        Commands::Merge(args) => handle_merge(args, store, out),
    }
}

/// `--name`, else the config `default_timesheet`, else the only stored timesheet
fn resolve_target(store: &dyn TimesheetStore, ctx: &CommandContext<'_>) -> Result<String, AppError> {
    if let Some(name) = ctx.name.or(ctx.default_timesheet) {
        return Ok(name.to_string());
    }
    let mut names = store.names()?;
    if names.len() == 1
        && let Some(only) = names.pop()
    {
        tracing::debug!(name = %only, "using the only stored timesheet");
        return Ok(only);
    }
    Err(AppError::NoTimesheetSelected { count: names.len() })
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    fs::write(path, content).map_err(|source| AppError::File {
        path: path.to_path_buf(),
        source,
    })
}

fn read_timesheet_json(path: &Path) -> Result<Timesheet, AppError> {
    let file = File::open(path).map_err(|source| AppError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Timesheet::from_json_reader(BufReader::new(file))
}

fn handle_create(
    args: &CreateArgs,
    store: &mut dyn TimesheetStore,
    ctx: &CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let name = match ctx.name {
        Some(name) => name.to_string(),
        None => default_name(DEFAULT_NAME_STEM, store.names()?.as_slice()),
    };
    validate_name(&name)?;

    let timesheet = match &args.from_json {
        Some(path) => read_timesheet_json(path)?,
        None => Timesheet::new(),
    };
    store.save(&name, &timesheet, args.force)?;

    writeln!(out, "{name}")?;
    Ok(())
}

fn handle_append(
    args: &AppendArgs,
    store: &mut dyn TimesheetStore,
    ctx: &CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let name = resolve_target(store, ctx)?;
    let date = ctx.date_or_today(args.date.as_deref())?;
    let times = if args.times.is_empty() {
        vec![ctx.now.time()]
    } else {
        args.times
            .iter()
            .map(|t| parse_time(t))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut timesheet = store.load(&name)?;
    timesheet.append(date, &times)?;
    store.save(&name, &timesheet, true)?;

    writeln!(out, "Appended {} timestamp(s) to {name} on {date}", times.len())?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Stamp {
    Start,
    Stop,
}

fn handle_stamp(
    args: &StampArgs,
    stamp: Stamp,
    store: &mut dyn TimesheetStore,
    ctx: &CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let name = resolve_target(store, ctx)?;
    let date = ctx.date_or_today(args.date.as_deref())?;
    let time = ctx.time_or_now(args.time.as_deref())?;

    let mut timesheet = store.load(&name)?;
    let running = timesheet.get(date).is_some_and(|day| day.is_open());
    match stamp {
        Stamp::Start if running => return Err(AppError::AlreadyStarted { date }),
        Stamp::Stop if !running => return Err(AppError::NotStarted { date }),
        _ => {}
    }
    timesheet.append(date, &[time])?;
    store.save(&name, &timesheet, true)?;

    let verb = match stamp {
        Stamp::Start => "Started",
        Stamp::Stop => "Stopped",
    };
    writeln!(out, "{verb} {name} at {date} {time}")?;
    Ok(())
}

fn summary_filter(args: &SummarizeArgs, ctx: &CommandContext<'_>) -> Result<DateFilter, AppError> {
    let period = args.period.unwrap_or_default();
    if args.this {
        return Ok(DateFilter::for_bucket(period, ctx.today()));
    }
    if args.last {
        let previous = period.previous(ctx.today()).unwrap_or(ctx.today());
        return Ok(DateFilter::for_bucket(period, previous));
    }
    let since = args.since.as_deref().map(parse_date).transpose()?;
    let until = args.until.as_deref().map(parse_date).transpose()?;
    Ok(DateFilter::new(since, until))
}

fn handle_summarize(
    args: &SummarizeArgs,
    store: &mut dyn TimesheetStore,
    ctx: &CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let name = resolve_target(store, ctx)?;
    let timesheet = store.load(&name)?;
    let period = args.period.unwrap_or_default();
    let order = args.order.unwrap_or_default();
    let filter = summary_filter(args, ctx)?;
    tracing::debug!(name = %name, ?filter, period = period.label(), "summarizing");

    let summary = summarize(&timesheet, &filter, period);
    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or(OutputFormat::Table);

    let content = match format {
        OutputFormat::Csv => output_summary_csv(&summary, order),
        OutputFormat::Json => output_summary_json(&summary, order)? + "\n",
        OutputFormat::Table => {
            if summary.is_empty() && args.output.is_none() {
                writeln!(out, "No recorded hours in {name} for the selected range.")?;
                return Ok(());
            }
            let use_color = ctx.use_color && args.output.is_none();
            render_summary_table(&summary, order, use_color) + "\n"
        }
    };

    match &args.output {
        Some(path) => {
            write_file(path, &content)?;
            writeln!(out, "Wrote {} summary of {name} to {}", period.label(), path.display())?;
        }
        None => out.write_all(content.as_bytes())?,
    }
    Ok(())
}

fn handle_show(
    store: &mut dyn TimesheetStore,
    ctx: &CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let name = resolve_target(store, ctx)?;
    let timesheet = store.load(&name)?;
    if timesheet.is_empty() {
        writeln!(out, "Timesheet {name} has no recorded days.")?;
        return Ok(());
    }
    writeln!(out, "{}", render_timesheet_table(&timesheet, ctx.use_color))?;
    Ok(())
}

fn handle_export(
    args: &ExportArgs,
    store: &mut dyn TimesheetStore,
    ctx: &CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let name = resolve_target(store, ctx)?;
    let json = store.load(&name)?.to_json_pretty()? + "\n";
    match &args.output {
        Some(path) => {
            write_file(path, &json)?;
            writeln!(out, "Exported {name} to {}", path.display())?;
        }
        None => out.write_all(json.as_bytes())?,
    }
    Ok(())
}

fn handle_list(
    store: &mut dyn TimesheetStore,
    ctx: &CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let entries = store.entries()?;
    if entries.is_empty() {
        writeln!(out, "No timesheets stored.")?;
        return Ok(());
    }
    writeln!(out, "{}", render_list_table(&entries, ctx.use_color))?;
    Ok(())
}

fn handle_delete(
    args: &DeleteArgs,
    store: &mut dyn TimesheetStore,
    ctx: &CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let name = args.timesheet.as_str();
    if !store.contains(name)? {
        return Err(AppError::TimesheetNotFound {
            name: name.to_string(),
        });
    }

    if !args.yes {
        if !ctx.interactive {
            writeln!(out, "Not deleting {name}: pass --yes to confirm")?;
            return Ok(());
        }
        if !confirm(&format!("Delete timesheet {name}?"))? {
            writeln!(out, "Aborted")?;
            return Ok(());
        }
    }

    store.delete(name)?;
    writeln!(out, "Deleted {name}")?;
    Ok(())
}

fn handle_merge(
    args: &MergeArgs,
    store: &mut dyn TimesheetStore,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let timesheets = args
        .timesheets
        .iter()
        .map(|name| store.load(name))
        .collect::<Result<Vec<_>, _>>()?;
    let merged = Timesheet::merge_all(&timesheets)?;

    let target = match &args.into {
        Some(name) => name.clone(),
        None => default_name(DEFAULT_NAME_STEM, store.names()?.as_slice()),
    };
    validate_name(&target)?;
    store.save(&target, &merged, args.force)?;
    tracing::debug!(sources = ?args.timesheets, target = %target, days = merged.len(), "merged");

    writeln!(out, "{target}")?;
    Ok(())
}
