use std::io::{ErrorKind, IsTerminal, Write};
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::cli::OutputFormat;
use crate::core::{TimingRow, build_table};
use crate::error::{AppError, LoadError};
use crate::output::{
    TimingTableOptions, output_rows_csv, output_rows_html, output_rows_json, render_timing_table,
};
use crate::source::{Source, load_snapshot};

const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderOptions {
    pub(crate) format: OutputFormat,
    pub(crate) use_color: bool,
}

fn table_title(rows: &[TimingRow], rendered_at: DateTime<Local>) -> String {
    let noun = if rows.len() == 1 { "driver" } else { "drivers" };
    format!(
        "Live Timing | {} {} | {}",
        rows.len(),
        noun,
        rendered_at.format(TIME_FORMAT)
    )
}

/// Render ranked rows in the requested output format
pub(crate) fn render_rows(
    rows: &[TimingRow],
    options: RenderOptions,
    rendered_at: DateTime<Local>,
) -> String {
    match options.format {
        OutputFormat::Table => render_timing_table(
            rows,
            &table_title(rows, rendered_at),
            TimingTableOptions {
                use_color: options.use_color,
            },
        ),
        OutputFormat::Json => output_rows_json(rows) + "\n",
        OutputFormat::Csv => output_rows_csv(rows),
        OutputFormat::Html => output_rows_html(rows) + "\n",
    }
}

/// One render cycle: load, rank, build rows, format
pub(crate) fn render_cycle(
    source: &dyn Source,
    options: RenderOptions,
    rendered_at: DateTime<Local>,
) -> Result<String, LoadError> {
    let snapshot = load_snapshot(source)?;
    let rows = build_table(&snapshot);
    Ok(render_rows(&rows, options, rendered_at))
}

/// Render once; a load failure aborts without printing a partial table
pub(crate) fn run_once(source: &dyn Source, options: RenderOptions) -> Result<(), AppError> {
    let output = render_cycle(source, options, Local::now())?;
    print!("{output}");
    Ok(())
}

/// What to show for one watch-mode cycle
#[derive(Debug, PartialEq)]
pub(crate) struct Frame {
    pub(crate) body: String,
    /// Marks the body as stale or missing
    pub(crate) notice: Option<String>,
}

/// Last successful render, kept so a failed cycle never blanks the display
#[derive(Debug, Default)]
pub(crate) struct WatchState {
    last: Option<(String, DateTime<Local>)>,
}

impl WatchState {
    pub(crate) fn next_frame(
        &mut self,
        result: Result<String, LoadError>,
        now: DateTime<Local>,
    ) -> Frame {
        match result {
            Ok(body) => {
                self.last = Some((body.clone(), now));
                Frame { body, notice: None }
            }
            Err(e) => match &self.last {
                Some((body, at)) => Frame {
                    body: body.clone(),
                    notice: Some(format!(
                        "Live timing unavailable: {e} (showing last update from {})",
                        at.format(TIME_FORMAT)
                    )),
                },
                None => Frame {
                    body: String::new(),
                    notice: Some(format!("Live timing unavailable: {e}")),
                },
            },
        }
    }
}

fn print_frame(
    out: &mut impl Write,
    frame: &Frame,
    options: RenderOptions,
    clear: bool,
) -> std::io::Result<()> {
    if clear {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    write!(out, "{}", frame.body)?;
    if let Some(notice) = &frame.notice {
        // Keep machine-readable formats clean on stdout
        if options.format == OutputFormat::Table {
            writeln!(out, "\n  {notice}")?;
        } else {
            log::warn!("{notice}");
        }
    }
    out.flush()
}

/// Re-render on a fixed interval; runs until interrupted or `max_cycles` is reached
pub(crate) fn run_watch(
    source: &dyn Source,
    options: RenderOptions,
    interval: Duration,
    max_cycles: Option<u64>,
) -> Result<(), AppError> {
    let clear = options.format == OutputFormat::Table && std::io::stdout().is_terminal();
    let mut stdout = std::io::stdout().lock();
    watch_loop(&mut stdout, source, options, interval, max_cycles, clear)
}

/// Watch loop over any writer; a closed reader ends the loop cleanly
fn watch_loop(
    out: &mut impl Write,
    source: &dyn Source,
    options: RenderOptions,
    interval: Duration,
    max_cycles: Option<u64>,
    clear: bool,
) -> Result<(), AppError> {
    let mut state = WatchState::default();
    let mut cycle: u64 = 0;

    loop {
        let now = Local::now();
        let frame = state.next_frame(render_cycle(source, options, now), now);
        match print_frame(out, &frame, options, clear) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                log::debug!("Output closed, stopping after {} cycles", cycle + 1);
                return Ok(());
            }
            Err(e) => return Err(AppError::Output(e)),
        }

        cycle += 1;
        if max_cycles.is_some_and(|max| cycle >= max) {
            log::debug!("Stopping after {cycle} cycles");
            return Ok(());
        }
        std::thread::sleep(interval);
    }
}
