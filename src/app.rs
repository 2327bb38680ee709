use std::fs::File;
use std::io::{self, BufReader, Write};
use std::time::Instant;

use crate::cli::{Cli, OutputFormat, Query};
use crate::consts::DATE_FORMAT;
use crate::cookie::{ScanReport, TargetDay, find_most_active};
use crate::error::AppError;
use crate::output::{render_json, render_plain, render_table};
use crate::utils::set_scan_debug;

/// Scan the requested log and print the most active cookies
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let query = cli.to_query()?;
    set_scan_debug(cli.debug);

    let target = query.target_day();
    let start = Instant::now();
    let report = scan(&query, &target)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let rendered = match query.format {
        OutputFormat::Plain => render_plain(&report),
        OutputFormat::Json => format!("{}\n", render_json(&target, &report)?),
        OutputFormat::Table => render_table(&target, &report),
    };
    write_output(&mut io::stdout().lock(), &rendered)?;

    if cli.debug {
        print_scan_stats(&report, elapsed_ms);
    }
    if !cli.quiet {
        print_notices(&target, &report, cli.debug);
    }
    Ok(())
}

/// Write the rendered report. A closed pipe (e.g. `| head`) is not an error.
fn write_output<W: Write>(out: &mut W, rendered: &str) -> Result<(), AppError> {
    match out.write_all(rendered.as_bytes()).and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.map_err(AppError::Output),
    }
}

fn scan(query: &Query, target: &TargetDay) -> Result<ScanReport, AppError> {
    if query.reads_stdin() {
        return Ok(find_most_active(io::stdin().lock(), target)?);
    }

    let file = File::open(&query.path).map_err(|source| AppError::OpenFile {
        path: query.path.clone(),
        source,
    })?;
    Ok(find_most_active(BufReader::new(file), target)?)
}

fn print_scan_stats(report: &ScanReport, elapsed_ms: f64) {
    eprintln!(
        "Scanned {} lines in {:.0}ms: {} matching records, {} distinct cookies, {} skipped{}",
        report.lines_read,
        elapsed_ms,
        report.matched(),
        report.counts.len(),
        report.skipped.len(),
        if report.stopped_early {
            " (stopped at an older day)"
        } else {
            ""
        }
    );
}

fn print_notices(target: &TargetDay, report: &ScanReport, debug: bool) {
    if !debug && !report.skipped.is_empty() {
        eprintln!(
            "Skipped {} invalid line(s) (use --debug for details)",
            report.skipped.len()
        );
    }
    if report.is_empty() {
        eprintln!(
            "no cookies found for `{}`",
            target.date().format(DATE_FORMAT)
        );
    }
}
