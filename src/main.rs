use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use presencia::cache::PresenceCache;
use presencia::cli::{Cli, OutputFormat, ReportKind};
use presencia::csv_output::CsvReportOutput;
use presencia::json_output::JsonReport;
use presencia::report::{PresenceRow, Reporter};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Render the mean-by-weekday report as aligned text
fn print_means(rows: &[(&'static str, f64)]) {
    for (label, value) in rows {
        println!("{}  {:>10.1}", label, value);
    }
}

/// Render the total-by-weekday report as aligned text
fn print_totals(rows: &[PresenceRow]) {
    for row in rows {
        match row {
            PresenceRow::Header(left, right) => println!("{}  {}", left, right),
            PresenceRow::Total(label, value) => println!("{}  {:>10}", label, value),
        }
    }
}

/// Render the mean-start/end report as aligned text
fn print_start_end(rows: &[(&'static str, f64, f64)]) {
    for (label, start, end) in rows {
        println!("{}  {:>10.1}  {:>10.1}", label, start, end);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let cache = PresenceCache::new(
        cli.data_csv.clone(),
        cli.data_xml.clone(),
        Duration::from_secs(cli.cache_ttl),
    );
    let reporter = Reporter::new(&cache);

    let user_id = match (cli.report, cli.user_id) {
        (ReportKind::Users, _) => None,
        (_, Some(id)) => Some(id),
        (_, None) => bail!("this report requires a USER_ID argument"),
    };

    match cli.report {
        ReportKind::Users => {
            let users = reporter.users();
            match cli.format {
                OutputFormat::Text => {
                    for user in &users {
                        println!("{:>6}  {}", user.user_id, user.name);
                    }
                }
                OutputFormat::Json => println!("{}", JsonReport::Users(users).to_json()?),
                OutputFormat::Csv => print!("{}", CsvReportOutput::from_users(&users).to_csv()),
            }
        }
        ReportKind::Mean => {
            let rows = reporter.mean_by_weekday(user_id.unwrap_or_default());
            match cli.format {
                OutputFormat::Text => print_means(&rows),
                OutputFormat::Json => println!("{}", JsonReport::MeanByWeekday(rows).to_json()?),
                OutputFormat::Csv => print!("{}", CsvReportOutput::from_means(&rows).to_csv()),
            }
        }
        ReportKind::Total => {
            let rows = reporter.total_by_weekday(user_id.unwrap_or_default());
            match cli.format {
                OutputFormat::Text => print_totals(&rows),
                OutputFormat::Json => println!("{}", JsonReport::TotalByWeekday(rows).to_json()?),
                OutputFormat::Csv => print!("{}", CsvReportOutput::from_totals(&rows).to_csv()),
            }
        }
        ReportKind::StartEnd => {
            let rows = reporter.mean_start_end_by_weekday(user_id.unwrap_or_default());
            match cli.format {
                OutputFormat::Text => print_start_end(&rows),
                OutputFormat::Json => println!("{}", JsonReport::MeanStartEnd(rows).to_json()?),
                OutputFormat::Csv => print!("{}", CsvReportOutput::from_start_end(&rows).to_csv()),
            }
        }
    }

    Ok(())
}
