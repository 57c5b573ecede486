use anyhow::Result;
use tracing::{error, info, warn};

use sleeptotals::aggregate::daily_totals;
use sleeptotals::alert::Alert;
use sleeptotals::cli::{parse_args, print_help};
use sleeptotals::config::Config;
use sleeptotals::report::render_report;
use sleeptotals::source::load_intervals_from;

fn main() -> Result<()> {
    let args = parse_args();

    if args.help {
        print_help();
        return Ok(());
    }

    // Initialize logging on stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sleeptotals=info".parse()?),
        )
        .init();

    info!("SleepTotals v{}", env!("CARGO_PKG_VERSION"));

    for flag in &args.missing_values {
        warn!("{} expects a value and was ignored", flag);
    }

    // Load configuration
    let config = Config::from_env()?
        .with_overrides(args.timezone.as_deref(), args.date_format.as_deref())?;
    info!("Configuration loaded");
    info!("  Timezone: {}", config.timezone);
    info!("  Date format: \"{}\"", config.date_format.pattern());
    info!("  Max records: {}", config.max_records);

    if let Err(e) = config.validate() {
        error!("{}", e);
        std::process::exit(1);
    }

    // Handle --validate mode
    if args.validate {
        info!("Configuration is valid");
        return Ok(());
    }

    let input = args.input.as_deref().unwrap_or("-");
    let intervals = match load_intervals_from(input, config.max_records) {
        Ok(intervals) => intervals,
        Err(e) => {
            error!("Failed to load sleep data from {}: {}", input, e);
            present(&Alert::load_failed(&e));
            std::process::exit(1);
        }
    };

    if intervals.is_empty() {
        warn!("No sleep records in input");
        present(&Alert::no_records());
        std::process::exit(1);
    }

    let totals = daily_totals(&intervals, &config.timezone);
    info!("Computed totals for {} days from {} records", totals.len(), intervals.len());

    for line in render_report(&totals, &config.date_format) {
        println!("{}", line);
    }

    Ok(())
}

fn present(alert: &Alert) {
    eprintln!("{}", alert);
}
