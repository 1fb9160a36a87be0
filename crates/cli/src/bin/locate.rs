use std::path::Path;

use clap::{ArgAction, Parser, ValueEnum};
use kepler_planets::Planet;
use kepler_planets::config::{EpochConfig, OutputFormat, RunConfig, load_run_config};
use kepler_planets::export::writer_for_path;
use kepler_planets::report::{self, Epoch};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Print heliocentric ecliptic positions of the planets for one or more epochs.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Planet locator (JPL approximate Keplerian elements, 1800-2050)"
)]
struct Cli {
    /// Epoch in Julian centuries past J2000.0
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["date", "year"])]
    centuries: Option<f64>,

    /// Epoch as a calendar date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "year")]
    date: Option<String>,

    /// Calendar year, combined with --day
    #[arg(long, allow_hyphen_values = true, requires = "day")]
    year: Option<i32>,

    /// Ordinal day of the year (42 is February 11th)
    #[arg(long, requires = "year")]
    day: Option<f64>,

    /// Planet name or table index 0-8 (repeatable; defaults to all nine)
    #[arg(long = "planet")]
    planets: Vec<Planet>,

    /// Run configuration file (.yaml, .yml or .toml)
    #[arg(long)]
    config: Option<String>,

    /// Output format (defaults to the config's format, then text)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Output path, `-` for stdout
    #[arg(long)]
    output: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum FormatArg {
    Text,
    Csv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let run_config = match &cli.config {
        Some(path) => {
            debug!(path = %path, "loading run configuration");
            load_run_config(path)?
        }
        None => RunConfig::default(),
    };

    let epochs = resolve_epochs(&cli, &run_config)?;
    let planets = if cli.planets.is_empty() {
        run_config.planets()?
    } else {
        cli.planets.clone()
    };
    let format = cli.format.map(OutputFormat::from).unwrap_or(run_config.format);
    let output = cli
        .output
        .as_deref()
        .or(run_config.output.as_deref())
        .unwrap_or("-");

    info!(
        epochs = epochs.len(),
        planets = planets.len(),
        ?format,
        output,
        "locating planets"
    );

    let blocks = report::build_report(&epochs, &planets)?;
    let mut writer = writer_for_path(Path::new(output))?;
    report::write_report(writer.as_mut(), format, &blocks)?;
    Ok(())
}

/// Command-line epochs win over config epochs; with neither, use the sample epoch.
fn resolve_epochs(cli: &Cli, run_config: &RunConfig) -> anyhow::Result<Vec<Epoch>> {
    let from_flags = if let Some(centuries) = cli.centuries {
        Some(EpochConfig::Centuries { centuries })
    } else if let Some(date) = &cli.date {
        Some(EpochConfig::Date { date: date.clone() })
    } else {
        cli.year.zip(cli.day).map(|(year, day_of_year)| EpochConfig::YearDay { year, day_of_year })
    };

    if let Some(epoch) = from_flags {
        return Ok(vec![Epoch::new(epoch.label(), epoch.centuries()?)]);
    }

    let configured = report::epochs_from_config(run_config)?;
    if configured.is_empty() {
        Ok(vec![Epoch::sample()])
    } else {
        Ok(configured)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
