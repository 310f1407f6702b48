//! fareline CLI - flight ticket duration and price analytics.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use fareline_lib::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "fareline")]
#[command(about = "Flight ticket duration and price analytics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: Format,

    /// Alternative timezone table (JSON object of code -> IANA zone)
    #[arg(long, value_name = "FILE", global = true)]
    zones: Option<PathBuf>,

    /// Evaluate zone offsets at this RFC 3339 instant instead of now
    #[arg(long, value_name = "INSTANT", global = true)]
    at: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimal flight time per carrier on a route
    Durations {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        route: RouteArgs,
    },

    /// Mean and median ticket price
    Prices {
        #[command(flatten)]
        source: SourceArgs,

        /// Only count tickets from this origin (requires --destination)
        #[arg(short, long, requires = "destination")]
        origin: Option<String>,

        /// Only count tickets to this destination (requires --origin)
        #[arg(short, long, requires = "origin")]
        destination: Option<String>,
    },

    /// Carrier durations on a route plus price statistics over all tickets
    Report {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        route: RouteArgs,
    },

    /// List the timezone table with resolved offsets
    Zones,
}

/// Where the ticket feed comes from.
#[derive(Args)]
struct SourceArgs {
    /// Ticket feed: a resource name, or JSON text with --inline
    source: String,

    /// Treat SOURCE as inline JSON text
    #[arg(long)]
    inline: bool,

    /// Root directory for resource names
    #[arg(long, value_name = "DIR", default_value = ".")]
    resource_dir: PathBuf,
}

impl SourceArgs {
    fn into_source(self) -> Source {
        if self.inline {
            Source::inline(self.source)
        } else {
            Source::resource(self.source, self.resource_dir)
        }
    }
}

/// Route filter with the original feed's default route.
#[derive(Args)]
struct RouteArgs {
    /// Origin airport code
    #[arg(short, long, default_value = "VVO")]
    origin: String,

    /// Destination airport code
    #[arg(short, long, default_value = "TLV")]
    destination: String,
}

impl RouteArgs {
    fn into_route(self) -> Route {
        Route::new(self.origin, self.destination)
    }
}

/// Settings shared by every command.
pub(crate) struct Settings {
    format: Format,
    table: Option<TimezoneTable>,
    clock: Clock,
}

impl Settings {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let table = cli
            .zones
            .as_deref()
            .map(|path| -> Result<TimezoneTable> {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Cannot read timezone table {}", path.display()))?;
                TimezoneTable::from_json(&json)
                    .with_context(|| format!("Invalid timezone table {}", path.display()))
            })
            .transpose()?;

        let clock = match cli.at.as_deref() {
            Some(at) => Clock::Fixed(
                chrono::DateTime::parse_from_rfc3339(at)
                    .with_context(|| format!("Invalid --at instant: {at}"))?
                    .to_utc(),
            ),
            None => Clock::Now,
        };

        Ok(Self {
            format: cli.format,
            table,
            clock,
        })
    }

    pub(crate) const fn format(&self) -> Format {
        self.format
    }

    pub(crate) fn resolver(&self) -> OffsetResolver<'_> {
        let table = self.table.as_ref().unwrap_or_else(|| TimezoneTable::global());
        OffsetResolver::new(table, self.clock)
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let settings = Settings::from_cli(&cli)?;

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Durations { source, route } => {
            commands::durations::durations(&settings, &source.into_source(), &route.into_route())
        }
        Commands::Prices {
            source,
            origin,
            destination,
        } => {
            let route = origin.zip(destination).map(|(o, d)| Route::new(o, d));
            commands::prices::prices(&settings, &source.into_source(), route.as_ref())
        }
        Commands::Report { source, route } => {
            commands::report::report(&settings, &source.into_source(), &route.into_route())
        }
        Commands::Zones => commands::zones::list_zones(&settings),
    }
}
