use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDateTime;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use board_lights::app::{RunError, RunOptions, run, uk_now};
use board_lights::config::{Settings, parse_local_datetime};
use board_lights::darwin::{DarwinClient, MockDarwinClient};
use board_lights::indicator::{IndicatorStrip, TerminalStrip};
use board_lights::lights::DisplayConfig;

/// Show the next trains between two stations as a strip of coloured lights.
///
/// Stations and the API key are read from DEPARTURE_CRS_CODE,
/// DESTINATION_CRS_CODE and DARWIN_WEBSERVICE_API_KEY (a .env file is
/// loaded if present).
#[derive(Parser, Debug)]
#[command(name = "board-lights", version)]
struct Cli {
    /// Print the report even when a strip is attached
    #[arg(long)]
    chatty: bool,

    /// Draw the strip on the terminal
    #[arg(long)]
    terminal: bool,

    /// Serve boards from {CRS}.json files in this directory instead of Darwin
    #[arg(long, value_name = "DIR")]
    mock_dir: Option<PathBuf>,

    /// Number of time slots (one per light)
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
    slots: u16,

    /// Width of each time slot in minutes
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    bucket_mins: u16,

    /// Slots beyond this many buckets ahead are shown as imminent
    #[arg(long, default_value_t = 250)]
    far_horizon: u32,

    /// Number of board rows to request from Darwin
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(1..=150))]
    rows: u8,

    /// Measure departures from this UK local time instead of now
    #[arg(long, value_name = "YYYY-MM-DDTHH:MM[:SS]", value_parser = parse_local_datetime)]
    at: Option<NaiveDateTime>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<(), RunError> {
    let settings = Settings::from_env()?;

    let display = DisplayConfig::new(
        usize::from(cli.slots),
        i64::from(cli.bucket_mins),
        i64::from(cli.far_horizon),
    )?;

    let options = RunOptions {
        departure: settings.departure,
        destination: settings.destination,
        display,
        now: cli.at.unwrap_or_else(uk_now),
        chatty: cli.chatty,
    };
    debug!(now = %options.now, display = ?options.display, "Starting run");

    // With --chatty the report owns stdout, so the strip moves to stderr.
    let pixels = options.display.slot_count();
    let mut terminal: Option<Box<dyn IndicatorStrip>> = cli.terminal.then(|| {
        if cli.chatty {
            Box::new(TerminalStrip::stderr(pixels)) as Box<dyn IndicatorStrip>
        } else {
            Box::new(TerminalStrip::stdout(pixels))
        }
    });
    let strip = terminal
        .as_mut()
        .map(|s| s.as_mut() as &mut dyn IndicatorStrip);

    match &cli.mock_dir {
        Some(dir) => {
            let source = MockDarwinClient::new(dir)?;
            run(&source, strip, std::io::stdout(), &options).await?;
        }
        None => {
            let config = settings.darwin_config()?.with_num_rows(cli.rows);
            let source = DarwinClient::new(config)?;
            run(&source, strip, std::io::stdout(), &options).await?;
        }
    }

    Ok(())
}
