//! Pufflux alert query: main entry point.
//!
//! Hexagonal layout: the binary only builds adapters and hands them to the
//! core.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HttpAlertSource     SinkSpec → SinkTransport     LogEventSink │
//! │  (AlertSource)       (TransportFactory)           (EventSink)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │        QueryService (selector · pipeline · codec)      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Scheduler (delegate-driven) ──▶ CycleRunner                   │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{error, info};

use pufflux::adapters::http_feed::HttpAlertSource;
use pufflux::adapters::log_sink::LogEventSink;
use pufflux::app::runner::CycleRunner;
use pufflux::app::service::QueryService;
use pufflux::config::{DEFAULT_API_BASE, QueryConfig, SinkSpec};
use pufflux::protocol::{Classification, Palette};
use pufflux::scheduler::Scheduler;

/// Seconds per run-loop tick.
const TICK_SECS: u64 = 1;

// ── Command line ──────────────────────────────────────────────

/// Query the weather-alert feed and drive the Pufflux cloud.
#[derive(Parser, Debug)]
#[command(name = "pufflux", version, about, long_about = None)]
struct Cli {
    /// [API_KEY] STATE CITY. The key may be left out when --api-key or
    /// WUNDERGROUND_API_KEY supplies it.
    #[arg(num_args = 2..=3, required = true, value_names = ["API_KEY", "STATE", "CITY"])]
    location: Vec<String>,

    /// Feed API key
    #[arg(long, env = "WUNDERGROUND_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Seconds between cycles (0 = run once and exit)
    #[arg(short, long, value_name = "SECS", default_value_t = 0)]
    interval: u32,

    /// Seconds to wait after a failed cycle
    #[arg(short, long, value_name = "SECS", default_value_t = 10)]
    retry: u32,

    /// Exit after this many failed cycles in a row (0 = never)
    #[arg(long, value_name = "N", default_value_t = 0)]
    max_failures: u32,

    /// stdout, null, device:<path> or tcp:<host:port>
    #[arg(short, long, default_value = "stdout", value_parser = parse_sink)]
    sink: SinkSpec,

    /// Colour id table (extended, classic)
    #[arg(long, default_value = "extended", value_parser = parse_palette)]
    palette: Palette,

    /// Phenomenon classification (standard, air-quality)
    #[arg(long, default_value = "standard", value_parser = parse_classification)]
    classification: Classification,

    /// Feed base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout: u32,

    /// Log the effective configuration (key masked) before running
    #[arg(long)]
    print_config: bool,
}

fn parse_sink(s: &str) -> Result<SinkSpec, String> {
    s.parse().map_err(|e: pufflux::Error| e.to_string())
}

fn parse_palette(s: &str) -> Result<Palette, String> {
    s.parse().map_err(|e: pufflux::Error| e.to_string())
}

fn parse_classification(s: &str) -> Result<Classification, String> {
    s.parse().map_err(|e: pufflux::Error| e.to_string())
}

impl Cli {
    fn into_config(self) -> Result<QueryConfig> {
        let (api_key, state, city) = match self.location.as_slice() {
            [key, state, city] => (key.clone(), state.clone(), city.clone()),
            [state, city] => match self.api_key {
                Some(key) => (key, state.clone(), city.clone()),
                None => bail!("no API key: pass it first or set WUNDERGROUND_API_KEY"),
            },
            _ => bail!("expected [API_KEY] STATE CITY"),
        };

        Ok(QueryConfig {
            api_key,
            state,
            city,
            api_base: self.api_base,
            request_timeout_secs: self.timeout,
            poll_interval_secs: self.interval,
            retry_secs: self.retry,
            max_consecutive_failures: self.max_failures,
            sink: self.sink,
            palette: self.palette,
            classification: self.classification,
        })
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Logging (stderr; stdout carries command bytes) ─────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // ── 2. Configuration ──────────────────────────────────────
    let cli = Cli::parse();
    let print_config = cli.print_config;
    let config = cli.into_config()?;
    if print_config {
        let json = serde_json::to_string_pretty(&config.redacted())
            .context("serialising config")?;
        info!("effective config:\n{json}");
    }
    config.validate().context("invalid configuration")?;

    info!(
        "pufflux v{} | {}/{} | sink={} palette={} classification={}",
        env!("CARGO_PKG_VERSION"),
        config.state,
        config.city,
        config.sink,
        config.palette,
        config.classification,
    );

    // ── 3. Construct adapters ─────────────────────────────────
    let source = HttpAlertSource::new(&config).context("building HTTP feed client")?;
    let service = QueryService::new(config.profile());
    let mut runner = CycleRunner::new(service, source, config.sink.clone(), LogEventSink::new())
        .with_failure_limit(config.failure_limit());
    let mut scheduler = Scheduler::from_config(&config);

    // ── 4. Run loop ───────────────────────────────────────────
    let mut elapsed = 0;
    loop {
        scheduler.tick(elapsed, &mut runner);
        if let Some(e) = runner.give_up() {
            error!(
                "giving up after {} failed cycle(s) in a row",
                runner.service().consecutive_failures()
            );
            return Err(anyhow::Error::new(e.clone()).context("query cycle failed"));
        }

        if scheduler.is_finished() {
            break;
        }

        thread::sleep(Duration::from_secs(TICK_SECS));
        elapsed = TICK_SECS;
    }

    info!(
        "done after {} cycle(s), last command {}",
        runner.service().cycles(),
        runner
            .service()
            .last_command()
            .map_or_else(|| "none".to_owned(), |c| c.to_string()),
    );
    Ok(())
}
