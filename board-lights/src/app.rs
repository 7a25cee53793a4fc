//! One run of the board display: fetch, summarise, draw, report.

use std::io::Write;

use chrono::{NaiveDateTime, Utc};
use tracing::info;

use crate::config::ConfigError;
use crate::darwin::{BoardSource, DarwinError};
use crate::domain::Crs;
use crate::indicator::{IndicatorError, IndicatorStrip, render};
use crate::lights::{BoardSummary, DisplayConfig, summarise};
use crate::report::Report;

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to fetch departure board: {0}")]
    Fetch(#[from] DarwinError),

    #[error("indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("failed to write report: {0}")]
    Report(#[from] serde_json::Error),
}

/// What to show and when.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub departure: Crs,
    pub destination: Crs,
    pub display: DisplayConfig,
    /// The instant departures are measured from, in UK local time.
    pub now: NaiveDateTime,
    /// Write the report even when a strip is attached.
    pub chatty: bool,
}

/// The current wall-clock time in the UK, where Darwin's times are given.
pub fn uk_now() -> NaiveDateTime {
    Utc::now()
        .with_timezone(&chrono_tz::Europe::London)
        .naive_local()
}

/// Fetch the board and show it.
///
/// The strip is only drawn after the board has been fetched and fully
/// summarised, so a failed fetch never leaves a partial frame. The report
/// is written when there is no strip or when `chatty` is set.
pub async fn run<B: BoardSource>(
    source: &B,
    strip: Option<&mut dyn IndicatorStrip>,
    report_out: impl Write,
    options: &RunOptions,
) -> Result<BoardSummary, RunError> {
    let services = source
        .fetch_board(&options.departure, &options.destination)
        .await?;

    let summary = summarise(&services, options.now, &options.display);

    info!(
        departure = %options.departure,
        destination = %options.destination,
        rows = services.len(),
        placed = summary.classified.len(),
        "Board ready"
    );

    let has_strip = strip.is_some();
    if let Some(strip) = strip {
        render(&summary.slots, strip)?;
    }

    if options.chatty || !has_strip {
        Report::new(options.departure, options.destination, &services, &summary)
            .write_to(report_out)?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawService;
    use crate::indicator::{Colour, MemoryStrip, TerminalStrip};
    use crate::lights::Severity;
    use chrono::NaiveDate;

    struct FixedBoard(Vec<RawService>);

    impl BoardSource for FixedBoard {
        async fn fetch_board(&self, _: &Crs, _: &Crs) -> Result<Vec<RawService>, DarwinError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenBoard;

    impl BoardSource for BrokenBoard {
        async fn fetch_board(&self, _: &Crs, _: &Crs) -> Result<Vec<RawService>, DarwinError> {
            Err(DarwinError::Unauthorized)
        }
    }

    fn options(chatty: bool) -> RunOptions {
        RunOptions {
            departure: Crs::parse("GTW").unwrap(),
            destination: Crs::parse("BTN").unwrap(),
            display: DisplayConfig::default(),
            now: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(9, 59, 0)
                .unwrap(),
            chatty,
        }
    }

    fn board() -> FixedBoard {
        FixedBoard(vec![
            RawService::new("10:00", "On time", "Southern"),
            RawService::new("10:02", "Delayed", "Thameslink"),
            RawService::new("10:00", "Cancelled", "Southern"),
            RawService::new("10:30", "10:34", "Southern"),
        ])
    }

    #[tokio::test]
    async fn draws_strip_without_report() {
        let mut strip = MemoryStrip::new(8);
        let mut out = Vec::new();

        let summary = run(&board(), Some(&mut strip), &mut out, &options(false))
            .await
            .unwrap();

        assert_eq!(summary.slots.get(0), Some(Severity::OnTime));
        assert_eq!(summary.slots.get(7), Some(Severity::Late));
        let frame = strip.frame().unwrap();
        assert_eq!(frame[7], Colour::Green);
        assert_eq!(frame[0], Colour::Yellow);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn chatty_draws_and_reports() {
        let mut strip = MemoryStrip::new(8);
        let mut out = Vec::new();

        run(&board(), Some(&mut strip), &mut out, &options(true))
            .await
            .unwrap();

        assert_eq!(strip.commits(), 1);
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["slots"][0], 4);
    }

    #[tokio::test]
    async fn chatty_report_stays_json_beside_terminal_strip() {
        let mut strip = TerminalStrip::new(Vec::new(), 8);
        let mut out = Vec::new();

        run(&board(), Some(&mut strip), &mut out, &options(true))
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["destination_crs"], "BTN");
        let drawn = String::from_utf8(strip.into_inner()).unwrap();
        assert_eq!(drawn.lines().count(), 1);
    }

    #[tokio::test]
    async fn reports_without_strip() {
        let mut out = Vec::new();

        run(&board(), None, &mut out, &options(false)).await.unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["departure_crs"], "GTW");
        assert_eq!(json["classified"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn failed_fetch_commits_nothing() {
        let mut strip = MemoryStrip::new(8);
        let mut out = Vec::new();

        let err = run(&BrokenBoard, Some(&mut strip), &mut out, &options(true))
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::Fetch(DarwinError::Unauthorized)));
        assert_eq!(strip.commits(), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn wrong_strip_length_is_an_error() {
        let mut strip = MemoryStrip::new(4);

        let err = run(&board(), Some(&mut strip), Vec::new(), &options(false))
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::Indicator(_)));
    }

    #[test]
    fn error_display() {
        let err = RunError::from(DarwinError::RateLimited);
        assert_eq!(
            err.to_string(),
            "failed to fetch departure board: rate limited by Darwin API"
        );
    }
}
