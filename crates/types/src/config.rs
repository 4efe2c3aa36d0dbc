use crate::error::ValidationError;
use crate::money::Cents;
use crate::pricing::{ModelParams, ScanRange};
use anyhow::{Context, Result};
use std::str::FromStr;

/// How the scan result is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// `$<price>: $<profit>` lines and a closing `Maximum profit:` line.
    #[default]
    Text,
    /// The full `ScanResult` as pretty-printed JSON.
    Json,
}

impl FromStr for ReportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ValidationError::InvalidReportFormat { value: s.to_string() }),
        }
    }
}

/// Run configuration loaded from environment variables.
///
/// The `theater` command takes no flags and needs no environment. Every
/// variable read here is an optional extension: `SCAN_LOW`, `SCAN_HIGH`,
/// `SCAN_STEP`, the model constants (`BASELINE_PRICE`, `BASELINE_ATTENDANCE`,
/// `ATTENDANCE_CHANGE`, `ATTENDANCE_PRICE_STEP`, `FIXED_COST`,
/// `VARIABLE_COST`) and `REPORT_FORMAT`. Unset variables fall back to the
/// reference scan ($1.00..=$6.00 by $0.10), the reference theater constants
/// and text output, which is exactly the plain `theater` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    // ── Scan ──
    pub range: ScanRange,

    // ── Demand & cost model ──
    pub params: ModelParams,

    // ── Output ──
    pub report_format: ReportFormat,
}

impl Config {
    /// Load configuration from environment variables.
    /// Call `dotenvy::dotenv().ok()` before calling this.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ModelParams::REFERENCE;

        let range = ScanRange::new(
            amount_or(&lookup, "SCAN_LOW", ScanRange::DEFAULT_LOW)?,
            amount_or(&lookup, "SCAN_HIGH", ScanRange::DEFAULT_HIGH)?,
            amount_or(&lookup, "SCAN_STEP", ScanRange::DEFAULT_STEP)?,
        )
        .context("Invalid scan range")?;

        let params = ModelParams {
            baseline_price: amount_or(&lookup, "BASELINE_PRICE", defaults.baseline_price)?,
            baseline_attendance: count_or(&lookup, "BASELINE_ATTENDANCE", defaults.baseline_attendance)?,
            attendance_change: count_or(&lookup, "ATTENDANCE_CHANGE", defaults.attendance_change)?,
            price_step: amount_or(&lookup, "ATTENDANCE_PRICE_STEP", defaults.price_step)?,
            fixed_cost: amount_or(&lookup, "FIXED_COST", defaults.fixed_cost)?,
            variable_cost: amount_or(&lookup, "VARIABLE_COST", defaults.variable_cost)?,
        }
        .validate()
        .context("Invalid model parameters")?;

        let report_format = match lookup("REPORT_FORMAT") {
            Some(raw) => raw.parse::<ReportFormat>().context("Invalid REPORT_FORMAT")?,
            None => ReportFormat::default(),
        };

        Ok(Config {
            range,
            params,
            report_format,
        })
    }
}

fn amount_or<F>(lookup: &F, name: &str, default: Cents) -> Result<Cents>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .parse::<Cents>()
            .with_context(|| format!("Invalid {name}")),
        None => Ok(default),
    }
}

fn count_or<F>(lookup: &F, name: &str, default: i64) -> Result<i64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .with_context(|| format!("Invalid {name}")),
        None => Ok(default),
    }
}
