use anyhow::{Context, Result};
use std::io::Write;
use theater_types::config::ReportFormat;
use theater_types::scan::{PricePoint, ScanResult};

/// `$<price>: $<profit>`
pub fn format_point(point: &PricePoint) -> String {
    format!("${}: ${}", point.price, point.profit)
}

/// Write the scan to `out` in the requested format.
pub fn write_report<W: Write>(out: &mut W, result: &ScanResult, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for point in &result.points {
                writeln!(out, "{}", format_point(point))?;
            }
            writeln!(out, "Maximum profit: {}", format_point(&result.best))?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result).context("Failed to serialize scan result")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
