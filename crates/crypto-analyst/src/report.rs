//! Report Rendering
//!
//! Prints an [`AssetReport`] for human inspection and optionally persists it
//! as pretty-printed JSON.

use std::io::{self, Stdout, Write};
use std::path::Path;

use crate::error::Result;
use crate::model::AssetReport;

const HEADING: &str = "Cryptocurrency Analysis Report:";

/// Writes reports to a sink (stdout by default)
pub struct Reporter<W: Write = Stdout> {
    out: W,
}

impl Reporter<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for Reporter<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render `report`; with `save_path`, also dump it and write it to disk.
    ///
    /// A missing report is logged and nothing is written.
    pub fn generate_report(&mut self, report: Option<&AssetReport>, save_path: Option<&Path>) -> Result<()> {
        let Some(report) = report else {
            tracing::warn!("No data to generate report");
            return Ok(());
        };

        writeln!(self.out, "{}", HEADING)?;

        if let Some(path) = save_path {
            let pretty = serde_json::to_string_pretty(report)?;
            let rule = "=".repeat(50);
            writeln!(self.out, "{}\n{}\n{}", rule, pretty, rule)?;

            save_report(report, path)?;
            writeln!(self.out, "\nReport saved to {}", path.display())?;
            tracing::info!(path = %path.display(), "Report saved");
        }

        self.out.flush()?;
        Ok(())
    }
}

/// Persist a report as 2-space indented JSON
pub fn save_report(report: &AssetReport, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> AssetReport {
        let mut report = AssetReport::default();
        report.basic_info.id = Some("bitcoin".into());
        report.market_data.current_price_usd = dec!(97500);
        report
    }

    #[test]
    fn test_none_writes_nothing() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.generate_report(None, None).unwrap();
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn test_heading_only_without_path() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.generate_report(Some(&sample()), None).unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "Cryptocurrency Analysis Report:\n");
    }

    #[test]
    fn test_save_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let mut reporter = Reporter::new(Vec::new());
        reporter.generate_report(Some(&sample()), Some(&path)).unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.contains(&"=".repeat(50)));
        assert!(out.contains("Report saved to"));

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.starts_with("{\n  \"basic_info\""));
        let restored: AssetReport = serde_json::from_str(&saved).unwrap();
        assert_eq!(restored, sample());
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let mut reporter = Reporter::new(Vec::new());
        let result = reporter.generate_report(Some(&sample()), Some(Path::new("/no/such/dir/report.json")));
        assert!(result.is_err());
    }
}
