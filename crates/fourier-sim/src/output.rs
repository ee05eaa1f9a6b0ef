use std::fs;
use std::path::{Path, PathBuf};

use fourier_core::{to_canonical_json_bytes, ErrorInfo, FourierError};
use fourier_series::SweepReport;

fn io_error(code: &str, path: &Path, err: impl ToString) -> FourierError {
    FourierError::Serde(ErrorInfo::new(code, err.to_string()).with_context("path", path.display()))
}

/// Files written for a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepArtifacts {
    /// Canonical JSON report.
    pub json: PathBuf,
    /// One row per sample point, one column per order.
    pub csv: PathBuf,
}

/// Writes `sweep.json` and `sweep.csv` for a report into `out`.
pub fn write_report(out: &Path, report: &SweepReport) -> Result<SweepArtifacts, FourierError> {
    fs::create_dir_all(out).map_err(|err| io_error("out-dir", out, err))?;

    let json = out.join("sweep.json");
    let bytes = to_canonical_json_bytes(report)?;
    fs::write(&json, bytes).map_err(|err| io_error("json-write", &json, err))?;

    let csv = out.join("sweep.csv");
    write_csv(&csv, report)?;

    Ok(SweepArtifacts { json, csv })
}

fn write_csv(path: &Path, report: &SweepReport) -> Result<(), FourierError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| io_error("csv-open", path, err))?;

    let mut header = vec!["t".to_string()];
    if report.target.is_some() {
        header.push("target".to_string());
    }
    header.extend(report.orders.iter().map(|result| format!("n{}", result.order)));
    writer
        .write_record(&header)
        .map_err(|err| io_error("csv-write", path, err))?;

    for (idx, t) in report.domain.iter().enumerate() {
        let mut row = vec![format!("{t:.9}")];
        if let Some(target) = &report.target {
            row.push(format!("{:.9}", target[idx]));
        }
        row.extend(
            report
                .orders
                .iter()
                .map(|result| format!("{:.9}", result.values[idx])),
        );
        writer
            .write_record(&row)
            .map_err(|err| io_error("csv-write", path, err))?;
    }
    writer.flush().map_err(|err| io_error("csv-flush", path, err))
}
