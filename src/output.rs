use std::fs;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::sweep::TrialRow;
use crate::EzError;

/// Conventional location of the result table, relative to the working
/// directory.
pub fn default_results_path() -> PathBuf {
    PathBuf::from("results").join("simulation_results.csv")
}

fn fmt_f64(value: f64) -> String {
    format!("{value:.10}")
}

/// Writes the result table with the fixed column schema
/// `N,a,v,t,a_hat,v_hat,t_hat`, one row per successful repetition, in
/// insertion order. Any existing file at `path` is overwritten.
pub fn write_results_csv(path: &Path, rows: &[TrialRow]) -> Result<(), EzError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = Writer::from_path(path)?;
    writer.write_record(["N", "a", "v", "t", "a_hat", "v_hat", "t_hat"])?;

    for row in rows {
        writer.write_record([
            row.sample_size.to_string(),
            fmt_f64(row.boundary),
            fmt_f64(row.drift),
            fmt_f64(row.non_decision),
            fmt_f64(row.boundary_hat),
            fmt_f64(row.drift_hat),
            fmt_f64(row.non_decision_hat),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
