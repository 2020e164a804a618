//! JSON artifacts: the centerline polyline set and the indicator report.
//!
//! The centerline artifact is a JSON array with one object per branch,
//! carrying the ordered point list and the end node ids. Loading it back
//! reproduces every branch with its points in the original order. The
//! indicator report is written pretty-printed so it stays readable when
//! attached to a case file.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use centerline_metrics::IndicatorReport;
use centerline_types::Branch;

use crate::error::{ArtifactError, ArtifactResult};

/// Save a set of centerline branches as a JSON artifact.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_centerline<P: AsRef<Path>>(path: P, branches: &[Branch]) -> ArtifactResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, branches)?;
    Ok(())
}

/// Load a centerline artifact written by [`save_centerline`].
///
/// # Errors
///
/// Returns [`ArtifactError::FileNotFound`] if the path doesn't exist and
/// [`ArtifactError::Json`] if the payload is not a branch array.
pub fn load_centerline<P: AsRef<Path>>(path: P) -> ArtifactResult<Vec<Branch>> {
    let reader = open_buffered(path.as_ref())?;
    let branches = serde_json::from_reader(reader)?;
    Ok(branches)
}

/// Save an indicator report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_report<P: AsRef<Path>>(path: P, report: &IndicatorReport) -> ArtifactResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Load an indicator report written by [`save_report`].
///
/// # Errors
///
/// Returns [`ArtifactError::FileNotFound`] if the path doesn't exist and
/// [`ArtifactError::Json`] if the payload is not a report.
pub fn load_report<P: AsRef<Path>>(path: P) -> ArtifactResult<IndicatorReport> {
    let reader = open_buffered(path.as_ref())?;
    let report = serde_json::from_reader(reader)?;
    Ok(report)
}

/// Open a file for reading, mapping a missing path to its own variant.
fn open_buffered(path: &Path) -> ArtifactResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ArtifactError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ArtifactError::Io(e)
        }
    })?;
    Ok(BufReader::new(file))
}
