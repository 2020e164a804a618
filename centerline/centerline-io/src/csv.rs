//! Diagnostic CSV export of per-branch statistics.
//!
//! One row per branch with `branch_id,length_mm,chord_mm,tortuosity`.
//! A branch whose endpoints coincide has no defined tortuosity; its last
//! field is left empty so spreadsheet tools read the column as numeric.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use centerline_metrics::branch_stats;
use centerline_types::Branch;

use crate::error::ArtifactResult;

/// Write one CSV row per branch with its length, chord, and tortuosity.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_branch_csv<P: AsRef<Path>>(path: P, branches: &[Branch]) -> ArtifactResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "branch_id,length_mm,chord_mm,tortuosity")?;
    for row in branch_stats(branches) {
        write!(
            writer,
            "{},{:.3},{:.3},",
            row.branch_id, row.length_mm, row.chord_mm
        )?;
        match row.tortuosity {
            Some(tortuosity) => writeln!(writer, "{tortuosity:.3}")?,
            None => writeln!(writer)?,
        }
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn rows_follow_the_header() {
        let branches = vec![
            Branch::new(
                vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
                0,
                1,
            ),
            Branch::new(
                vec![
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(3.0, 0.0, 0.0),
                    Point3::new(3.0, 4.0, 0.0),
                ],
                0,
                2,
            ),
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("branches.csv");

        save_branch_csv(&path, &branches).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "branch_id,length_mm,chord_mm,tortuosity");
        assert_eq!(lines[1], "0,1.000,1.000,1.000");
        assert_eq!(lines[2], "1,7.000,5.000,1.400");
    }

    #[test]
    fn closed_branch_leaves_tortuosity_empty() {
        let square = Branch::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 0.0),
            ],
            5,
            5,
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("closed.csv");

        save_branch_csv(&path, &[square]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert_eq!(text.lines().nth(1), Some("0,4.000,0.000,"));
    }

    #[test]
    fn empty_branch_set_writes_only_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        save_branch_csv(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert_eq!(text, "branch_id,length_mm,chord_mm,tortuosity\n");
    }
}
