//! Point cloud CSV
//!
//! One point per row. The coordinate columns are stored as `x, z, y`:
//!
//! | column | meaning     |
//! |--------|-------------|
//! | 0      | x           |
//! | 1      | z           |
//! | 2      | y           |
//! | 3..    | frame ids   |
//!
//! The swap is part of the recording format and downstream tools depend on
//! it, so readers and writers here keep it as is.
//!
//! A cell may be wrapped in double quotes (`"1.5","2","3","4"`). Quoted cells
//! containing commas or escaped quotes are not supported.

use crate::Result;
use nalgebra::Point3;
use scanstitch_core::{Error, FrameId, PointCloud, PointRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

const X_COLUMN: usize = 0;
const Z_COLUMN: usize = 1;
const Y_COLUMN: usize = 2;
const FIRST_FRAME_COLUMN: usize = 3;

/// Parse a point cloud CSV file.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<PointCloud> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let cloud = read_point_cloud(BufReader::new(file))?;
    tracing::debug!("Parsed {} points from {}", cloud.len(), path.display());
    Ok(cloud)
}

/// Read a point cloud from CSV text.
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
pub fn read_point_cloud<R: BufRead>(reader: R) -> Result<PointCloud> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_record(&line, index + 1)?);
    }

    Ok(PointCloud::new(records))
}

/// Parse one CSV row into a record.
pub fn parse_record(line: &str, line_number: usize) -> Result<PointRecord> {
    let cells: Vec<&str> = line.split(',').map(unquote).collect();

    if cells.len() < FIRST_FRAME_COLUMN {
        return Err(Error::malformed(
            line_number,
            format!(
                "expected at least {} columns, found {}",
                FIRST_FRAME_COLUMN,
                cells.len()
            ),
        ));
    }

    let coordinate = |column: usize, axis: &str| -> Result<f64> {
        cells[column].parse::<f64>().map_err(|_| {
            Error::malformed(
                line_number,
                format!("{} coordinate '{}' is not a number", axis, cells[column]),
            )
        })
    };

    let x = coordinate(X_COLUMN, "x")?;
    let y = coordinate(Y_COLUMN, "y")?;
    let z = coordinate(Z_COLUMN, "z")?;

    let frame_ids = cells[FIRST_FRAME_COLUMN..]
        .iter()
        .filter(|cell| !cell.is_empty())
        .map(|cell| {
            cell.parse::<FrameId>().map_err(|_| {
                Error::malformed(line_number, format!("frame id '{}' is not valid", cell))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PointRecord::new(Point3::new(x, y, z), frame_ids))
}

fn unquote(cell: &str) -> &str {
    let cell = cell.trim();
    cell.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(cell)
}

/// Write a record back in the `x, z, y, frames...` column layout.
pub fn write_point_record<W: Write>(writer: &mut W, record: &PointRecord) -> Result<()> {
    let p = record.coordinate();
    write!(writer, "{},{},{}", p.x, p.z, p.y)?;
    for id in record.frame_ids() {
        write!(writer, ",{}", id)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Write a whole cloud, one record per line.
pub fn write_point_cloud<W: Write>(writer: &mut W, cloud: &PointCloud) -> Result<()> {
    for record in cloud {
        write_point_record(writer, record)?;
    }
    Ok(())
}
