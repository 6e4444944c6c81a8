//! Average scanner location over the per-frame metadata files.

use crate::frames::list_frame_data_files;
use crate::Result;
use nalgebra::{Point3, Vector3};
use scanstitch_core::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const AVERAGE_LOCATION_FILE: &str = "average_location.csv";

/// Columns of the location triple in the first row of `frameData_<id>.csv`.
const LOCATION_COLUMNS: [usize; 3] = [1, 2, 3];

/// Mean of the location stored in the first row of every `frameData_<id>.csv`.
pub fn average_location<P: AsRef<Path>>(directory: P) -> Result<Point3<f64>> {
    let files = list_frame_data_files(directory.as_ref())?;
    if files.is_empty() {
        return Err(Error::InvalidInput(format!(
            "no frameData files in {}",
            directory.as_ref().display()
        )));
    }

    let mut sum = Vector3::zeros();
    for (_, path) in &files {
        sum += read_location(path)?.coords;
    }

    Ok(Point3::from(sum / files.len() as f64))
}

fn read_location(path: &Path) -> Result<Point3<f64>> {
    let contents = fs::read_to_string(path)?;
    let (line_number, line) = contents
        .lines()
        .enumerate()
        .find(|(_, l)| !l.trim().is_empty())
        .ok_or_else(|| Error::InvalidInput(format!("{} has no rows", path.display())))?;

    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    let mut location = [0.0f64; 3];
    for (slot, &column) in location.iter_mut().zip(LOCATION_COLUMNS.iter()) {
        let cell = cells.get(column).ok_or_else(|| {
            Error::malformed(
                line_number + 1,
                format!("{}: missing column {}", path.display(), column),
            )
        })?;
        *slot = cell.parse().map_err(|_| {
            Error::malformed(
                line_number + 1,
                format!("{}: '{}' is not a number", path.display(), cell),
            )
        })?;
    }

    Ok(Point3::new(location[0], location[1], location[2]))
}

/// Compute the average location and write it as one CSV row to
/// `average_location.csv` inside `directory`.
pub fn save_average_location<P: AsRef<Path>>(directory: P) -> Result<PathBuf> {
    let directory = directory.as_ref();
    let average = average_location(directory)?;
    let path = directory.join(AVERAGE_LOCATION_FILE);

    let mut writer = BufWriter::new(File::create(&path)?);
    writeln!(writer, "{:?},{:?},{:?}", average.x, average.y, average.z)?;
    writer.flush()?;

    tracing::info!("Saved average location {:?} to {}", average, path.display());
    Ok(path)
}
