//! Closest-point search.
//!
//! Clouds recorded in a single scanning session are small enough that a
//! brute-force O(n) scan is used; there is no spatial index.

use crate::Result;
use nalgebra::Point3;
use scanstitch_core::{Error, PointCloud, PointRecord};

/// Result of a closest-point query.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosestPoint {
    pub record: PointRecord,
    /// Euclidean distance between the query and `record`.
    pub distance: f64,
    /// Position of `record` in the cloud.
    pub index: usize,
}

/// Find the record whose coordinate is closest to `query`.
///
/// Ties go to the record that appears first. Records at a non-finite
/// distance never win.
pub fn find_closest(cloud: &PointCloud, query: Point3<f64>) -> Result<ClosestPoint> {
    if cloud.is_empty() {
        return Err(Error::EmptyCloud);
    }

    let mut min_distance = f64::INFINITY;
    let mut min_index = None;

    for (index, record) in cloud.iter().enumerate() {
        let distance = nalgebra::distance(record.coordinate(), &query);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    let index = min_index.ok_or_else(|| {
        Error::InvalidInput(format!("no point at a finite distance from {}", query))
    })?;

    tracing::debug!(
        "Closest point to {} is #{} at distance {}",
        query,
        index,
        min_distance
    );

    Ok(ClosestPoint {
        record: cloud.records()[index].clone(),
        distance: min_distance,
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanstitch_core::FrameId;

    fn record(x: f64, y: f64, z: f64, frames: &[u64]) -> PointRecord {
        PointRecord::new(
            Point3::new(x, y, z),
            frames.iter().copied().map(FrameId).collect(),
        )
    }

    #[test]
    fn test_empty_cloud() {
        let err = find_closest(&PointCloud::default(), Point3::origin()).unwrap_err();
        assert!(matches!(err, Error::EmptyCloud));
    }

    #[test]
    fn test_single_record_always_wins() {
        let cloud = PointCloud::new(vec![record(1e150, -1e150, 1e150, &[1])]);
        let closest = find_closest(&cloud, Point3::origin()).unwrap();
        assert_eq!(closest.index, 0);
    }

    #[test]
    fn test_tie_goes_to_first() {
        let cloud = PointCloud::new(vec![
            record(-1.0, 0.0, 0.0, &[1]),
            record(1.0, 0.0, 0.0, &[2]),
        ]);
        let closest = find_closest(&cloud, Point3::origin()).unwrap();
        assert_eq!(closest.index, 0);
        assert_eq!(closest.record.frame_ids(), &[FrameId(1)]);
        assert_eq!(closest.distance, 1.0);
    }

    #[test]
    fn test_nan_query() {
        let cloud = PointCloud::new(vec![record(0.0, 0.0, 0.0, &[1])]);
        let err = find_closest(&cloud, Point3::new(f64::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_uses_all_three_axes() {
        let cloud = PointCloud::new(vec![
            record(0.0, 0.0, 5.0, &[1]),
            record(0.0, 0.0, 1.0, &[2]),
            record(0.0, 3.0, 0.0, &[3]),
        ]);
        let closest = find_closest(&cloud, Point3::new(0.0, 0.0, 2.0)).unwrap();
        assert_eq!(closest.index, 1);
        assert_eq!(closest.distance, 1.0);
    }
}
