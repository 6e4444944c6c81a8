use crate::frame::FrameId;
use nalgebra::Point3;

/// A scanned point together with the frames that observed it.
///
/// Records are immutable once built; fields are only reachable through
/// accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    coordinate: Point3<f64>,
    frame_ids: Vec<FrameId>,
}

impl PointRecord {
    pub fn new(coordinate: Point3<f64>, frame_ids: Vec<FrameId>) -> Self {
        Self {
            coordinate,
            frame_ids,
        }
    }

    pub fn coordinate(&self) -> &Point3<f64> {
        &self.coordinate
    }

    pub fn frame_ids(&self) -> &[FrameId] {
        &self.frame_ids
    }
}

/// Point records in the order they were read from their source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    records: Vec<PointRecord>,
}

impl PointCloud {
    pub fn new(records: Vec<PointRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PointRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&PointRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Coordinates only, in record order.
    pub fn points(&self) -> impl Iterator<Item = &Point3<f64>> + '_ {
        self.records.iter().map(PointRecord::coordinate)
    }
}

impl FromIterator<PointRecord> for PointCloud {
    fn from_iter<I: IntoIterator<Item = PointRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a PointRecord;
    type IntoIter = std::slice::Iter<'a, PointRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
