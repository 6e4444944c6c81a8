use nalgebra::Point3;
use scanstitch_core::{Error, FrameId, PointCloud, PointRecord, StitchStatus};

#[test]
fn test_point_cloud_keeps_file_order() {
    let records = vec![
        PointRecord::new(Point3::new(10.0, 0.0, 0.0), vec![FrameId(3)]),
        PointRecord::new(Point3::new(0.0, 0.0, 0.0), vec![FrameId(1), FrameId(2)]),
    ];
    let cloud: PointCloud = records.clone().into_iter().collect();

    assert_eq!(cloud.len(), 2);
    assert!(!cloud.is_empty());
    assert_eq!(cloud.records(), records.as_slice());
    assert_eq!(cloud.get(1).unwrap().frame_ids(), &[FrameId(1), FrameId(2)]);

    let xs: Vec<f64> = cloud.points().map(|p| p.x).collect();
    assert_eq!(xs, vec![10.0, 0.0]);
}

#[test]
fn test_empty_point_cloud() {
    let cloud = PointCloud::default();
    assert!(cloud.is_empty());
    assert!(cloud.get(0).is_none());
}

#[test]
fn test_error_messages() {
    let err = Error::StitchFailure(StitchStatus::HomographyEstimationFailed);
    assert_eq!(err.to_string(), "Can't stitch images, error code = 2");

    let err = Error::FrameLoad(FrameId(17));
    assert!(err.to_string().contains("17"));

    let err = Error::malformed(4, "expected at least 3 columns");
    assert!(err.to_string().contains("line 4"));
}
