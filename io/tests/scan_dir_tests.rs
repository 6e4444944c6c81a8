use image::{Rgb, RgbImage};
use scanstitch_core::FrameId;
use scanstitch_io::{
    average_location, delete_frames, list_frame_ids, load_frame, parse, save_average_location,
    save_image, AVERAGE_LOCATION_FILE,
};
use std::fs;
use tempfile::tempdir;

fn solid(width: u32, height: u32, value: u8) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([value, value, value]))
}

#[test]
fn test_parse_cloud_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pointData.csv");
    fs::write(&path, "0,0,0,1,2\n10,0,0,3\n").unwrap();

    let cloud = parse(&path).unwrap();
    assert_eq!(cloud.len(), 2);
    assert_eq!(
        cloud.get(0).unwrap().frame_ids(),
        &[FrameId(1), FrameId(2)]
    );
    assert_eq!(cloud.get(1).unwrap().coordinate().x, 10.0);
}

#[test]
fn test_parse_missing_file() {
    let dir = tempdir().unwrap();
    assert!(parse(dir.path().join("nope.csv")).is_err());
}

#[test]
fn test_list_frame_ids_ignores_other_files() {
    let dir = tempdir().unwrap();
    for name in [
        "frame_3.png",
        "frame_10.png",
        "frame_1.png",
        "frame_x.png",
        "frame_2.jpg",
        "frameData_3.csv",
        "stitched_frames.png",
    ] {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    fs::create_dir(dir.path().join("frame_99.png")).unwrap();

    let ids: Vec<FrameId> = list_frame_ids(dir.path()).unwrap().into_iter().collect();
    assert_eq!(ids, vec![FrameId(1), FrameId(3), FrameId(10)]);
}

#[test]
fn test_save_and_load_frame() {
    let dir = tempdir().unwrap();
    let img = solid(8, 6, 120);
    save_image(dir.path().join("frame_4.png"), &img).unwrap();

    let loaded = load_frame(dir.path(), FrameId(4)).unwrap();
    assert_eq!(loaded.dimensions(), (8, 6));
    assert_eq!(loaded.get_pixel(3, 3), &Rgb([120, 120, 120]));
}

#[test]
fn test_delete_frames_keeps_other_files() {
    let dir = tempdir().unwrap();
    for name in ["frame_1.png", "frame_2.png", "stitched_frames.png", "pointData.csv"] {
        fs::write(dir.path().join(name), b"").unwrap();
    }

    assert_eq!(delete_frames(dir.path()).unwrap(), 2);
    assert!(list_frame_ids(dir.path()).unwrap().is_empty());
    assert!(dir.path().join("stitched_frames.png").exists());
    assert!(dir.path().join("pointData.csv").exists());
}

#[test]
fn test_average_location() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("frameData_1.csv"), "100,1,2,3\n9,9,9,9\n").unwrap();
    fs::write(dir.path().join("frameData_2.csv"), "200,3,4,5\n").unwrap();

    let avg = average_location(dir.path()).unwrap();
    assert!((avg.x - 2.0).abs() < 1e-12);
    assert!((avg.y - 3.0).abs() < 1e-12);
    assert!((avg.z - 4.0).abs() < 1e-12);

    let path = save_average_location(dir.path()).unwrap();
    assert_eq!(path, dir.path().join(AVERAGE_LOCATION_FILE));
    assert_eq!(fs::read_to_string(path).unwrap(), "2.0,3.0,4.0\n");
}

#[test]
fn test_average_location_without_metadata() {
    let dir = tempdir().unwrap();
    assert!(average_location(dir.path()).is_err());
}

#[test]
fn test_average_location_short_row() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("frameData_1.csv"), "100,1,2\n").unwrap();
    assert!(matches!(
        average_location(dir.path()),
        Err(scanstitch_core::Error::MalformedRecord { line: 1, .. })
    ));
}
