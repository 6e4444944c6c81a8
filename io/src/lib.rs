//! Scan data I/O
//!
//! Reads and writes the files a scanning session leaves in its data directory:
//! - point cloud CSV (`csv`)
//! - frame images `frame_<id>.png` (`frames`)
//! - per-frame metadata `frameData_<id>.csv` and the derived average location (`average`)

pub mod average;
pub mod csv;
pub mod frames;

pub use average::{average_location, save_average_location, AVERAGE_LOCATION_FILE};
pub use csv::{parse, read_point_cloud, write_point_cloud, write_point_record};
pub use frames::{
    delete_frames, frame_path, list_frame_data_files, list_frame_ids, load_frame, save_image,
    try_load_frame,
};

pub use scanstitch_core::{Error, Result};
