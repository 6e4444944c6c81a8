//! Core types shared across the scanstitch workspace: the point cloud model,
//! frame identifiers, configuration and the common error type.

pub mod config;
pub mod error;
pub mod frame;
pub mod point_cloud;
pub mod runtime;
pub mod status;

pub use config::ScanConfig;
pub use error::{Error, Result};
pub use frame::FrameId;
pub use point_cloud::{PointCloud, PointRecord};
pub use runtime::init_global_thread_pool;
pub use status::StitchStatus;
