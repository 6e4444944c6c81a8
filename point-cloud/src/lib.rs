//! Point cloud queries and frame sampling
//!
//! - `nearest`: closest record to a query point (linear scan)
//! - `sampling`: positional decimation of frame id sequences

pub mod nearest;
pub mod sampling;

pub use nearest::{find_closest, ClosestPoint};
pub use sampling::decimate;

pub use scanstitch_core::{Error, Result};
