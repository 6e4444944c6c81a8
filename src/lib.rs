//! scanstitch
//!
//! Finds the recorded point closest to a 3-D coordinate, works out which
//! frames observed it and stitches those frames into one image. A batch mode
//! stitches a whole scan directory into a single panorama.

pub use scanstitch_core as core;
pub use scanstitch_io as io;
pub use scanstitch_photo as photo;
pub use scanstitch_plot as plot;
pub use scanstitch_point_cloud as point_cloud;

pub mod display;
pub mod driver;

pub use display::{ImageSink, PreviewSink};
pub use driver::{BatchReport, Driver, Mode, QueryReport};

/// Initialize a single global Rayon thread pool for parallel frame loading.
///
/// Call this once at application startup. Repeated calls are idempotent and
/// return the first initialization result.
///
/// Priority order:
/// 1. explicit `num_threads`
/// 2. `SCANSTITCH_CPU_THREADS` env var
/// 3. Rayon default
pub fn init_thread_pool(num_threads: Option<usize>) -> scanstitch_core::Result<()> {
    scanstitch_core::init_global_thread_pool(num_threads)
}
