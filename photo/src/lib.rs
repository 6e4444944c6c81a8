//! Multi-frame photography
//!
//! Turns a selection of recorded frames into one composite image.
//!
//! - [`StitchOrchestrator`]: loads the selected frames and decides between
//!   passing a single frame through and building a panorama
//! - [`Panorama`]: the stitching capability, with [`Stitcher`] as the built-in
//!   left-to-right layout
//!
//! # Example
//!
//! ```no_run
//! # use scanstitch_photo::StitchOrchestrator;
//! # use scanstitch_core::FrameId;
//! let mut orchestrator = StitchOrchestrator::new();
//! let ids = [FrameId(1), FrameId(2)];
//! let pano = orchestrator.stitch(&ids, |id| {
//!     image::open(format!("scan/frame_{}.png", id)).ok().map(|img| img.to_rgb8())
//! });
//! ```

pub use scanstitch_core::{Error, Result, StitchStatus};

/// Frame loading and single-frame/panorama dispatch
pub mod orchestrator;
/// Panoramic image stitching
pub mod stitcher;

pub use orchestrator::{StitchOrchestrator, StitchPhase, StitchResult};
pub use stitcher::{Panorama, Stitcher};
