//! Frame selection to composite image.
//!
//! One call walks `Idle -> Loading -> {SingleFrame | Stitching} -> {Success | Failed}`.
//! Nothing partial is returned: either the whole selection produces an image or
//! the call fails.

use crate::stitcher::{Panorama, Stitcher};
use crate::Result;
use image::RgbImage;
use rayon::prelude::*;
use scanstitch_core::{Error, FrameId};

/// Image produced for a frame selection.
#[derive(Debug, Clone, PartialEq)]
pub enum StitchResult {
    /// Only one frame was selected; it is returned untouched.
    SingleFrame(RgbImage),
    /// Panorama of all selected frames.
    Stitched(RgbImage),
}

impl StitchResult {
    pub fn image(&self) -> &RgbImage {
        match self {
            StitchResult::SingleFrame(img) | StitchResult::Stitched(img) => img,
        }
    }

    pub fn into_image(self) -> RgbImage {
        match self {
            StitchResult::SingleFrame(img) | StitchResult::Stitched(img) => img,
        }
    }

    pub fn is_single_frame(&self) -> bool {
        matches!(self, StitchResult::SingleFrame(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StitchPhase {
    Idle,
    Loading,
    SingleFrame,
    Stitching,
    Success,
    Failed,
}

/// Loads frames and hands them to a [`Panorama`].
#[derive(Debug)]
pub struct StitchOrchestrator<P = Stitcher> {
    panorama: P,
    phase: StitchPhase,
}

impl StitchOrchestrator<Stitcher> {
    pub fn new() -> Self {
        Self::with_panorama(Stitcher::new())
    }
}

impl Default for StitchOrchestrator<Stitcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Panorama> StitchOrchestrator<P> {
    pub fn with_panorama(panorama: P) -> Self {
        Self {
            panorama,
            phase: StitchPhase::Idle,
        }
    }

    /// State reached by the most recent call to [`stitch`](Self::stitch).
    pub fn phase(&self) -> StitchPhase {
        self.phase
    }

    pub fn panorama(&self) -> &P {
        &self.panorama
    }

    /// Build one image from `frame_ids`.
    ///
    /// `loader` returns `None` when a frame has no readable image. Frames are
    /// loaded in parallel but reach the panorama in `frame_ids` order. With a
    /// single id the panorama is not invoked.
    pub fn stitch<F>(&mut self, frame_ids: &[FrameId], loader: F) -> Result<StitchResult>
    where
        F: Fn(FrameId) -> Option<RgbImage> + Sync,
    {
        self.phase = StitchPhase::Idle;
        let outcome = self.run(frame_ids, &loader);
        self.transition(if outcome.is_ok() {
            StitchPhase::Success
        } else {
            StitchPhase::Failed
        });
        outcome
    }

    fn run<F>(&mut self, frame_ids: &[FrameId], loader: &F) -> Result<StitchResult>
    where
        F: Fn(FrameId) -> Option<RgbImage> + Sync,
    {
        if frame_ids.is_empty() {
            return Err(Error::NoFrames);
        }

        self.transition(StitchPhase::Loading);

        if let [id] = frame_ids {
            let image = loader(*id).ok_or(Error::FrameLoad(*id))?;
            tracing::info!("only one frame ({}), skipping stitching", id);
            self.transition(StitchPhase::SingleFrame);
            return Ok(StitchResult::SingleFrame(image));
        }

        let loaded: Vec<Option<RgbImage>> = frame_ids.par_iter().map(|&id| loader(id)).collect();

        let mut images = Vec::with_capacity(loaded.len());
        for (id, image) in frame_ids.iter().zip(loaded) {
            images.push(image.ok_or(Error::FrameLoad(*id))?);
        }

        self.transition(StitchPhase::Stitching);
        tracing::info!("Stitching {} frames", images.len());

        match self.panorama.stitch(&images) {
            Ok(pano) => Ok(StitchResult::Stitched(pano)),
            Err(status) if status.is_ok() => Err(Error::InvalidInput(
                "panorama produced no image but reported status ok".to_string(),
            )),
            Err(status) => Err(Error::StitchFailure(status)),
        }
    }

    fn transition(&mut self, next: StitchPhase) {
        tracing::debug!("stitch phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use scanstitch_core::StitchStatus;

    /// Panorama that records how often it ran and returns a fixed status.
    struct Scripted {
        calls: usize,
        status: StitchStatus,
        seen: Vec<u8>,
    }

    impl Scripted {
        fn new(status: StitchStatus) -> Self {
            Self {
                calls: 0,
                status,
                seen: Vec::new(),
            }
        }
    }

    impl Panorama for Scripted {
        fn stitch(&mut self, images: &[RgbImage]) -> std::result::Result<RgbImage, StitchStatus> {
            self.calls += 1;
            self.seen = images.iter().map(|img| img.get_pixel(0, 0)[0]).collect();
            if self.status.is_ok() {
                Ok(RgbImage::new(1, 1))
            } else {
                Err(self.status)
            }
        }
    }

    fn tagged(id: FrameId) -> Option<RgbImage> {
        Some(RgbImage::from_pixel(2, 2, Rgb([id.0 as u8, 0, 0])))
    }

    fn ids(values: &[u64]) -> Vec<FrameId> {
        values.iter().copied().map(FrameId).collect()
    }

    #[test]
    fn test_starts_idle() {
        let orchestrator = StitchOrchestrator::new();
        assert_eq!(orchestrator.phase(), StitchPhase::Idle);
    }

    #[test]
    fn test_no_frames() {
        let mut orchestrator = StitchOrchestrator::with_panorama(Scripted::new(StitchStatus::Ok));
        let err = orchestrator.stitch(&[], tagged).unwrap_err();
        assert!(matches!(err, Error::NoFrames));
        assert_eq!(orchestrator.phase(), StitchPhase::Failed);
        assert_eq!(orchestrator.panorama().calls, 0);
    }

    #[test]
    fn test_single_frame_skips_panorama() {
        let mut orchestrator = StitchOrchestrator::with_panorama(Scripted::new(StitchStatus::Ok));
        let result = orchestrator.stitch(&ids(&[7]), tagged).unwrap();
        assert!(result.is_single_frame());
        assert_eq!(result.image().get_pixel(0, 0)[0], 7);
        assert_eq!(orchestrator.panorama().calls, 0);
        assert_eq!(orchestrator.phase(), StitchPhase::Success);
    }

    #[test]
    fn test_single_missing_frame() {
        let mut orchestrator = StitchOrchestrator::with_panorama(Scripted::new(StitchStatus::Ok));
        let err = orchestrator.stitch(&ids(&[7]), |_| None).unwrap_err();
        assert!(matches!(err, Error::FrameLoad(FrameId(7))));
        assert_eq!(orchestrator.panorama().calls, 0);
    }

    #[test]
    fn test_multiple_frames_keep_order() {
        let mut orchestrator = StitchOrchestrator::with_panorama(Scripted::new(StitchStatus::Ok));
        let result = orchestrator.stitch(&ids(&[9, 2, 5, 1]), tagged).unwrap();
        assert!(matches!(result, StitchResult::Stitched(_)));
        assert_eq!(orchestrator.panorama().calls, 1);
        assert_eq!(orchestrator.panorama().seen, vec![9, 2, 5, 1]);
    }

    #[test]
    fn test_first_missing_frame_in_order_is_reported() {
        let mut orchestrator = StitchOrchestrator::with_panorama(Scripted::new(StitchStatus::Ok));
        let loader = |id: FrameId| if id.0 % 2 == 0 { None } else { tagged(id) };
        let err = orchestrator.stitch(&ids(&[1, 4, 3, 2]), loader).unwrap_err();
        assert!(matches!(err, Error::FrameLoad(FrameId(4))));
        assert_eq!(orchestrator.panorama().calls, 0);
        assert_eq!(orchestrator.phase(), StitchPhase::Failed);
    }

    #[test]
    fn test_panorama_failure_status() {
        let mut orchestrator = StitchOrchestrator::with_panorama(Scripted::new(
            StitchStatus::CameraParamsAdjustFailed,
        ));
        let err = orchestrator.stitch(&ids(&[1, 2]), tagged).unwrap_err();
        match err {
            Error::StitchFailure(status) => assert_eq!(status.code(), 3),
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(orchestrator.panorama().calls, 1);
        assert_eq!(orchestrator.phase(), StitchPhase::Failed);
    }

    /// Fails while claiming success.
    struct Contradictory;

    impl Panorama for Contradictory {
        fn stitch(&mut self, _: &[RgbImage]) -> std::result::Result<RgbImage, StitchStatus> {
            Err(StitchStatus::Ok)
        }
    }

    #[test]
    fn test_failure_with_ok_status_is_not_a_stitch_failure() {
        let mut orchestrator = StitchOrchestrator::with_panorama(Contradictory);
        let err = orchestrator.stitch(&ids(&[1, 2]), tagged).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(orchestrator.phase(), StitchPhase::Failed);
    }
}
