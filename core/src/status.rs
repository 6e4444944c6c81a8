use std::fmt;

/// Outcome reported by a panorama stitcher.
///
/// Codes follow the conventional panorama status numbering so they can be
/// reported verbatim in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StitchStatus {
    Ok,
    NeedMoreImages,
    HomographyEstimationFailed,
    CameraParamsAdjustFailed,
}

impl StitchStatus {
    pub fn code(&self) -> i32 {
        match self {
            StitchStatus::Ok => 0,
            StitchStatus::NeedMoreImages => 1,
            StitchStatus::HomographyEstimationFailed => 2,
            StitchStatus::CameraParamsAdjustFailed => 3,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, StitchStatus::Ok)
    }
}

impl fmt::Display for StitchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StitchStatus::Ok => "ok",
            StitchStatus::NeedMoreImages => "need more images",
            StitchStatus::HomographyEstimationFailed => "homography estimation failed",
            StitchStatus::CameraParamsAdjustFailed => "camera parameters adjustment failed",
        };
        write!(f, "{} ({})", name, self.code())
    }
}
