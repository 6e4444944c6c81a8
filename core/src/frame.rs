//! Frame identifiers and the file naming contract tied to them.

use std::fmt;
use std::str::FromStr;

/// Prefix and extension of a stored frame image: `frame_<id>.png`.
pub const FRAME_PREFIX: &str = "frame_";
pub const FRAME_EXTENSION: &str = ".png";

/// Prefix and extension of per-frame metadata: `frameData_<id>.csv`.
pub const FRAME_DATA_PREFIX: &str = "frameData_";
pub const FRAME_DATA_EXTENSION: &str = ".csv";

/// Non-negative identifier of a recorded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(pub u64);

impl FrameId {
    /// Name of the image file holding this frame.
    pub fn image_file_name(&self) -> String {
        format!("{}{}{}", FRAME_PREFIX, self.0, FRAME_EXTENSION)
    }

    /// Name of the metadata CSV recorded alongside this frame.
    pub fn data_file_name(&self) -> String {
        format!("{}{}{}", FRAME_DATA_PREFIX, self.0, FRAME_DATA_EXTENSION)
    }

    /// Extract the id from a file name of the form `<prefix><digits><extension>`.
    ///
    /// Returns `None` for anything else, including an empty digit run.
    pub fn from_file_name(name: &str, prefix: &str, extension: &str) -> Option<Self> {
        let digits = name.strip_prefix(prefix)?.strip_suffix(extension)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(FrameId)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FrameId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(FrameId)
    }
}

impl From<u64> for FrameId {
    fn from(id: u64) -> Self {
        FrameId(id)
    }
}
