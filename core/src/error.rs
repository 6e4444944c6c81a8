use crate::frame::FrameId;
use crate::status::StitchStatus;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared by every scanstitch crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Point cloud is empty")]
    EmptyCloud,

    #[error("Invalid stride {0}: must be a positive integer")]
    InvalidStride(i64),

    #[error("No frames selected")]
    NoFrames,

    #[error("Can't read image of frame {0}")]
    FrameLoad(FrameId),

    #[error("Can't stitch images, error code = {}", .0.code())]
    StitchFailure(StitchStatus),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Plot error: {0}")]
    Plot(String),
}

impl Error {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
