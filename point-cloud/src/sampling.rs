use crate::Result;
use scanstitch_core::{Error, FrameId};

/// Sort `ids` ascending and keep the elements at positions `0, stride, 2*stride, ...`.
///
/// Selection is purely positional: gaps in the id numbering do not matter.
/// A sequence of `n` ids yields `ceil(n / stride)` ids.
pub fn decimate(ids: &[FrameId], stride: i64) -> Result<Vec<FrameId>> {
    if stride <= 0 {
        return Err(Error::InvalidStride(stride));
    }
    let step = usize::try_from(stride).unwrap_or(usize::MAX);

    let mut sorted = ids.to_vec();
    sorted.sort_unstable();

    let kept: Vec<FrameId> = sorted.into_iter().step_by(step).collect();
    tracing::debug!(
        "Decimated {} frames to {} with stride {}",
        ids.len(),
        kept.len(),
        stride
    );
    Ok(kept)
}
