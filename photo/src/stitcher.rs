use image::imageops::{self, FilterType};
use image::RgbImage;
use scanstitch_core::StitchStatus;

/// A panorama capability: turns an ordered set of overlapping frames into one
/// image, or reports why it could not.
///
/// An `Err` must carry a failing status; `Err(StitchStatus::Ok)` is treated as
/// a broken implementation rather than a stitch failure.
pub trait Panorama {
    fn stitch(&mut self, images: &[RgbImage]) -> std::result::Result<RgbImage, StitchStatus>;
}

/// Built-in panorama that lays frames out left to right.
///
/// Every frame is scaled to the height of the shortest one, keeping its
/// aspect ratio, and frames are placed in the order given. No feature
/// matching or blending is done.
#[derive(Debug, Clone)]
pub struct Stitcher {
    filter: FilterType,
}

impl Stitcher {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Triangle,
        }
    }
}

impl Default for Stitcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Panorama for Stitcher {
    fn stitch(&mut self, images: &[RgbImage]) -> std::result::Result<RgbImage, StitchStatus> {
        if images.len() < 2 {
            return Err(StitchStatus::NeedMoreImages);
        }
        if images.iter().any(|img| img.width() == 0 || img.height() == 0) {
            return Err(StitchStatus::HomographyEstimationFailed);
        }

        let height = images.iter().map(RgbImage::height).min().unwrap_or(0);

        let scaled: Vec<RgbImage> = images
            .iter()
            .map(|img| {
                if img.height() == height {
                    img.clone()
                } else {
                    let width = ((img.width() as u64 * height as u64) / img.height() as u64)
                        .max(1) as u32;
                    imageops::resize(img, width, height, self.filter)
                }
            })
            .collect();

        let total_width = scaled
            .iter()
            .try_fold(0u32, |acc, img| acc.checked_add(img.width()))
            .ok_or(StitchStatus::CameraParamsAdjustFailed)?;

        let mut pano = RgbImage::new(total_width, height);
        let mut x = 0i64;
        for img in &scaled {
            imageops::replace(&mut pano, img, x, 0);
            x += img.width() as i64;
        }

        Ok(pano)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(width: u32, height: u32, value: u8) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([value, 0, 0]))
    }

    #[test]
    fn test_needs_two_images() {
        let mut stitcher = Stitcher::new();
        assert_eq!(stitcher.stitch(&[]), Err(StitchStatus::NeedMoreImages));
        assert_eq!(
            stitcher.stitch(&[solid(4, 4, 1)]),
            Err(StitchStatus::NeedMoreImages)
        );
    }

    #[test]
    fn test_rejects_empty_image() {
        let mut stitcher = Stitcher::new();
        let res = stitcher.stitch(&[solid(4, 4, 1), RgbImage::new(0, 4)]);
        assert_eq!(res, Err(StitchStatus::HomographyEstimationFailed));
    }

    #[test]
    fn test_places_frames_in_order() {
        let mut stitcher = Stitcher::new();
        let pano = stitcher
            .stitch(&[solid(3, 2, 10), solid(5, 2, 20)])
            .unwrap();
        assert_eq!(pano.dimensions(), (8, 2));
        assert_eq!(pano.get_pixel(0, 0)[0], 10);
        assert_eq!(pano.get_pixel(2, 1)[0], 10);
        assert_eq!(pano.get_pixel(3, 0)[0], 20);
        assert_eq!(pano.get_pixel(7, 1)[0], 20);
    }

    #[test]
    fn test_scales_to_shortest_frame() {
        let mut stitcher = Stitcher::new();
        let pano = stitcher
            .stitch(&[solid(4, 4, 10), solid(8, 8, 20)])
            .unwrap();
        assert_eq!(pano.dimensions(), (8, 4));
    }
}
