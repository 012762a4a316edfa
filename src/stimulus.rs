use image::{Rgb, RgbImage};
use ndarray::{Array3, ArrayView3, Axis};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Normalization constants (ImageNet statistics, RGB order)
// ---------------------------------------------------------------------------

pub const NORMALIZE_MEAN: [f64; 3] = [0.485, 0.456, 0.406];
pub const NORMALIZE_STD: [f64; 3] = [0.229, 0.224, 0.225];

// ---------------------------------------------------------------------------
// De-normalization
// ---------------------------------------------------------------------------

/// Undo the per-channel normalization of one stimulus.
///
/// Takes a channel-first `[channel, height, width]` view and returns a
/// channel-last `[height, width, channel]` array scaled to 0..=255 (not yet
/// clamped).
pub fn denormalize(image: ArrayView3<'_, f32>) -> Result<Array3<f64>> {
    let channels = image.len_of(Axis(0));
    if channels != NORMALIZE_MEAN.len() {
        return Err(Error::ChannelCount { found: channels });
    }

    let mut hwc = image.permuted_axes([1, 2, 0]).mapv(f64::from);
    for (c, mut plane) in hwc.axis_iter_mut(Axis(2)).enumerate() {
        let (mean, std) = (NORMALIZE_MEAN[c], NORMALIZE_STD[c]);
        plane.mapv_inplace(|v| (v * std + mean) * 255.0);
    }
    Ok(hwc)
}

/// Pack a channel-last 0..=255 array into an 8-bit RGB buffer.
///
/// Values are clamped to the `u8` range and truncated toward zero; NaN
/// becomes 0.
pub fn to_rgb8(hwc: &Array3<f64>) -> RgbImage {
    let (height, width, _) = hwc.dim();
    RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let (y, x) = (y as usize, x as usize);
        Rgb([0, 1, 2].map(|c| hwc[[y, x, c]].clamp(0.0, 255.0) as u8))
    })
}

/// De-normalize and pack in one step.
pub fn reconstruct(image: ArrayView3<'_, f32>) -> Result<RgbImage> {
    denormalize(image).map(|hwc| to_rgb8(&hwc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn zero_input_reconstructs_the_mean() {
        let img = reconstruct(Array3::<f32>::zeros((3, 2, 2)).view()).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        for px in img.pixels() {
            // trunc(0.485 * 255), trunc(0.456 * 255), trunc(0.406 * 255)
            assert_eq!(px.0, [123, 116, 103]);
        }
    }

    #[test]
    fn axes_move_channel_last() {
        // 3 channels, height 2, width 3.
        let mut chw = Array3::<f32>::zeros((3, 2, 3));
        chw[[1, 0, 2]] = 1.0;
        let hwc = denormalize(chw.view()).unwrap();
        assert_eq!(hwc.dim(), (2, 3, 3));

        let expected = (1.0 * NORMALIZE_STD[1] + NORMALIZE_MEAN[1]) * 255.0;
        assert!((hwc[[0, 2, 1]] - expected).abs() < 1e-9);
        assert!((hwc[[1, 2, 1]] - NORMALIZE_MEAN[1] * 255.0).abs() < 1e-9);
    }

    #[test]
    fn output_is_clamped_to_u8() {
        let mut chw = Array3::<f32>::zeros((3, 1, 2));
        chw[[0, 0, 0]] = 100.0;
        chw[[0, 0, 1]] = -100.0;
        chw[[2, 0, 0]] = f32::NAN;
        let img = reconstruct(chw.view()).unwrap();
        assert_eq!(img.get_pixel(0, 0).0[0], 255);
        assert_eq!(img.get_pixel(1, 0).0[0], 0);
        assert_eq!(img.get_pixel(0, 0).0[2], 0);
    }

    #[test]
    fn rejects_non_rgb_images() {
        let err = denormalize(Array3::<f32>::zeros((1, 4, 4)).view()).unwrap_err();
        assert!(matches!(err, Error::ChannelCount { found: 1 }));
    }
}
