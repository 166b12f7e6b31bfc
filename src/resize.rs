use fast_image_resize as fr;

use crate::error::{IcnsError, Result};
use crate::image::{Image, PixelFormat};

/// A strategy for resampling an image to new dimensions.
///
/// The returned image must be exactly `width` by `height` pixels.  The
/// aspect ratio of the source is not preserved.
pub trait Resampler {
    /// Resamples `image` to `width` by `height` pixels.
    fn resample(&self, image: &Image, width: u32, height: u32)
                -> Result<Image>;
}

impl<'a, R: Resampler + ?Sized> Resampler for &'a R {
    fn resample(&self, image: &Image, width: u32, height: u32)
                -> Result<Image> {
        (**self).resample(image, width, height)
    }
}

/// Convolution resampler backed by `fast_image_resize`.  Pixels are filtered
/// with premultiplied alpha, and the result is always in RGBA format.
#[derive(Clone, Copy, Debug)]
pub struct ConvolutionResampler {
    filter: fr::FilterType,
}

impl ConvolutionResampler {
    /// Creates a resampler using the given convolution filter.
    pub fn new(filter: fr::FilterType) -> ConvolutionResampler {
        ConvolutionResampler { filter: filter }
    }

    /// Returns the filter this resampler uses.
    pub fn filter(&self) -> fr::FilterType {
        self.filter
    }
}

impl Default for ConvolutionResampler {
    /// Mitchell-Netravali (B = C = 1/3).
    fn default() -> ConvolutionResampler {
        ConvolutionResampler::new(fr::FilterType::Mitchell)
    }
}

impl Resampler for ConvolutionResampler {
    fn resample(&self, image: &Image, width: u32, height: u32)
                -> Result<Image> {
        let resize_error = |reason: String| {
            IcnsError::Resize {
                width: width,
                height: height,
                reason: reason,
            }
        };
        if image.width() == 0 || image.height() == 0 {
            return Err(resize_error("source image is empty".to_string()));
        }
        if width == 0 || height == 0 {
            return Err(resize_error("target dimensions are empty".to_string()));
        }

        let rgba = image.to_rgba();
        let src = fr::images::Image::from_vec_u8(rgba.width(),
                                                 rgba.height(),
                                                 rgba.data().to_vec(),
                                                 fr::PixelType::U8x4)
            .map_err(|err| resize_error(err.to_string()))?;
        let mut dst = fr::images::Image::new(width, height,
                                             fr::PixelType::U8x4);
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(self.filter));
        fr::Resizer::new()
            .resize(&src, &mut dst, Some(&options))
            .map_err(|err| resize_error(err.to_string()))?;
        Image::from_data(PixelFormat::RGBA, width, height, dst.into_vec())
            .map_err(|err| resize_error(err.to_string()))
    }
}
