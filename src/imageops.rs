use ::image::imageops::{self, FilterType};
use ::image::RgbaImage;

use crate::error::{IcnsError, Result};
use crate::image::{Image, PixelFormat};
use crate::resize::Resampler;

/// Resampler backed by the `image` crate's `imageops::resize`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageOpsResampler {
    filter: FilterType,
}

impl ImageOpsResampler {
    /// Creates a resampler that uses the given `image` crate filter.
    pub fn new(filter: FilterType) -> ImageOpsResampler {
        ImageOpsResampler { filter: filter }
    }
}

impl Default for ImageOpsResampler {
    fn default() -> ImageOpsResampler {
        ImageOpsResampler::new(FilterType::Lanczos3)
    }
}

impl Resampler for ImageOpsResampler {
    fn resample(&self, image: &Image, width: u32, height: u32)
                -> Result<Image> {
        let resize_error = |reason: &str| {
            IcnsError::Resize {
                width: width,
                height: height,
                reason: reason.to_string(),
            }
        };
        if image.width() == 0 || image.height() == 0 {
            return Err(resize_error("source image is empty"));
        }
        let rgba = image.to_rgba();
        let buffer = RgbaImage::from_raw(rgba.width(),
                                         rgba.height(),
                                         rgba.data().to_vec())
            .ok_or_else(|| resize_error("pixel buffer has wrong length"))?;
        let resized = imageops::resize(&buffer, width, height, self.filter);
        Image::from_data(PixelFormat::RGBA, width, height, resized.into_raw())
            .map_err(|err| resize_error(&err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resizes_to_exact_dimensions() {
        let image = Image::from_data(PixelFormat::RGB,
                                     4,
                                     2,
                                     vec![40; 4 * 2 * 3])
            .unwrap();
        let resized = ImageOpsResampler::new(FilterType::Triangle)
            .resample(&image, 16, 16)
            .unwrap();
        assert_eq!((resized.width(), resized.height()), (16, 16));
        assert_eq!(resized.pixel_format(), PixelFormat::RGBA);
        assert_eq!(&resized.data()[..4], &[40, 40, 40, 255]);
    }

    #[test]
    fn empty_source_fails() {
        let image = Image::new(PixelFormat::RGBA, 3, 0);
        assert!(ImageOpsResampler::default()
                    .resample(&image, 32, 32)
                    .is_err());
    }
}
