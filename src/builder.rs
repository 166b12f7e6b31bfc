use log::{debug, trace};

use crate::element::{element_length, write_element};
use crate::error::{IcnsError, Result};
use crate::family::IconFamily;
use crate::icontype::RequiredSize;
use crate::image::Image;
use crate::resize::{ConvolutionResampler, Resampler};

/// Builds an [`IconFamily`](struct.IconFamily.html) from a single source
/// image, resampling it to every [`RequiredSize`](struct.RequiredSize.html).
///
/// The builder keeps no state between builds, so one builder may be reused
/// for any number of images.
#[derive(Clone, Debug, Default)]
pub struct IconFamilyBuilder<R = ConvolutionResampler> {
    resampler: R,
}

impl IconFamilyBuilder<ConvolutionResampler> {
    /// Creates a builder that resamples with the Mitchell-Netravali filter.
    pub fn new() -> IconFamilyBuilder<ConvolutionResampler> {
        IconFamilyBuilder { resampler: ConvolutionResampler::default() }
    }
}

impl<R: Resampler> IconFamilyBuilder<R> {
    /// Creates a builder that resamples with the given strategy.
    pub fn with_resampler(resampler: R) -> IconFamilyBuilder<R> {
        IconFamilyBuilder { resampler: resampler }
    }

    /// Returns the resampling strategy used by this builder.
    pub fn resampler(&self) -> &R {
        &self.resampler
    }

    /// Resamples `image` to `size` by `size` pixels and encodes the result
    /// as a PNG file.  The source aspect ratio is not preserved.
    pub fn encode_variant(&self, image: &Image, size: RequiredSize)
                          -> Result<Vec<u8>> {
        let pixels = size.pixels();
        let resized = self.resampler.resample(image, pixels, pixels)?;
        if resized.width() != pixels || resized.height() != pixels {
            return Err(IcnsError::Resize {
                width: pixels,
                height: pixels,
                reason: format!("resampler produced a {}x{} image",
                                resized.width(),
                                resized.height()),
            });
        }
        resized.to_png_bytes().map_err(|err| {
            IcnsError::Encode {
                size: pixels,
                source: err,
            }
        })
    }

    /// Builds a complete ICNS file from `image`.
    ///
    /// Sizes are processed in ascending order.  Each size is resampled and
    /// encoded once, and the resulting PNG is stored under every icon type
    /// at that size.  Any failure aborts the whole build.
    pub fn build(&self, image: &Image) -> Result<IconFamily> {
        debug!("building icon family from {}x{} image",
               image.width(),
               image.height());
        let mut body = Vec::new();
        let mut num_elements = 0;
        for &size in RequiredSize::ALL.iter() {
            let payload = self.encode_variant(image, size)?;
            if element_length(payload.len()).is_none() {
                return Err(IcnsError::TooLarge { length: payload.len() });
            }
            for icon_type in size.icon_types() {
                trace!("writing '{}' element ({} byte payload)",
                       icon_type.ostype(),
                       payload.len());
                write_element(icon_type.ostype(), &payload, &mut body)
                    .map_err(|err| {
                        IcnsError::Encode {
                            size: size.pixels(),
                            source: err,
                        }
                    })?;
                num_elements += 1;
            }
        }
        let family = IconFamily::from_body(&body, num_elements)?;
        debug!("built icon family with {} elements ({} bytes)",
               family.num_elements(),
               family.total_length());
        Ok(family)
    }
}
