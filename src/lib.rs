//! Library for generating Apple Icon Image (.icns) files from one image
//!
//! A single source image is resampled to each of the square pixel sizes that
//! macOS expects (16 through 1024), every resampled copy is encoded as a PNG,
//! and the PNGs are packed into an ICNS container.  Sizes that are shared by
//! more than one icon type (for example, a 32x32 image backs both `icp5` and
//! the 16x16@2x `ic11`) are resampled and encoded only once.
//!
//! See https://en.wikipedia.org/wiki/Apple_Icon_Image_format for more
//! information about the file format.
//!
//! # Example
//!
//! ```no_run
//! use icnsgen::{IconFamilyBuilder, Image};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = BufReader::new(File::open("icon.png").unwrap());
//! let image = Image::read_png(file).unwrap();
//! let family = IconFamilyBuilder::new().build(&image).unwrap();
//! family.write_to_file("icon.icns").unwrap();
//! ```

#![warn(missing_docs)]

mod builder;
mod element;
mod error;
mod family;
mod icontype;
mod image;
#[cfg(feature = "imageops")]
mod imageops;
mod pngio;
mod resize;

pub use crate::builder::IconFamilyBuilder;
pub use crate::element::{element_length, write_element,
                         ICON_ELEMENT_HEADER_LENGTH};
pub use crate::error::{IcnsError, Result};
pub use crate::family::{finalize, IconFamily, ICNS_MAGIC_LITERAL,
                        ICON_FAMILY_HEADER_LENGTH};
pub use crate::icontype::{IconType, OSType, RequiredSize};
pub use crate::image::{Image, PixelFormat};
#[cfg(feature = "imageops")]
pub use crate::imageops::ImageOpsResampler;
pub use crate::resize::{ConvolutionResampler, Resampler};
pub use fast_image_resize::FilterType;
