use std::fmt;

/// Types of icon elements written into a generated ICNS file.  Every type
/// here stores its image as an embedded PNG.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IconType {
    /// 16x16 32-bit icon.
    RGBA32_16x16,
    /// 16x16 32-bit icon at 2x "retina" density (so, 32 by 32 pixels).
    RGBA32_16x16_2x,
    /// 32x32 32-bit icon.
    RGBA32_32x32,
    /// 32x32 32-bit icon at 2x "retina" density (so, 64 by 64 pixels).
    RGBA32_32x32_2x,
    /// 64x64 32-bit icon.
    RGBA32_64x64,
    /// 128x128 32-bit icon.
    RGBA32_128x128,
    /// 128x128 32-bit icon at 2x "retina" density (so, 256 by 256 pixels).
    RGBA32_128x128_2x,
    /// 256x256 32-bit icon.
    RGBA32_256x256,
    /// 256x256 32-bit icon at 2x "retina" density (so, 512 by 512 pixels).
    RGBA32_256x256_2x,
    /// 512x512 32-bit icon.
    RGBA32_512x512,
    /// 512x512 32-bit icon at 2x "retina" density (so, 1024 by 1024 pixels).
    RGBA32_512x512_2x,
}

impl IconType {
    /// Get the OSType that represents this icon type.
    pub fn ostype(self) -> OSType {
        match self {
            IconType::RGBA32_16x16 => OSType(*b"icp4"),
            IconType::RGBA32_16x16_2x => OSType(*b"ic11"),
            IconType::RGBA32_32x32 => OSType(*b"icp5"),
            IconType::RGBA32_32x32_2x => OSType(*b"ic12"),
            IconType::RGBA32_64x64 => OSType(*b"icp6"),
            IconType::RGBA32_128x128 => OSType(*b"ic07"),
            IconType::RGBA32_128x128_2x => OSType(*b"ic13"),
            IconType::RGBA32_256x256 => OSType(*b"ic08"),
            IconType::RGBA32_256x256_2x => OSType(*b"ic14"),
            IconType::RGBA32_512x512 => OSType(*b"ic09"),
            IconType::RGBA32_512x512_2x => OSType(*b"ic10"),
        }
    }

    /// Returns the pixel data width (and height, since every icon type is
    /// square) of this icon type.  For 2x "retina" density icons this is
    /// twice the screen width.
    ///
    /// # Examples
    /// ```
    /// use icnsgen::IconType;
    /// assert_eq!(IconType::RGBA32_128x128.pixel_width(), 128);
    /// assert_eq!(IconType::RGBA32_128x128_2x.pixel_width(), 256);
    /// ```
    pub fn pixel_width(self) -> u32 {
        self.screen_width() * self.pixel_density()
    }

    /// Returns the pixel density for this icon type -- that is, 2 for 2x
    /// "retina" density icons, or 1 for other icon types.
    pub fn pixel_density(self) -> u32 {
        match self {
            IconType::RGBA32_16x16_2x |
            IconType::RGBA32_32x32_2x |
            IconType::RGBA32_128x128_2x |
            IconType::RGBA32_256x256_2x |
            IconType::RGBA32_512x512_2x => 2,
            _ => 1,
        }
    }

    /// Returns the screen width of this icon type.
    ///
    /// # Examples
    /// ```
    /// use icnsgen::IconType;
    /// assert_eq!(IconType::RGBA32_256x256.screen_width(), 256);
    /// assert_eq!(IconType::RGBA32_256x256_2x.screen_width(), 256);
    /// ```
    pub fn screen_width(self) -> u32 {
        match self {
            IconType::RGBA32_16x16 | IconType::RGBA32_16x16_2x => 16,
            IconType::RGBA32_32x32 | IconType::RGBA32_32x32_2x => 32,
            IconType::RGBA32_64x64 => 64,
            IconType::RGBA32_128x128 | IconType::RGBA32_128x128_2x => 128,
            IconType::RGBA32_256x256 | IconType::RGBA32_256x256_2x => 256,
            IconType::RGBA32_512x512 | IconType::RGBA32_512x512_2x => 512,
        }
    }
}

/// One of the square pixel sizes an ICNS file is built from.  The set is
/// closed: values can only be obtained from [`RequiredSize::ALL`] or
/// [`RequiredSize::from_pixels`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RequiredSize(u32);

// Icon types backed by each required size, in the order they are written.
// Where a size carries two types, the 1x type comes before the 2x one.
static SIZE_TABLE: [(RequiredSize, &[IconType]); 7] = [
    (RequiredSize(16), &[IconType::RGBA32_16x16]),
    (RequiredSize(32),
     &[IconType::RGBA32_32x32, IconType::RGBA32_16x16_2x]),
    (RequiredSize(64),
     &[IconType::RGBA32_64x64, IconType::RGBA32_32x32_2x]),
    (RequiredSize(128), &[IconType::RGBA32_128x128]),
    (RequiredSize(256),
     &[IconType::RGBA32_256x256, IconType::RGBA32_128x128_2x]),
    (RequiredSize(512),
     &[IconType::RGBA32_512x512, IconType::RGBA32_256x256_2x]),
    (RequiredSize(1024), &[IconType::RGBA32_512x512_2x]),
];

impl RequiredSize {
    /// Every required size, in ascending order.
    pub const ALL: [RequiredSize; 7] = [RequiredSize(16),
                                        RequiredSize(32),
                                        RequiredSize(64),
                                        RequiredSize(128),
                                        RequiredSize(256),
                                        RequiredSize(512),
                                        RequiredSize(1024)];

    /// Returns the required size with the given pixel dimension, or `None`
    /// if no icon type is stored at that dimension.
    pub fn from_pixels(pixels: u32) -> Option<RequiredSize> {
        RequiredSize::ALL.iter().copied().find(|size| size.0 == pixels)
    }

    /// Returns the width (and height) of this size, in pixels.
    pub fn pixels(self) -> u32 {
        self.0
    }

    /// Returns the icon types stored at this size, in the order in which
    /// they appear in a generated file.  Never empty.
    pub fn icon_types(self) -> &'static [IconType] {
        SIZE_TABLE.iter()
                  .find(|&&(size, _)| size == self)
                  .map(|&(_, types)| types)
                  .unwrap_or(&[])
    }
}

impl fmt::Display for RequiredSize {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        write!(out, "{}x{}", self.0, self.0)
    }
}

/// A Macintosh OSType (also known as a ResType), used in ICNS files to
/// identify the type of each icon element.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OSType(pub [u8; 4]);

impl fmt::Display for OSType {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let &OSType(raw) = self;
        for &byte in &raw {
            write!(out, "{}", char::from(byte))?;
        }
        Ok(())
    }
}
