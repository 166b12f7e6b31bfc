use crate::image::{Image, PixelFormat};
use std::io::{self, BufRead, Seek, Write};

impl Image {
    /// Reads an image from a PNG file.  16-bit and paletted images are
    /// converted to 8 bits per channel.
    pub fn read_png<R: BufRead + Seek>(input: R) -> io::Result<Image> {
        let mut decoder = png::Decoder::new(input);
        decoder.set_transformations(
            png::Transformations::STRIP_16 | png::Transformations::EXPAND,
        );
        let info = decoder.read_header_info()?;
        let (width, height) = (info.width, info.height);
        let mut reader = decoder.read_info()?;

        let (color_type, bit_depth) = reader.output_color_type();
        if bit_depth != png::BitDepth::Eight {
            let msg = format!("unsupported PNG bit depth: {:?}", bit_depth);
            return Err(io::Error::new(io::ErrorKind::InvalidData, msg));
        }
        let pixel_format = match color_type {
            png::ColorType::Rgba => PixelFormat::RGBA,
            png::ColorType::Rgb => PixelFormat::RGB,
            png::ColorType::GrayscaleAlpha => PixelFormat::GrayAlpha,
            png::ColorType::Grayscale => PixelFormat::Gray,
            png::ColorType::Indexed => {
                // EXPAND prevents paletted output
                let msg = "paletted PNG was not expanded";
                return Err(io::Error::new(io::ErrorKind::InvalidData, msg));
            }
        };

        let mut image = Image::new(pixel_format, width, height);
        reader.next_frame(image.data_mut())?;
        reader.finish()?;
        Ok(image)
    }

    /// Writes the image to a PNG file.
    pub fn write_png<W: Write>(&self, output: W) -> io::Result<()> {
        let color_type = match self.format {
            PixelFormat::RGBA => png::ColorType::Rgba,
            PixelFormat::RGB => png::ColorType::Rgb,
            PixelFormat::GrayAlpha => png::ColorType::GrayscaleAlpha,
            PixelFormat::Gray => png::ColorType::Grayscale,
        };
        let mut encoder = png::Encoder::new(output, self.width, self.height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.data)?;
        writer.finish()?;
        Ok(())
    }

    /// Encodes the image as an in-memory PNG file.
    pub fn to_png_bytes(&self) -> io::Result<Vec<u8>> {
        let mut output = Vec::new();
        self.write_png(&mut output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn png_starts_with_signature() {
        let image = Image::new(PixelFormat::RGBA, 4, 4);
        let bytes = image.to_png_bytes().expect("encode failed");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn write_then_read_png_preserves_pixels() {
        let data: Vec<u8> = (0..(3 * 2 * 4)).map(|v| (v * 10) as u8).collect();
        let image = Image::from_data(PixelFormat::RGBA, 3, 2, data).unwrap();
        let bytes = image.to_png_bytes().unwrap();
        let decoded = Image::read_png(Cursor::new(&bytes)).unwrap();
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.pixel_format(), PixelFormat::RGBA);
        assert_eq!(decoded.data(), image.data());
    }

    #[test]
    fn read_garbage_fails() {
        let input = Cursor::new(b"definitely not a png".to_vec());
        assert!(Image::read_png(input).is_err());
    }
}
