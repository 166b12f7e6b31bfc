use std::io;
use thiserror::Error;

/// Errors that can occur while building or writing an icon family.
#[derive(Debug, Error)]
pub enum IcnsError {
    /// The source image could not be decoded.
    #[error("failed to decode source image: {0}")]
    Decode(#[source] io::Error),
    /// The source image could not be resampled to the requested dimensions.
    #[error("failed to resize image to {width}x{height}: {reason}")]
    Resize {
        /// Requested width, in pixels.
        width: u32,
        /// Requested height, in pixels.
        height: u32,
        /// What went wrong.
        reason: String,
    },
    /// A resampled variant could not be encoded as PNG.
    #[error("failed to encode {size}x{size} variant as PNG: {source}")]
    Encode {
        /// Pixel size of the variant that failed.
        size: u32,
        /// The underlying codec error.
        #[source]
        source: io::Error,
    },
    /// The finished icon family could not be written out.
    #[error("failed to write icon family: {0}")]
    Write(#[source] io::Error),
    /// A record or the whole family is too long for a 32-bit length field.
    #[error("{length} bytes do not fit in an ICNS length field")]
    TooLarge {
        /// The offending length, in bytes.
        length: usize,
    },
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, IcnsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn encode_error_message_names_size() {
        let err = IcnsError::Encode {
            size: 64,
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert_eq!(err.to_string(),
                   "failed to encode 64x64 variant as PNG: boom");
        assert!(err.source().is_some());
    }

    #[test]
    fn resize_error_message() {
        let err = IcnsError::Resize {
            width: 16,
            height: 16,
            reason: "source image is empty".to_string(),
        };
        assert_eq!(err.to_string(),
                   "failed to resize image to 16x16: source image is empty");
    }
}
