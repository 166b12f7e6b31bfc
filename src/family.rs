use byteorder::{BigEndian, WriteBytesExt};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{IcnsError, Result};

/// The first four bytes of an ICNS file:
pub const ICNS_MAGIC_LITERAL: &[u8; 4] = b"icns";

/// The length of an icon family header, in bytes:
pub const ICON_FAMILY_HEADER_LENGTH: u32 = 8;

/// Prepends the ICNS magic literal and the big-endian total file length to
/// an already-encoded sequence of icon elements.
pub fn finalize(body: &[u8]) -> Result<Vec<u8>> {
    let total_length = u32::try_from(body.len())
        .ok()
        .and_then(|len| len.checked_add(ICON_FAMILY_HEADER_LENGTH))
        .ok_or(IcnsError::TooLarge { length: body.len() })?;
    let mut data = Vec::with_capacity(total_length as usize);
    data.extend_from_slice(ICNS_MAGIC_LITERAL);
    data.write_u32::<BigEndian>(total_length).map_err(IcnsError::Write)?;
    data.extend_from_slice(body);
    Ok(data)
}

/// A complete ICNS file, held in memory.
///
/// Produced by [`IconFamilyBuilder::build`](struct.IconFamilyBuilder.html);
/// the bytes are never modified afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconFamily {
    data: Vec<u8>,
    num_elements: usize,
}

impl IconFamily {
    /// Wraps a finished element sequence in an ICNS header.
    pub(crate) fn from_body(body: &[u8], num_elements: usize)
                            -> Result<IconFamily> {
        Ok(IconFamily {
            data: finalize(body)?,
            num_elements: num_elements,
        })
    }

    /// Returns the number of icon elements in the family.
    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    /// Returns true if the icon family contains no elements.
    pub fn is_empty(&self) -> bool {
        self.num_elements == 0
    }

    /// Returns the encoded length of the file, in bytes, including the
    /// length of the header.
    pub fn total_length(&self) -> u32 {
        // Checked against u32::MAX in `finalize`.
        self.data.len() as u32
    }

    /// Returns the encoded ICNS file.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the family, returning the encoded ICNS file.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Writes the icon family to an ICNS file (or other writer).
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.data).map_err(IcnsError::Write)?;
        writer.flush().map_err(IcnsError::Write)
    }

    /// Writes the icon family to the file at `path`, replacing any existing
    /// file.  The data is first written to a sibling `.partial` file and
    /// then renamed into place, so a failed write never leaves a truncated
    /// ICNS file at `path`.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let partial = partial_path(path);
        let result = File::create(&partial)
            .map_err(IcnsError::Write)
            .and_then(|file| self.write(BufWriter::new(file)))
            .and_then(|()| {
                fs::rename(&partial, path).map_err(IcnsError::Write)
            });
        if result.is_err() {
            let _ = fs::remove_file(&partial);
        }
        result
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name()
                       .map(|name| name.to_os_string())
                       .unwrap_or_else(OsString::new);
    name.push(".partial");
    path.with_file_name(name)
}

impl AsRef<[u8]> for IconFamily {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::write_element;
    use crate::icontype::OSType;
    use std::io;

    #[test]
    fn write_empty_icon_family() {
        let family = IconFamily::from_body(&[], 0).unwrap();
        assert!(family.is_empty());
        assert_eq!(family.total_length(), 8);
        let mut output: Vec<u8> = vec![];
        family.write(&mut output).expect("write failed");
        assert_eq!(b"icns\0\0\0\x08", &output as &[u8]);
    }

    #[test]
    fn write_icon_family_with_fake_elements() {
        let mut body = Vec::new();
        write_element(OSType(*b"quux"), b"foobar", &mut body).unwrap();
        write_element(OSType(*b"baz!"), b"#", &mut body).unwrap();
        let family = IconFamily::from_body(&body, 2).unwrap();
        assert_eq!(family.num_elements(), 2);
        assert_eq!(b"icns\0\0\0\x1fquux\0\0\0\x0efoobarbaz!\0\0\0\x09#",
                   family.as_bytes());
        assert_eq!(family.total_length() as usize, family.as_bytes().len());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let family = IconFamily::from_body(b"abcd\0\0\0\x08", 1).unwrap();
        match family.write(FailingWriter) {
            Err(IcnsError::Write(err)) => assert_eq!(err.to_string(),
                                                     "disk full"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let family = IconFamily::from_body(&[], 0).unwrap();
        let path = std::env::temp_dir()
            .join("icnsgen-no-such-directory")
            .join("out.icns");
        assert!(family.write_to_file(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn failed_write_to_file_leaves_no_partial_file() {
        let dir = std::env::temp_dir()
            .join(format!("icnsgen-blocked-{}", std::process::id()));
        let target = dir.join("out.icns");
        // A directory at the target path makes the final rename fail.
        fs::create_dir_all(&target).unwrap();
        let family = IconFamily::from_body(b"abcd\0\0\0\x08", 1).unwrap();
        let result = family.write_to_file(&target);
        let partial_left = partial_path(&target).exists();
        let target_is_dir = target.is_dir();
        fs::remove_dir_all(&dir).unwrap();
        assert!(matches!(result, Err(IcnsError::Write(_))));
        assert!(!partial_left);
        assert!(target_is_dir);
    }

    #[test]
    fn write_to_file_replaces_existing_file() {
        let path = std::env::temp_dir()
            .join(format!("icnsgen-replace-{}.icns", std::process::id()));
        fs::write(&path, b"stale contents that are longer").unwrap();
        let family = IconFamily::from_body(&[], 0).unwrap();
        family.write_to_file(&path).unwrap();
        let written = fs::read(&path).unwrap();
        let partial_left = partial_path(&path).exists();
        fs::remove_file(&path).unwrap();
        assert_eq!(b"icns\0\0\0\x08", &written as &[u8]);
        assert!(!partial_left);
    }

    #[test]
    fn partial_path_is_a_sibling() {
        assert_eq!(partial_path(Path::new("/tmp/icon.icns")),
                   PathBuf::from("/tmp/icon.icns.partial"));
    }
}
