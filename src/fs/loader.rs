//! Whole-file loading
//!
//! Reads a regular file's entire contents into memory and appends a single
//! zero byte after the last content byte, mirroring null-terminated string
//! convention. Callers that want to own allocation use `measure` to size a
//! buffer and `read_into` to fill it; `load` returns an owned buffer and is
//! the preferred form.
//!
//! `measure` and `read_into` each open and close the file independently, so
//! a file that changes on disk between the two calls can produce a short
//! read. `load` holds one handle across measuring and reading and does not
//! have that race.

use crate::error::{BytekitError, IoResultExt, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Terminating byte appended after the file content
pub const SENTINEL: u8 = 0;

/// Largest supported content length in bytes; larger files are rejected
pub const MAX_FILE_SIZE: u64 = i32::MAX as u64;

/// Get the buffer size needed to load a file: content length plus one
/// terminating zero byte.
///
/// The file is opened, measured, and closed within this call; no state is
/// retained for a later [`read_into`]. An empty file measures `1`.
pub fn measure(path: &Path) -> Result<usize> {
    let (_, size) = open_measured(path)?;
    Ok(size + 1)
}

/// Fill `dest` with the file's entire contents followed by one zero byte.
///
/// The file is re-opened and re-measured; `dest` must be at least as large
/// as the current [`measure`] result or the call fails with
/// [`BytekitError::BufferTooSmall`] before anything is written. Returns the
/// number of bytes written including the terminator. On failure the prefix
/// of `dest` may already have been overwritten.
pub fn read_into(path: &Path, dest: &mut [u8]) -> Result<usize> {
    let (mut file, size) = open_measured(path)?;

    if dest.len() < size + 1 {
        let err = BytekitError::BufferTooSmall {
            path: path.to_path_buf(),
            needed: size + 1,
            capacity: dest.len(),
        };
        tracing::error!("Unable to read file: {}", err);
        return Err(err);
    }

    read_exact_measured(&mut file, &mut dest[..size], path)?;
    dest[size] = SENTINEL;

    Ok(size + 1)
}

/// Load a file into an owned buffer: its entire contents followed by one
/// zero byte.
///
/// The returned vector's length equals what [`measure`] reports; an empty
/// file yields `vec![0]`. The handle stays open from measuring through
/// reading, so the file cannot shrink between the two.
pub fn load(path: &Path) -> Result<Vec<u8>> {
    let (mut file, size) = open_measured(path)?;

    let mut buf = vec![0u8; size + 1];
    read_exact_measured(&mut file, &mut buf[..size], path)?;
    buf[size] = SENTINEL;

    Ok(buf)
}

/// Open a file and measure its content length, enforcing [`MAX_FILE_SIZE`].
fn open_measured(path: &Path) -> Result<(File, usize)> {
    let file = File::open(path).with_path(path).map_err(log_failure)?;
    let size = file
        .metadata()
        .with_path(path)
        .map_err(log_failure)?
        .len();

    if size > MAX_FILE_SIZE {
        let err = BytekitError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_FILE_SIZE,
        };
        tracing::error!("Unable to read file: {}", err);
        return Err(err);
    }

    Ok((file, size as usize))
}

/// Read exactly `dest.len()` content bytes, surfacing a truncated file as
/// [`BytekitError::ReadShortfall`].
fn read_exact_measured(file: &mut File, dest: &mut [u8], path: &Path) -> Result<()> {
    let mut filled = 0;

    while filled < dest.len() {
        let n = file.read(&mut dest[filled..]).with_path(path).map_err(log_failure)?;
        if n == 0 {
            let err = BytekitError::ReadShortfall {
                path: path.to_path_buf(),
                expected: dest.len() as u64,
                actual: filled as u64,
            };
            tracing::error!("Unable to read file: {}", err);
            return Err(err);
        }
        filled += n;
    }

    Ok(())
}

fn log_failure(err: BytekitError) -> BytekitError {
    tracing::error!("Unable to read file: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_measure_counts_terminator() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "hello.txt", b"hello");

        assert_eq!(measure(&path).unwrap(), 6);
    }

    #[test]
    fn test_read_into_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "hello.txt", b"hello");

        let mut dest = [0xffu8; 6];
        let written = read_into(&path, &mut dest).unwrap();

        assert_eq!(written, 6);
        assert_eq!(&dest, b"hello\0");
    }

    #[test]
    fn test_read_into_oversized_destination() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "hi.txt", b"hi");

        // Extra capacity beyond content + terminator is left untouched
        let mut dest = [0xffu8; 8];
        let written = read_into(&path, &mut dest).unwrap();

        assert_eq!(written, 3);
        assert_eq!(&dest[..3], b"hi\0");
        assert_eq!(&dest[3..], &[0xff; 5]);
    }

    #[test]
    fn test_read_into_undersized_destination() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "hello.txt", b"hello");

        let mut dest = [0u8; 5];
        let err = read_into(&path, &mut dest).unwrap_err();

        assert!(matches!(
            err,
            BytekitError::BufferTooSmall {
                needed: 6,
                capacity: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_load_owned() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "hello.txt", b"hello");

        let buf = load(&path).unwrap();
        assert_eq!(buf, b"hello\0");
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.bin", b"");

        assert_eq!(measure(&path).unwrap(), 1);

        let mut dest = [0xffu8; 1];
        assert_eq!(read_into(&path, &mut dest).unwrap(), 1);
        assert_eq!(dest, [SENTINEL]);

        assert_eq!(load(&path).unwrap(), vec![SENTINEL]);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.bin");

        assert!(matches!(measure(&path), Err(BytekitError::NotFound(_))));
        assert!(matches!(load(&path), Err(BytekitError::NotFound(_))));

        let mut dest = [0u8; 16];
        assert!(matches!(
            read_into(&path, &mut dest),
            Err(BytekitError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_then_hash_as_cstring() {
        // The trailing zero makes the buffer a valid C string when the
        // content itself is NUL-free
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "text.txt", b"foobar");

        let buf = load(&path).unwrap();
        let cstr = std::ffi::CStr::from_bytes_with_nul(&buf).unwrap();

        assert_eq!(crate::hash::fnv1a_64_cstr(cstr), crate::hash::fnv1a_64(b"foobar"));
    }

    proptest! {
        #[test]
        fn prop_round_trip_arbitrary_bytes(
            content in proptest::collection::vec(any::<u8>(), 0..4096),
        ) {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("data.bin");
            std::fs::write(&path, &content).unwrap();

            let needed = measure(&path).unwrap();
            prop_assert_eq!(needed, content.len() + 1);

            let mut dest = vec![0xffu8; needed];
            let written = read_into(&path, &mut dest).unwrap();
            prop_assert_eq!(written, needed);
            prop_assert_eq!(&dest[..content.len()], content.as_slice());
            prop_assert_eq!(dest[content.len()], SENTINEL);

            let owned = load(&path).unwrap();
            prop_assert_eq!(owned, dest);
        }
    }
}
