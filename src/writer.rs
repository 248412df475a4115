use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use image::{codecs::png::PngEncoder, ColorType, ImageEncoder, RgbImage};

use crate::{
    error::Result,
    output_id::{output_file_name, OutputId},
};

/// Encodes `image` as an RGB png named after `id` inside `dir`.
/// Refuses to replace an existing file and leaves nothing behind on failure
pub fn write_png(image: &RgbImage, dir: &Path, id: OutputId) -> Result<PathBuf> {
    let path = dir.join(output_file_name(id));
    let encoded = encode_png(image)?;
    write_new(&path, &encoded, |path| {
        OpenOptions::new().write(true).create_new(true).open(path)
    })?;

    log::info!("wrote {} ({} bytes)", path.display(), encoded.len());
    return Ok(path);
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let (width, height) = image.dimensions();
    PngEncoder::new(&mut bytes).write_image(image.as_raw(), width, height, ColorType::Rgb8)?;
    return Ok(bytes);
}

/// Writes `bytes` into the file `create` makes at `path`.
/// The file is removed again if writing fails part way
fn write_new<W, F>(path: &Path, bytes: &[u8], create: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&Path) -> io::Result<W>,
{
    let mut file = create(path)?;
    let written = file.write_all(bytes).and_then(|_| file.flush());
    drop(file);
    if let Err(err) = written {
        if let Err(cleanup) = fs::remove_file(path) {
            log::warn!("could not remove partial {}: {cleanup}", path.display());
        }
        return Err(err.into());
    }
    return Ok(());
}

#[cfg(test)]
mod test {
    use super::*;
    use image::{io::Reader as ImageReader, Rgb};
    use std::fs::File;

    /// Accepts `room` bytes, then fails like a full disk
    struct FullDisk {
        file: File,
        room: usize,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.room == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "no space left on device"));
            }
            let n = buf.len().min(self.room);
            self.room -= n;
            return self.file.write(&buf[..n]);
        }

        fn flush(&mut self) -> io::Result<()> {
            return self.file.flush();
        }
    }

    #[test]
    fn written_png_decodes_to_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = RgbImage::new(4, 2);
        image.put_pixel(3, 1, Rgb([0x3f, 0x29, 0x29]));

        let path = write_png(&image, dir.path(), 8).unwrap();
        assert_eq!(path, dir.path().join("export_8.png"));

        let decoded = ImageReader::open(&path).unwrap().decode().unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8(), image);
    }

    #[test]
    fn never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("export_2.png");
        std::fs::write(&existing, b"keep").unwrap();

        let err = write_png(&RgbImage::new(1, 1), dir.path(), 2).unwrap_err();
        assert!(err.is_io());
        assert_eq!(std::fs::read(&existing).unwrap(), b"keep");
    }

    #[test]
    fn failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(output_file_name(99));
        let mut image = RgbImage::new(64, 64);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgb([x as u8 * 4, y as u8 * 4, (x ^ y) as u8]);
        }
        let encoded = encode_png(&image).unwrap();

        let err = write_new(&path, &encoded, |path| {
            let file = OpenOptions::new().write(true).create_new(true).open(path)?;
            return Ok(FullDisk { file, room: 16 });
        })
        .unwrap_err();

        assert!(err.is_io());
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn failed_create_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(output_file_name(3));
        fs::write(&path, b"keep").unwrap();

        let err = write_new(&path, b"new", |path| {
            OpenOptions::new().write(true).create_new(true).open(path)
        })
        .unwrap_err();

        assert!(err.is_io());
        assert_eq!(fs::read(&path).unwrap(), b"keep");
    }
}
