//! PNG output: encoding, file saving, and per-hand path generation.

use std::io;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Encode a canvas as PNG and return the raw bytes.
///
/// PNG keeps the alpha channel and compresses losslessly, and the encoder
/// is deterministic: the same canvas always yields the same bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, OutputError> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(buf)
}

/// Save an RGBA image to a PNG file, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    Ok(())
}

/// Generate the output path for one rendered hand.
///
/// # Output Naming Rules
///
/// | Scenario | Output |
/// |----------|--------|
/// | No `-o`, single hand | `hand.png` |
/// | No `-o`, multiple hands | `hand_{n}.png`, numbered from 1 |
/// | `-o out.png`, single hand | `out.png` |
/// | `-o out.png`, multiple hands | `out_{n}.png` |
/// | `-o dir/` | `dir/hand.png` or `dir/hand_{n}.png` |
pub fn hand_output_path(output: Option<&Path>, index: usize, total: usize) -> PathBuf {
    let default_name = if total == 1 {
        "hand.png".to_string()
    } else {
        format!("hand_{}.png", index + 1)
    };

    let Some(path) = output else {
        return PathBuf::from(default_name);
    };

    let treat_as_dir = path.is_dir() || path.to_string_lossy().ends_with('/');
    if treat_as_dir {
        path.join(default_name)
    } else if total == 1 {
        path.to_path_buf()
    } else {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("hand");
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("png");
        path.with_file_name(format!("{}_{}.{}", stem, index + 1, ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_output_path_default_single() {
        assert_eq!(hand_output_path(None, 0, 1), PathBuf::from("hand.png"));
    }

    #[test]
    fn test_output_path_default_multiple() {
        assert_eq!(hand_output_path(None, 0, 3), PathBuf::from("hand_1.png"));
        assert_eq!(hand_output_path(None, 2, 3), PathBuf::from("hand_3.png"));
    }

    #[test]
    fn test_output_path_explicit_file_single() {
        let out = Path::new("render/result.png");
        assert_eq!(hand_output_path(Some(out), 0, 1), PathBuf::from("render/result.png"));
    }

    #[test]
    fn test_output_path_explicit_file_multiple() {
        let out = Path::new("render/result.png");
        assert_eq!(
            hand_output_path(Some(out), 1, 2),
            PathBuf::from("render/result_2.png")
        );
    }

    #[test]
    fn test_output_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = hand_output_path(Some(dir.path()), 0, 2);
        assert_eq!(path, dir.path().join("hand_1.png"));
    }

    #[test]
    fn test_output_path_trailing_slash_is_directory() {
        let out = Path::new("renders/");
        assert_eq!(hand_output_path(Some(out), 0, 1), PathBuf::from("renders/hand.png"));
    }

    #[test]
    fn test_encode_png_roundtrip() {
        let image = RgbaImage::from_pixel(4, 2, Rgba([1, 2, 3, 128]));
        let bytes = encode_png(&image).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 2));
        assert_eq!(decoded.as_raw(), image.as_raw());
    }

    #[test]
    fn test_encode_png_is_deterministic() {
        let image = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 255]));
        assert_eq!(encode_png(&image).unwrap(), encode_png(&image).unwrap());
    }

    #[test]
    fn test_save_png_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deep/out.png");
        let image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        save_png(&image, &path).unwrap();
        assert!(path.exists());
    }
}
