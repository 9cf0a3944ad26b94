// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page image loader — decode a source image into RGB pixels for embedding.

use std::path::Path;

use image::RgbImage;
use imgdir2pdf_core::error::{Imgdir2PdfError, Result};
use tracing::{debug, instrument};

use super::probe::open_reader;

/// Decode the image at `path` into 8-bit RGB.
///
/// Animated GIFs yield their first frame. Alpha is discarded. The pixels are
/// passed through unchanged otherwise; nothing is resampled.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_rgb(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let image = open_reader(path)?
        .decode()
        .map_err(|err| Imgdir2PdfError::decode(path, err))?;

    debug!(
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Image decoded"
    );
    Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, Frame, Rgb, Rgba, RgbaImage};

    #[test]
    fn decodes_png_pixels() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("red.png");
        RgbImage::from_pixel(3, 2, Rgb([255, 0, 0]))
            .save(&path)
            .expect("save");

        let img = load_rgb(&path).expect("load");
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(1, 1), &Rgb([255, 0, 0]));
    }

    #[test]
    fn animated_gif_yields_first_frame() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("anim.gif");
        {
            let file = std::fs::File::create(&path).expect("create");
            let mut encoder = GifEncoder::new(file);
            let delay = Delay::from_numer_denom_ms(100, 1);
            let first = Frame::from_parts(
                RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])),
                0,
                0,
                delay,
            );
            let second = Frame::from_parts(
                RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])),
                0,
                0,
                delay,
            );
            encoder.encode_frames(vec![first, second]).expect("encode");
        }

        let img = load_rgb(&path).expect("load");
        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn truncated_file_is_decode_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("cut.png");
        let mut bytes = Vec::new();
        RgbImage::from_pixel(50, 50, Rgb([1, 2, 3]))
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("encode");
        bytes.truncate(bytes.len() / 2);
        std::fs::write(&path, &bytes).expect("write");

        let err = load_rgb(&path).unwrap_err();
        assert!(matches!(err, Imgdir2PdfError::Decode { .. }), "got {err:?}");
    }
}
