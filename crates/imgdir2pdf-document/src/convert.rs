// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Directory-to-PDF conversion.
//
// Pipeline: scan the directory, order the images naturally, size one page per
// image against the template, embed each image over its whole page, and write
// the document once at the end. Every stage returns `Result`; nothing touches
// the output path until the whole document is in memory.

use std::path::{Path, PathBuf};

use imgdir2pdf_core::error::{Imgdir2PdfError, Result};
use imgdir2pdf_core::{ConversionConfig, ImageFileRef, PageSize};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::image::{load_rgb, probe_dimensions};
use crate::pdf::{PdfWriter, fit_page_size};
use crate::scan::{absolute, list_images};

/// One page of a finished conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    pub source: PathBuf,
    pub size: PageSize,
}

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    /// Absolute path of the written PDF.
    pub output: PathBuf,
    /// Pages in document order.
    pub pages: Vec<PageRecord>,
}

impl ConversionReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Converts image directories into PDFs under a fixed configuration.
pub struct DirectoryConverter {
    config: ConversionConfig,
}

impl DirectoryConverter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert every supported image in `dir` into `dir/<dir name>.pdf`.
    ///
    /// Fails with [`Imgdir2PdfError::EmptyInput`] before any document is
    /// created when the directory has no supported images.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn convert(&self, dir: impl AsRef<Path>) -> Result<ConversionReport> {
        let dir = dir.as_ref();
        let output = output_path_for(dir)?;
        let images = list_images(dir, &self.config)?;

        if images.is_empty() {
            return Err(Imgdir2PdfError::EmptyInput {
                dir: absolute(dir)?,
            });
        }

        let title = match &self.config.title {
            Some(title) => title.clone(),
            None => output
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        let writer = self.assemble(&images, &title)?;
        let pages = images
            .iter()
            .zip(writer.page_sizes())
            .map(|(image, size)| PageRecord {
                source: image.path.clone(),
                size: *size,
            })
            .collect();

        writer.write_to_file(&output)?;

        info!(output = %output.display(), "Conversion complete");
        Ok(ConversionReport { output, pages })
    }

    /// Build the in-memory document for `images`, in the given order.
    ///
    /// The document's default page size is the first image's fitted size.
    pub fn assemble(&self, images: &[ImageFileRef], title: &str) -> Result<PdfWriter> {
        let template = self.config.template.page_size();

        let first = images.first().ok_or_else(|| Imgdir2PdfError::EmptyInput {
            dir: PathBuf::new(),
        })?;
        let default_size = fit_page_size(template, probe_dimensions(&first.path)?);

        let mut writer = PdfWriter::new(title, default_size);
        for image in images {
            let dimensions = probe_dimensions(&image.path)?;
            let size = fit_page_size(template, dimensions);
            let pixels = load_rgb(&image.path)?;

            debug!(
                path = %image.path.display(),
                kind = image.kind.map(|k| k.mime_type()),
                width_px = dimensions.width,
                height_px = dimensions.height,
                "Adding page"
            );
            writer.add_image_page(pixels, size);
        }

        Ok(writer)
    }
}

/// Where the PDF for `dir` goes: `<abs dir>/<last component of abs dir>.pdf`.
pub fn output_path_for(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let abs = absolute(dir)?;
    let base = abs.file_name().ok_or_else(|| {
        Imgdir2PdfError::io(
            dir,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "directory has no name to derive the PDF name from",
            ),
        )
    })?;

    let mut file_name = base.to_os_string();
    file_name.push(".pdf");
    Ok(abs.join(file_name))
}

/// Convert `dir` with the default configuration (A4 template, png/jpg/jpeg/gif).
pub fn convert_directory(dir: impl AsRef<Path>) -> Result<ConversionReport> {
    DirectoryConverter::new(ConversionConfig::default()).convert(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::PdfReader;
    use image::{Rgb, RgbImage};
    use imgdir2pdf_core::PaperSize;

    fn write_image(dir: &Path, name: &str, w: u32, h: u32) {
        RgbImage::from_pixel(w, h, Rgb([40, 80, 160]))
            .save(dir.join(name))
            .expect("save image");
    }

    /// A directory named `photos` inside a fresh temp dir.
    fn photos_dir() -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join("photos");
        std::fs::create_dir(&dir).expect("mkdir");
        (tmp, dir)
    }

    #[test]
    fn output_path_uses_directory_name() {
        assert_eq!(
            output_path_for("/x/y/photos").unwrap(),
            PathBuf::from("/x/y/photos/photos.pdf")
        );
        assert_eq!(
            output_path_for("/x/y/photos/").unwrap(),
            PathBuf::from("/x/y/photos/photos.pdf")
        );
    }

    #[test]
    fn root_has_no_output_name() {
        let err = output_path_for("/").unwrap_err();
        assert!(matches!(err, Imgdir2PdfError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn converts_in_natural_order_with_fitted_sizes() {
        let (_tmp, dir) = photos_dir();
        write_image(&dir, "p10.png", 100, 200);
        write_image(&dir, "p2.jpg", 200, 100);
        write_image(&dir, "p.gif", 210, 297);
        std::fs::write(dir.join("notes.txt"), b"ignored").expect("write");

        let report = convert_directory(&dir).expect("convert");
        assert_eq!(report.output, dir.join("photos.pdf"));

        let names: Vec<_> = report
            .pages
            .iter()
            .map(|p| p.source.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["p.gif", "p2.jpg", "p10.png"]);

        let heights: Vec<f64> = report.pages.iter().map(|p| p.size.height_mm).collect();
        assert!((heights[0] - 297.0).abs() < 1e-9);
        assert!((heights[1] - 105.0).abs() < 1e-9);
        assert!((heights[2] - 420.0).abs() < 1e-9);

        let written = PdfReader::open(&report.output)
            .expect("open")
            .page_sizes_mm()
            .expect("sizes");
        assert_eq!(written.len(), 3);
        for (page, record) in written.iter().zip(&report.pages) {
            assert!((page.width_mm - 210.0).abs() < 0.01, "{written:?}");
            assert!((page.height_mm - record.size.height_mm).abs() < 0.01, "{written:?}");
        }
    }

    #[test]
    fn empty_directory_fails_before_writing() {
        let (_tmp, dir) = photos_dir();
        std::fs::write(dir.join("readme.txt"), b"no images here").expect("write");

        let err = convert_directory(&dir).unwrap_err();
        assert!(matches!(err, Imgdir2PdfError::EmptyInput { .. }), "got {err:?}");
        assert!(!dir.join("photos.pdf").exists());
    }

    #[test]
    fn broken_image_aborts_without_output() {
        let (_tmp, dir) = photos_dir();
        write_image(&dir, "a1.png", 10, 10);
        std::fs::write(dir.join("a2.png"), b"garbage").expect("write");

        let err = convert_directory(&dir).unwrap_err();
        assert!(matches!(err, Imgdir2PdfError::Decode { .. }), "got {err:?}");
        assert_eq!(std::fs::read_dir(&dir).expect("read_dir").count(), 2);
    }

    #[test]
    fn second_run_is_identical_in_shape() {
        let (_tmp, dir) = photos_dir();
        for (i, (w, h)) in [(30, 60), (60, 30), (50, 50), (12, 40)].iter().enumerate() {
            write_image(&dir, &format!("img{}.png", 3 * i), *w, *h);
        }

        let first = convert_directory(&dir).expect("first run");
        let first_sizes = PdfReader::open(&first.output)
            .expect("open")
            .page_sizes_mm()
            .expect("sizes");

        let second = convert_directory(&dir).expect("second run");
        let second_sizes = PdfReader::open(&second.output)
            .expect("open")
            .page_sizes_mm()
            .expect("sizes");

        assert_eq!(first, second);
        assert_eq!(first_sizes, second_sizes);
        assert_eq!(second.page_count(), 4);
    }

    #[test]
    fn alternate_template_changes_page_width() {
        let (_tmp, dir) = photos_dir();
        write_image(&dir, "only.png", 100, 100);

        let converter =
            DirectoryConverter::new(ConversionConfig::default().with_template(PaperSize::A5));
        let report = converter.convert(&dir).expect("convert");
        let size = report.pages[0].size;
        assert!((size.width_mm - 148.0).abs() < 1e-9);
        assert!((size.height_mm - 148.0).abs() < 1e-9);
    }

    #[test]
    fn assemble_uses_first_page_as_default_size() {
        let (_tmp, dir) = photos_dir();
        write_image(&dir, "1.png", 100, 50);
        write_image(&dir, "2.png", 50, 100);
        let images = list_images(&dir, &ConversionConfig::default()).expect("scan");

        let writer = DirectoryConverter::new(ConversionConfig::default())
            .assemble(&images, "t")
            .expect("assemble");
        let default = writer.default_page_size();
        assert!((default.width_mm - 210.0).abs() < 1e-9);
        assert!((default.height_mm - 105.0).abs() < 1e-9);
        assert_eq!(writer.page_count(), 2);
    }
}
