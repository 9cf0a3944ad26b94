// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages and process exit codes.
//
// Every error a conversion can produce is mapped to plain English with a
// suggestion, plus the exit status the binary should terminate with. Codes
// follow the BSD `sysexits.h` convention.

use std::io::ErrorKind;

use crate::error::Imgdir2PdfError;

/// `EX_DATAERR`: input data was incorrect.
pub const EXIT_DATA_ERR: u8 = 65;
/// `EX_NOINPUT`: input missing or unusable.
pub const EXIT_NO_INPUT: u8 = 66;
/// `EX_IOERR`: an error occurred while doing I/O.
pub const EXIT_IO_ERR: u8 = 74;

/// How the top-level handler should treat an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The run cannot produce a document; print a diagnostic and exit non-zero.
    Fatal,
    /// Report the problem and return normally.
    Reported,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub severity: Severity,
    /// Process exit status for this error.
    pub exit_code: u8,
}

/// Convert an [`Imgdir2PdfError`] into a [`HumanError`].
pub fn humanize_error(err: &Imgdir2PdfError) -> HumanError {
    match err {
        Imgdir2PdfError::Io { path, source } => {
            let (message, suggestion) = match source.kind() {
                ErrorKind::NotFound => (
                    format!("{} doesn't exist.", path.display()),
                    "Check the spelling of the directory name.".to_string(),
                ),
                ErrorKind::PermissionDenied => (
                    format!("Permission denied reading {}.", path.display()),
                    "Check the permissions of the directory and the images in it.".to_string(),
                ),
                ErrorKind::NotADirectory => (
                    format!("{} is not a directory.", path.display()),
                    "Pass the directory that contains the images, not a single file.".to_string(),
                ),
                _ => (
                    format!("Couldn't read {}.", path.display()),
                    format!("The underlying error was: {source}"),
                ),
            };
            HumanError {
                message,
                suggestion,
                severity: Severity::Fatal,
                exit_code: EXIT_IO_ERR,
            }
        }

        Imgdir2PdfError::Decode { path, reason } => HumanError {
            message: format!("{} is not a readable image.", path.display()),
            suggestion: format!(
                "The file may be damaged or misnamed. Remove it or re-save it as PNG or JPEG. ({reason})"
            ),
            severity: Severity::Fatal,
            exit_code: EXIT_DATA_ERR,
        },

        Imgdir2PdfError::EmptyInput { dir } => HumanError {
            message: format!("No suitable files in {}.", dir.display()),
            suggestion: "Supported files end in .png, .jpg, .jpeg or .gif (lowercase).".into(),
            severity: Severity::Fatal,
            exit_code: EXIT_NO_INPUT,
        },

        Imgdir2PdfError::Write { .. } => HumanError {
            message: format!("Error writing pdf: {err}"),
            suggestion: "Make sure the directory is writable and has free space.".into(),
            severity: Severity::Reported,
            exit_code: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_directory_is_io_error() {
        let err = Imgdir2PdfError::io(
            "/no/such/dir",
            std::io::Error::new(ErrorKind::NotFound, "not found"),
        );
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Fatal);
        assert_eq!(human.exit_code, EXIT_IO_ERR);
        assert!(human.message.contains("/no/such/dir"));
    }

    #[test]
    fn broken_image_is_data_error() {
        let err = Imgdir2PdfError::decode("/d/x.png", "invalid PNG signature");
        let human = humanize_error(&err);
        assert_eq!(human.exit_code, EXIT_DATA_ERR);
        assert!(human.suggestion.contains("invalid PNG signature"));
    }

    #[test]
    fn empty_directory_is_no_input() {
        let err = Imgdir2PdfError::EmptyInput {
            dir: PathBuf::from("/d"),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Fatal);
        assert_eq!(human.exit_code, EXIT_NO_INPUT);
    }

    #[test]
    fn write_failure_is_reported_not_fatal() {
        let err = Imgdir2PdfError::Write {
            path: PathBuf::from("/d/d.pdf"),
            source: std::io::Error::new(ErrorKind::PermissionDenied, "read-only"),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Reported);
        assert_eq!(human.exit_code, 0);
        assert!(human.message.starts_with("Error writing pdf: /d/d.pdf"));
    }
}
