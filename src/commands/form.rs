//! Form validation and multipart helpers shared by the submit commands.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use reqwest::multipart::Part;
use tracing::debug;

use crate::error::{CmsError, Result};

/// Largest request body the backend accepts, framing and text fields included.
pub const MAX_REQUEST_BYTES: u64 = 16 * 1024 * 1024;

/// Room kept under the request limit for multipart framing and text fields.
const FORM_HEADROOM_BYTES: u64 = 64 * 1024;

/// Largest image file accepted for upload.
pub const MAX_UPLOAD_BYTES: u64 = MAX_REQUEST_BYTES - FORM_HEADROOM_BYTES;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email regex"));

/// Reject a text field that is blank; the value itself is passed through as entered.
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(CmsError::MissingField(field));
    }
    Ok(value)
}

/// Check the shape of an email, ignoring surrounding whitespace.
pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(CmsError::InvalidEmail(email.to_string()))
    }
}

/// Read an image from disk into a multipart file part.
pub fn image_part(path: &Path) -> Result<Part> {
    let display = path.display().to_string();

    if !path.is_file() {
        return Err(CmsError::FileNotFound(display));
    }

    let size = std::fs::metadata(path)
        .map_err(|e| CmsError::FileRead {
            path: display.clone(),
            source: e,
        })?
        .len();

    if size > MAX_UPLOAD_BYTES {
        return Err(CmsError::UploadTooLarge {
            path: display,
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let data = std::fs::read(path).map_err(|e| CmsError::FileRead {
        path: display.clone(),
        source: e,
    })?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();
    let content_type = guess_content_type(&filename);
    debug!(%filename, content_type, size, "prepared upload");

    Ok(Part::bytes(data)
        .file_name(filename)
        .mime_str(content_type)?)
}

fn guess_content_type(filename: &str) -> &'static str {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
