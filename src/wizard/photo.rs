use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;

/// Largest accepted passport photo, after base64 decoding.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

const ACCEPTED_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif", "image/webp"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    NotADataUrl,
    UnsupportedType(String),
    BadEncoding,
    TooLarge(usize),
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::NotADataUrl => write!(f, "Photo must be an uploaded image"),
            PhotoError::UnsupportedType(t) => write!(f, "Photo type '{t}' is not supported (use PNG, JPEG, GIF or WebP)"),
            PhotoError::BadEncoding => write!(f, "Photo data is corrupted, please upload it again"),
            PhotoError::TooLarge(n) => write!(
                f,
                "Photo is too large ({} KB, limit {} KB)",
                n / 1024,
                MAX_PHOTO_BYTES / 1024
            ),
        }
    }
}

impl std::error::Error for PhotoError {}

/// Check a `data:image/...;base64,...` URL as produced by `FileReader.readAsDataURL`.
/// The empty string means "no photo" and is accepted.
pub fn validate_data_url(value: &str) -> Result<(), PhotoError> {
    if value.is_empty() {
        return Ok(());
    }
    let rest = value.strip_prefix("data:").ok_or(PhotoError::NotADataUrl)?;
    let (meta, payload) = rest.split_once(',').ok_or(PhotoError::NotADataUrl)?;
    let mime = meta.strip_suffix(";base64").ok_or(PhotoError::NotADataUrl)?;
    let mime = mime.to_ascii_lowercase();
    if !ACCEPTED_TYPES.contains(&mime.as_str()) {
        return Err(PhotoError::UnsupportedType(mime));
    }

    let estimated = payload.len() / 4 * 3;
    if estimated > MAX_PHOTO_BYTES + 3 {
        return Err(PhotoError::TooLarge(estimated));
    }
    let decoded = STANDARD.decode(payload).map_err(|_| PhotoError::BadEncoding)?;
    if decoded.is_empty() {
        return Err(PhotoError::BadEncoding);
    }
    if decoded.len() > MAX_PHOTO_BYTES {
        return Err(PhotoError::TooLarge(decoded.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_url(mime: &str, bytes: &[u8]) -> String {
        format!("data:{mime};base64,{}", STANDARD.encode(bytes))
    }

    #[test]
    fn empty_is_no_photo() {
        assert_eq!(validate_data_url(""), Ok(()));
    }

    #[test]
    fn accepts_png_and_jpeg() {
        assert_eq!(validate_data_url(&data_url("image/png", b"\x89PNG\r\n\x1a\n")), Ok(()));
        assert_eq!(validate_data_url(&data_url("image/jpeg", b"\xff\xd8\xff\xe0")), Ok(()));
    }

    #[test]
    fn rejects_plain_urls_and_other_types() {
        assert_eq!(validate_data_url("https://example.com/me.jpg"), Err(PhotoError::NotADataUrl));
        assert_eq!(
            validate_data_url(&data_url("application/pdf", b"%PDF")),
            Err(PhotoError::UnsupportedType("application/pdf".into()))
        );
    }

    #[test]
    fn rejects_broken_base64() {
        assert_eq!(validate_data_url("data:image/png;base64,@@@@"), Err(PhotoError::BadEncoding));
    }

    #[test]
    fn rejects_oversized_payload() {
        let big = vec![0u8; MAX_PHOTO_BYTES + 1024];
        assert!(matches!(validate_data_url(&data_url("image/png", &big)), Err(PhotoError::TooLarge(_))));
    }
}
