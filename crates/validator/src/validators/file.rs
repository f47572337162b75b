//! Uploaded file validators
//!
//! Files are described by [`FileInfo`], the metadata a browser reports for a
//! selected file: name, size in bytes, and declared media type.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

/// Bytes per megabyte used for size ceilings.
pub const BYTES_PER_MB: u64 = 1_048_576;

/// Metadata of a file picked in an upload input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInfo {
    /// Original file name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Declared media type, e.g. `image/png`.
    #[serde(rename = "type")]
    pub media_type: String,
}

impl FileInfo {
    /// Creates file metadata.
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
        }
    }
}

// ============================================================================
// SIZE
// ============================================================================

crate::validator! {
    /// Validates that a file is no larger than a ceiling given in megabytes.
    #[derive(Copy, PartialEq)]
    pub MaxFileSize { max_megabytes: f64 } for FileInfo;
    rule(self, input) { (input.size as f64) <= self.max_megabytes * (BYTES_PER_MB as f64) }
    error(self, input) {
        ValidationError::new(
            "file_too_large",
            format!("File size must be less than {}MB", self.max_megabytes),
        )
        .with_param("max", self.max_megabytes.to_string())
        .with_param("actual", input.size.to_string())
    }
    fn max_file_size(max_megabytes: f64);
}

// ============================================================================
// TYPE
// ============================================================================

crate::validator! {
    /// Validates that a file's media type appears in an allow-list.
    ///
    /// Matching is exact; an empty allow-list rejects every file.
    #[derive(PartialEq, Eq)]
    pub AllowedFileTypes { allowed: Vec<String> } for FileInfo;
    rule(self, input) { self.allowed.iter().any(|t| *t == input.media_type) }
    error(self, input) {
        ValidationError::new(
            "file_type_not_allowed",
            format!("File type not allowed. Allowed types: {}", self.allowed.join(", ")),
        )
        .with_param("actual", input.media_type.clone())
    }
    new(allowed: impl IntoIterator<Item = impl Into<String>>) {
        Self { allowed: allowed.into_iter().map(Into::into).collect() }
    }
    fn allowed_file_types(allowed: impl IntoIterator<Item = impl Into<String>>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    fn image(size: u64) -> FileInfo {
        FileInfo::new("ring.png", size, "image/png")
    }

    #[test]
    fn test_size_ceiling() {
        let validator = max_file_size(1.0);
        assert!(validator.validate(&image(500 * 1024)).is_ok());
        assert!(validator.validate(&image(BYTES_PER_MB)).is_ok());
        assert!(validator.validate(&image(BYTES_PER_MB + 1)).is_err());
        assert_eq!(
            validator.check(&image(2 * BYTES_PER_MB)).as_deref(),
            Some("File size must be less than 1MB")
        );
    }

    #[test]
    fn test_fractional_ceiling() {
        let validator = MaxFileSize::new(0.5);
        assert!(validator.validate(&image(BYTES_PER_MB / 2)).is_ok());
        assert_eq!(
            validator.check(&image(BYTES_PER_MB)).as_deref(),
            Some("File size must be less than 0.5MB")
        );
    }

    #[test]
    fn test_type_allow_list() {
        let validator = allowed_file_types(["image/png", "image/jpeg"]);
        assert!(validator.validate(&image(10)).is_ok());

        let pdf = FileInfo::new("invoice.pdf", 10, "application/pdf");
        assert_eq!(
            validator.check(&pdf).as_deref(),
            Some("File type not allowed. Allowed types: image/png, image/jpeg")
        );
    }

    #[test]
    fn test_empty_allow_list_rejects_everything() {
        let validator = AllowedFileTypes::new(Vec::<String>::new());
        assert!(validator.validate(&image(10)).is_err());
    }

    #[test]
    fn test_file_info_serde_uses_browser_field_names() {
        let file: FileInfo =
            serde_json::from_str(r#"{"name":"a.jpg","size":42,"type":"image/jpeg"}"#).unwrap();
        assert_eq!(file, FileInfo::new("a.jpg", 42, "image/jpeg"));
    }
}
