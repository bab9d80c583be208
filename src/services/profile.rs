use std::fs;
use std::path::Path;

use base64::Engine;

use crate::model::Profile;
use crate::state::{AppError, AppResult};

/// Service for profile validation and processing
pub struct ProfileService;

impl ProfileService {
    pub fn validate_profile(draft: &Profile) -> Result<(), String> {
        if draft.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        if draft.bio.len() > 500 {
            return Err("Bio must be 500 characters or less".to_string());
        }

        Ok(())
    }

    /// Turn an avatar input into an opaque in-memory data reference. URLs and
    /// existing data references pass through; local files are read and
    /// base64-encoded, never transmitted anywhere.
    pub fn file_to_data_ref(val: &str) -> AppResult<Option<String>> {
        let trimmed = val.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        if trimmed.starts_with("data:") || trimmed.starts_with("http") {
            return Ok(Some(trimmed.to_string()));
        }

        if Path::new(trimmed).exists() {
            match fs::read(trimmed) {
                Ok(bytes) => {
                    if bytes.len() > 1024 * 1024 {
                        return Err(AppError::Validation(format!(
                            "File '{}' is too large (>1MB)",
                            trimmed
                        )));
                    }
                    let b64 = base64::engine::general_purpose::STANDARD.encode(&bytes);
                    Ok(Some(format!("data:image/png;base64,{}", b64)))
                }
                Err(e) => {
                    tracing::warn!("failed to read avatar file '{}': {}", trimmed, e);
                    Err(AppError::IO(e))
                }
            }
        } else {
            Err(AppError::Validation(format!(
                "'{}' is not a file path, URL, or data reference",
                trimmed
            )))
        }
    }

    /// A CV upload is reduced to its display name; the file itself is
    /// discarded.
    pub fn cv_display_name(path: &str) -> Option<String> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return None;
        }
        Path::new(trimmed)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_need_a_name() {
        let mut draft = Profile::default();
        draft.name = "  ".to_string();
        assert!(ProfileService::validate_profile(&draft).is_err());
    }

    #[test]
    fn overlong_bios_are_rejected() {
        let mut draft = Profile::default();
        draft.bio = "x".repeat(501);
        assert!(ProfileService::validate_profile(&draft).is_err());
        draft.bio.pop();
        assert!(ProfileService::validate_profile(&draft).is_ok());
    }

    #[test]
    fn urls_and_data_refs_pass_through_unchanged() {
        let url = "https://example.com/avatar.png";
        assert_eq!(
            ProfileService::file_to_data_ref(url).unwrap().as_deref(),
            Some(url)
        );
        let data = "data:image/png;base64,AAAA";
        assert_eq!(
            ProfileService::file_to_data_ref(data).unwrap().as_deref(),
            Some(data)
        );
        assert_eq!(ProfileService::file_to_data_ref("  ").unwrap(), None);
    }

    #[test]
    fn cv_uploads_keep_only_the_file_name() {
        assert_eq!(
            ProfileService::cv_display_name("/home/student/docs/my_cv.pdf").as_deref(),
            Some("my_cv.pdf")
        );
        assert_eq!(ProfileService::cv_display_name(""), None);
    }
}
