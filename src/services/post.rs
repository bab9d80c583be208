use crate::model::Media;

/// Service for post and comment validation and processing
pub struct PostService;

impl PostService {
    /// Validate post content
    pub fn validate_post_text(text: &str) -> Result<String, String> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err("Empty post: please add some text to your post".to_string());
        }

        if trimmed.len() > 1000 {
            return Err("Post too long (max 1000 characters)".to_string());
        }

        Ok(trimmed.to_string())
    }

    /// Classify an attached media reference. Anything mentioning "video" is
    /// treated as a video, everything else as an image.
    pub fn classify_media(reference: &str) -> Option<Media> {
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.contains("video") {
            Some(Media::Video(trimmed.to_string()))
        } else {
            Some(Media::Image(trimmed.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_posts_fail_validation() {
        assert!(PostService::validate_post_text("").is_err());
        assert!(PostService::validate_post_text(" \t\n ").is_err());
    }

    #[test]
    fn valid_posts_are_trimmed() {
        assert_eq!(
            PostService::validate_post_text("  hello  ").unwrap(),
            "hello"
        );
    }

    #[test]
    fn media_classification_keys_on_the_video_substring() {
        assert!(matches!(
            PostService::classify_media("https://example.com/video/clip.mp4"),
            Some(Media::Video(_))
        ));
        assert!(matches!(
            PostService::classify_media("https://example.com/photo.jpg"),
            Some(Media::Image(_))
        ));
        assert!(PostService::classify_media("   ").is_none());
    }
}
