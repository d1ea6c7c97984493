//! Captcha challenge entity.

/// Content type assumed when the captcha response does not declare one.
pub const DEFAULT_IMAGE_TYPE: &str = "image/png";

/// One captcha challenge as returned by the backend.
///
/// The token binds the displayed image to the answer submitted with the form,
/// so both must always come from the same challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaChallenge {
    pub token: String,
    pub image: Vec<u8>,
    pub content_type: String,
}

impl CaptchaChallenge {
    pub fn new(token: String, image: Vec<u8>, content_type: Option<String>) -> Self {
        let content_type = content_type
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string());

        Self {
            token,
            image,
            content_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_defaults_content_type() {
        let challenge = CaptchaChallenge::new("abc".to_string(), vec![1, 2], None);
        assert_eq!(challenge.content_type, "image/png");

        let challenge = CaptchaChallenge::new("abc".to_string(), vec![], Some("  ".to_string()));
        assert_eq!(challenge.content_type, "image/png");
    }

    #[test]
    fn test_challenge_keeps_declared_content_type() {
        let challenge =
            CaptchaChallenge::new("abc".to_string(), vec![], Some("image/jpeg".to_string()));
        assert_eq!(challenge.content_type, "image/jpeg");
    }
}
