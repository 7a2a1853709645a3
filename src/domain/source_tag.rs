use unicode_segmentation::UnicodeSegmentation;

const DEFAULT_SOURCE: &str = "blog";

/// Short label identifying the page or channel a subscription came from.
/// Attribution only, never shown to subscribers.
#[derive(Debug, Clone)]
pub struct SourceTag(String);

impl SourceTag {
    /// Absent or blank tags fall back to "blog".
    pub fn parse(s: Option<String>) -> Result<SourceTag, String> {
        let s = match s {
            Some(s) => s.trim().to_string(),
            None => String::new(),
        };
        if s.is_empty() {
            return Ok(Self(DEFAULT_SOURCE.to_string()));
        }

        let is_too_long = s.graphemes(true).count() > 32;
        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s.chars().any(|c| forbidden_characters.contains(&c));

        if is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid source tag.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SourceTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
