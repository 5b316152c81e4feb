use crate::error::MentionError;

pub const DEFAULT_TRIGGER: &str = "{{";
pub const DEFAULT_CLOSING_TRIGGER: &str = "}}";

/// Validated per-widget trigger configuration.
///
/// Construction fails fast on markers that could never scan correctly, so
/// the scanning functions themselves never have to report configuration
/// problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionConfig {
    trigger: String,
    closing_trigger: Option<String>,
    case_sensitive: bool,
    auto_close: bool,
    trailing_space: bool,
}

impl Default for MentionConfig {
    fn default() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER.to_string(),
            closing_trigger: Some(DEFAULT_CLOSING_TRIGGER.to_string()),
            case_sensitive: false,
            auto_close: false,
            trailing_space: false,
        }
    }
}

impl MentionConfig {
    pub fn new(
        trigger: impl Into<String>,
        closing_trigger: Option<String>,
    ) -> Result<Self, MentionError> {
        let config = Self {
            trigger: trigger.into(),
            closing_trigger,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MentionError> {
        if self.trigger.is_empty() {
            return Err(MentionError::EmptyTrigger);
        }
        match self.closing_trigger.as_deref() {
            Some("") => Err(MentionError::EmptyClosingTrigger),
            Some(closing) if closing == self.trigger => {
                Err(MentionError::TriggerEqualsClosing(closing.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Append the closing marker after an accepted candidate.
    pub fn with_auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    /// Append a space after an accepted candidate.
    pub fn with_trailing_space(mut self, trailing_space: bool) -> Self {
        self.trailing_space = trailing_space;
        self
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn closing_trigger(&self) -> Option<&str> {
        self.closing_trigger.as_deref()
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    pub fn trailing_space(&self) -> bool {
        self.trailing_space
    }

    /// Text appended after an accepted candidate under this configuration.
    pub fn accept_suffix(&self) -> String {
        let mut suffix = String::new();
        if self.auto_close
            && let Some(closing) = &self.closing_trigger
        {
            suffix.push_str(closing);
        }
        if self.trailing_space {
            suffix.push(' ');
        }
        suffix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_braces() {
        let config = MentionConfig::default();
        assert_eq!(config.trigger(), "{{");
        assert_eq!(config.closing_trigger(), Some("}}"));
        assert!(!config.case_sensitive());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_at_without_closing() {
        let config = MentionConfig::new("@", None).unwrap();
        assert_eq!(config.trigger(), "@");
        assert_eq!(config.closing_trigger(), None);
    }

    #[test]
    fn test_empty_trigger_rejected() {
        let err = MentionConfig::new("", None).unwrap_err();
        assert!(matches!(err, MentionError::EmptyTrigger));
    }

    #[test]
    fn test_empty_closing_rejected() {
        let err = MentionConfig::new("@", Some(String::new())).unwrap_err();
        assert!(matches!(err, MentionError::EmptyClosingTrigger));
    }

    #[test]
    fn test_trigger_equal_to_closing_rejected() {
        let err = MentionConfig::new("$", Some("$".to_string())).unwrap_err();
        assert!(matches!(err, MentionError::TriggerEqualsClosing(ref m) if m == "$"));
    }

    #[test]
    fn test_accept_suffix_default_empty() {
        assert_eq!(MentionConfig::default().accept_suffix(), "");
    }

    #[test]
    fn test_accept_suffix_auto_close_and_space() {
        let config = MentionConfig::default()
            .with_auto_close(true)
            .with_trailing_space(true);
        assert_eq!(config.accept_suffix(), "}} ");
    }

    #[test]
    fn test_auto_close_without_closing_marker() {
        let config = MentionConfig::new("@", None).unwrap().with_auto_close(true);
        assert_eq!(config.accept_suffix(), "");
    }
}
