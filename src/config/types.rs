// Configuration type definitions

use serde::Deserialize;

use crate::error::MentionError;
use crate::mention::{DEFAULT_CLOSING_TRIGGER, DEFAULT_TRIGGER, MentionConfig};
use crate::template::{DEFAULT_NOT_FOUND, EvaluationOptions};

/// Trigger configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TriggerSection {
    pub marker: String,
    /// An empty string disables the closing marker. When omitted, `}}` is
    /// used only for the default `{{` marker.
    pub closing: Option<String>,
    pub case_sensitive: bool,
    pub auto_close: bool,
    pub trailing_space: bool,
}

impl Default for TriggerSection {
    fn default() -> Self {
        TriggerSection {
            marker: DEFAULT_TRIGGER.to_string(),
            closing: None,
            case_sensitive: false,
            auto_close: false,
            trailing_space: false,
        }
    }
}

impl TriggerSection {
    /// Closing marker in effect for this section.
    pub fn closing_marker(&self) -> Option<String> {
        match &self.closing {
            Some(closing) if closing.is_empty() => None,
            Some(closing) => Some(closing.clone()),
            None if self.marker == DEFAULT_TRIGGER => Some(DEFAULT_CLOSING_TRIGGER.to_string()),
            None => None,
        }
    }
}

/// Template rendering configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateSection {
    pub default_value: String,
    pub throw_on_error: bool,
    pub keep_unresolved: bool,
}

impl Default for TemplateSection {
    fn default() -> Self {
        TemplateSection {
            default_value: DEFAULT_NOT_FOUND.to_string(),
            throw_on_error: false,
            keep_unresolved: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub trigger: TriggerSection,
    #[serde(default)]
    pub template: TemplateSection,
}

impl Config {
    /// Validate the trigger section into a widget configuration.
    pub fn mention_config(&self) -> Result<MentionConfig, MentionError> {
        let closing = self.trigger.closing_marker();
        Ok(MentionConfig::new(self.trigger.marker.clone(), closing)?
            .with_case_sensitive(self.trigger.case_sensitive)
            .with_auto_close(self.trigger.auto_close)
            .with_trailing_space(self.trigger.trailing_space))
    }

    pub fn evaluation_options(&self) -> EvaluationOptions {
        EvaluationOptions::default()
            .with_default_value(self.template.default_value.clone())
            .with_throw_on_error(self.template.throw_on_error)
            .with_keep_unresolved(self.template.keep_unresolved)
    }
}
