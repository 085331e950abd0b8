//! Per-call input configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display character used in place of every typed key by [`Style::Masked`].
pub const DEFAULT_MASK: char = '*';

/// How keys are captured and echoed.
///
/// - `Basic`: a line, echoed as typed.
/// - `Masked`: a line, echoed as [`DEFAULT_MASK`].
/// - `Instant`: a single key, no Enter needed, echoed uppercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Style {
    #[default]
    Basic,
    Masked,
    Instant,
}

impl Style {
    /// The mask echoed by line capture, if any.
    pub fn mask(self) -> Option<char> {
        match self {
            Style::Masked => Some(DEFAULT_MASK),
            Style::Basic | Style::Instant => None,
        }
    }
}

/// Style plus prompt policy for one input call.
///
/// With `prompt_once` the message is printed before the first attempt only;
/// otherwise it is printed again before every retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Prompt {
    pub style: Style,
    pub prompt_once: bool,
}

impl Prompt {
    /// Re-prompts before every attempt.
    pub fn new(style: Style) -> Self {
        Self {
            style,
            prompt_once: false,
        }
    }

    /// Prompts a single time, before the first attempt.
    pub fn once(style: Style) -> Self {
        Self {
            style,
            prompt_once: true,
        }
    }
}

impl From<Style> for Prompt {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_masked_has_a_mask() {
        assert_eq!(Style::Basic.mask(), None);
        assert_eq!(Style::Masked.mask(), Some('*'));
        assert_eq!(Style::Instant.mask(), None);
    }

    #[test]
    fn test_default_prompt() {
        let prompt = Prompt::default();
        assert_eq!(prompt.style, Style::Basic);
        assert!(!prompt.prompt_once);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_prompt_from_config_json() {
        let prompt: Prompt =
            serde_json::from_str(r#"{ "style": "masked", "prompt_once": true }"#).unwrap();
        assert_eq!(prompt, Prompt::once(Style::Masked));

        let partial: Prompt = serde_json::from_str(r#"{ "style": "instant" }"#).unwrap();
        assert_eq!(partial, Prompt::new(Style::Instant));
    }
}
