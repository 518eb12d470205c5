//! Summary options chosen on the input form.
//!
//! [`Comprehensiveness`] is the three-step slider, [`AiModel`] the model
//! picker, and [`ProcessingOptions`] bundles the model with the display
//! toggles that the results page honours.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// How verbose the summary should be.
///
/// The slider on the form stores this as an integer level: 0 is
/// [`Brief`](Self::Brief), 1 is [`Standard`](Self::Standard), 2 is
/// [`Detailed`](Self::Detailed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comprehensiveness {
    Brief,
    #[default]
    Standard,
    Detailed,
}

impl Comprehensiveness {
    /// All levels in slider order.
    pub const ALL: [Self; 3] = [Self::Brief, Self::Standard, Self::Detailed];

    /// Highest slider level.
    pub const MAX_LEVEL: u8 = 2;

    /// Convert a slider level to a comprehensiveness value.
    pub fn from_level(level: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(level))
            .copied()
            .ok_or(CoreError::InvalidLevel(level))
    }

    /// The slider level for this value.
    pub fn level(self) -> u8 {
        match self {
            Self::Brief => 0,
            Self::Standard => 1,
            Self::Detailed => 2,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Brief => "Brief",
            Self::Standard => "Standard",
            Self::Detailed => "Detailed",
        }
    }
}

impl fmt::Display for Comprehensiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Model offered in the form's model picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiModel {
    #[default]
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5")]
    Gpt35,
    #[serde(rename = "claude-3")]
    Claude3,
}

impl AiModel {
    /// All models in picker order.
    pub const ALL: [Self; 3] = [Self::Gpt4, Self::Gpt35, Self::Claude3];

    /// Identifier used as the `<option>` value.
    pub fn id(self) -> &'static str {
        match self {
            Self::Gpt4 => "gpt-4",
            Self::Gpt35 => "gpt-3.5",
            Self::Claude3 => "claude-3",
        }
    }

    /// Name shown to the reader.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Gpt4 => "GPT-4",
            Self::Gpt35 => "GPT-3.5",
            Self::Claude3 => "Claude 3",
        }
    }
}

impl fmt::Display for AiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AiModel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| CoreError::unknown_model(s))
    }
}

/// Display options collected alongside the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingOptions {
    /// Model used to produce the summary.
    #[serde(default)]
    pub ai_model: AiModel,

    /// Show chapter titles.
    #[serde(default = "default_true")]
    pub titled_sections: bool,

    /// Show chapter timestamps.
    #[serde(default = "default_true")]
    pub include_timestamps: bool,

    /// Open the results in article layout rather than plain text.
    #[serde(default = "default_true")]
    pub article_view: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            ai_model: AiModel::default(),
            titled_sections: true,
            include_timestamps: true,
            article_view: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(Comprehensiveness::from_level(0).unwrap().label(), "Brief");
        assert_eq!(Comprehensiveness::from_level(1).unwrap().label(), "Standard");
        assert_eq!(Comprehensiveness::from_level(2).unwrap().label(), "Detailed");
    }

    #[test]
    fn test_level_out_of_range() {
        assert_eq!(
            Comprehensiveness::from_level(3),
            Err(CoreError::InvalidLevel(3))
        );
        assert_eq!(
            Comprehensiveness::from_level(255),
            Err(CoreError::InvalidLevel(255))
        );
    }

    #[test]
    fn test_level_matches_index() {
        for (i, c) in Comprehensiveness::ALL.iter().enumerate() {
            assert_eq!(usize::from(c.level()), i);
        }
        assert_eq!(Comprehensiveness::MAX_LEVEL, Comprehensiveness::Detailed.level());
    }

    #[test]
    fn test_comprehensiveness_default_is_standard() {
        assert_eq!(Comprehensiveness::default(), Comprehensiveness::Standard);
    }

    #[test]
    fn test_comprehensiveness_display() {
        assert_eq!(Comprehensiveness::Detailed.to_string(), "Detailed");
    }

    #[test]
    fn test_model_ids_round_trip() {
        for model in AiModel::ALL {
            assert_eq!(model.id().parse::<AiModel>(), Ok(model));
        }
    }

    #[test]
    fn test_model_display_names() {
        assert_eq!(AiModel::Gpt4.display_name(), "GPT-4");
        assert_eq!(AiModel::Gpt35.display_name(), "GPT-3.5");
        assert_eq!(AiModel::Claude3.to_string(), "Claude 3");
    }

    #[test]
    fn test_unknown_model_rejected() {
        let err = "llama-2".parse::<AiModel>().unwrap_err();
        assert_eq!(err, CoreError::unknown_model("llama-2"));
    }

    #[test]
    fn test_options_serialization() {
        let options = ProcessingOptions {
            ai_model: AiModel::Claude3,
            ..ProcessingOptions::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"aiModel\":\"claude-3\""));
        assert!(json.contains("\"titledSections\":true"));
    }

    #[test]
    fn test_options_defaults_from_empty_json() {
        let options: ProcessingOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ProcessingOptions::default());
    }
}
