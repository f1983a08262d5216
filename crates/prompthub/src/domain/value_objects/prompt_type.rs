//! PromptType - Whether a prompt targets image or text generation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Prompt type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PromptType {
    Image,
    Text,
}

impl PromptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptType::Image => "image",
            PromptType::Text => "text",
        }
    }
}

impl std::fmt::Display for PromptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PromptType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(PromptType::Image),
            "text" => Ok(PromptType::Text),
            _ => Err(format!("Unknown prompt type: {}. Valid: image, text", s)),
        }
    }
}
