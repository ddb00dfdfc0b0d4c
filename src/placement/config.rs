//! Configuration for the placement engine

/// Placed wherever a layer refers to an undefined token
pub const MISSING_BLOCK: &str = "magenta_glazed_terracotta";

/// Substrings marking blocks that need a solid neighbour
pub const ATTACHMENT_KEYWORDS: [&str; 4] = ["torch", "lantern", "vine", "bell"];

/// Configuration options for placement
#[derive(Debug, Clone)]
pub struct PlacementConfig {
    /// Substitute block for missing tokens
    pub missing_block: String,

    /// A token containing any of these is placed in the attachment pass
    pub attachment_keywords: Vec<String>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            missing_block: MISSING_BLOCK.to_string(),
            attachment_keywords: ATTACHMENT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PlacementConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the substitute block for missing tokens
    pub fn with_missing_block(mut self, block: impl Into<String>) -> Self {
        self.missing_block = block.into();
        self
    }

    /// Replace the attachment keyword list
    pub fn with_attachment_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attachment_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_attachment(&self, token: &str) -> bool {
        self.attachment_keywords
            .iter()
            .any(|keyword| token.contains(keyword.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacementConfig::default();
        assert_eq!(config.missing_block, "magenta_glazed_terracotta");
        assert_eq!(
            config.attachment_keywords,
            vec!["torch", "lantern", "vine", "bell"]
        );
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlacementConfig::new()
            .with_missing_block("bedrock")
            .with_attachment_keywords(["sign"]);

        assert_eq!(config.missing_block, "bedrock");
        assert!(config.is_attachment("oak_sign"));
        assert!(!config.is_attachment("torch"));
    }
}
