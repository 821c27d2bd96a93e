use serde_derive::Deserialize;

/// Settings that influence which completions are offered. Deserializes from
/// the camelCase settings object an editor sends, missing fields keep their
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompletionConfig {
    /// Offer symbols from modules that are not imported yet.
    pub auto_import_completions: bool,

    /// Minimum number of characters that must be typed before other modules
    /// are searched for auto-import candidates.
    pub auto_import_min_prefix_length: usize,

    /// Offer language keywords in expression and statement positions.
    pub keywords: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            auto_import_completions: true,
            auto_import_min_prefix_length: 3,
            keywords: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_partial() {
        let config: CompletionConfig =
            serde_json::from_value(serde_json::json!({ "autoImportCompletions": false }))
                .unwrap();
        assert_eq!(
            config,
            CompletionConfig {
                auto_import_completions: false,
                ..CompletionConfig::default()
            }
        );
    }

    #[test]
    fn deserialize_empty() {
        let config: CompletionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CompletionConfig::default());
        assert_eq!(config.auto_import_min_prefix_length, 3);
    }
}
