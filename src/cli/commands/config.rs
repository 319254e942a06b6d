//! Implementation of the `docchat config` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::display::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    #[serde(flatten)]
    pub config: Config,
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config)
            .map(|yaml| yaml.trim_end().to_string())
            .unwrap_or_else(|err| format!("Failed to render configuration: {err}"))
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    output(
        &ConfigOutput {
            config: config.clone(),
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_output_is_yaml() {
        let human = ConfigOutput {
            config: Config::default(),
        }
        .to_human();

        assert!(human.contains("corpus:"));
        assert!(human.contains("path: documents/sample.txt"));
        assert!(human.contains("dimensions: 256"));
        assert!(human.contains("level: warn"));
    }

    #[test]
    fn test_json_output() {
        let mut config = Config::default();
        config.embedding.dimensions = 128;

        let json = ConfigOutput { config }.to_json();
        assert_eq!(json["embedding"]["dimensions"], 128);
        assert_eq!(json["retrieval"]["no_match_message"], "No relevant information found.");
        assert!(json["logging"]["log_dir"].is_null());
    }
}
