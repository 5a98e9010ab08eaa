//! Output marshalling for command results.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for API responses.
#[derive(ValueEnum, Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    #[default]
    Yaml,
}

impl Format {
    /// Render a response body in this format.
    pub fn render<T: Serialize>(&self, value: &T) -> anyhow::Result<String> {
        let rendered = match self {
            Format::Json => serde_json::to_string_pretty(value)?,
            Format::Yaml => serde_yaml::to_string(value)?,
        };

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_pretty_printed() {
        let value = serde_json::json!({ "name": "worker-0", "preemptible": false });

        let rendered = Format::Json.render(&value).unwrap();
        assert!(rendered.contains("\"name\": \"worker-0\""));
    }

    #[test]
    fn yaml_round_trips_the_value() {
        let value = serde_json::json!({ "name": "worker-0" });

        let rendered = Format::Yaml.render(&value).unwrap();
        assert!(rendered.contains("name: worker-0"));
    }
}
