//! Model value object representing a remote generation backend

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Remote generation models reachable through the chat-completion API (Value Object)
///
/// The named variants form the default fallback chain; anything else a
/// configuration file names becomes [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt35Turbo,
    Palm2ChatBison,
    Llama2Chat13b,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt35Turbo => "openai/gpt-3.5-turbo",
            Model::Palm2ChatBison => "google/palm-2-chat-bison",
            Model::Llama2Chat13b => "meta-llama/llama-2-13b-chat",
            Model::Custom(s) => s,
        }
    }

    /// The fixed fallback sequence, attempted strictly left to right
    pub fn default_chain() -> Vec<Model> {
        vec![Model::Gpt35Turbo, Model::Palm2ChatBison, Model::Llama2Chat13b]
    }
}

impl Default for Model {
    /// Returns the first model of the default chain
    fn default() -> Self {
        Model::Gpt35Turbo
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "openai/gpt-3.5-turbo" => Model::Gpt35Turbo,
            "google/palm-2-chat-bison" => Model::Palm2ChatBison,
            "meta-llama/llama-2-13b-chat" => Model::Llama2Chat13b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::default_chain() {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "mistralai/mistral-7b-instruct".parse().unwrap();
        assert_eq!(
            model,
            Model::Custom("mistralai/mistral-7b-instruct".to_string())
        );
        assert_eq!(model.to_string(), "mistralai/mistral-7b-instruct");
    }

    #[test]
    fn test_default_chain_order() {
        let chain = Model::default_chain();
        assert_eq!(chain[0], Model::Gpt35Turbo);
        assert_eq!(chain[1], Model::Palm2ChatBison);
        assert_eq!(chain[2], Model::Llama2Chat13b);
    }
}
