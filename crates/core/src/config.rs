use crate::model::LambdaVariant;
use crate::render::DEFAULT_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// User-tunable generation options.
///
/// Hosts receive this from their own configuration surface (LSP
/// initialization options, CLI flags); every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StubConfig {
    /// Expression used as the stub's result value.
    pub placeholder: String,
    pub include_explicit_types: bool,
    pub include_expression_bodies: bool,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            include_explicit_types: true,
            include_expression_bodies: true,
        }
    }
}

impl StubConfig {
    /// Parses host-supplied JSON options, falling back to defaults when they
    /// are absent or malformed.
    pub fn from_json_or_default(value: Option<serde_json::Value>) -> Self {
        match value {
            None | Some(serde_json::Value::Null) => Self::default(),
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed stub options: {}", e);
                Self::default()
            }),
        }
    }

    pub fn admits(&self, variant: &LambdaVariant) -> bool {
        (self.include_explicit_types || !variant.explicit_types)
            && (self.include_expression_bodies || !variant.expression_bodied)
    }
}
