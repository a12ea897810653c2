//! Optional user settings for the tool's surroundings.

mod ops;


use serde::{Deserialize, Serialize};

/// Contents of `config.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path conversion for targets outside `/cygdrive`.
    pub converter: ConverterConfig,
    /// Where composed actions go.
    pub host: HostConfig,
}

/// `[converter]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Program invoked as `<program> -w <path>`, e.g. "cygpath" or a full path to it.
    pub program: String,
}

/// `[host]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Program (with leading arguments) that receives each action line as its
    /// last argument. Unset means print the action on stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: "cygpath".to_string(),
        }
    }
}
