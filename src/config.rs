//! Parser settings and spec manifests.

use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{spec::OptionSpec, Error, Spec};

/// Token prefixes and input limits used while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub long_prefix: String,
    pub short_prefix: String,
    /// Maximum number of tokens accepted by one parse call.
    pub max_tokens: usize,
    /// Maximum length of a single token, in bytes.
    pub max_token_len: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            long_prefix: "--".to_string(),
            short_prefix: "-".to_string(),
            max_tokens: 0x100,
            max_token_len: 0x1000,
        }
    }
}

impl Config {
    pub fn with_prefixes(mut self, long: impl Into<String>, short: impl Into<String>) -> Config {
        self.long_prefix = long.into();
        self.short_prefix = short.into();
        self
    }

    pub fn with_max_tokens(mut self, max: usize) -> Config {
        self.max_tokens = max;
        self
    }

    pub fn with_max_token_len(mut self, max: usize) -> Config {
        self.max_token_len = max;
        self
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.long_prefix.is_empty() {
            return Err(invalid("long_prefix", "must not be empty"));
        }
        if self.short_prefix.is_empty() {
            return Err(invalid("short_prefix", "must not be empty"));
        }
        if self.long_prefix == self.short_prefix {
            return Err(invalid("long_prefix", "must differ from short_prefix"));
        }
        Ok(())
    }

    /// How the user would spell `option`, preferring the long form.
    pub fn display_name(&self, option: &OptionSpec) -> String {
        match (&option.long, option.short) {
            (Some(long), _) if !long.is_empty() => format!("{}{long}", self.long_prefix),
            (_, Some(short)) => format!("{}{short}", self.short_prefix),
            _ => String::new(),
        }
    }
}

fn invalid(element: &str, reason: &'static str) -> Error {
    Error::InvalidParameter { element: element.to_string(), reason }
}

/// Errors that can occur when loading a manifest.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read manifest '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Manifest validation failed: {source}")]
    ValidationError {
        #[source]
        source: Error,
    },
}

/// A spec together with the parser settings it is meant to be used with.
///
/// ```toml
/// [parser]
/// long_prefix = "--"
///
/// [spec]
/// type = "single"
/// name = "build"
///
/// [[spec.options]]
/// long = "output"
/// short = "o"
/// takes_value = true
/// required = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub parser: Config,
    pub spec: Spec,
}

impl Manifest {
    pub fn from_toml_str(text: &str) -> Result<Manifest, ConfigError> {
        let manifest: Manifest =
            toml::from_str(text).map_err(|source| ConfigError::ParseError { source })?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Manifest, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadError { path: path.to_path_buf(), source })?;
        tracing::debug!(path = %path.display(), "loaded manifest");
        Manifest::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.parser.validate().map_err(|source| ConfigError::ValidationError { source })?;
        crate::validate(&self.spec).map_err(|source| ConfigError::ValidationError { source })
    }

    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> crate::Result<crate::ParsedCommand> {
        crate::parse_with(&self.spec, args, &self.parser)
    }
}
