//! API server configuration.

use std::path::{Path, PathBuf};

use thiserror::Error;
use vitbot_core::completion::CompletionConfig;
use vitbot_core::prompt::DOMAIN_SYSTEM_PROMPT;

/// Configuration errors raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("Failed to read system prompt file {path}: {source}")]
    PromptFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration for the API server.
///
/// Built once at startup and shared read-only with every request.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:3000").
    pub bind_addr: String,
    /// Directory holding `index.html` and other static assets.
    pub static_dir: PathBuf,
    /// System prompt injected into conversations that carry none.
    pub system_prompt: String,
    /// Completion API connection settings.
    pub completion: CompletionConfig,
}

impl ApiConfig {
    /// Configuration with defaults for everything except the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: PathBuf::from("static"),
            system_prompt: DOMAIN_SYSTEM_PROMPT.to_string(),
            completion: CompletionConfig::new(api_key),
        }
    }
}

/// Read a system prompt from a file, trimming surrounding whitespace.
///
/// An empty file is rejected; an empty prompt would silently strip the
/// assistant of its persona.
pub fn load_system_prompt(path: &Path) -> Result<String, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::PromptFile {
        path: path.to_path_buf(),
        source,
    })?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ConfigError::Invalid {
            name: "SYSTEM_PROMPT_FILE",
            value: path.display().to_string(),
        });
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_use_domain_prompt() {
        let config = ApiConfig::new("key");
        assert_eq!(config.system_prompt, DOMAIN_SYSTEM_PROMPT);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(
            config.completion.model,
            vitbot_core::completion::DEFAULT_MODEL
        );
    }

    #[test]
    fn loads_prompt_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  You only answer about the library.  ").unwrap();
        let prompt = load_system_prompt(file.path()).unwrap();
        assert_eq!(prompt, "You only answer about the library.");
    }

    #[test]
    fn empty_prompt_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_system_prompt(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn missing_prompt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_system_prompt(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::PromptFile { .. }));
    }
}
