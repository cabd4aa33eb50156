//! Renderer profiles: which external command renders the placeholders
//!
//! A profile is a small TOML file naming the rendering collaborator and
//! how to call it. This keeps templates renderer-agnostic: the same
//! template can be rendered through katex, a pdflatex-to-SVG pipeline, or
//! a stub, by swapping profiles.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::WrapMode;

/// Errors that can occur when loading or parsing renderer profiles
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse profile TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A renderer profile
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Program to invoke
    pub command: String,
    /// Fixed arguments passed on every invocation
    pub args: Vec<String>,
    /// Format selector appended as the final argument
    pub format: Option<String>,
    /// How fragments are substituted into the document
    pub wrap: WrapMode,
}

/// TOML structure for deserializing profiles
#[derive(Deserialize)]
struct TomlProfile {
    renderer: TomlRenderer,
}

#[derive(Deserialize)]
struct TomlRenderer {
    command: String,
    #[serde(default)]
    args: Vec<String>,
    format: Option<String>,
    #[serde(default)]
    wrap: WrapMode,
}

/// Default profile: katex reads TeX on stdin and writes HTML to stdout
const DEFAULT_PROFILE: &str = r#"
[renderer]
command = "katex"
"#;

impl Profile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlProfile = toml::from_str(content)?;

        Ok(Profile {
            command: parsed.renderer.command,
            args: parsed.renderer.args,
            format: parsed.renderer.format,
            wrap: parsed.renderer.wrap,
        })
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::from_str(DEFAULT_PROFILE).expect("Default profile should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = Profile::default();
        assert_eq!(profile.command, "katex");
        assert!(profile.args.is_empty());
        assert_eq!(profile.format, None);
        assert_eq!(profile.wrap, WrapMode::Raw);
    }

    #[test]
    fn test_parse_full_profile() {
        let toml_str = r#"
[renderer]
command = "latex2svg"
args = ["--standalone"]
format = "svg"
wrap = "image"
"#;
        let profile = Profile::from_str(toml_str).expect("Should parse");
        assert_eq!(profile.command, "latex2svg");
        assert_eq!(profile.args, vec!["--standalone".to_string()]);
        assert_eq!(profile.format.as_deref(), Some("svg"));
        assert_eq!(profile.wrap, WrapMode::Image);
    }

    #[test]
    fn test_parse_minimal_profile() {
        let profile = Profile::from_str("[renderer]\ncommand = \"cat\"\n").expect("Should parse");
        assert_eq!(profile.command, "cat");
        assert!(profile.args.is_empty());
        assert_eq!(profile.wrap, WrapMode::Raw);
    }

    #[test]
    fn test_missing_command_error() {
        let result = Profile::from_str("[renderer]\nargs = []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Profile::from_str("this is not valid toml {{{{");
        assert!(result.is_err());
    }
}
