//! Portfolio content: who, what roles, which code snippets, how to reach them
//!
//! Content comes from a TOML file when one is configured (`content_path` or
//! `FOLIO_CONTENT`), otherwise from the built-in portfolio.
//!
//! ```toml
//! name = "Ada"
//! roles = ["Engineer"]
//!
//! [[snippets]]
//! label = "Rust"
//! text = """fn main() {}"""
//!
//! [[contacts]]
//! label = "Email"
//! href = "mailto:ada@example.com"
//! ```

mod builtin;

use crate::config::Config;
use crate::typewriter::{Snippet, Timing, Typewriter};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A way to get in touch (shown in the contacts bar, copied with 1-9)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub label: String,
    pub href: String,
}

impl Contact {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Everything the viewer displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub snippets: Vec<Snippet>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Portfolio {
    pub fn builtin() -> Self {
        builtin::portfolio()
    }

    /// Parse and validate a content file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Invalid content file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(contents).context("Failed to parse TOML")?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Content for this run: configured file, or the built-in portfolio
    pub fn resolve(config: &Config) -> Result<Self> {
        match &config.content_path {
            Some(path) => {
                let portfolio = Self::load(path)?;
                tracing::info!(
                    "Loaded {} snippet(s) from {}",
                    portfolio.snippets.len(),
                    path.display()
                );
                Ok(portfolio)
            }
            None => Ok(Self::builtin()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.snippets.is_empty() {
            bail!("at least one [[snippets]] entry is required");
        }
        if let Some(blank) = self.snippets.iter().find(|s| s.label.trim().is_empty()) {
            bail!("snippet labels must not be blank (text starts {:?})", preview(&blank.text));
        }
        Ok(())
    }

    /// Build the typewriter over this portfolio's snippets
    pub fn typewriter(&self, timing: Timing) -> Result<Typewriter> {
        Typewriter::new(self.snippets.clone(), timing).context("Cannot start typewriter")
    }
}

fn preview(text: &str) -> String {
    text.chars().take(20).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_matches_site() {
        let p = Portfolio::builtin();
        let labels: Vec<&str> = p.snippets.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Python", "Java", "C++", "C#", "JavaScript"]);
        assert_eq!(p.roles.len(), 4);
        assert_eq!(p.contacts.len(), 4);
        assert!(p.snippets[0].text.contains('🚀'));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
name = "Ada"
roles = ["Engineer", "Mathematician"]

[[snippets]]
label = "Rust"
text = """fn main() {{
    println!("hi");
}}"""

[[contacts]]
label = "Email"
href = "mailto:ada@example.com"
"#
        )
        .unwrap();

        let p = Portfolio::load(file.path()).unwrap();
        assert_eq!(p.name, "Ada");
        assert_eq!(p.snippets.len(), 1);
        assert!(p.snippets[0].text.contains("println!"));
        assert_eq!(p.tagline, "");
        assert_eq!(p.contacts[0].href, "mailto:ada@example.com");
    }

    #[test]
    fn test_no_snippets_rejected() {
        let err = Portfolio::from_toml("name = \"Ada\"\nsnippets = []\n").unwrap_err();
        assert!(format!("{:#}", err).contains("at least one"));
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = Portfolio::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read content file"));
    }

    #[test]
    fn test_resolve_uses_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "name = \"Ada\"\n[[snippets]]\nlabel = \"Go\"\ntext = \"package main\"\n"
        )
        .unwrap();

        let config = Config {
            content_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let p = Portfolio::resolve(&config).unwrap();
        assert_eq!(p.snippets[0].label, "Go");

        let p = Portfolio::resolve(&Config::default()).unwrap();
        assert_eq!(p, Portfolio::builtin());
    }

    #[test]
    fn test_json_export_shape() {
        let json = serde_json::to_value(Portfolio::builtin()).unwrap();
        assert_eq!(json["snippets"][1]["label"], "Java");
        assert_eq!(json["contacts"][3]["label"], "GitHub");
    }
}
