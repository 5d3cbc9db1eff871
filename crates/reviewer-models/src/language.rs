//! Supported language identifiers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Languages the analysis service accepts.
///
/// Serialized as the lowercase identifier the service expects
/// (e.g. `"python"`, `"csharp"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python (the service's default when no language is given).
    #[default]
    Python,
    /// JavaScript.
    JavaScript,
    /// TypeScript.
    TypeScript,
    /// Java.
    Java,
    /// Go.
    Go,
    /// Rust.
    Rust,
    /// C++.
    Cpp,
    /// C#.
    CSharp,
}

/// Error returned when parsing an unknown language identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language '{0}' (expected one of: python, javascript, typescript, java, go, rust, cpp, csharp)")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    /// All supported languages, in selector order.
    pub const ALL: [Language; 8] = [
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Java,
        Language::Go,
        Language::Rust,
        Language::Cpp,
        Language::CSharp,
    ];

    /// The wire identifier sent to the service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
        }
    }

    /// Human-readable label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Java => "Java",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
        }
    }

    /// The next language in selector order, wrapping around.
    pub fn next(&self) -> Language {
        let idx = Language::ALL
            .iter()
            .position(|l| l == self)
            .unwrap_or(0);
        Language::ALL[(idx + 1) % Language::ALL.len()]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "javascript" => Ok(Language::JavaScript),
            "typescript" => Ok(Language::TypeScript),
            "java" => Ok(Language::Java),
            "go" => Ok(Language::Go),
            "rust" => Ok(Language::Rust),
            "cpp" => Ok(Language::Cpp),
            "csharp" => Ok(Language::CSharp),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_identifiers() {
        for language in Language::ALL {
            let json = serde_json::to_string(&language).unwrap();
            assert_eq!(json, format!("\"{}\"", language.as_str()));
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        for language in Language::ALL {
            assert_eq!(language.as_str().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert_eq!(err, UnsupportedLanguage("cobol".to_string()));
        assert!(err.to_string().contains("unsupported language 'cobol'"));
    }

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(Language::Python.next(), Language::JavaScript);
        assert_eq!(Language::CSharp.next(), Language::Python);
    }

    #[test]
    fn test_default_is_python() {
        assert_eq!(Language::default(), Language::Python);
    }
}
