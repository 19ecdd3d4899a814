use std::fmt;
use std::str::FromStr;

use super::ArticleError;

/// What gets saved per article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Parsoid HTML from the REST endpoint.
    Html,
    /// Plain-text extract from the action API.
    Text,
}

impl OutputMode {
    /// Suffix used in the output file name, `<name>_<suffix>.txt`.
    pub fn file_suffix(self) -> &'static str {
        match self {
            OutputMode::Html => "html",
            OutputMode::Text => "plain",
        }
    }
}

impl FromStr for OutputMode {
    type Err = ArticleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(OutputMode::Html),
            "text" => Ok(OutputMode::Text),
            other => Err(ArticleError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Html => "html",
            OutputMode::Text => "text",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("html".parse::<OutputMode>().unwrap(), OutputMode::Html);
        assert_eq!("text".parse::<OutputMode>().unwrap(), OutputMode::Text);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "xml".parse::<OutputMode>().unwrap_err();
        assert!(matches!(err, ArticleError::InvalidMode(ref m) if m == "xml"));
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn mode_parsing_is_case_sensitive() {
        assert!("HTML".parse::<OutputMode>().is_err());
    }

    #[test]
    fn suffixes_match_file_layout() {
        assert_eq!(OutputMode::Html.file_suffix(), "html");
        assert_eq!(OutputMode::Text.file_suffix(), "plain");
    }
}
