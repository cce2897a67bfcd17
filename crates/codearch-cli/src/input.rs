//! Reading candidate documents from files or stdin.

use std::io::Read;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde_json::Value;

/// Document formats accepted by `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks the format from a file extension; anything but yaml/yml is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Parses `text` into a JSON value.
pub fn parse(text: &str, format: Format) -> Result<Value> {
    match format {
        Format::Json => serde_json::from_str(text).wrap_err("Failed to parse JSON input"),
        Format::Yaml => serde_yaml::from_str(text).wrap_err("Failed to parse YAML input"),
    }
}

/// Reads a document from `path`, or JSON from stdin when no path is given.
pub fn read_document(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            parse(&text, Format::from_path(path))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .wrap_err("Failed to read stdin")?;
            parse(&text, Format::Json)
        }
    }
}

/// Reads a text file, or stdin when no path is given.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .wrap_err("Failed to read stdin")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("out.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("out.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("out.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("out")), Format::Json);
    }

    #[test]
    fn test_parse_yaml_document() {
        let text = "entities:\n  - entity_type: Module\n    name: Parser\n    description: Parses input\n";
        let value = parse(text, Format::Yaml).unwrap();
        assert_eq!(value["entities"][0]["entity_type"], "Module");
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse("{not json", Format::Json).is_err());
    }
}
