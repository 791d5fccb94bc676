//! Key/value configuration blobs.
//!
//! Blocks carry free-form configuration text. It is read as a TOML document
//! of `[section]` tables, and every lookup takes an explicit default: a
//! missing section, a missing key, or a value of the wrong type all fall back
//! to it. Only a document that does not parse at all is an error.

use toml::{Table, Value};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while reading a configuration blob.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The blob is not a valid key/value document.
    #[error("unable to parse configuration: {detail}")]
    Parse { detail: String },
}

// ===========================================================================
// ConfigBlob
// ===========================================================================

/// A parsed configuration blob with typed, defaulted getters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigBlob {
    table: Table,
}

impl ConfigBlob {
    /// Parse `text`. Blank text is an empty document.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let table = toml::from_str::<Table>(text).map_err(|e| ConfigError::Parse {
            detail: e.message().to_string(),
        })?;
        Ok(Self { table })
    }

    pub fn has_section(&self, section: &str) -> bool {
        matches!(self.table.get(section), Some(Value::Table(_)))
    }

    fn get(&self, section: &str, key: &str) -> Option<&Value> {
        match self.table.get(section) {
            Some(Value::Table(t)) => t.get(key),
            _ => None,
        }
    }

    /// Boolean value. Accepts TOML booleans and the strings `true`/`false`.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match self.get(section, key) {
            Some(Value::Boolean(b)) => *b,
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            _ => default,
        }
    }

    /// String value. Other scalar types are rendered as text.
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        match self.get(section, key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Integer(i)) => i.to_string(),
            Some(Value::Float(f)) => f.to_string(),
            Some(Value::Boolean(b)) => b.to_string(),
            _ => default.to_string(),
        }
    }

    /// Integer value. Accepts TOML integers and numeric strings.
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        match self.get(section, key) {
            Some(Value::Integer(i)) => *i,
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Comma-separated list. Entries are trimmed and empty entries dropped.
    ///
    /// A TOML array of strings is accepted as well.
    pub fn get_list(&self, section: &str, key: &str) -> Vec<String> {
        match self.get(section, key) {
            Some(Value::String(s)) => split_list(s),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Split a comma-separated list into trimmed, non-empty entries.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[general]
ignore = "Hidden, Spare ,,"
suppressErrors = true

[display]
search = "LCD"
segments = "12"
count = 7
flag = "TRUE"
"#;

    #[test]
    fn blank_text_is_empty_document() {
        let blob = ConfigBlob::parse("  \n ").unwrap();
        assert!(!blob.has_section("general"));
        assert!(blob.get_bool("general", "suppressErrors", true));
    }

    #[test]
    fn invalid_text_is_a_parse_error() {
        let err = ConfigBlob::parse("[general\nignore=").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn typed_getters_read_values() {
        let blob = ConfigBlob::parse(SAMPLE).unwrap();
        assert!(blob.has_section("general"));
        assert!(blob.get_bool("general", "suppressErrors", false));
        assert_eq!(blob.get_string("display", "search", ""), "LCD");
        assert_eq!(blob.get_int("display", "count", 0), 7);
        assert!(blob.get_bool("display", "flag", false));
    }

    #[test]
    fn numeric_strings_read_as_integers() {
        let blob = ConfigBlob::parse(SAMPLE).unwrap();
        assert_eq!(blob.get_int("display", "segments", 10), 12);
    }

    #[test]
    fn missing_or_mistyped_values_use_default() {
        let blob = ConfigBlob::parse(SAMPLE).unwrap();
        assert_eq!(blob.get_int("display", "missing", 10), 10);
        assert_eq!(blob.get_int("display", "search", 10), 10);
        assert!(!blob.get_bool("display", "search", false));
        assert_eq!(blob.get_string("nowhere", "search", "x"), "x");
    }

    #[test]
    fn lists_are_trimmed_and_compacted() {
        let blob = ConfigBlob::parse(SAMPLE).unwrap();
        assert_eq!(blob.get_list("general", "ignore"), ["Hidden", "Spare"]);
        assert!(blob.get_list("general", "missing").is_empty());
    }

    #[test]
    fn lists_accept_arrays() {
        let blob = ConfigBlob::parse("[display]\npanels = [\"A\", \" B \", \"\"]").unwrap();
        assert_eq!(blob.get_list("display", "panels"), ["A", "B"]);
    }
}
