//! Dictionary file loading
//!
//! Two formats are understood, chosen by file extension:
//! - `.json`: an object mapping either `category -> [keywords]` or
//!   `keyword -> value`
//! - anything else: one entry per line, `keyword=>value` or a bare `keyword`
//!
//! Files are parsed completely before anything is inserted.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::api::KeywordEntry;
use crate::error::{KeywordError, Result};

/// Separator between keyword and value in line dictionaries
pub const LINE_SEPARATOR: &str = "=>";

/// Read a dictionary file into keyword entries
pub fn load_dictionary(path: &Path) -> Result<Vec<KeywordEntry>> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let entries = if is_json {
        parse_json(&content)
    } else {
        parse_lines(&content)
    }
    .map_err(|reason| KeywordError::MalformedDictionary {
        path: path.display().to_string(),
        reason,
    })?;

    tracing::debug!(
        path = %path.display(),
        entries = entries.len(),
        format = if is_json { "json" } else { "lines" },
        "loaded dictionary"
    );
    Ok(entries)
}

/// Parse a JSON dictionary
pub fn parse_json(content: &str) -> std::result::Result<Vec<KeywordEntry>, String> {
    let root: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let Value::Object(map) = root else {
        return Err("top-level value must be an object".into());
    };

    let mut entries = Vec::new();
    for (key, value) in map {
        match value {
            Value::String(clean_name) => {
                if key.is_empty() {
                    return Err("empty keyword".into());
                }
                entries.push(KeywordEntry::new(key).value(clean_name));
            }
            Value::Array(keywords) => {
                for keyword in keywords {
                    match keyword {
                        Value::String(keyword) if !keyword.is_empty() => {
                            entries.push(KeywordEntry::new(keyword).value(key.clone()));
                        }
                        Value::String(_) => {
                            return Err(format!("empty keyword in category {key:?}"));
                        }
                        other => {
                            return Err(format!(
                                "category {key:?} must list strings, found {other}"
                            ));
                        }
                    }
                }
            }
            other => {
                return Err(format!(
                    "entry {key:?} must be a string or a list of strings, found {other}"
                ));
            }
        }
    }
    Ok(entries)
}

/// Parse a line-oriented dictionary
pub fn parse_lines(content: &str) -> std::result::Result<Vec<KeywordEntry>, String> {
    let mut entries = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry = match line.split_once(LINE_SEPARATOR) {
            Some((keyword, value)) => {
                let keyword = keyword.trim();
                let value = value.trim();
                if keyword.is_empty() {
                    return Err(format!("line {}: empty keyword", index + 1));
                }
                if value.is_empty() {
                    KeywordEntry::new(keyword)
                } else {
                    KeywordEntry::new(keyword).value(value)
                }
            }
            None => KeywordEntry::new(line),
        };
        entries.push(entry);
    }
    Ok(entries)
}
