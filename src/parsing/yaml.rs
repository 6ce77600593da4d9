//! Load YAML configuration documents into a [`ConfigValue`] tree.

use std::path::Path;

use anyhow::anyhow;
use serde_yaml::Value;

use crate::core::config::ConfigValue;
use crate::core::error::PipelineError;

/// Read and parse a configuration file.
///
/// # Errors
///
/// Returns `PipelineError::NotFound` if the file does not exist,
/// `PipelineError::Parse` for invalid YAML or a file that is not UTF-8, and
/// `PipelineError::Unexpected` if the document root is not a mapping.
pub fn parse_config_file(path: &Path) -> Result<ConfigValue, PipelineError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PipelineError::from_open("Config file", path, e))?;
    parse_config_text(&content)
}

/// Parse configuration text. The root must be a mapping.
///
/// Merge keys (`<<: *anchor` or `<<: [*a, *b]`) are resolved in place:
/// merged keys come first, keys written in the mapping itself override them,
/// and earlier merge sources win over later ones.
///
/// # Errors
///
/// See [`parse_config_file`].
pub fn parse_config_text(text: &str) -> Result<ConfigValue, PipelineError> {
    let document: Value =
        serde_yaml::from_str(text).map_err(|e| PipelineError::parse("YAML file", e))?;

    match convert(document)? {
        root @ ConfigValue::Mapping(_) => Ok(root),
        other => Err(anyhow!(
            "top-level YAML value must be a mapping, found {}",
            kind(&other)
        )
        .into()),
    }
}

fn convert(value: Value) -> Result<ConfigValue, PipelineError> {
    Ok(match value {
        Value::Null => ConfigValue::Null,
        Value::Bool(b) => ConfigValue::Bool(b),
        Value::Number(n) => ConfigValue::Number(n),
        Value::String(s) => ConfigValue::String(s),
        Value::Sequence(items) => {
            ConfigValue::List(items.into_iter().map(convert).collect::<Result<_, _>>()?)
        }
        Value::Mapping(map) => {
            let mut inherited = Vec::new();
            let mut own = Vec::with_capacity(map.len());
            for (key, value) in map {
                if key.as_str() == Some(MERGE_KEY) {
                    inherited = merge_sources(convert(value)?)?;
                } else {
                    own.push((key_text(key)?, convert(value)?));
                }
            }
            ConfigValue::Mapping(merge_entries(inherited, own))
        }
        Value::Tagged(tagged) => convert(tagged.value)?,
    })
}

const MERGE_KEY: &str = "<<";

/// Entries contributed by a merge key, lowest precedence first
fn merge_sources(value: ConfigValue) -> Result<Vec<(String, ConfigValue)>, PipelineError> {
    match value {
        ConfigValue::Mapping(entries) => Ok(entries),
        ConfigValue::List(items) => {
            let mut merged = Vec::new();
            for item in items.into_iter().rev() {
                match item {
                    ConfigValue::Mapping(entries) => merged.extend(entries),
                    other => return Err(merge_error(&other)),
                }
            }
            Ok(merged)
        }
        other => Err(merge_error(&other)),
    }
}

fn merge_error(value: &ConfigValue) -> PipelineError {
    PipelineError::parse(
        "YAML file",
        format!("merge key expects a mapping or a list of mappings, found {}", kind(value)),
    )
}

/// Lay `own` over `inherited`. Inherited keys come first, in merge order; an
/// own key replaces the inherited value in its position.
fn merge_entries(
    inherited: Vec<(String, ConfigValue)>,
    own: Vec<(String, ConfigValue)>,
) -> Vec<(String, ConfigValue)> {
    let mut merged: Vec<(String, ConfigValue)> = Vec::with_capacity(inherited.len() + own.len());
    for (key, value) in inherited {
        upsert(&mut merged, key, value);
    }
    let inherited_len = merged.len();
    for (key, value) in own {
        match merged[..inherited_len].iter().position(|(k, _)| *k == key) {
            Some(i) => merged[i].1 = value,
            None => merged.push((key, value)),
        }
    }
    merged
}

fn upsert(entries: &mut Vec<(String, ConfigValue)>, key: String, value: ConfigValue) {
    match entries.iter().position(|(k, _)| *k == key) {
        Some(i) => entries[i].1 = value,
        None => entries.push((key, value)),
    }
}

/// Render a mapping key as text; only scalar keys are accepted
fn key_text(key: Value) -> Result<String, PipelineError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => key_text(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err(anyhow!("mapping keys must be scalars, found a {}", yaml_kind(&key)).into())
        }
    }
}

fn kind(value: &ConfigValue) -> &'static str {
    match value {
        ConfigValue::Null => "an empty document",
        ConfigValue::Bool(_) => "a boolean",
        ConfigValue::Number(_) => "a number",
        ConfigValue::String(_) => "a string",
        ConfigValue::List(_) => "a sequence",
        ConfigValue::Mapping(_) => "a mapping",
    }
}

fn yaml_kind(value: &Value) -> &'static str {
    match value {
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        _ => "scalar",
    }
}
