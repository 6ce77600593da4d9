//! Read config command - print a YAML config as shell assignments.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::cli::{to_json, OutputFormat};
use crate::core::config::{number_text, ConfigValue};
use crate::core::error::PipelineError;
use crate::parsing::yaml::parse_config_file;
use crate::processing::config::{flatten, FlatEntry, DEFAULT_SEPARATOR};
use crate::utils::validation::{ensure_exists, parse_key_separator};

#[derive(Args)]
pub struct ReadConfigArgs {
    /// Path to the YAML configuration file
    #[arg(value_name = "CONFIG_FILE")]
    pub config_file: PathBuf,

    /// Separator placed between nested key names
    #[arg(long, value_name = "SEP", default_value = DEFAULT_SEPARATOR, value_parser = parse_key_separator)]
    pub separator: String,
}

/// Execute the read-config command
///
/// # Errors
///
/// Returns `NotFound` if the file is missing, `Parse` for invalid YAML, and
/// `Unexpected` for anything else (e.g. a document that is not a mapping).
pub fn run(args: &ReadConfigArgs, format: OutputFormat) -> Result<(), PipelineError> {
    ensure_exists("Config file", &args.config_file)?;

    let tree = parse_config_file(&args.config_file)?;
    let entries = flatten(&tree, &args.separator);

    match format {
        OutputFormat::Text => {
            for entry in &entries {
                println!("{}", entry.to_shell());
            }
        }
        OutputFormat::Json => {
            let items: Vec<serde_json::Value> = entries.iter().map(entry_to_json).collect();
            println!("{}", to_json(&items)?);
        }
    }

    Ok(())
}

fn entry_to_json(entry: &FlatEntry<'_>) -> serde_json::Value {
    json!({
        "key": entry.key,
        "value": value_to_json(entry.value),
    })
}

fn value_to_json(value: &ConfigValue) -> serde_json::Value {
    match value {
        ConfigValue::Null => serde_json::Value::Null,
        ConfigValue::Bool(b) => json!(b),
        ConfigValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!(i)
            } else if let Some(u) = n.as_u64() {
                json!(u)
            } else {
                // NaN and infinities have no JSON number form
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or_else(|| json!(number_text(n)), serde_json::Value::Number)
            }
        }
        ConfigValue::String(s) => json!(s),
        ConfigValue::List(items) => items.iter().map(value_to_json).collect(),
        ConfigValue::Mapping(entries) => entries
            .iter()
            .map(|(k, v)| (k.clone(), value_to_json(v)))
            .collect::<serde_json::Map<_, _>>()
            .into(),
    }
}
