//! Flattening of nested configuration into shell assignments.
//!
//! ```rust
//! use metagen_utils::parsing::yaml::parse_config_text;
//! use metagen_utils::processing::config::{flatten, DEFAULT_SEPARATOR};
//!
//! let tree = parse_config_text("pipeline:\n  threads: 16\ntools:\n  spades_mode: meta\n").unwrap();
//! let lines: Vec<String> = flatten(&tree, DEFAULT_SEPARATOR)
//!     .iter()
//!     .map(|entry| entry.to_shell())
//!     .collect();
//! assert_eq!(lines, ["PIPELINE_THREADS=16", "TOOLS_SPADES_MODE=\"meta\""]);
//! ```

use std::collections::HashSet;

use tracing::warn;

use crate::core::config::{number_text, ConfigValue};

pub const DEFAULT_SEPARATOR: &str = "_";

/// One leaf of the configuration tree under its composed key
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry<'a> {
    pub key: String,
    pub value: &'a ConfigValue,
}

impl FlatEntry<'_> {
    /// `KEY=value`, with strings and lists double-quoted
    pub fn to_shell(&self) -> String {
        format!("{}={}", self.key, shell_value(self.value))
    }
}

/// Flatten `tree` into one entry per leaf, in declaration order.
///
/// Keys are the ancestor path joined with `separator` and upper-cased.
/// Empty mappings produce nothing. Keys that collide after upper-casing are
/// all emitted, so the last one wins when the output is sourced; a warning is
/// logged for each repeat. A non-mapping root yields a single entry with an
/// empty key.
pub fn flatten<'a>(tree: &'a ConfigValue, separator: &str) -> Vec<FlatEntry<'a>> {
    let mut entries = Vec::new();
    collect(tree, "", separator, &mut entries);

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.key.as_str()) {
            warn!("Duplicate key {} after upper-casing; last value wins", entry.key);
        }
    }
    entries
}

fn collect<'a>(
    node: &'a ConfigValue,
    parent: &str,
    separator: &str,
    out: &mut Vec<FlatEntry<'a>>,
) {
    match node {
        ConfigValue::Mapping(children) => {
            for (key, child) in children {
                let path = if parent.is_empty() {
                    key.clone()
                } else {
                    format!("{parent}{separator}{key}")
                };
                collect(child, &path, separator, out);
            }
        }
        leaf => out.push(FlatEntry {
            key: parent.to_uppercase(),
            value: leaf,
        }),
    }
}

/// Right-hand side of a shell assignment for a leaf value
pub fn shell_value(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Bool(true) => "true".to_string(),
        ConfigValue::Bool(false) => "false".to_string(),
        ConfigValue::Number(n) => number_text(n),
        ConfigValue::Null => String::new(),
        ConfigValue::String(s) => format!("\"{}\"", escape_double_quoted(s)),
        other => format!("\"{}\"", escape_double_quoted(&other.to_string())),
    }
}

/// Backslash-escape the characters that stay special inside shell double quotes
pub fn escape_double_quoted(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::yaml::parse_config_text;

    fn shell_lines(yaml: &str) -> Vec<String> {
        let tree = parse_config_text(yaml).unwrap();
        flatten(&tree, DEFAULT_SEPARATOR)
            .iter()
            .map(FlatEntry::to_shell)
            .collect()
    }

    #[test]
    fn test_pipeline_config() {
        let yaml = "
pipeline:
  threads: 16
tools:
  spades_mode: \"meta\"
";
        assert_eq!(
            shell_lines(yaml),
            ["PIPELINE_THREADS=16", "TOOLS_SPADES_MODE=\"meta\""]
        );
    }

    #[test]
    fn test_booleans_and_numbers() {
        let lines = shell_lines("qc:\n  enabled: true\n  dedup: false\n  min_q: 20\n  ratio: 0.5\n");
        assert_eq!(
            lines,
            ["QC_ENABLED=true", "QC_DEDUP=false", "QC_MIN_Q=20", "QC_RATIO=0.5"]
        );
    }

    #[test]
    fn test_yaml_1_2_words_stay_strings() {
        let lines = shell_lines("qc:\n  enabled: yes\n  dedup: off\n");
        assert_eq!(lines, ["QC_ENABLED=\"yes\"", "QC_DEDUP=\"off\""]);
    }

    #[test]
    fn test_non_finite_numbers() {
        let lines = shell_lines("max: .inf\nmin: -.inf\nratio: .nan\nspan: [1, .inf]\n");
        assert_eq!(lines, ["MAX=inf", "MIN=-inf", "RATIO=nan", "SPAN=\"1 inf\""]);
    }

    #[test]
    fn test_merge_keys_are_resolved() {
        let yaml = "defaults: &d\n  threads: 8\nassembly:\n  <<: *d\n  mode: meta\n";
        assert_eq!(
            shell_lines(yaml),
            ["DEFAULTS_THREADS=8", "ASSEMBLY_THREADS=8", "ASSEMBLY_MODE=\"meta\""]
        );
    }

    #[test]
    fn test_merge_key_precedence() {
        let yaml = "
base: &base
  threads: 4
  mode: isolate
fast: &fast
  threads: 32
  memory: 64
assembly:
  tool: spades
  mode: meta
  <<: [*fast, *base]
";
        let lines = shell_lines(yaml);
        assert_eq!(
            &lines[4..],
            [
                "ASSEMBLY_THREADS=32",
                "ASSEMBLY_MODE=\"meta\"",
                "ASSEMBLY_MEMORY=64",
                "ASSEMBLY_TOOL=\"spades\"",
            ]
        );
        assert!(lines.iter().all(|line| !line.contains("<<")));
    }

    #[test]
    fn test_string_escaping() {
        let lines = shell_lines("cmd: 'echo \"$HOME\" `date`'\n");
        assert_eq!(lines, [r#"CMD="echo \"\$HOME\" \`date\`""#]);
    }

    #[test]
    fn test_deep_nesting_and_order() {
        let yaml = "b:\n  z:\n    y: 1\n  a: 2\na: 3\n";
        assert_eq!(shell_lines(yaml), ["B_Z_Y=1", "B_A=2", "A=3"]);
    }

    #[test]
    fn test_null_list_and_empty_mapping() {
        let yaml = "db: ~\nreads: [a.fq, b.fq]\nextra: {}\n";
        assert_eq!(shell_lines(yaml), ["DB=", "READS=\"a.fq b.fq\""]);
    }

    #[test]
    fn test_leaf_count_matches_lines() {
        let yaml = "a:\n  b: 1\n  c:\n    d: x\n    e: true\nf: {}\ng: [1, 2]\n";
        let tree = parse_config_text(yaml).unwrap();
        let entries = flatten(&tree, DEFAULT_SEPARATOR);
        assert_eq!(entries.len(), tree.leaf_count());
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn test_case_collisions_are_all_emitted() {
        let lines = shell_lines("Mode: a\nmode: b\n");
        assert_eq!(lines, ["MODE=\"a\"", "MODE=\"b\""]);
    }

    #[test]
    fn test_custom_separator() {
        let tree = parse_config_text("binning:\n  metabat:\n    min_contig: 1500\n").unwrap();
        let entries = flatten(&tree, "__");
        assert_eq!(entries[0].key, "BINNING__METABAT__MIN_CONTIG");
    }
}
