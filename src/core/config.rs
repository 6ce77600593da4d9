use std::fmt;

/// A node of a parsed configuration document.
///
/// Mapping entries keep the order in which they were declared; keys have
/// already been rendered to text.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(serde_yaml::Number),
    String(String),
    List(Vec<ConfigValue>),
    Mapping(Vec<(String, ConfigValue)>),
}

impl ConfigValue {
    /// Number of values that flattening turns into an output line
    pub fn leaf_count(&self) -> usize {
        match self {
            ConfigValue::Mapping(entries) => entries.iter().map(|(_, v)| v.leaf_count()).sum(),
            _ => 1,
        }
    }
}

/// Render a number, spelling non-finite floats `inf`, `-inf` and `nan`
/// rather than YAML's `.inf`/`.nan`
pub fn number_text(n: &serde_yaml::Number) -> String {
    match n.as_f64() {
        Some(f) if f.is_nan() => "nan".to_string(),
        Some(f) if f.is_infinite() && f > 0.0 => "inf".to_string(),
        Some(f) if f.is_infinite() => "-inf".to_string(),
        _ => n.to_string(),
    }
}

/// Bare textual form, without any shell quoting
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => Ok(()),
            ConfigValue::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            ConfigValue::Number(n) => f.write_str(&number_text(n)),
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            ConfigValue::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
