//! Property stores backing the EMR monitor configuration
//!
//! Two kinds of externally owned key/value stores feed the monitor:
//! - Runtime properties: deployment-time values (parent server identity and
//!   credentials) read once when the configuration is built
//! - Global properties: operator-editable values that may change while the
//!   agent is running and are therefore read on every access
//!
//! Both are exposed to the configuration facade through the capability traits
//! in [`source`], so tests and embedders can swap in their own stores.

pub mod error;
pub mod global;
pub mod runtime;
pub mod source;

pub use error::PropertyError;
pub use global::GlobalProperties;
pub use runtime::RuntimeProperties;
pub use source::{GlobalPropertySource, RuntimePropertySource};

use std::collections::HashMap;
use std::path::Path;

use toml::{Table, Value};

/// Read a TOML property file and flatten it into dotted keys
pub(crate) fn read_property_file(path: &Path) -> Result<HashMap<String, String>, PropertyError> {
    let content = std::fs::read_to_string(path).map_err(|source| PropertyError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_property_table(&content).map_err(|e| e.with_path(path))
}

/// Parse TOML text and flatten it into dotted keys
///
/// `[emrmonitor] parentUrl = "x"` and `"emrmonitor.parentUrl" = "x"` both
/// produce the key `emrmonitor.parentUrl`. Key case is preserved.
pub(crate) fn parse_property_table(content: &str) -> Result<HashMap<String, String>, PropertyError> {
    let table: Table = toml::from_str(content).map_err(|source| PropertyError::Parse {
        path: None,
        source,
    })?;

    let mut values = HashMap::new();
    flatten_table(None, table, &mut values)?;
    Ok(values)
}

fn flatten_table(
    prefix: Option<&str>,
    table: Table,
    out: &mut HashMap<String, String>,
) -> Result<(), PropertyError> {
    for (key, value) in table {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key,
        };

        match value {
            Value::String(s) => {
                out.insert(full_key, s);
            }
            Value::Integer(i) => {
                out.insert(full_key, i.to_string());
            }
            Value::Float(f) => {
                out.insert(full_key, f.to_string());
            }
            Value::Boolean(b) => {
                out.insert(full_key, b.to_string());
            }
            Value::Datetime(dt) => {
                out.insert(full_key, dt.to_string());
            }
            Value::Table(nested) => flatten_table(Some(&full_key), nested, out)?,
            Value::Array(_) => {
                return Err(PropertyError::UnsupportedValue {
                    key: full_key,
                    kind: "array",
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_tables_flatten_to_dotted_keys() {
        let values = parse_property_table(
            r#"
[emrmonitor]
parentUrl = "https://parent.example.org"
parentUsername = "admin"
"#,
        )
        .unwrap();

        assert_eq!(
            values.get("emrmonitor.parentUrl").map(String::as_str),
            Some("https://parent.example.org")
        );
        assert_eq!(
            values.get("emrmonitor.parentUsername").map(String::as_str),
            Some("admin")
        );
    }

    #[test]
    fn test_quoted_dotted_keys_match_nested_form() {
        let quoted = parse_property_table(r#""emrmonitor.parentUrl" = "https://x""#).unwrap();
        let nested = parse_property_table("[emrmonitor]\nparentUrl = \"https://x\"").unwrap();
        assert_eq!(quoted, nested);
    }

    #[test]
    fn test_scalar_values_are_stringified() {
        let values = parse_property_table(
            r#"
"emrmonitor.minutesBetweenReports" = 30
ratio = 0.5
enabled = true
"#,
        )
        .unwrap();

        assert_eq!(values["emrmonitor.minutesBetweenReports"], "30");
        assert_eq!(values["ratio"], "0.5");
        assert_eq!(values["enabled"], "true");
    }

    #[test]
    fn test_arrays_are_rejected() {
        let result = parse_property_table(r#""emrmonitor.disabledMetricProducers" = ["a", "b"]"#);
        match result {
            Err(PropertyError::UnsupportedValue { key, kind }) => {
                assert_eq!(key, "emrmonitor.disabledMetricProducers");
                assert_eq!(kind, "array");
            }
            other => panic!("Expected UnsupportedValue, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result = parse_property_table("this is not = = toml");
        assert!(matches!(result, Err(PropertyError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let result = read_property_file(Path::new("/nonexistent/runtime.toml"));
        match result {
            Err(PropertyError::Io { path, .. }) => assert!(path.contains("runtime.toml")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
