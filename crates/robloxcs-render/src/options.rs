//! Render configuration.

use serde::{Deserialize, Serialize};

/// Options controlling textual layout.
///
/// Example JSON:
/// ```json
/// { "indent": "\t", "trailing_newline": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// String repeated once per indentation level. Default: two spaces.
    pub indent: String,
    /// End the rendered chunk with a newline. Default: true.
    pub trailing_newline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            trailing_newline: true,
        }
    }
}

impl RenderOptions {
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let options: RenderOptions = serde_json::from_str(r#"{ "indent": "    " }"#).unwrap();
        assert_eq!(options.indent, "    ");
        assert!(options.trailing_newline);
    }

    #[test]
    fn test_empty_object_is_default() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
    }
}
