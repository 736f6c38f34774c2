//! Generator configuration.

use serde::Deserialize;

/// How the element type is spelled in the header of a sequence literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementNaming {
    /// `[]Point{...}`: the element type's bare name, arrays written as slices.
    #[default]
    Bare,
    /// `[3]p0.Point{...}`: package-qualified element type, array lengths kept.
    Qualified,
}

/// Options for a [`Generator`](crate::Generator).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix for import aliases; the n-th imported package becomes `<prefix><n>`.
    pub alias_prefix: String,
    pub element_naming: ElementNaming,
    /// Tool name for a `// Code generated by <tool>. DO NOT EDIT.` line.
    pub generated_by: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            alias_prefix: "p".to_string(),
            element_naming: ElementNaming::default(),
            generated_by: None,
        }
    }
}
