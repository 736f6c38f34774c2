//! Manifest types and parsing for literalgen.toml files.

mod file;
mod parse;
pub(crate) mod validate;

use std::collections::BTreeMap;

pub use file::LiteralgenToml;
use literalgen_codegen::{ElementNaming, GeneratorConfig};
pub use parse::parse_manifest;
use serde::Deserialize;
use toml::Spanned;

/// Root manifest for literalgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output unit settings
    pub unit: UnitConfig,

    /// Named types, keyed by type name
    #[serde(default)]
    pub types: BTreeMap<String, TypeDecl>,

    /// Values to emit, in declaration order
    #[serde(default)]
    pub bindings: Vec<BindingDecl>,
}

/// The `[unit]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitConfig {
    /// Package name written in the file header
    pub package: Spanned<String>,

    /// Prefix for import aliases
    #[serde(default = "default_alias_prefix")]
    pub alias_prefix: String,

    /// How sequence literal headers spell their element type
    #[serde(default)]
    pub element_naming: ElementNaming,

    /// Whether to start the file with a "Code generated" notice
    #[serde(default = "default_notice")]
    pub notice: bool,
}

fn default_alias_prefix() -> String {
    GeneratorConfig::default().alias_prefix
}

fn default_notice() -> bool {
    true
}

impl UnitConfig {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            alias_prefix: self.alias_prefix.clone(),
            element_naming: self.element_naming,
            generated_by: self.notice.then(|| "literalgen".to_string()),
        }
    }
}

/// A `[types.<Name>]` table.
///
/// Exactly one of `fields` (a struct type) or `underlying` (a named type over
/// another type, e.g. `type Celsius float64`) must be set.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    /// Package path the type belongs to; empty for local types
    #[serde(default)]
    pub package: String,

    pub fields: Option<Vec<FieldDecl>>,

    pub underlying: Option<Spanned<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: Spanned<String>,

    #[serde(rename = "type")]
    pub ty: Spanned<String>,
}

/// A `[[bindings]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingDecl {
    pub name: Spanned<String>,

    #[serde(rename = "type")]
    pub ty: Spanned<String>,

    pub value: Spanned<toml::Value>,
}
