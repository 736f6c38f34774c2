//! `literalgen.toml` manifests.
//!
//! A manifest declares Go types and the values to bake into a generated Go
//! file. Parsing checks the manifest's shape; [`lower`] then resolves type
//! expressions and converts TOML values into [`literalgen_core::Value`]s,
//! reporting problems as [`miette`] diagnostics that point into the file.
//!
//! ```
//! use literalgen_manifest::{Manifest, SourceContext, lower};
//!
//! let src = r#"
//! [unit]
//! package = "fixtures"
//! notice = false
//!
//! [[bindings]]
//! name = "answer"
//! type = "int"
//! value = 42
//! "#;
//!
//! let manifest: Manifest = src.parse().unwrap();
//! let unit = lower(&manifest, &SourceContext::new(src, "literalgen.toml")).unwrap();
//! let code = unit.generator().render().unwrap();
//! assert_eq!(code, "package fixtures\nvar answer int = 42\n");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;
mod manifest;
pub mod type_expr;

pub use error::{Error, Result, SourceContext};
pub use lower::{Unit, lower};
pub use manifest::{
    BindingDecl, FieldDecl, LiteralgenToml, Manifest, TypeDecl, UnitConfig, parse_manifest,
};
