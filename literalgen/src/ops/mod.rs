//! Core operations.
//!
//! This module contains the business logic for literalgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;

pub use bake::{BakeOptions, bake};
pub use check::check;

use literalgen_codegen::Generator;

use crate::reports::BindingSummary;

fn summarize(generator: &Generator) -> Vec<BindingSummary> {
    generator
        .bindings()
        .iter()
        .map(|b| BindingSummary {
            name: b.name.clone(),
            ty: b.ty.to_string(),
        })
        .collect()
}

fn imports(generator: &Generator) -> Vec<(String, String)> {
    generator
        .imports()
        .iter()
        .map(|(path, alias)| (alias.to_string(), path.to_string()))
        .collect()
}
