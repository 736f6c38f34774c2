//! Go source literal generation.
//!
//! Given runtime values described by [`literalgen_core`], this crate renders
//! Go literal expressions that rebuild them and assembles whole Go files.
//!
//! # Module Organization
//!
//! - [`builder`] - Text building blocks (CodeBuilder, Indent)
//! - [`generation`] - Import registry, dependency walker and the [`Generator`] emission unit
//! - [`naming`] - Type names as they appear in Go source
//! - [`render`] - The recursive literal renderer
//!
//! # Example
//!
//! ```
//! use literalgen_codegen::Generator;
//! use literalgen_core::{Field, Type, Value};
//!
//! let point = Type::record("Point", "example.com/geo", vec![Field::new("X", Type::int())]);
//!
//! let mut generator = Generator::new("fixtures");
//! generator.add_typed_literal("origin", point, Value::record([("X", Value::Int(0))]));
//!
//! let code = generator.render().unwrap();
//! assert_eq!(
//!     code,
//!     "package fixtures\nimport (\n\tp0 \"example.com/geo\"\n)\nvar origin p0.Point = p0.Point{\nX:0,\n}\n"
//! );
//! ```

pub mod builder;
mod config;
mod error;
pub mod generation;
pub mod naming;
pub mod render;

pub use config::{ElementNaming, GeneratorConfig};
pub use error::{RenderError, Result};
pub use generation::{Binding, BindingId, DependencyWalker, Generator, ImportRegistry};
pub use naming::TypeNamer;
pub use render::LiteralRenderer;
