//! Import tracking and whole-file emission.
//!
//! - [`ImportRegistry`] - Package path to short alias mapping
//! - [`DependencyWalker`] - Pre-registers every package a type will need
//! - [`Generator`] - Emission unit owning the registry and the ordered bindings

mod dependencies;
mod generator;
mod imports;

pub use dependencies::DependencyWalker;
pub use generator::{Binding, BindingId, Generator};
pub use imports::ImportRegistry;
