//! Core model for the literalgen Go literal generator.
//!
//! This crate describes runtime values and their types in a way the code
//! generator can walk reflectively:
//!
//! - [`Type`] / [`Kind`] - type descriptors (scalars, pointers, sequences, records, interfaces)
//! - [`Value`] - a read view over a runtime value, interpreted against a [`Type`]
//! - [`Reflect`] - bridge from Rust host values to the model
//! - [`syntax`] - Go literal spelling helpers (string quoting, float formatting)

mod reflect;
pub mod syntax;
mod types;
mod value;

pub use reflect::Reflect;
pub use types::{
    DefineError, Field, FloatWidth, IntWidth, Kind, Type, UintWidth, UnsupportedKind,
};
pub use value::{Dynamic, Pointer, Value};
