//! Up-front import discovery for a type.

use std::collections::HashSet;

use literalgen_core::{Kind, Type};

use super::ImportRegistry;

/// Walks a type's structure and registers every package it references.
///
/// Pointers, arrays and slices recurse into their element, records into
/// each field in declaration order, aliases into their target. Every named
/// type reached registers its own package. Named types are visited once,
/// so self-referential types terminate.
pub struct DependencyWalker<'a> {
    imports: &'a mut ImportRegistry,
    visited: HashSet<(String, String)>,
}

impl<'a> DependencyWalker<'a> {
    pub fn new(imports: &'a mut ImportRegistry) -> Self {
        Self {
            imports,
            visited: HashSet::new(),
        }
    }

    /// Register every package `ty` depends on.
    pub fn register(&mut self, ty: &Type) {
        if ty.is_named() {
            let key = (ty.package().to_string(), ty.name().to_string());
            if !self.visited.insert(key) {
                return;
            }
            self.imports.resolve(ty.package());
        }

        match ty.kind() {
            Kind::Pointer(elem) | Kind::Slice(elem) | Kind::Array { elem, .. } => {
                self.register(elem)
            }
            Kind::Struct(fields) => {
                for field in fields {
                    self.register(&field.ty);
                }
            }
            Kind::Alias(target) => self.register(target),
            _ => {}
        }
    }
}
