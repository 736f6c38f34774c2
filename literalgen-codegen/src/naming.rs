//! Type names as they appear in Go source.

use literalgen_core::{Kind, Type};

use crate::generation::ImportRegistry;

/// Spells types, qualifying foreign named types with their import alias.
///
/// Naming is shallow for named types: `p0.Point`, never its fields. Unnamed
/// types have no name of their own, so their type expression is spelled
/// from their parts (`*p0.Node`, `[]int`, `struct { A int }`).
pub struct TypeNamer<'a> {
    imports: &'a mut ImportRegistry,
}

impl<'a> TypeNamer<'a> {
    pub fn new(imports: &'a mut ImportRegistry) -> Self {
        Self { imports }
    }

    /// Qualified name of `ty`, allocating an import alias if needed.
    pub fn name(&mut self, ty: &Type) -> String {
        if ty.is_named() {
            let alias = self.imports.resolve(ty.package());
            if alias.is_empty() {
                return ty.name().to_string();
            }
            return format!("{}.{}", alias, ty.name());
        }
        match ty.kind() {
            Kind::Pointer(elem) => format!("*{}", self.name(elem)),
            Kind::Slice(elem) => format!("[]{}", self.name(elem)),
            Kind::Array { len, elem } => format!("[{}]{}", len, self.name(elem)),
            Kind::Struct(fields) => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|field| format!("{} {}", field.name, self.name(&field.ty)))
                    .collect();
                spell_struct(&fields)
            }
            Kind::Interface => "interface{}".to_string(),
            kind => kind.as_str().to_string(),
        }
    }
}

/// Unqualified name of `ty`: the declared name without any package alias.
pub fn bare_name(ty: &Type) -> String {
    if ty.is_named() {
        return ty.name().to_string();
    }
    match ty.kind() {
        Kind::Pointer(elem) => format!("*{}", bare_name(elem)),
        Kind::Slice(elem) | Kind::Array { elem, .. } => format!("[]{}", bare_name(elem)),
        Kind::Struct(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|field| format!("{} {}", field.name, bare_name(&field.ty)))
                .collect();
            spell_struct(&fields)
        }
        Kind::Interface => "interface{}".to_string(),
        kind => kind.as_str().to_string(),
    }
}

fn spell_struct(fields: &[String]) -> String {
    if fields.is_empty() {
        return "struct{}".to_string();
    }
    format!("struct {{ {} }}", fields.join("; "))
}

#[cfg(test)]
mod tests {
    use literalgen_core::Field;

    use super::*;

    fn point() -> Type {
        Type::record("Point", "example.com/geo", vec![Field::new("X", Type::int())])
    }

    #[test]
    fn test_builtin_names_are_bare() {
        let mut imports = ImportRegistry::new();
        let mut namer = TypeNamer::new(&mut imports);
        assert_eq!(namer.name(&Type::int()), "int");
        assert_eq!(namer.name(&Type::string()), "string");
        assert_eq!(namer.name(&Type::any()), "any");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_foreign_names_are_qualified() {
        let mut imports = ImportRegistry::new();
        imports.resolve("example.com/other");

        let mut namer = TypeNamer::new(&mut imports);
        assert_eq!(namer.name(&point()), "p1.Point");
        assert_eq!(namer.name(&point()), "p1.Point");
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_local_named_type() {
        let mut imports = ImportRegistry::new();
        let local = Type::record("Config", "", vec![]);
        assert_eq!(TypeNamer::new(&mut imports).name(&local), "Config");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_unnamed_type_expressions() {
        let mut imports = ImportRegistry::new();
        let mut namer = TypeNamer::new(&mut imports);
        assert_eq!(namer.name(&Type::pointer(point())), "*p0.Point");
        assert_eq!(namer.name(&Type::slice(Type::uint8())), "[]uint8");
        assert_eq!(
            namer.name(&Type::array(3, Type::slice(point()))),
            "[3][]p0.Point"
        );
        assert_eq!(
            namer.name(&Type::anonymous_record(vec![
                Field::new("A", Type::int()),
                Field::new("B", point()),
            ])),
            "struct { A int; B p0.Point }"
        );
        assert_eq!(namer.name(&Type::anonymous_record(vec![])), "struct{}");
    }

    #[test]
    fn test_bare_name() {
        assert_eq!(bare_name(&point()), "Point");
        assert_eq!(bare_name(&Type::pointer(point())), "*Point");
        assert_eq!(bare_name(&Type::array(2, Type::int())), "[]int");
    }
}
