//! Lowering of manifest declarations to runtime types and values.

use std::collections::HashMap;

use literalgen_codegen::{Binding, Generator, GeneratorConfig};
use literalgen_core::{Field, FloatWidth, Kind, Type, Value};
use miette::SourceSpan;

use crate::{
    Manifest, Result,
    error::SourceContext,
    manifest::validate::{find_name_span, span},
    type_expr::{self, TypeExpr},
};

/// A manifest lowered to typed bindings, ready for emission.
#[derive(Debug, Clone)]
pub struct Unit {
    pub package: String,
    pub config: GeneratorConfig,
    pub bindings: Vec<Binding>,
}

impl Unit {
    /// Build a generator holding every binding, in declaration order.
    pub fn generator(&self) -> Generator {
        let mut generator = Generator::with_config(self.package.clone(), self.config.clone());
        for binding in &self.bindings {
            generator.add_typed_literal(
                binding.name.clone(),
                binding.ty.clone(),
                binding.value.clone(),
            );
        }
        generator
    }
}

/// Resolve every declared type and lower every binding value against its
/// declared type.
pub fn lower(manifest: &Manifest, source: &SourceContext) -> Result<Unit> {
    let mut lowerer = Lowerer {
        manifest,
        source,
        types: HashMap::new(),
    };

    for name in manifest.types.keys() {
        lowerer.declared(name, &format!("type '{}'", name), find_name_span(source.src(), name))?;
    }

    let bindings = manifest
        .bindings
        .iter()
        .map(|decl| {
            let name = decl.name.get_ref();
            let ty = lowerer.resolve_str(
                decl.ty.get_ref(),
                &format!("binding '{}'", name),
                Some(span(decl.ty.span())),
            )?;
            let value =
                lowerer.lower_value(&ty, decl.value.get_ref(), name, Some(span(decl.value.span())))?;
            tracing::trace!(binding = %name, ty = %ty, "lowered binding");
            Ok(Binding {
                name: name.clone(),
                ty,
                value,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Unit {
        package: manifest.unit.package.get_ref().clone(),
        config: manifest.unit.generator_config(),
        bindings,
    })
}

struct Lowerer<'a> {
    manifest: &'a Manifest,
    source: &'a SourceContext,
    types: HashMap<String, Type>,
}

impl Lowerer<'_> {
    fn resolve_str(&mut self, expr: &str, context: &str, at: Option<SourceSpan>) -> Result<Type> {
        let parsed = expr
            .parse::<TypeExpr>()
            .map_err(|e| self.source.invalid_type_error(expr, e.0, at))?;
        self.resolve(&parsed, context, at)
    }

    fn resolve(&mut self, expr: &TypeExpr, context: &str, at: Option<SourceSpan>) -> Result<Type> {
        Ok(match expr {
            TypeExpr::Name(name) => match type_expr::builtin(name) {
                Some(ty) => ty,
                None => self.declared(name, context, at)?,
            },
            TypeExpr::Pointer(inner) => Type::pointer(self.resolve(inner, context, at)?),
            TypeExpr::Slice(inner) => Type::slice(self.resolve(inner, context, at)?),
            TypeExpr::Array(len, inner) => Type::array(*len, self.resolve(inner, context, at)?),
        })
    }

    /// Resolve a name declared under `[types]`.
    ///
    /// The handle is cached before its kind is defined, so a record may
    /// refer to itself through a pointer or slice.
    fn declared(&mut self, name: &str, context: &str, at: Option<SourceSpan>) -> Result<Type> {
        if let Some(ty) = self.types.get(name) {
            return Ok(ty.clone());
        }

        let manifest = self.manifest;
        let Some(decl) = manifest.types.get(name) else {
            return Err(self.source.unknown_type_error(name, context, at));
        };

        let ty = Type::declare(name, decl.package.as_str());
        self.types.insert(name.to_string(), ty.clone());
        let name_span = find_name_span(self.source.src(), name);

        let kind = match (&decl.fields, &decl.underlying) {
            (Some(fields), None) => {
                let fields = fields
                    .iter()
                    .map(|field| {
                        let field_name = field.name.get_ref();
                        let field_ty = self.resolve_str(
                            field.ty.get_ref(),
                            &format!("field '{}' of type '{}'", field_name, name),
                            Some(span(field.ty.span())),
                        )?;
                        Ok(Field::new(field_name.as_str(), field_ty))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Kind::Struct(fields)
            }
            (None, Some(underlying)) => {
                let target = self.resolve_str(
                    underlying.get_ref(),
                    &format!("type '{}'", name),
                    Some(span(underlying.span())),
                )?;
                if !target.is_defined() {
                    return Err(self.source.validation_error_at(
                        format!("type '{}' is defined in terms of itself", name),
                        Some(span(underlying.span())),
                    ));
                }
                target.kind().clone()
            }
            _ => {
                return Err(self.source.validation_error_at(
                    format!("type '{}' needs either 'fields' or 'underlying'", name),
                    name_span,
                ));
            }
        };

        ty.define(kind)
            .map_err(|e| self.source.validation_error_at(e.to_string(), name_span))?;

        if embeds(&ty, &ty, &mut Vec::new()) {
            return Err(self.source.validation_error_at(
                format!(
                    "type '{}' contains itself; refer to it through a pointer or slice field",
                    name
                ),
                name_span,
            ));
        }

        tracing::trace!(type_name = name, ty = %ty, "declared type");
        Ok(ty)
    }

    fn lower_value(
        &mut self,
        ty: &Type,
        value: &toml::Value,
        path: &str,
        at: Option<SourceSpan>,
    ) -> Result<Value> {
        let source = self.source;
        let mismatch =
            |expected: String| source.value_mismatch_error(path, expected, value.type_str(), at);

        match ty.kind() {
            Kind::Bool => match value {
                toml::Value::Boolean(b) => Ok(Value::Bool(*b)),
                _ => Err(mismatch(ty.to_string())),
            },
            Kind::Int(width) => {
                let toml::Value::Integer(i) = value else {
                    return Err(mismatch(ty.to_string()));
                };
                let (min, max) = width.range();
                if *i < min || *i > max {
                    return Err(self.source.integer_overflow_error(path, *i, ty.to_string(), at));
                }
                Ok(Value::Int(*i))
            }
            Kind::Uint(width) => {
                let toml::Value::Integer(i) = value else {
                    return Err(mismatch(ty.to_string()));
                };
                match u64::try_from(*i) {
                    Ok(u) if u <= width.max() => Ok(Value::Uint(u)),
                    _ => Err(self.source.integer_overflow_error(path, *i, ty.to_string(), at)),
                }
            }
            Kind::Float(width) => {
                let f = match value {
                    toml::Value::Float(f) => *f,
                    toml::Value::Integer(i) => *i as f64,
                    _ => return Err(mismatch(ty.to_string())),
                };
                if *width == FloatWidth::F32 && f.is_finite() && (f as f32).is_infinite() {
                    return Err(self.source.float_overflow_error(path, f, ty.to_string(), at));
                }
                Ok(Value::Float(f))
            }
            Kind::String => match value {
                toml::Value::String(s) => Ok(Value::string(s.as_str())),
                _ => Err(mismatch(ty.to_string())),
            },
            Kind::Pointer(elem) => Ok(Value::pointer(self.lower_value(elem, value, path, at)?)),
            Kind::Slice(elem) => {
                let toml::Value::Array(items) = value else {
                    return Err(mismatch(format!("an array of {}", elem)));
                };
                self.lower_items(elem, items, path, at).map(Value::Sequence)
            }
            Kind::Array { len, elem } => {
                let toml::Value::Array(items) = value else {
                    return Err(mismatch(format!("an array of {}", elem)));
                };
                if items.len() > *len {
                    return Err(self.source.validation_error_at(
                        format!(
                            "'{}' holds {} values but {} has length {}",
                            path,
                            items.len(),
                            ty,
                            len
                        ),
                        at,
                    ));
                }
                let mut values = self.lower_items(elem, items, path, at)?;
                values.resize_with(*len, || zero_value(elem));
                Ok(Value::Sequence(values))
            }
            Kind::Struct(fields) => {
                let toml::Value::Table(table) = value else {
                    return Err(mismatch(format!("a table for {}", ty)));
                };
                if let Some(unknown) = table
                    .keys()
                    .find(|key| !fields.iter().any(|f| &f.name == *key))
                {
                    return Err(self.source.validation_error_at(
                        format!("'{}' sets '{}', which is not a field of {}", path, unknown, ty),
                        at,
                    ));
                }

                let record = fields
                    .iter()
                    .map(|field| {
                        let value = match table.get(&field.name) {
                            Some(v) => self.lower_value(
                                &field.ty,
                                v,
                                &format!("{}.{}", path, field.name),
                                at,
                            )?,
                            None => zero_value(&field.ty),
                        };
                        Ok((field.name.clone(), value))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Record(record))
            }
            Kind::Interface => self.lower_dynamic(value, path, at),
            Kind::Alias(target) => self.lower_value(target, value, path, at),
            Kind::Unsupported(kind) => Err(self.source.validation_error_at(
                format!(
                    "'{}' has type {} ({}), which cannot be set from a manifest",
                    path,
                    ty,
                    kind.as_str()
                ),
                at,
            )),
        }
    }

    fn lower_items(
        &mut self,
        elem: &Type,
        items: &[toml::Value],
        path: &str,
        at: Option<SourceSpan>,
    ) -> Result<Vec<Value>> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.lower_value(elem, item, &format!("{}[{}]", path, i), at))
            .collect()
    }

    /// Lower a value stored in an `any` slot.
    ///
    /// Scalars keep their default Go types; anything else must name its
    /// type with a `{ type = "...", value = ... }` table.
    fn lower_dynamic(
        &mut self,
        value: &toml::Value,
        path: &str,
        at: Option<SourceSpan>,
    ) -> Result<Value> {
        match value {
            toml::Value::String(s) => Ok(Value::string(s.as_str())),
            toml::Value::Integer(i) => Ok(Value::Int(*i)),
            toml::Value::Float(f) => Ok(Value::Float(*f)),
            toml::Value::Boolean(b) => Ok(Value::Bool(*b)),
            toml::Value::Table(table) if table.len() == 2 => {
                let (Some(ty), Some(inner)) = (table.get("type"), table.get("value")) else {
                    return Err(self.untyped_payload(value, path, at));
                };
                let toml::Value::String(expr) = ty else {
                    return Err(self.source.value_mismatch_error(
                        format!("{}.type", path),
                        "a type expression string",
                        ty.type_str(),
                        at,
                    ));
                };
                let ty = self.resolve_str(expr, &format!("'{}'", path), at)?;
                let inner = self.lower_value(&ty, inner, path, at)?;
                Ok(Value::dynamic(ty, inner))
            }
            _ => Err(self.untyped_payload(value, path, at)),
        }
    }

    fn untyped_payload(
        &self,
        value: &toml::Value,
        path: &str,
        at: Option<SourceSpan>,
    ) -> Box<crate::Error> {
        self.source.value_mismatch_error(
            path,
            "a string, integer, float, boolean or { type = \"...\", value = ... } table",
            value.type_str(),
            at,
        )
    }
}

/// The Go zero value of a type.
fn zero_value(ty: &Type) -> Value {
    match ty.kind() {
        Kind::Bool => Value::Bool(false),
        Kind::Int(_) => Value::Int(0),
        Kind::Uint(_) => Value::Uint(0),
        Kind::Float(_) => Value::Float(0.0),
        Kind::String => Value::string(""),
        Kind::Array { len, elem } => Value::sequence((0..*len).map(|_| zero_value(elem))),
        Kind::Struct(fields) => Value::Record(
            fields
                .iter()
                .map(|f| (f.name.clone(), zero_value(&f.ty)))
                .collect(),
        ),
        Kind::Alias(target) => zero_value(target),
        Kind::Pointer(_) | Kind::Slice(_) | Kind::Interface | Kind::Unsupported(_) => Value::Nil,
    }
}

/// Whether `ty` holds a `target` by value, through struct fields or array elements.
fn embeds(ty: &Type, target: &Type, seen: &mut Vec<Type>) -> bool {
    let children: Vec<&Type> = match ty.kind() {
        Kind::Struct(fields) => fields.iter().map(|f| &f.ty).collect(),
        Kind::Array { elem, .. } | Kind::Alias(elem) => vec![elem],
        _ => return false,
    };

    for child in children {
        if child == target {
            return true;
        }
        if seen.contains(child) {
            continue;
        }
        seen.push(child.clone());
        if embeds(child, target, seen) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        let point = Type::record(
            "Point",
            "",
            vec![Field::new("X", Type::int()), Field::new("Tags", Type::slice(Type::string()))],
        );
        assert_eq!(
            zero_value(&point),
            Value::record([("X", Value::Int(0)), ("Tags", Value::Nil)])
        );
        assert_eq!(
            zero_value(&Type::array(2, Type::bool())),
            Value::sequence([Value::Bool(false), Value::Bool(false)])
        );
        assert_eq!(zero_value(&Type::pointer(point)), Value::Nil);
    }

    #[test]
    fn test_embeds() {
        let node = Type::declare("Node", "");
        node.define(Kind::Struct(vec![Field::new("Next", Type::pointer(node.clone()))]))
            .unwrap();
        assert!(!embeds(&node, &node, &mut Vec::new()));

        let bad = Type::declare("Bad", "");
        bad.define(Kind::Struct(vec![Field::new("Inner", Type::array(1, bad.clone()))]))
            .unwrap();
        assert!(embeds(&bad, &bad, &mut Vec::new()));
    }
}
