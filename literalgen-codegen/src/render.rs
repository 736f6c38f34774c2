//! The recursive value-to-literal renderer.
//!
//! Dispatch is on the declared type's [`Kind`]:
//!
//! 1. pointer: `&` followed by the pointee literal, `nil` for a pointer to
//!    nothing, or `new(T)` when the pointee itself renders as `nil`
//! 2. record: `Name{\n<Field>:<literal>,\n...}` in field declaration order
//! 3. string: a quoted Go string literal
//! 4. array / slice: `[]Elem{\n<literal>,\n...}`
//! 5. interface: `nil`, or the payload rendered as its own dynamic type
//! 6. bool, 7. signed, 8. unsigned, 9. float: their Go textual forms
//! 10. alias: re-dispatch on the value's own type, else on the alias target
//! 11. anything else: the value's default textual form, verbatim

use std::collections::HashSet;

use literalgen_core::{Field, FloatWidth, Kind, Type, Value, syntax};

use crate::{
    config::ElementNaming,
    error::{RenderError, Result},
    generation::ImportRegistry,
    naming::{TypeNamer, bare_name},
};

/// Renders literal expressions for values of a declared type.
///
/// Type names met along the way go through a [`TypeNamer`], so rendering a
/// payload of a previously unseen package allocates its import alias.
pub struct LiteralRenderer<'a> {
    namer: TypeNamer<'a>,
    elements: ElementNaming,
    /// Pointer identities on the current recursion path
    active: HashSet<usize>,
}

impl<'a> LiteralRenderer<'a> {
    pub fn new(imports: &'a mut ImportRegistry, elements: ElementNaming) -> Self {
        Self {
            namer: TypeNamer::new(imports),
            elements,
            active: HashSet::new(),
        }
    }

    /// Render `value` as a literal of type `ty`.
    #[tracing::instrument(level = "trace", skip_all, fields(ty = %ty))]
    pub fn render(&mut self, ty: &Type, value: &Value) -> Result<String> {
        let mut out = String::new();
        self.write(&mut out, ty, value)?;
        Ok(out)
    }

    fn write(&mut self, out: &mut String, ty: &Type, value: &Value) -> Result<()> {
        match ty.kind() {
            Kind::Pointer(elem) => self.write_pointer(out, elem, value),
            Kind::Struct(fields) => self.write_record(out, ty, fields, value),
            Kind::String => match value.concrete() {
                Value::String(s) => {
                    out.push_str(&syntax::quote(s));
                    Ok(())
                }
                other => Err(mismatch(ty, other)),
            },
            Kind::Array { len, elem } => self.write_sequence(out, ty, elem, Some(*len), value),
            Kind::Slice(elem) => self.write_sequence(out, ty, elem, None, value),
            Kind::Interface => self.write_interface(out, value),
            Kind::Bool => match value.concrete() {
                Value::Bool(b) => {
                    out.push_str(if *b { "true" } else { "false" });
                    Ok(())
                }
                other => Err(mismatch(ty, other)),
            },
            Kind::Int(width) => {
                let (min, max) = width.range();
                let fits = match value.concrete() {
                    Value::Int(v) => (min..=max).contains(v),
                    Value::Uint(v) => i64::try_from(*v).is_ok_and(|v| v <= max),
                    other => return Err(mismatch(ty, other)),
                };
                if !fits {
                    return Err(overflow(ty, value.concrete()));
                }
                out.push_str(&value.concrete().to_string());
                Ok(())
            }
            Kind::Uint(width) => {
                let fits = match value.concrete() {
                    Value::Uint(v) => *v <= width.max(),
                    Value::Int(v) => u64::try_from(*v).is_ok_and(|v| v <= width.max()),
                    other => return Err(mismatch(ty, other)),
                };
                if !fits {
                    return Err(overflow(ty, value.concrete()));
                }
                out.push_str(&value.concrete().to_string());
                Ok(())
            }
            Kind::Float(width) => {
                let v = match value.concrete() {
                    Value::Float(v) => *v,
                    Value::Int(v) => *v as f64,
                    Value::Uint(v) => *v as f64,
                    other => return Err(mismatch(ty, other)),
                };
                if *width == FloatWidth::F32 && v.is_finite() && (v as f32).is_infinite() {
                    return Err(overflow(ty, value.concrete()));
                }
                out.push_str(&syntax::format_float(v, *width));
                Ok(())
            }
            Kind::Alias(target) => match value.reported_type() {
                Some(own) if own != *ty => self.write(out, &own, value),
                _ => self.write(out, target, value),
            },
            Kind::Unsupported(_) => match value.reported_type() {
                Some(own) if own != *ty => self.write(out, &own, value),
                _ => {
                    out.push_str(&value.to_string());
                    Ok(())
                }
            },
        }
    }

    fn write_pointer(&mut self, out: &mut String, elem: &Type, value: &Value) -> Result<()> {
        let ptr = match value.concrete() {
            Value::Nil => {
                out.push_str("nil");
                return Ok(());
            }
            Value::Pointer(ptr) => ptr,
            other => return Err(mismatch(&Type::pointer(elem.clone()), other)),
        };

        let pointee = ptr.get();
        if pointee.concrete().is_nil() {
            out.push_str("nil");
            return Ok(());
        }

        let id = ptr.id();
        if !self.active.insert(id) {
            return Err(RenderError::Cycle {
                ty: elem.to_string(),
            });
        }
        let mut inner = String::new();
        let result = self.write(&mut inner, elem, &pointee);
        self.active.remove(&id);
        result?;

        // `&nil` does not compile, so point at a fresh zero value instead
        if inner == "nil" {
            out.push_str("new(");
            out.push_str(&self.namer.name(elem));
            out.push(')');
        } else {
            out.push('&');
            out.push_str(&inner);
        }
        Ok(())
    }

    fn write_record(
        &mut self,
        out: &mut String,
        ty: &Type,
        fields: &[Field],
        value: &Value,
    ) -> Result<()> {
        let Value::Record(values) = value.concrete() else {
            return Err(mismatch(ty, value.concrete()));
        };

        out.push_str(&self.namer.name(ty));
        out.push_str("{\n");
        for field in fields {
            if !field.is_exported() {
                return Err(RenderError::UnexportedField {
                    record: ty.to_string(),
                    field: field.name.clone(),
                });
            }
            let field_value = values
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, v)| v)
                .ok_or_else(|| RenderError::MissingField {
                    record: ty.to_string(),
                    field: field.name.clone(),
                })?;

            out.push_str(&field.name);
            out.push(':');
            self.write(out, &field.ty, field_value)?;
            out.push_str(",\n");
        }
        out.push('}');
        Ok(())
    }

    fn write_sequence(
        &mut self,
        out: &mut String,
        ty: &Type,
        elem: &Type,
        len: Option<usize>,
        value: &Value,
    ) -> Result<()> {
        let items: &[Value] = match value.concrete() {
            Value::Sequence(items) => items,
            Value::Nil => &[],
            other => return Err(mismatch(ty, other)),
        };

        match (self.elements, len) {
            (ElementNaming::Bare, _) => {
                out.push_str("[]");
                out.push_str(&bare_name(elem));
            }
            (ElementNaming::Qualified, Some(len)) => {
                out.push_str(&format!("[{}]", len));
                out.push_str(&self.namer.name(elem));
            }
            (ElementNaming::Qualified, None) => {
                out.push_str("[]");
                out.push_str(&self.namer.name(elem));
            }
        }
        out.push_str("{\n");
        for item in items {
            self.write(out, elem, item)?;
            out.push_str(",\n");
        }
        out.push('}');
        Ok(())
    }

    fn write_interface(&mut self, out: &mut String, value: &Value) -> Result<()> {
        match value {
            Value::Nil => {
                out.push_str("nil");
                Ok(())
            }
            Value::Dynamic(dynamic) => self.write(out, &dynamic.ty, &dynamic.value),
            other => match other.reported_type() {
                Some(own) => self.write(out, &own, other),
                None => Err(RenderError::UntypedPayload {
                    found: other.kind_name(),
                }),
            },
        }
    }
}

fn overflow(ty: &Type, value: &Value) -> RenderError {
    RenderError::Overflow {
        ty: ty.to_string(),
        value: value.to_string(),
    }
}

fn mismatch(expected: &Type, found: &Value) -> RenderError {
    RenderError::Mismatch {
        expected: expected.to_string(),
        found: found.kind_name(),
    }
}
