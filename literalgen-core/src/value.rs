//! Runtime values.
//!
//! A [`Value`] is always read together with a declared [`Type`]; the two may
//! disagree when the declared type is an interface and the value is the
//! concrete payload stored in it.

use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
};

use crate::{
    syntax,
    types::{FloatWidth, Type},
};

/// A shared, mutable cell referenced by pointer values.
///
/// Cloning a `Pointer` aliases the same cell, so pointer graphs (including
/// cyclic ones) can be built. Equality is identity.
#[derive(Clone)]
pub struct Pointer(Rc<RefCell<Value>>);

impl Pointer {
    pub fn new(value: Value) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Borrow the pointee.
    pub fn get(&self) -> Ref<'_, Value> {
        self.0.borrow()
    }

    /// Replace the pointee, returning the previous value.
    pub fn set(&self, value: Value) -> Value {
        self.0.replace(value)
    }

    /// Stable identity of the referenced cell.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl PartialEq for Pointer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pointer({:#x})", self.id())
    }
}

/// A value paired with its own concrete type.
#[derive(Debug, Clone, PartialEq)]
pub struct Dynamic {
    pub ty: Type,
    pub value: Value,
}

impl Dynamic {
    pub fn new(ty: Type, value: impl Into<Value>) -> Self {
        Self {
            ty,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent pointer target or interface payload.
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Pointer(Pointer),
    /// Elements of an array or slice, in index order.
    Sequence(Vec<Value>),
    /// Field values of a record, looked up by name.
    Record(Vec<(String, Value)>),
    /// A value carrying its own type, as stored in an interface slot.
    Dynamic(Box<Dynamic>),
    /// A value of a kind with no literal form (func, chan, complex...),
    /// holding its default textual form.
    Opaque(String),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// A pointer to a fresh cell holding `value`.
    pub fn pointer(value: Value) -> Self {
        Self::Pointer(Pointer::new(value))
    }

    pub fn dynamic(ty: Type, value: impl Into<Value>) -> Self {
        Self::Dynamic(Box::new(Dynamic::new(ty, value)))
    }

    pub fn record<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    pub fn sequence(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Sequence(items.into_iter().collect())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Look up a record field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self.concrete() {
            Value::Record(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Strip any [`Value::Dynamic`] wrappers.
    pub fn concrete(&self) -> &Value {
        let mut value = self;
        while let Value::Dynamic(dynamic) = value {
            value = &dynamic.value;
        }
        value
    }

    /// The type this value reports for itself.
    ///
    /// Dynamic values report their carried type and scalars report the
    /// default Go type for their literal class. Composite values carry no
    /// type of their own.
    pub fn reported_type(&self) -> Option<Type> {
        match self {
            Value::Dynamic(dynamic) => Some(dynamic.ty.clone()),
            Value::Bool(_) => Some(Type::bool()),
            Value::Int(_) => Some(Type::int()),
            Value::Uint(_) => Some(Type::uint()),
            Value::Float(_) => Some(Type::float64()),
            Value::String(_) => Some(Type::string()),
            _ => None,
        }
    }

    /// Short name of the value's variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Pointer(_) => "ptr",
            Value::Sequence(_) => "sequence",
            Value::Record(_) => "record",
            Value::Dynamic(_) => "dynamic",
            Value::Opaque(_) => "opaque",
        }
    }
}

impl fmt::Display for Value {
    /// The value's default textual form. Composite values print as
    /// `<kind Value>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Uint(v) => write!(f, "{}", v),
            Value::Float(v) => f.write_str(&syntax::format_float(*v, FloatWidth::F64)),
            Value::String(s) | Value::Opaque(s) => f.write_str(s),
            Value::Dynamic(dynamic) => write!(f, "{}", dynamic.value),
            other => write!(f, "<{} Value>", other.kind_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Dynamic> for Value {
    fn from(v: Dynamic) -> Self {
        Value::Dynamic(Box::new(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_identity() {
        let a = Pointer::new(Value::Int(1));
        let b = a.clone();
        let c = Pointer::new(Value::Int(1));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.id(), b.id());

        b.set(Value::Int(2));
        assert_eq!(*a.get(), Value::Int(2));
    }

    #[test]
    fn test_cyclic_pointer_debug_terminates() {
        let p = Pointer::new(Value::Nil);
        p.set(Value::record([("Next", Value::Pointer(p.clone()))]));
        let text = format!("{:?}", p.get());
        assert!(text.contains("Pointer(0x"));
    }

    #[test]
    fn test_field_lookup() {
        let v = Value::record([("A", Value::Int(5)), ("B", Value::from("x"))]);
        assert_eq!(v.field("A"), Some(&Value::Int(5)));
        assert_eq!(v.field("C"), None);
        assert_eq!(Value::Int(1).field("A"), None);
    }

    #[test]
    fn test_reported_type() {
        assert_eq!(Value::from("s").reported_type(), Some(Type::string()));
        assert_eq!(Value::Int(1).reported_type(), Some(Type::int()));
        assert_eq!(Value::Float(1.0).reported_type(), Some(Type::float64()));
        assert_eq!(
            Value::dynamic(Type::int8(), Value::Int(1)).reported_type(),
            Some(Type::int8())
        );
        assert_eq!(Value::Sequence(vec![]).reported_type(), None);
        assert_eq!(Value::Nil.reported_type(), None);
    }

    #[test]
    fn test_concrete_strips_dynamic() {
        let v = Value::dynamic(Type::any(), Value::dynamic(Type::int(), Value::Int(3)));
        assert_eq!(v.concrete(), &Value::Int(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(1e6).to_string(), "1e+06");
        assert_eq!(Value::Opaque("(1+2i)".into()).to_string(), "(1+2i)");
        assert_eq!(Value::Sequence(vec![]).to_string(), "<sequence Value>");
        assert_eq!(Value::Nil.to_string(), "<nil>");
    }
}
