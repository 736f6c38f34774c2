//! Runtime type descriptors.
//!
//! A [`Type`] is a shared handle to a descriptor made of a name, an
//! originating package path and a [`Kind`]. Built-in and locally defined
//! types have an empty package path. Unnamed types (`*T`, `[]T`, `[N]T`,
//! anonymous structs) have an empty name.

use std::{
    fmt,
    sync::{Arc, OnceLock},
};

use thiserror::Error;

/// Width of a signed integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// Platform-sized `int`.
    Int,
    I8,
    I16,
    I32,
    I64,
}

impl IntWidth {
    /// Go spelling of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntWidth::Int => "int",
            IntWidth::I8 => "int8",
            IntWidth::I16 => "int16",
            IntWidth::I32 => "int32",
            IntWidth::I64 => "int64",
        }
    }

    /// Inclusive value range representable at this width.
    pub fn range(&self) -> (i64, i64) {
        match self {
            IntWidth::I8 => (i8::MIN.into(), i8::MAX.into()),
            IntWidth::I16 => (i16::MIN.into(), i16::MAX.into()),
            IntWidth::I32 => (i32::MIN.into(), i32::MAX.into()),
            IntWidth::Int | IntWidth::I64 => (i64::MIN, i64::MAX),
        }
    }
}

/// Width of an unsigned integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UintWidth {
    /// Platform-sized `uint`.
    Uint,
    U8,
    U16,
    U32,
    U64,
}

impl UintWidth {
    /// Go spelling of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            UintWidth::Uint => "uint",
            UintWidth::U8 => "uint8",
            UintWidth::U16 => "uint16",
            UintWidth::U32 => "uint32",
            UintWidth::U64 => "uint64",
        }
    }

    /// Largest value representable at this width.
    pub fn max(&self) -> u64 {
        match self {
            UintWidth::U8 => u8::MAX.into(),
            UintWidth::U16 => u16::MAX.into(),
            UintWidth::U32 => u32::MAX.into(),
            UintWidth::Uint | UintWidth::U64 => u64::MAX,
        }
    }
}

/// Width of a floating-point type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

impl FloatWidth {
    /// Go spelling of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatWidth::F32 => "float32",
            FloatWidth::F64 => "float64",
        }
    }
}

/// Kinds the literal renderer has no dedicated rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedKind {
    Complex64,
    Complex128,
    Chan,
    Func,
    Map,
    UnsafePointer,
    Uintptr,
    /// A type that was declared but never defined.
    Undefined,
}

impl UnsupportedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnsupportedKind::Complex64 => "complex64",
            UnsupportedKind::Complex128 => "complex128",
            UnsupportedKind::Chan => "chan",
            UnsupportedKind::Func => "func",
            UnsupportedKind::Map => "map",
            UnsupportedKind::UnsafePointer => "unsafe.Pointer",
            UnsupportedKind::Uintptr => "uintptr",
            UnsupportedKind::Undefined => "undefined",
        }
    }
}

/// A named field of a record type, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: Type,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Whether the field is visible outside its package (starts with an uppercase letter).
    pub fn is_exported(&self) -> bool {
        crate::syntax::is_exported(&self.name)
    }
}

/// The structural kind of a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int(IntWidth),
    Uint(UintWidth),
    Float(FloatWidth),
    String,
    Pointer(Type),
    Array { len: usize, elem: Type },
    Slice(Type),
    Struct(Vec<Field>),
    Interface,
    /// A named type standing for another type.
    Alias(Type),
    Unsupported(UnsupportedKind),
}

impl Kind {
    /// Short kind name, used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int(w) => w.as_str(),
            Kind::Uint(w) => w.as_str(),
            Kind::Float(w) => w.as_str(),
            Kind::String => "string",
            Kind::Pointer(_) => "ptr",
            Kind::Array { .. } => "array",
            Kind::Slice(_) => "slice",
            Kind::Struct(_) => "struct",
            Kind::Interface => "interface",
            Kind::Alias(_) => "alias",
            Kind::Unsupported(k) => k.as_str(),
        }
    }

    /// Element type of pointers, arrays and slices.
    pub fn elem(&self) -> Option<&Type> {
        match self {
            Kind::Pointer(elem) | Kind::Slice(elem) | Kind::Array { elem, .. } => Some(elem),
            _ => None,
        }
    }
}

static UNDEFINED: Kind = Kind::Unsupported(UnsupportedKind::Undefined);

/// Error returned by [`Type::define`].
#[derive(Debug, Error)]
pub enum DefineError {
    #[error("type '{0}' is already defined")]
    AlreadyDefined(String),

    #[error("type '{0}' is an alias of itself")]
    AliasCycle(String),
}

struct TypeData {
    name: String,
    package: String,
    kind: OnceLock<Kind>,
}

/// Shared handle to a type descriptor.
///
/// Cloning is cheap. Two types compare equal when they are the same
/// handle, when both are named and share name and package, or when both
/// are unnamed and structurally identical.
#[derive(Clone)]
pub struct Type(Arc<TypeData>);

impl Type {
    fn build(name: impl Into<String>, package: impl Into<String>, kind: Kind) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(kind);
        Self(Arc::new(TypeData {
            name: name.into(),
            package: package.into(),
            kind: cell,
        }))
    }

    /// A named type with an arbitrary kind (e.g. `type Celsius float64`).
    pub fn named(name: impl Into<String>, package: impl Into<String>, kind: Kind) -> Self {
        Self::build(name, package, kind)
    }

    /// Declare a named type whose kind is supplied later with [`Type::define`].
    ///
    /// This is how self-referential types are built:
    ///
    /// ```
    /// use literalgen_core::{Field, Kind, Type};
    ///
    /// let node = Type::declare("Node", "example.com/list");
    /// node.define(Kind::Struct(vec![
    ///     Field::new("Value", Type::int()),
    ///     Field::new("Next", Type::pointer(node.clone())),
    /// ]))
    /// .unwrap();
    /// assert_eq!(node.fields().len(), 2);
    /// ```
    pub fn declare(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self(Arc::new(TypeData {
            name: name.into(),
            package: package.into(),
            kind: OnceLock::new(),
        }))
    }

    /// Supply the kind of a declared type.
    ///
    /// An alias whose chain of targets leads back to this type is rejected.
    pub fn define(&self, kind: Kind) -> Result<(), DefineError> {
        if let Kind::Alias(target) = &kind {
            let mut current = target;
            loop {
                if current.same_handle(self) {
                    return Err(DefineError::AliasCycle(self.to_string()));
                }
                match current.kind() {
                    Kind::Alias(next) => current = next,
                    _ => break,
                }
            }
        }

        self.0
            .kind
            .set(kind)
            .map_err(|_| DefineError::AlreadyDefined(self.to_string()))
    }

    /// A named record type.
    pub fn record(name: impl Into<String>, package: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::build(name, package, Kind::Struct(fields))
    }

    /// An anonymous record type (`struct { ... }`).
    pub fn anonymous_record(fields: Vec<Field>) -> Self {
        Self::build("", "", Kind::Struct(fields))
    }

    /// A named interface type.
    pub fn interface(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self::build(name, package, Kind::Interface)
    }

    /// The empty interface, spelled `any`.
    pub fn any() -> Self {
        Self::interface("any", "")
    }

    /// A named type that stands for `target`.
    pub fn alias(name: impl Into<String>, package: impl Into<String>, target: Type) -> Self {
        Self::build(name, package, Kind::Alias(target))
    }

    pub fn pointer(elem: Type) -> Self {
        Self::build("", "", Kind::Pointer(elem))
    }

    pub fn slice(elem: Type) -> Self {
        Self::build("", "", Kind::Slice(elem))
    }

    pub fn array(len: usize, elem: Type) -> Self {
        Self::build("", "", Kind::Array { len, elem })
    }

    /// An unnamed type of a kind without a dedicated rendering rule.
    pub fn unsupported(kind: UnsupportedKind) -> Self {
        Self::build(kind.as_str(), "", Kind::Unsupported(kind))
    }

    pub fn bool() -> Self {
        Self::build("bool", "", Kind::Bool)
    }

    pub fn string() -> Self {
        Self::build("string", "", Kind::String)
    }

    pub fn int_of(width: IntWidth) -> Self {
        Self::build(width.as_str(), "", Kind::Int(width))
    }

    pub fn uint_of(width: UintWidth) -> Self {
        Self::build(width.as_str(), "", Kind::Uint(width))
    }

    pub fn float_of(width: FloatWidth) -> Self {
        Self::build(width.as_str(), "", Kind::Float(width))
    }

    pub fn int() -> Self {
        Self::int_of(IntWidth::Int)
    }

    pub fn int8() -> Self {
        Self::int_of(IntWidth::I8)
    }

    pub fn int16() -> Self {
        Self::int_of(IntWidth::I16)
    }

    pub fn int32() -> Self {
        Self::int_of(IntWidth::I32)
    }

    pub fn int64() -> Self {
        Self::int_of(IntWidth::I64)
    }

    pub fn uint() -> Self {
        Self::uint_of(UintWidth::Uint)
    }

    pub fn uint8() -> Self {
        Self::uint_of(UintWidth::U8)
    }

    pub fn uint16() -> Self {
        Self::uint_of(UintWidth::U16)
    }

    pub fn uint32() -> Self {
        Self::uint_of(UintWidth::U32)
    }

    pub fn uint64() -> Self {
        Self::uint_of(UintWidth::U64)
    }

    pub fn float32() -> Self {
        Self::float_of(FloatWidth::F32)
    }

    pub fn float64() -> Self {
        Self::float_of(FloatWidth::F64)
    }

    /// Declared name; empty for unnamed types.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Originating package path; empty for built-in and local types.
    pub fn package(&self) -> &str {
        &self.0.package
    }

    /// The type's kind. A declared but undefined type reports
    /// [`UnsupportedKind::Undefined`].
    pub fn kind(&self) -> &Kind {
        self.0.kind.get().unwrap_or(&UNDEFINED)
    }

    pub fn is_named(&self) -> bool {
        !self.0.name.is_empty()
    }

    pub fn is_defined(&self) -> bool {
        self.0.kind.get().is_some()
    }

    /// Element type for pointers, arrays and slices.
    pub fn elem(&self) -> Option<&Type> {
        self.kind().elem()
    }

    /// Declared fields of a record type, empty for other kinds.
    pub fn fields(&self) -> &[Field] {
        match self.kind() {
            Kind::Struct(fields) => fields,
            _ => &[],
        }
    }

    /// Whether both handles point at the same descriptor.
    pub fn same_handle(&self, other: &Type) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        if self.same_handle(other) {
            return true;
        }
        match (self.is_named(), other.is_named()) {
            (true, true) => self.name() == other.name() && self.package() == other.package(),
            // Unnamed types recurse structurally; any cycle passes through a named type.
            (false, false) => self.kind() == other.kind(),
            _ => false,
        }
    }
}

impl Eq for Type {}

impl fmt::Display for Type {
    /// Fully qualified type expression, e.g. `*example.com/geo.Point`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_named() {
            if self.package().is_empty() {
                return f.write_str(self.name());
            }
            return write!(f, "{}.{}", self.package(), self.name());
        }
        match self.kind() {
            Kind::Pointer(elem) => write!(f, "*{}", elem),
            Kind::Slice(elem) => write!(f, "[]{}", elem),
            Kind::Array { len, elem } => write!(f, "[{}]{}", len, elem),
            Kind::Struct(fields) => {
                f.write_str("struct {")?;
                for (i, field) in fields.iter().enumerate() {
                    let sep = if i == 0 { " " } else { "; " };
                    write!(f, "{}{} {}", sep, field.name, field.ty)?;
                }
                f.write_str(" }")
            }
            Kind::Interface => f.write_str("interface {}"),
            kind => f.write_str(kind.as_str()),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> Type {
        Type::record(
            "Point",
            "example.com/geo",
            vec![Field::new("X", Type::int()), Field::new("Y", Type::int())],
        )
    }

    #[test]
    fn test_named_identity() {
        assert_eq!(point(), point());
        assert_ne!(point(), Type::record("Point", "example.com/other", vec![]));
        assert_eq!(Type::int(), Type::int());
        assert_ne!(Type::int(), Type::int64());
    }

    #[test]
    fn test_unnamed_structural_identity() {
        assert_eq!(Type::slice(point()), Type::slice(point()));
        assert_eq!(Type::array(3, Type::int()), Type::array(3, Type::int()));
        assert_ne!(Type::array(3, Type::int()), Type::array(4, Type::int()));
        assert_ne!(Type::slice(Type::int()), Type::pointer(Type::int()));
    }

    #[test]
    fn test_display() {
        assert_eq!(point().to_string(), "example.com/geo.Point");
        assert_eq!(
            Type::pointer(Type::slice(point())).to_string(),
            "*[]example.com/geo.Point"
        );
        assert_eq!(Type::array(2, Type::uint8()).to_string(), "[2]uint8");
        assert_eq!(
            Type::anonymous_record(vec![
                Field::new("A", Type::int()),
                Field::new("B", Type::string())
            ])
            .to_string(),
            "struct { A int; B string }"
        );
        assert_eq!(Type::any().to_string(), "any");
    }

    #[test]
    fn test_declare_and_define() {
        let node = Type::declare("Node", "example.com/list");
        assert!(!node.is_defined());
        assert_eq!(node.kind(), &Kind::Unsupported(UnsupportedKind::Undefined));

        node.define(Kind::Struct(vec![Field::new(
            "Next",
            Type::pointer(node.clone()),
        )]))
        .unwrap();

        assert!(node.is_defined());
        let next = &node.fields()[0];
        assert_eq!(next.ty.elem(), Some(&node));
        assert!(matches!(
            node.define(Kind::Bool),
            Err(DefineError::AlreadyDefined(_))
        ));
    }

    #[test]
    fn test_alias_cycle_is_rejected() {
        let direct = Type::declare("Loop", "");
        assert!(matches!(
            direct.define(Kind::Alias(direct.clone())),
            Err(DefineError::AliasCycle(_))
        ));
        assert!(!direct.is_defined());

        let a = Type::declare("A", "");
        let b = Type::alias("B", "", a.clone());
        assert!(matches!(
            a.define(Kind::Alias(b)),
            Err(DefineError::AliasCycle(_))
        ));

        let c = Type::declare("C", "");
        c.define(Kind::Alias(Type::int())).unwrap();
        let d = Type::declare("D", "");
        d.define(Kind::Alias(c)).unwrap();
        assert!(matches!(d.kind(), Kind::Alias(target) if target.name() == "C"));

        let e = Type::declare("E", "");
        e.define(Kind::Alias(Type::pointer(e.clone()))).unwrap();
    }

    #[test]
    fn test_field_visibility() {
        assert!(Field::new("Name", Type::string()).is_exported());
        assert!(!Field::new("name", Type::string()).is_exported());
        assert!(!Field::new("_Name", Type::string()).is_exported());
    }

    #[test]
    fn test_width_ranges() {
        assert_eq!(IntWidth::I8.range(), (-128, 127));
        assert_eq!(UintWidth::U16.max(), 65535);
        assert_eq!(UintWidth::Uint.max(), u64::MAX);
    }
}
