//! Bridge from Rust host values to the runtime model.

use crate::{
    types::Type,
    value::{Dynamic, Value},
};

/// A host value that can describe its type and expose its contents.
///
/// Implemented for Rust scalars, strings, `Vec<T>` (slice), `[T; N]`
/// (array), `Option<T>` (nil-able pointer) and `Box<T>` (transparent).
/// Record types implement it by hand:
///
/// ```
/// use literalgen_core::{Field, Reflect, Type, Value};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Reflect for Point {
///     fn type_of() -> Type {
///         Type::record(
///             "Point",
///             "example.com/geo",
///             vec![Field::new("X", Type::int64()), Field::new("Y", Type::int64())],
///         )
///     }
///
///     fn to_value(&self) -> Value {
///         Value::record([("X", self.x.to_value()), ("Y", self.y.to_value())])
///     }
/// }
///
/// let v = Point { x: 1, y: 2 }.to_value();
/// assert_eq!(v.field("Y"), Some(&Value::Int(2)));
/// ```
pub trait Reflect {
    /// The static type of every value of `Self`.
    fn type_of() -> Type;

    /// A snapshot of this value.
    fn to_value(&self) -> Value;
}

macro_rules! reflect_scalar {
    ($($ty:ty => $ctor:ident, $variant:ident as $repr:ty;)*) => {
        $(
            impl Reflect for $ty {
                fn type_of() -> Type {
                    Type::$ctor()
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self as $repr)
                }
            }
        )*
    };
}

reflect_scalar! {
    i8 => int8, Int as i64;
    i16 => int16, Int as i64;
    i32 => int32, Int as i64;
    i64 => int64, Int as i64;
    isize => int, Int as i64;
    u8 => uint8, Uint as u64;
    u16 => uint16, Uint as u64;
    u32 => uint32, Uint as u64;
    u64 => uint64, Uint as u64;
    usize => uint, Uint as u64;
    f32 => float32, Float as f64;
    f64 => float64, Float as f64;
}

impl Reflect for bool {
    fn type_of() -> Type {
        Type::bool()
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Reflect for String {
    fn type_of() -> Type {
        Type::string()
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Reflect for str {
    fn type_of() -> Type {
        Type::string()
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_of() -> Type {
        Type::slice(T::type_of())
    }

    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(Reflect::to_value).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_of() -> Type {
        Type::array(N, T::type_of())
    }

    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(Reflect::to_value).collect())
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_of() -> Type {
        Type::pointer(T::type_of())
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => Value::pointer(v.to_value()),
            None => Value::Nil,
        }
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn type_of() -> Type {
        T::type_of()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_of() -> Type {
        T::type_of()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// A `Dynamic` is an interface value: its static type is `any`.
impl Reflect for Dynamic {
    fn type_of() -> Type {
        Type::any()
    }

    fn to_value(&self) -> Value {
        Value::Dynamic(Box::new(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(<i8 as Reflect>::type_of(), Type::int8());
        assert_eq!(<usize as Reflect>::type_of(), Type::uint());
        assert_eq!(<f32 as Reflect>::type_of(), Type::float32());
        assert_eq!(<&str as Reflect>::type_of(), Type::string());
        assert_eq!((-5i16).to_value(), Value::Int(-5));
        assert_eq!(200u8.to_value(), Value::Uint(200));
    }

    #[test]
    fn test_containers() {
        assert_eq!(<Vec<u8> as Reflect>::type_of(), Type::slice(Type::uint8()));
        assert_eq!(<[bool; 2] as Reflect>::type_of(), Type::array(2, Type::bool()));
        assert_eq!(
            vec![1i64, 2].to_value(),
            Value::Sequence(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn test_option_is_pointer() {
        assert_eq!(
            <Option<i32> as Reflect>::type_of(),
            Type::pointer(Type::int32())
        );
        assert_eq!(None::<i32>.to_value(), Value::Nil);
        match Some(3i32).to_value() {
            Value::Pointer(p) => assert_eq!(*p.get(), Value::Int(3)),
            other => panic!("expected pointer, got {:?}", other),
        }
    }

    #[test]
    fn test_box_is_transparent() {
        assert_eq!(<Box<i64> as Reflect>::type_of(), Type::int64());
        assert_eq!(Box::new(7i64).to_value(), Value::Int(7));
    }
}
