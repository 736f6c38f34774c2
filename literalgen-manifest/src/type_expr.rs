//! Type expressions as written in `literalgen.toml`.

use std::{fmt, str::FromStr};

use literalgen_core::Type;
use thiserror::Error;

/// A parsed type expression: `Point`, `*Point`, `[]int`, `[4]uint8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Name(String),
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
    Array(usize, Box<TypeExpr>),
}

/// Why a type expression could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidTypeExpr(pub &'static str);

impl FromStr for TypeExpr {
    type Err = InvalidTypeExpr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidTypeExpr("the type is empty"));
        }

        if let Some(rest) = s.strip_prefix('*') {
            return Ok(TypeExpr::Pointer(Box::new(rest.parse()?)));
        }

        if let Some(rest) = s.strip_prefix("[]") {
            return Ok(TypeExpr::Slice(Box::new(rest.parse()?)));
        }

        if let Some(rest) = s.strip_prefix('[') {
            let (len, elem) = rest
                .split_once(']')
                .ok_or(InvalidTypeExpr("an array length is missing its closing ']'"))?;
            let len = len
                .trim()
                .parse::<usize>()
                .map_err(|_| InvalidTypeExpr("an array length must be a non-negative integer"))?;
            return Ok(TypeExpr::Array(len, Box::new(elem.parse()?)));
        }

        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c.is_alphabetic() || c == '_' => {}
            _ => return Err(InvalidTypeExpr("a type name must start with a letter or underscore")),
        }
        if !chars.all(|c| c.is_alphanumeric() || c == '_') {
            return Err(InvalidTypeExpr(
                "a type name must contain only letters, digits and underscores",
            ));
        }

        Ok(TypeExpr::Name(s.to_string()))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Name(name) => write!(f, "{}", name),
            TypeExpr::Pointer(inner) => write!(f, "*{}", inner),
            TypeExpr::Slice(inner) => write!(f, "[]{}", inner),
            TypeExpr::Array(len, inner) => write!(f, "[{}]{}", len, inner),
        }
    }
}

/// Look up a predeclared type name.
pub fn builtin(name: &str) -> Option<Type> {
    let ty = match name {
        "bool" => Type::bool(),
        "string" => Type::string(),
        "int" => Type::int(),
        "int8" => Type::int8(),
        "int16" => Type::int16(),
        "int32" | "rune" => Type::int32(),
        "int64" => Type::int64(),
        "uint" => Type::uint(),
        "uint8" | "byte" => Type::uint8(),
        "uint16" => Type::uint16(),
        "uint32" => Type::uint32(),
        "uint64" => Type::uint64(),
        "float32" => Type::float32(),
        "float64" => Type::float64(),
        "any" => Type::any(),
        _ => return None,
    };
    Some(ty)
}
