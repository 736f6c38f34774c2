//! Validation utilities for Go identifiers

use std::{collections::HashMap, ops::Range};

use literalgen_core::syntax::GO_KEYWORDS;
use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext, type_expr};

/// Validation context that carries source information.
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    source: &'a SourceContext,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self { source }
    }

    /// Validate that a name is a usable Go identifier.
    pub fn validate_name(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if is_go_keyword(name) {
            return Err(self.source.reserved_keyword_error(name, kind, span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self
                .source
                .invalid_identifier_error(name, kind, reason, span));
        }

        Ok(())
    }

    pub fn validate(&self, manifest: &Manifest) -> Result<()> {
        let src = self.source.src();

        let package = &manifest.unit.package;
        self.validate_name(package.get_ref(), "package", Some(span(package.span())))?;

        let prefix = &manifest.unit.alias_prefix;
        if let Some(reason) = validate_identifier(&format!("{}0", prefix)) {
            return Err(self.source.invalid_identifier_error(
                prefix,
                "alias prefix",
                reason,
                find_quoted_span(src, prefix),
            ));
        }

        for (name, decl) in &manifest.types {
            let name_span = find_name_span(src, name);
            self.validate_name(name, "type", name_span)?;

            if type_expr::builtin(name).is_some() {
                return Err(self.source.validation_error_at(
                    format!("type '{}' shadows a built-in type", name),
                    name_span,
                ));
            }

            match (&decl.fields, &decl.underlying) {
                (Some(_), Some(underlying)) => {
                    return Err(self.source.validation_error_at(
                        format!("type '{}' sets both 'fields' and 'underlying'", name),
                        Some(span(underlying.span())),
                    ));
                }
                (None, None) => {
                    return Err(self.source.validation_error_at(
                        format!("type '{}' needs either 'fields' or 'underlying'", name),
                        name_span,
                    ));
                }
                _ => {}
            }

            let mut seen: HashMap<&str, Range<usize>> = HashMap::new();
            for field in decl.fields.iter().flatten() {
                let field_name = field.name.get_ref();
                self.validate_name(field_name, "field", Some(span(field.name.span())))?;
                if seen.insert(field_name, field.name.span()).is_some() {
                    return Err(self.source.validation_error_at(
                        format!("type '{}' declares field '{}' twice", name, field_name),
                        Some(span(field.name.span())),
                    ));
                }
            }
        }

        let mut bindings: HashMap<&str, Range<usize>> = HashMap::new();
        for binding in &manifest.bindings {
            let name = binding.name.get_ref();
            self.validate_name(name, "binding", Some(span(binding.name.span())))?;
            if name == "_" {
                return Err(self.source.invalid_identifier_error(
                    name,
                    "binding",
                    "'_' is the blank identifier and cannot be referenced",
                    Some(span(binding.name.span())),
                ));
            }
            if let Some(first) = bindings.insert(name, binding.name.span()) {
                return Err(self.source.duplicate_binding_error(
                    name,
                    span(first),
                    span(binding.name.span()),
                ));
            }
        }

        Ok(())
    }
}

pub(crate) fn span(range: Range<usize>) -> SourceSpan {
    SourceSpan::from(range)
}

pub(crate) fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Find the span of a type name in the TOML source
/// Searches for `[types.Name]` headers and dotted keys
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!(".{}]", name),  // [types.Name]
        format!(".{}.", name),  // [types.Name.something]
        format!(".{} ", name),  // types.Name = { ... }
        format!(".{}=", name),  // types.Name={ ... }
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Find the span of a quoted string value in the TOML source
pub(crate) fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    src.find(&format!("\"{}\"", value))
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Validate that a name is a valid Go identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Some("name must contain only letters, digits and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("origin").is_none());
        assert!(validate_identifier("Point").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("p0").is_none());
        assert!(validate_identifier("größe").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(validate_identifier(""), Some("name cannot be empty"));
        assert_eq!(
            validate_identifier("1st"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            validate_identifier("my-var"),
            Some("name must contain only letters, digits and underscores")
        );
        assert!(validate_identifier("a.b").is_some());
    }

    #[test]
    fn test_go_keywords() {
        assert!(is_go_keyword("func"));
        assert!(is_go_keyword("map"));
        assert!(!is_go_keyword("any"));
        assert!(!is_go_keyword("fn"));
    }

    #[test]
    fn test_find_name_span() {
        let src = "[unit]\npackage = \"x\"\n\n[types.Point]\nfields = []\n";
        let span = find_name_span(src, "Point").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Point");
        assert_eq!(span.offset(), src.find("Point").unwrap());
    }

    #[test]
    fn test_find_quoted_span() {
        let src = "alias_prefix = \"my-\"\n";
        let span = find_quoted_span(src, "my-").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "my-");
        assert!(find_quoted_span(src, "p").is_none());
    }
}
