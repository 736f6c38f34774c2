//! The emission unit: ordered bindings plus the imports they need.

use std::io;

use literalgen_core::{Reflect, Type, Value, syntax};

use super::{DependencyWalker, ImportRegistry};
use crate::{
    GeneratorConfig,
    builder::CodeBuilder,
    error::{RenderError, Result},
    naming::TypeNamer,
    render::LiteralRenderer,
};

/// A named value registered for emission.
#[derive(Debug, Clone)]
pub struct Binding {
    pub name: String,
    pub ty: Type,
    pub value: Value,
}

/// Handle to a registered binding, usable to render it on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(usize);

impl BindingId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Collects `(identifier, type, value)` bindings and emits a Go file that
/// declares each one as a package-level `var`.
///
/// Registration order is significant: it fixes both the import alias order
/// and the declaration order. Identifiers are not checked for uniqueness or
/// validity.
///
/// # Example
///
/// ```
/// use literalgen_codegen::Generator;
///
/// let mut generator = Generator::new("a");
/// let id = generator.add_literal("greeting", "hello");
///
/// assert_eq!(generator.literal(id).unwrap(), "\"hello\"");
/// assert_eq!(
///     generator.render().unwrap(),
///     "package a\nvar greeting string = \"hello\"\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    package: String,
    config: GeneratorConfig,
    imports: ImportRegistry,
    bindings: Vec<Binding>,
}

impl Generator {
    /// Create an empty unit for package `package` with the default config.
    pub fn new(package: impl Into<String>) -> Self {
        Self::with_config(package, GeneratorConfig::default())
    }

    pub fn with_config(package: impl Into<String>, config: GeneratorConfig) -> Self {
        Self {
            package: package.into(),
            imports: ImportRegistry::with_prefix(config.alias_prefix.clone()),
            config,
            bindings: Vec::new(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn imports(&self) -> &ImportRegistry {
        &self.imports
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn binding(&self, id: BindingId) -> Option<&Binding> {
        self.bindings.get(id.0)
    }

    /// Register a host value, using its static type.
    pub fn add_literal<T: Reflect + ?Sized>(
        &mut self,
        name: impl Into<String>,
        value: &T,
    ) -> BindingId {
        self.add_typed_literal(name, T::type_of(), value.to_value())
    }

    /// Register a value under an explicit declared type.
    ///
    /// The type's package dependencies are registered immediately so the
    /// import block is known before any literal is rendered.
    pub fn add_typed_literal(&mut self, name: impl Into<String>, ty: Type, value: Value) -> BindingId {
        DependencyWalker::new(&mut self.imports).register(&ty);

        let name = name.into();
        tracing::debug!(binding = %name, ty = %ty, imports = self.imports.len(), "registered binding");
        self.bindings.push(Binding { name, ty, value });
        BindingId(self.bindings.len() - 1)
    }

    /// Render only the literal expression of a binding.
    pub fn literal(&mut self, id: BindingId) -> Result<String> {
        let binding = self
            .bindings
            .get(id.0)
            .ok_or(RenderError::UnknownBinding(id.0))?;
        LiteralRenderer::new(&mut self.imports, self.config.element_naming)
            .render(&binding.ty, &binding.value)
    }

    /// Render the `var <name> <type> = <literal>` declaration of a binding.
    pub fn declaration(&mut self, id: BindingId) -> Result<String> {
        let binding = self
            .bindings
            .get(id.0)
            .ok_or(RenderError::UnknownBinding(id.0))?;
        let type_name = TypeNamer::new(&mut self.imports).name(&binding.ty);
        let literal = LiteralRenderer::new(&mut self.imports, self.config.element_naming)
            .render(&binding.ty, &binding.value)?;
        Ok(format!("var {} {} = {}", binding.name, type_name, literal))
    }

    /// Render the whole file: header, import block, then every declaration
    /// in registration order.
    ///
    /// Declarations are rendered before the header is assembled, so packages
    /// first met inside interface payloads still make it into the import
    /// block.
    pub fn render(&mut self) -> Result<String> {
        let declarations = (0..self.bindings.len())
            .map(|i| self.declaration(BindingId(i)))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            package = %self.package,
            bindings = declarations.len(),
            imports = self.imports.len(),
            "rendered unit"
        );

        let code = CodeBuilder::go()
            .when(self.config.generated_by.is_some(), |b| {
                let tool = self.config.generated_by.as_deref().unwrap_or_default();
                b.comment(&format!("Code generated by {}. DO NOT EDIT.", tool))
                    .blank()
            })
            .line(&format!("package {}", self.package))
            .when(!self.imports.is_empty(), |b| {
                b.block_with_close("import (", ")", |b| {
                    b.each(self.imports.iter(), |b, (path, alias)| {
                        b.line(&format!("{} {}", alias, syntax::quote(path)))
                    })
                })
            })
            .each(&declarations, |b, declaration| b.line(declaration))
            .build();

        Ok(code)
    }

    /// Render the whole file into `w`.
    pub fn emit_all<W: io::Write>(&mut self, w: &mut W) -> Result<()> {
        let code = self.render()?;
        w.write_all(code.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use literalgen_core::{Dynamic, Field};

    use super::*;

    fn point() -> Type {
        Type::record(
            "Point",
            "example.com/geo",
            vec![Field::new("X", Type::int()), Field::new("Y", Type::int())],
        )
    }

    #[test]
    fn test_registration_walks_dependencies() {
        let mut generator = Generator::new("a");
        generator.add_typed_literal("p", Type::pointer(point()), Value::Nil);
        assert_eq!(generator.imports().alias("example.com/geo"), Some("p0"));
    }

    #[test]
    fn test_literal_of_interface_binding() {
        let mut generator = Generator::new("a");
        let id = generator.add_typed_literal("v", Type::any(), Value::from("string"));
        assert_eq!(generator.literal(id).unwrap(), "\"string\"");
    }

    #[test]
    fn test_declaration() {
        let mut generator = Generator::new("a");
        let id = generator.add_typed_literal(
            "origin",
            point(),
            Value::record([("X", Value::Int(0)), ("Y", Value::Int(0))]),
        );
        assert_eq!(
            generator.declaration(id).unwrap(),
            "var origin p0.Point = p0.Point{\nX:0,\nY:0,\n}"
        );
    }

    #[test]
    fn test_unknown_binding() {
        let mut generator = Generator::new("a");
        let err = generator.literal(BindingId(3)).unwrap_err();
        assert!(matches!(err, RenderError::UnknownBinding(3)));
    }

    #[test]
    fn test_no_import_block_without_imports() {
        let mut generator = Generator::new("consts");
        generator.add_literal("answer", &42i64);
        generator.add_literal("names", &vec!["a".to_string()]);

        assert_eq!(
            generator.render().unwrap(),
            "package consts\nvar answer int64 = 42\nvar names []string = []string{\n\"a\",\n}\n"
        );
    }

    #[test]
    fn test_payload_imports_discovered_at_render_time() {
        let mut generator = Generator::new("a");
        generator.add_literal(
            "v",
            &Dynamic::new(point(), Value::record([("X", Value::Int(1)), ("Y", Value::Int(2))])),
        );
        assert!(generator.imports().is_empty());

        let code = generator.render().unwrap();
        assert_eq!(
            code,
            "package a\nimport (\n\tp0 \"example.com/geo\"\n)\nvar v any = p0.Point{\nX:1,\nY:2,\n}\n"
        );
    }

    #[test]
    fn test_generated_notice() {
        let config = GeneratorConfig {
            generated_by: Some("literalgen".to_string()),
            ..GeneratorConfig::default()
        };
        let mut generator = Generator::with_config("a", config);
        generator.add_literal("ok", &true);

        assert_eq!(
            generator.render().unwrap(),
            "// Code generated by literalgen. DO NOT EDIT.\n\npackage a\nvar ok bool = true\n"
        );
    }

    #[test]
    fn test_custom_alias_prefix() {
        let config = GeneratorConfig {
            alias_prefix: "pkg".to_string(),
            ..GeneratorConfig::default()
        };
        let mut generator = Generator::with_config("a", config);
        generator.add_typed_literal("p", Type::pointer(point()), Value::Nil);

        assert_eq!(
            generator.render().unwrap(),
            "package a\nimport (\n\tpkg0 \"example.com/geo\"\n)\nvar p *pkg0.Point = nil\n"
        );
    }

    #[test]
    fn test_emit_all_writes_rendered_text() {
        let mut generator = Generator::new("a");
        generator.add_literal("x", &1.5f64);

        let mut buffer = Vec::new();
        generator.emit_all(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "package a\nvar x float64 = 1.5\n"
        );
    }

    #[test]
    fn test_render_error_aborts_generation() {
        let mut generator = Generator::new("a");
        generator.add_literal("ok", &1i64);
        generator.add_typed_literal("bad", Type::string(), Value::Int(1));

        assert!(generator.render().is_err());
    }
}
