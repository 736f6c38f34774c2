//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building Go source line by line.
///
/// # Example
///
/// ```
/// use literalgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::go()
///     .line("package fixtures")
///     .block_with_close("import (", ")", |b| b.line("p0 \"example.com/geo\""))
///     .build();
///
/// assert_eq!(code, "package fixtures\nimport (\n\tp0 \"example.com/geo\"\n)\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// A builder with tab indentation.
    pub fn go() -> Self {
        Self::new(Indent::Tab)
    }

    /// Add a line with current indentation.
    ///
    /// Embedded newlines are kept verbatim; only the first line is indented.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `//` comment line.
    pub fn comment(self, text: &str) -> Self {
        self.line(&format!("// {}", text))
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an indented block between `header` and `close`.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.indent.write_to(&mut self.buffer);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::go().line("var x int = 1").build();
        assert_eq!(code, "var x int = 1\n");
    }

    #[test]
    fn test_block_with_close() {
        let code = CodeBuilder::go()
            .block_with_close("import (", ")", |b| {
                b.line("p0 \"a/b\"").line("p1 \"c/d\"")
            })
            .build();

        assert_eq!(code, "import (\n\tp0 \"a/b\"\n\tp1 \"c/d\"\n)\n");
    }

    #[test]
    fn test_multiline_content_is_verbatim() {
        let code = CodeBuilder::go()
            .indent()
            .line("T{\nA:1,\n}")
            .build();

        assert_eq!(code, "\tT{\nA:1,\n}\n");
    }

    #[test]
    fn test_comment_and_blank() {
        let code = CodeBuilder::go()
            .comment("Code generated by literalgen. DO NOT EDIT.")
            .blank()
            .line("package a")
            .build();

        assert_eq!(
            code,
            "// Code generated by literalgen. DO NOT EDIT.\n\npackage a\n"
        );
    }

    #[test]
    fn test_conditional() {
        let with = CodeBuilder::go().when(true, |b| b.line("a")).build();
        let without = CodeBuilder::go().when(false, |b| b.line("a")).build();

        assert_eq!(with, "a\n");
        assert_eq!(without, "");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::go()
            .each(["var a int = 1", "var b int = 2"], |b, decl| b.line(decl))
            .build();

        assert_eq!(code, "var a int = 1\nvar b int = 2\n");
    }

    #[test]
    fn test_spaces_indent() {
        let code = CodeBuilder::new(Indent::Spaces(4))
            .block_with_close("import (", ")", |b| b.line("x"))
            .build();

        assert_eq!(code, "import (\n    x\n)\n");
    }
}
