//! Indentation configuration for generated code.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// Tab character, as `gofmt` writes it.
    #[default]
    Tab,
    /// Spaces with the specified width.
    Spaces(u8),
}

impl Indent {
    /// Append one indentation level to `buffer`.
    pub fn write_to(&self, buffer: &mut String) {
        match self {
            Self::Tab => buffer.push('\t'),
            Self::Spaces(width) => {
                for _ in 0..*width {
                    buffer.push(' ');
                }
            }
        }
    }
}
