//! Bake command report data structures.

use std::path::PathBuf;

use super::{
    BindingSummary,
    output::{Output, Report},
};

/// Report data from Go file generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Package name written in the file header.
    pub package: String,
    /// Bindings in declaration order.
    pub bindings: Vec<BindingSummary>,
    /// `(alias, path)` pairs of the import block.
    pub imports: Vec<(String, String)>,
    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written { path: PathBuf },
    /// Dry-run preview.
    Preview { path: PathBuf, content: String },
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.preformatted(content);
            }
            GenerationResult::Written { path } => {
                out.preformatted(&format!("package {}", self.package));
                out.newline();

                out.section(&format!("Bindings ({})", self.bindings.len()));
                for binding in &self.bindings {
                    out.list_item(&format!("{} {}", binding.name, binding.ty));
                }

                if !self.imports.is_empty() {
                    out.newline();
                    out.section(&format!("Imports ({})", self.imports.len()));
                    for (alias, path) in &self.imports {
                        out.key_value_indented(alias, path);
                    }
                }

                out.newline();
                out.preformatted(&format!("Generated: {}", path.display()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    fn report(result: GenerationResult) -> BakeReport {
        BakeReport {
            package: "fixtures".to_string(),
            bindings: vec![BindingSummary {
                name: "origin".to_string(),
                ty: "*example.com/geo.Point".to_string(),
            }],
            imports: vec![("p0".to_string(), "example.com/geo".to_string())],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Written {
            path: PathBuf::from("gen/literals_gen.go"),
        })
        .render(&mut out);

        assert_eq!(
            out.lines,
            [
                "package fixtures",
                "",
                "Bindings (1):",
                "  - origin *example.com/geo.Point",
                "",
                "Imports (1):",
                "  p0: example.com/geo",
                "",
                "Generated: gen/literals_gen.go",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Preview {
            path: PathBuf::from("literals_gen.go"),
            content: "package fixtures\n".to_string(),
        })
        .render(&mut out);

        assert_eq!(out.lines, ["-- literals_gen.go --", "package fixtures\n"]);
    }
}
