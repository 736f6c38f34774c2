//! Check command report data structures.

use std::path::PathBuf;

use super::{
    BindingSummary,
    output::{Output, Report},
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Package name of the unit.
    pub package: String,
    /// Bindings in declaration order.
    pub bindings: Vec<BindingSummary>,
    /// `(alias, path)` pairs the rendered file would import.
    pub imports: Vec<(String, String)>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value_indented("package", &self.package);
        out.key_value_indented("imports", &self.imports.len().to_string());
        out.newline();

        let count = self.bindings.len();
        out.section(&format!(
            "{} binding{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for binding in &self.bindings {
            out.list_item(&format!("{} {}", binding.name, binding.ty));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_render_check() {
        let report = CheckReport {
            config_path: PathBuf::from("literalgen.toml"),
            package: "fixtures".to_string(),
            bindings: vec![
                BindingSummary {
                    name: "origin".to_string(),
                    ty: "*example.com/geo.Point".to_string(),
                },
                BindingSummary {
                    name: "greeting".to_string(),
                    ty: "any".to_string(),
                },
            ],
            imports: vec![("p0".to_string(), "example.com/geo".to_string())],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "✓ literalgen.toml is valid",
                "",
                "  package: fixtures",
                "  imports: 1",
                "",
                "2 bindings:",
                "  - origin *example.com/geo.Point",
                "  - greeting any",
            ]
        );
    }
}
