//! Bake operation - Go file generation from a manifest.

use std::path::Path;

use eyre::{Context, Result};
use literalgen_manifest::LiteralgenToml;

use crate::reports::{BakeReport, GenerationResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Go file to write.
    pub output: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the bake operation.
///
/// Renders every binding of the manifest and writes the Go file, creating
/// parent directories as needed.
pub fn bake(file: &LiteralgenToml, opts: BakeOptions) -> Result<BakeReport> {
    let mut generator = file.generator();
    let code = generator
        .render()
        .wrap_err_with(|| format!("Failed to render '{}'", file.path().display()))?;

    let result = if opts.dry_run {
        GenerationResult::Preview {
            path: opts.output.to_path_buf(),
            content: code,
        }
    } else {
        if let Some(parent) = opts.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create '{}'", parent.display()))?;
        }
        std::fs::write(opts.output, &code)
            .wrap_err_with(|| format!("Failed to write '{}'", opts.output.display()))?;
        tracing::debug!(path = %opts.output.display(), bytes = code.len(), "wrote go file");
        GenerationResult::Written {
            path: opts.output.to_path_buf(),
        }
    };

    Ok(BakeReport {
        package: generator.package().to_string(),
        bindings: super::summarize(&generator),
        imports: super::imports(&generator),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures::write_manifest;

    const EXPECTED: &str = "package fixtures\nimport (\n\tp0 \"example.com/geo\"\n)\nvar origin *p0.Point = &p0.Point{\nX:0,\nY:0,\n}\nvar greeting any = \"hello\"\n";

    #[test]
    fn test_bake_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let (_, file) = write_manifest(dir.path());
        let output = dir.path().join("gen/nested/literals_gen.go");

        let report = bake(
            &file,
            BakeOptions {
                output: &output,
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), EXPECTED);
        assert_eq!(report.package, "fixtures");
        assert_eq!(report.bindings.len(), 2);
        assert_eq!(report.bindings[0].ty, "*example.com/geo.Point");
        assert_eq!(
            report.imports,
            vec![("p0".to_string(), "example.com/geo".to_string())]
        );
        assert!(matches!(report.result, GenerationResult::Written { .. }));
    }

    #[test]
    fn test_bake_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (_, file) = write_manifest(dir.path());
        let output = dir.path().join("literals_gen.go");

        let report = bake(
            &file,
            BakeOptions {
                output: &output,
                dry_run: true,
            },
        )
        .unwrap();

        assert!(!output.exists());
        match report.result {
            GenerationResult::Preview { content, .. } => assert_eq!(content, EXPECTED),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
