//! Check operation - manifest validation.

use eyre::{Context, Result};
use literalgen_manifest::LiteralgenToml;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The manifest was already parsed and lowered when it was opened; this
/// renders it in memory so rendering faults surface too.
pub fn check(file: &LiteralgenToml) -> Result<CheckReport> {
    let mut generator = file.generator();
    generator
        .render()
        .wrap_err_with(|| format!("Failed to render '{}'", file.path().display()))?;

    Ok(CheckReport {
        config_path: file.path().to_path_buf(),
        package: generator.package().to_string(),
        bindings: super::summarize(&generator),
        imports: super::imports(&generator),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures::write_manifest;

    #[test]
    fn test_check_reports_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let (path, file) = write_manifest(dir.path());

        let report = check(&file).unwrap();
        assert_eq!(report.config_path, path);
        assert_eq!(report.package, "fixtures");
        let names: Vec<_> = report.bindings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["origin", "greeting"]);
        assert_eq!(report.imports.len(), 1);
    }

    #[test]
    fn test_check_surfaces_render_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("literalgen.toml");
        std::fs::write(
            &path,
            "[unit]\npackage = \"x\"\n\n[types.Secret]\nfields = [{ name = \"key\", type = \"string\" }]\n\n[[bindings]]\nname = \"s\"\ntype = \"Secret\"\nvalue = { key = \"k\" }\n",
        )
        .unwrap();
        let file = LiteralgenToml::open(&path).unwrap();

        let err = check(&file).unwrap_err();
        assert!(format!("{:?}", err).contains("is not exported"));
    }
}
