use std::path::{Path, PathBuf};

use literalgen_codegen::Generator;

use super::Manifest;
use crate::{Result, Unit, error::SourceContext, lower};

/// A literalgen.toml file with its raw content, parsed manifest and lowered unit.
pub struct LiteralgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
    unit: Unit,
}

impl LiteralgenToml {
    /// Open, parse and lower a literalgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;
        let unit = lower(&manifest, &SourceContext::new(content.as_str(), filename))?;

        Ok(Self {
            path,
            content,
            manifest,
            unit,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Get the lowered bindings.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Build a generator holding every binding of the file.
    pub fn generator(&self) -> Generator {
        self.unit.generator()
    }
}
