//! fsqlc.toml parsing.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result, validate};

/// Root configuration for fsqlc.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Generated code namespace
    pub package: PackageConfig,

    /// Type mapping behavior
    #[serde(default)]
    pub types: TypesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    /// F# namespace the generated files live in (e.g. "MyApp.Db")
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypesConfig {
    /// Report unrecognized SQL types as errors instead of warnings
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Configuration with the given package and default settings.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: PackageConfig {
                name: package.into(),
            },
            types: TypesConfig::default(),
        }
    }

    /// Parse an fsqlc.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse fsqlc.toml content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        validate::validate_package(&config.package.name, content, filename)?;
        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "fsqlc.toml")
    }
}
