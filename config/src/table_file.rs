//! Option tables stored as YAML or JSON files.
//!
//! A table file names the program it belongs to and lists its option
//! definitions in search order. The format is picked from the file
//! extension.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! program: archiver
//! options:
//!   - short: v
//!     long: verbose
//!   - short: o
//!     long: output
//!     takes_value: true
//!     description: Archive to write
//!   - takes_value: true
//! ```

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use optbind_core::{OptionDef, OptionTable, validate_table};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

/// Current table file format version.
pub const TABLE_FILE_VERSION: &str = "1.0";

/// Serialization format of a table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Yaml,
}

impl TableFormat {
    /// Picks the format from the extension of `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optbind_config::TableFormat;
    ///
    /// assert_eq!(TableFormat::from_path("opts.yml"), Some(TableFormat::Yaml));
    /// assert_eq!(TableFormat::from_path("opts.JSON"), Some(TableFormat::Json));
    /// assert_eq!(TableFormat::from_path("opts.toml"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Option table together with its file metadata.
///
/// # Examples
///
/// ```
/// use optbind_config::TableFile;
///
/// let yaml = r#"
/// version: "1.0"
/// program: archiver
/// options:
///   - short: v
///     long: verbose
///   - takes_value: true
/// "#;
/// let file = TableFile::from_yaml_str(yaml).unwrap();
/// assert_eq!(file.program.as_deref(), Some("archiver"));
///
/// let table = file.into_table();
/// assert_eq!(table.len(), 2);
/// assert!(table.find_long("verbose").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFile {
    /// File format version (e.g., `"1.0"`).
    pub version: String,
    /// Program the table belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Definitions in search order.
    #[serde(default)]
    pub options: OptionTable,
}

impl TableFile {
    /// Wraps `options` with the current format version.
    pub fn new(program: Option<&str>, options: OptionTable) -> Self {
        Self {
            version: TABLE_FILE_VERSION.to_string(),
            program: program.map(String::from),
            options,
        }
    }

    /// Builds a file from a list of definitions.
    pub fn from_defs(program: Option<&str>, defs: Vec<OptionDef>) -> Self {
        Self::new(program, defs.into())
    }

    /// Returns the option table.
    pub fn table(&self) -> &OptionTable {
        &self.options
    }

    /// Consumes the file, returning the option table.
    pub fn into_table(self) -> OptionTable {
        self.options
    }

    /// Parses a table file from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`YamlError`](ConfigError::YamlError) if parsing fails.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Parses a table file from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError`](ConfigError::JsonError) if parsing fails.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Renders the table file as YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Renders the table file as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a table file, picking the format from the extension.
    ///
    /// Validation issues are logged but do not fail the load; use
    /// [`load_validated`](TableFile::load_validated) to reject them.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFormat`](ConfigError::UnsupportedFormat) for an
    /// unknown extension, [`IoError`](ConfigError::IoError) if the file cannot
    /// be read, or a serialization error if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = TableFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let table_file: Self = match format {
            TableFormat::Json => serde_json::from_reader(reader)?,
            TableFormat::Yaml => serde_yaml::from_reader(reader)?,
        };

        debug!(
            path = %path.display(),
            options = table_file.options.len(),
            "Loaded option table"
        );
        for issue in validate_table(&table_file.options) {
            warn!(path = %path.display(), %issue, "Option table issue");
        }

        Ok(table_file)
    }

    /// Loads a table file and rejects it if validation reports issues.
    ///
    /// # Errors
    ///
    /// Same as [`load`](TableFile::load), plus
    /// [`InvalidTable`](ConfigError::InvalidTable) listing every issue.
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self> {
        let table_file = Self::load(path)?;
        let issues = validate_table(&table_file.options);
        if !issues.is_empty() {
            return Err(ConfigError::InvalidTable(issues));
        }
        Ok(table_file)
    }

    /// Saves the table file, picking the format from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFormat`](ConfigError::UnsupportedFormat) for an
    /// unknown extension, [`IoError`](ConfigError::IoError) if the file cannot
    /// be written, or a serialization error.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = TableFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        match format {
            TableFormat::Json => serde_json::to_writer_pretty(&mut writer, self)?,
            TableFormat::Yaml => serde_yaml::to_writer(&mut writer, self)?,
        }
        writer.flush()?;
        Ok(())
    }
}
