//! Generator Configuration
//!
//! `GeneratorOptions` carries every knob of a run. Values come from the
//! defaults below, then an optional TOML file, then command-line flags.

use std::path::Path;

use serde::Deserialize;

use crate::error::GenError;
use crate::model::DEFAULT_CAPACITY;
use crate::names::NameGenerator;

pub const DEFAULT_COMMAND_COUNT: u64 = 300_000;
pub const DEFAULT_NAME_MIN_LEN: usize = 3;
pub const DEFAULT_NAME_MAX_LEN: usize = 7;
pub const WRITE_MAX_LENGTH: usize = 320;

/// Options for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Loop iterations before the closing `checkfs`
    pub command_count: u64,
    /// Maximum live files + directories
    pub capacity: usize,
    /// RNG seed; drawn at random when absent
    pub seed: Option<u64>,
    /// Shortest generated name, first letter included
    pub name_min_len: usize,
    /// Longest generated name
    pub name_max_len: usize,
    /// Longest `write` payload
    pub write_max_len: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            command_count: DEFAULT_COMMAND_COUNT,
            capacity: DEFAULT_CAPACITY,
            seed: None,
            name_min_len: DEFAULT_NAME_MIN_LEN,
            name_max_len: DEFAULT_NAME_MAX_LEN,
            write_max_len: WRITE_MAX_LENGTH,
        }
    }
}

impl GeneratorOptions {
    pub fn validate(&self) -> Result<(), GenError> {
        if self.capacity == 0 {
            return Err(GenError::config("capacity must be at least 1"));
        }
        if self.name_min_len == 0 {
            return Err(GenError::config("name_min_len must be at least 1"));
        }
        if self.name_min_len > self.name_max_len {
            return Err(GenError::config(format!(
                "name_min_len ({}) exceeds name_max_len ({})",
                self.name_min_len, self.name_max_len
            )));
        }
        if self.write_max_len == 0 {
            return Err(GenError::config("write_max_len must be at least 1"));
        }
        Ok(())
    }

    pub fn name_generator(&self) -> NameGenerator {
        NameGenerator::new(self.name_min_len, self.name_max_len, self.write_max_len)
    }

    /// Overwrite every option the file sets.
    pub fn merge(&mut self, file: ConfigFile) {
        if let Some(v) = file.command_count {
            self.command_count = v;
        }
        if let Some(v) = file.capacity {
            self.capacity = v;
        }
        if let Some(v) = file.seed {
            self.seed = Some(v);
        }
        if let Some(v) = file.name_min_len {
            self.name_min_len = v;
        }
        if let Some(v) = file.name_max_len {
            self.name_max_len = v;
        }
        if let Some(v) = file.write_max_len {
            self.write_max_len = v;
        }
    }
}

/// On-disk form of `GeneratorOptions`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub command_count: Option<u64>,
    pub capacity: Option<usize>,
    pub seed: Option<u64>,
    pub name_min_len: Option<usize>,
    pub name_max_len: Option<usize>,
    pub write_max_len: Option<usize>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, GenError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, GenError> {
        let text = std::fs::read_to_string(path).map_err(|source| GenError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = GeneratorOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.command_count, 300_000);
        assert_eq!(options.capacity, 16);
    }

    #[test]
    fn test_parse_partial_file() {
        let file = ConfigFile::parse("capacity = 32\nseed = 5\n").unwrap();
        let mut options = GeneratorOptions::default();
        options.merge(file);
        assert_eq!(options.capacity, 32);
        assert_eq!(options.seed, Some(5));
        assert_eq!(options.write_max_len, WRITE_MAX_LENGTH);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ConfigFile::parse("capcity = 32\n").unwrap_err();
        assert!(matches!(err, GenError::ConfigParse(_)));
    }

    #[test]
    fn test_empty_file_changes_nothing() {
        let mut options = GeneratorOptions::default();
        options.merge(ConfigFile::parse("").unwrap());
        assert_eq!(options, GeneratorOptions::default());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let options = GeneratorOptions { capacity: 0, ..Default::default() };
        assert!(matches!(options.validate(), Err(GenError::Config { .. })));

        let options = GeneratorOptions { name_min_len: 8, name_max_len: 4, ..Default::default() };
        assert!(options.validate().is_err());

        let options = GeneratorOptions { write_max_len: 0, ..Default::default() };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ConfigFile::load(Path::new("/nonexistent/fsgen.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/fsgen.toml"));
    }
}
