//! Student info loading and enrichment
//!
//! The config file is INI text. Only the `[info]` section is consulted;
//! keys are lowercased and insertion order is preserved so the enrichment
//! fields land in a defined position.

use std::env;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use eyre::{Context, Result};
use log::{debug, warn};

/// Environment variable that gates execution and feeds `docker_env_tag`
pub const DOCKER_ENV_TAGNAME: &str = "STATUS_DOCKER_ACTIVATED";

/// Substituted for `docker_env_tag` when the marker variable is unset
pub const NO_DOCKER_TAG: &str = "NOT USING DOCKER";

/// Timestamp pattern for `last_maketime` (12-hour clock with AM/PM)
pub const MAKETIME_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// Ordered field-name to value mapping for one student.
///
/// Backed by an association list: `set` overwrites an existing key in
/// place, otherwise appends, so render output is deterministic for a
/// given config file.
#[derive(Debug, Clone, Default)]
pub struct PersonalInfo {
    fields: Vec<(String, String)>,
}

/// Runtime-derived values injected into the render context.
///
/// Captured once in `main` so the render path never reaches into process
/// globals itself.
#[derive(Debug, Clone)]
pub struct RuntimeFields {
    /// Local time at which the run started
    pub maketime: DateTime<Local>,
    /// Value of the docker activation marker, if set
    pub docker_tag: Option<String>,
}

impl RuntimeFields {
    /// Snapshot the clock and the docker marker variable
    pub fn capture() -> Self {
        Self {
            maketime: Local::now(),
            docker_tag: env::var(DOCKER_ENV_TAGNAME).ok(),
        }
    }
}

impl PersonalInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the named section of an INI file into an ordered mapping.
    ///
    /// A file without the section yields an empty mapping; a missing or
    /// unreadable file is an error.
    pub fn load(path: impl AsRef<Path>, section: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file {}", path.display()))?;

        let info = Self::parse_ini_section(&content, section);
        if info.is_empty() {
            warn!("no [{}] section found in {}", section, path.display());
        } else {
            debug!("loaded {} field(s) from {}", info.len(), path.display());
        }
        Ok(info)
    }

    /// Extract one `[section]` of INI text.
    ///
    /// Follows configparser conventions: `#`/`;` comments, `=` or `:`
    /// separators, surrounding whitespace trimmed, keys lowercased.
    fn parse_ini_section(content: &str, section: &str) -> Self {
        let mut info = Self::new();
        let mut in_section = false;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                in_section = header.trim() == section;
                continue;
            }
            if !in_section {
                continue;
            }
            if let Some((key, value)) = line.split_once(['=', ':']) {
                info.set(key.trim().to_lowercase(), value.trim().to_string());
            }
        }

        info
    }

    /// Insert the two computed fields, overwriting any same-named keys
    /// from the config file. Skipped entirely in restore mode.
    pub fn enrich(&mut self, runtime: &RuntimeFields) {
        self.set(
            "last_maketime".to_string(),
            runtime.maketime.format(MAKETIME_FORMAT).to_string(),
        );
        self.set(
            "docker_env_tag".to_string(),
            runtime
                .docker_tag
                .clone()
                .unwrap_or_else(|| NO_DOCKER_TAG.to_string()),
        );
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Overwrite in place if the key exists, otherwise append
    pub fn set(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
