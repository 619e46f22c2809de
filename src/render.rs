//! README template rendering
//!
//! Placeholders look like `${name}`. Substitution is safe: a placeholder
//! whose key is missing from the mapping stays in the output verbatim, it
//! never errors.

use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use log::debug;
use regex::{Captures, Regex};

use crate::info::PersonalInfo;

/// An immutable template with `${identifier}` placeholders
pub struct Template {
    text: String,
    placeholder: Regex,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Ok(Self {
            text: text.into(),
            placeholder: Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")?,
        })
    }

    /// Read a UTF-8 template file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .context(format!("Failed to read template {}", path.display()))?;
        debug!("loaded template {} ({} bytes)", path.display(), text.len());
        Self::new(text)
    }

    /// Replace every placeholder whose key exists in `info` with its
    /// value; leave unknown placeholders untouched.
    pub fn safe_substitute(&self, info: &PersonalInfo) -> String {
        self.placeholder
            .replace_all(&self.text, |caps: &Captures| match info.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(pairs: &[(&str, &str)]) -> PersonalInfo {
        let mut info = PersonalInfo::new();
        for (k, v) in pairs {
            info.set(k.to_string(), v.to_string());
        }
        info
    }

    #[test]
    fn test_known_keys_substituted() {
        let tmpl = Template::new("Hello ${name}, id ${id}").unwrap();
        let out = tmpl.safe_substitute(&info(&[("name", "Alice"), ("id", "0856039")]));

        assert_eq!(out, "Hello Alice, id 0856039");
    }

    #[test]
    fn test_unknown_keys_left_verbatim() {
        let tmpl = Template::new("Hello ${name}, time=${last_maketime}").unwrap();
        let out = tmpl.safe_substitute(&info(&[("name", "Alice")]));

        assert_eq!(out, "Hello Alice, time=${last_maketime}");
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        let text = "no ${fields} are ${known} here";
        let tmpl = Template::new(text).unwrap();

        assert_eq!(tmpl.safe_substitute(&PersonalInfo::new()), text);
    }

    #[test]
    fn test_repeated_placeholder() {
        let tmpl = Template::new("${name} and ${name} again").unwrap();
        let out = tmpl.safe_substitute(&info(&[("name", "Bob")]));

        assert_eq!(out, "Bob and Bob again");
    }

    #[test]
    fn test_non_placeholder_dollars_untouched() {
        let tmpl = Template::new("cost $5, brace {x}, bad ${1bad}").unwrap();
        let out = tmpl.safe_substitute(&info(&[("x", "y")]));

        assert_eq!(out, "cost $5, brace {x}, bad ${1bad}");
    }

    #[test]
    fn test_substituted_value_may_contain_dollar() {
        // Replacement text is literal, not re-scanned
        let tmpl = Template::new("v=${a}").unwrap();
        let out = tmpl.safe_substitute(&info(&[("a", "${b}"), ("b", "nope")]));

        assert_eq!(out, "v=${b}");
    }
}
