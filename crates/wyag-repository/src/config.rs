//! A reader and writer for git's INI dialect.
//!
//! Scaled to what the repository actually consults: sections, keys and
//! values, `#`/`;` comments, tab or space indentation. Subsection names
//! (`[remote "origin"]`) are accepted and folded into the section key so
//! an upstream-produced config loads without complaint.

use std::path::Path;

use crate::RepoError;

/// An ordered list of sections, each an ordered list of key/value pairs.
/// Section and key names are stored lowercased; lookups take the last
/// value when a key repeats.
#[derive(Debug, Clone, Default)]
pub struct Config {
    sections: Vec<Section>,
}

#[derive(Debug, Clone)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Config {
    /// The config a fresh repository is seeded with.
    pub fn repository_defaults() -> Self {
        let mut config = Config::default();
        config.set("core", "repositoryformatversion", "0");
        config.set("core", "filemode", "false");
        config.set("core", "bare", "false");
        config
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, RepoError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse config text.
    pub fn parse(content: &str, path: &Path) -> Result<Self, RepoError> {
        let mut config = Config::default();
        let mut current: Option<usize> = None;

        for (idx, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let inner = rest.strip_suffix(']').ok_or_else(|| RepoError::ConfigParse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    message: "unterminated section header".into(),
                })?;
                // `[section "subsection"]` folds to `section.subsection`.
                let name = match inner.split_once(' ') {
                    Some((section, sub)) => {
                        let sub = sub.trim().trim_matches('"');
                        format!("{}.{}", section.to_ascii_lowercase(), sub)
                    }
                    None => inner.to_ascii_lowercase(),
                };
                config.sections.push(Section {
                    name,
                    entries: Vec::new(),
                });
                current = Some(config.sections.len() - 1);
                continue;
            }

            let section = current.ok_or_else(|| RepoError::ConfigParse {
                path: path.to_path_buf(),
                line: idx + 1,
                message: "key outside of any section".into(),
            })?;

            // A key with no `=` is a boolean true in git's dialect.
            let (key, value) = match line.split_once('=') {
                Some((key, value)) => (key.trim().to_ascii_lowercase(), value.trim().to_string()),
                None => (line.to_ascii_lowercase(), "true".to_string()),
            };
            config.sections[section].entries.push((key, value));
        }

        Ok(config)
    }

    /// Set a key, appending the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let section_name = section.to_ascii_lowercase();
        let idx = match self.sections.iter().position(|s| s.name == section_name) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section {
                    name: section_name,
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };
        self.sections[idx]
            .entries
            .push((key.to_ascii_lowercase(), value.to_string()));
    }

    /// Look up a string value. The last occurrence wins.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let section_name = section.to_ascii_lowercase();
        let key = key.to_ascii_lowercase();
        self.sections
            .iter()
            .filter(|s| s.name == section_name)
            .flat_map(|s| s.entries.iter())
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .next_back()
    }

    /// Look up an integer value; `None` if absent or not an integer.
    pub fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        self.get(section, key)?.parse().ok()
    }

    /// Render to the canonical tab-indented form.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            match section.name.split_once('.') {
                Some((name, sub)) => {
                    out.push_str(&format!("[{name} \"{sub}\"]\n"));
                }
                None => out.push_str(&format!("[{}]\n", section.name)),
            }
            for (key, value) in &section.entries {
                out.push_str(&format!("\t{key} = {value}\n"));
            }
        }
        out
    }

    /// Write to disk in the canonical form.
    pub fn save(&self, path: &Path) -> Result<(), RepoError> {
        std::fs::write(path, self.serialize())?;
        Ok(())
    }
}
