//! Key/value settings documents backed by human-editable YAML files.
//!
//! This module provides [`SettingsFile`], the ordered dotted-key document
//! abstraction underlying both the main configuration loader and the
//! per-arena loader. Its central contract is the get-or-set-default pattern:
//! every typed accessor returns the stored value when it is present and
//! well-typed, and otherwise writes the supplied default into the in-memory
//! document before returning it. After a load-and-save cycle, every key the
//! loader consulted is therefore present in the persisted file with either
//! the user's original value or the applied default.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// An ordered settings document bound to a file path.
///
/// Keys are dotted paths (`score.save-interval`) navigating nested mappings.
/// Unknown keys the loader never consults are preserved verbatim across a
/// load-and-save cycle.
///
/// # Examples
///
/// ```no_run
/// use skywars_config::SettingsFile;
///
/// let mut settings = SettingsFile::load("plugins/SkyWars/main-config.yml").unwrap();
/// let debug = settings.get_set_bool("debug", false);
/// settings.save("SkyWars configuration").unwrap();
/// assert!(!debug);
/// ```
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
    root: Mapping,
}

impl SettingsFile {
    /// Load a settings document from disk.
    ///
    /// A missing file yields an empty document bound to the same path. An
    /// existing file that is not parseable YAML, or whose top-level value is
    /// not a mapping, is a format error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read, and
    /// [`Error::Format`] if it cannot be parsed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                root: Mapping::new(),
            });
        }
        let contents = fs::read_to_string(&path)?;
        let root = match serde_yaml::from_str::<Value>(&contents) {
            Ok(Value::Mapping(map)) => map,
            Ok(Value::Null) => Mapping::new(),
            Ok(_) => {
                return Err(Error::Format {
                    path,
                    message: "top-level value is not a mapping".to_string(),
                })
            }
            Err(source) => {
                return Err(Error::Format {
                    path,
                    message: source.to_string(),
                })
            }
        };
        Ok(Self { path, root })
    }

    /// The file path this document is bound to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying document mapping.
    #[must_use]
    pub fn document(&self) -> &Mapping {
        &self.root
    }

    /// Returns a boolean, writing the default back if absent or ill-typed.
    pub fn get_set_bool(&mut self, key: &str, default: bool) -> bool {
        if let Some(Value::Bool(stored)) = self.get(key) {
            return *stored;
        }
        self.set(key, Value::Bool(default));
        default
    }

    /// Returns an integer, writing the default back if absent or ill-typed.
    pub fn get_set_int(&mut self, key: &str, default: i32) -> i32 {
        if let Some(stored) = self.get(key).and_then(Value::as_i64) {
            if let Ok(stored) = i32::try_from(stored) {
                return stored;
            }
        }
        self.set(key, Value::from(i64::from(default)));
        default
    }

    /// Returns a long integer, writing the default back if absent or ill-typed.
    pub fn get_set_long(&mut self, key: &str, default: i64) -> i64 {
        if let Some(stored) = self.get(key).and_then(Value::as_i64) {
            return stored;
        }
        self.set(key, Value::from(default));
        default
    }

    /// Returns a string, writing the default back if absent or ill-typed.
    pub fn get_set_string(&mut self, key: &str, default: &str) -> String {
        if let Some(Value::String(stored)) = self.get(key) {
            return stored.clone();
        }
        self.set(key, Value::String(default.to_owned()));
        default.to_owned()
    }

    /// Returns a string list, writing the default back if absent or if any
    /// element is not a string.
    pub fn get_set_string_list(&mut self, key: &str, default: &[&str]) -> Vec<String> {
        if let Some(Value::Sequence(seq)) = self.get(key) {
            let strings: Option<Vec<String>> = seq
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect();
            if let Some(strings) = strings {
                return strings;
            }
        }
        let values: Vec<String> = default.iter().map(|item| (*item).to_owned()).collect();
        self.set(
            key,
            Value::Sequence(values.iter().cloned().map(Value::String).collect()),
        );
        values
    }

    /// Returns a list of long integers, writing the default back if absent or
    /// if any element is not an integer.
    pub fn get_set_long_list(&mut self, key: &str, default: &[i64]) -> Vec<i64> {
        if let Some(Value::Sequence(seq)) = self.get(key) {
            let numbers: Option<Vec<i64>> = seq.iter().map(Value::as_i64).collect();
            if let Some(numbers) = numbers {
                return numbers;
            }
        }
        self.set(
            key,
            Value::Sequence(default.iter().copied().map(Value::from).collect()),
        );
        default.to_vec()
    }

    /// Returns a string-to-string map, writing the default back if absent or
    /// if any entry is not a string pair.
    pub fn get_set_string_map(
        &mut self,
        key: &str,
        default: &[(&str, &str)],
    ) -> HashMap<String, String> {
        if let Some(Value::Mapping(map)) = self.get(key) {
            let entries: Option<HashMap<String, String>> = map
                .iter()
                .map(|(map_key, map_value)| {
                    Some((
                        map_key.as_str()?.to_owned(),
                        map_value.as_str()?.to_owned(),
                    ))
                })
                .collect();
            if let Some(entries) = entries {
                return entries;
            }
        }
        let mut stored = Mapping::new();
        for (entry_key, entry_value) in default {
            stored.insert(
                Value::String((*entry_key).to_owned()),
                Value::String((*entry_value).to_owned()),
            );
        }
        self.set(key, Value::Mapping(stored));
        default
            .iter()
            .map(|(entry_key, entry_value)| ((*entry_key).to_owned(), (*entry_value).to_owned()))
            .collect()
    }

    /// Returns a string-to-string-list map as ordered entries, writing the
    /// default back if absent or ill-typed. Entries keep the document's
    /// written order, so downstream consumers (queue loading) follow the
    /// file as the operator arranged it.
    pub fn get_set_string_list_map(
        &mut self,
        key: &str,
        default: &[(&str, &[&str])],
    ) -> Vec<(String, Vec<String>)> {
        if let Some(Value::Mapping(map)) = self.get(key) {
            let entries: Option<Vec<(String, Vec<String>)>> = map
                .iter()
                .map(|(map_key, map_value)| {
                    let name = map_key.as_str()?.to_owned();
                    let Value::Sequence(seq) = map_value else {
                        return None;
                    };
                    let list: Option<Vec<String>> = seq
                        .iter()
                        .map(|item| item.as_str().map(str::to_owned))
                        .collect();
                    Some((name, list?))
                })
                .collect();
            if let Some(entries) = entries {
                return entries;
            }
        }
        let mut stored = Mapping::new();
        for (entry_key, entry_list) in default {
            stored.insert(
                Value::String((*entry_key).to_owned()),
                Value::Sequence(
                    entry_list
                        .iter()
                        .map(|item| Value::String((*item).to_owned()))
                        .collect(),
                ),
            );
        }
        self.set(key, Value::Mapping(stored));
        default
            .iter()
            .map(|(entry_key, entry_list)| {
                (
                    (*entry_key).to_owned(),
                    entry_list.iter().map(|item| (*item).to_owned()).collect(),
                )
            })
            .collect()
    }

    /// Returns exactly four string lines, padding or truncating a stored
    /// list of the wrong length with the defaults and writing the normalized
    /// value back. Used for the physical join-sign text.
    pub fn get_set_sign_lines(&mut self, key: &str, default: &[&str; 4]) -> [String; 4] {
        let mut lines: Vec<String> = match self.get(key) {
            Some(Value::Sequence(seq)) => seq
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect(),
            _ => Vec::new(),
        };
        lines.truncate(4);
        while lines.len() < 4 {
            lines.push(default[lines.len()].to_owned());
        }
        self.set(
            key,
            Value::Sequence(lines.iter().cloned().map(Value::String).collect()),
        );
        std::array::from_fn(|index| lines[index].clone())
    }

    /// Reads a boolean without writing a default back. Absent or ill-typed
    /// values yield the default but do not trigger a rewrite, so operators
    /// who never set the key are not surprised by it appearing.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(stored)) => *stored,
            _ => default,
        }
    }

    /// Writes a string back only when it differs from the stored value.
    pub fn set_string_if_differs(&mut self, key: &str, value: &str) {
        let matches_stored = matches!(self.get(key), Some(Value::String(stored)) if stored == value);
        if !matches_stored {
            self.set(key, Value::String(value.to_owned()));
        }
    }

    /// Unconditionally replaces a value. Used for internal migrations, such
    /// as adjusting the score save interval when the SQL toggle changes.
    pub fn overwrite(&mut self, key: &str, value: impl Into<Value>) {
        self.set(key, value.into());
    }

    /// Deletes deprecated keys. Missing keys are ignored.
    pub fn remove_values(&mut self, keys: &[&str]) {
        for key in keys {
            let parts: Vec<&str> = key.split('.').collect();
            Self::remove_path(&mut self.root, &parts);
        }
    }

    /// Serializes the document back to disk with a `#`-commented header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Save`] on write failure; the caller must not
    /// silently continue with a partially persisted configuration.
    pub fn save(&self, header: &str) -> Result<()> {
        write_document(&self.path, header, &self.root)
    }

    fn get(&self, key: &str) -> Option<&Value> {
        let mut map = &self.root;
        let mut parts = key.split('.').peekable();
        while let Some(part) = parts.next() {
            let value = map.get(part)?;
            if parts.peek().is_none() {
                return Some(value);
            }
            map = value.as_mapping()?;
        }
        None
    }

    fn set(&mut self, key: &str, value: Value) {
        let parts: Vec<&str> = key.split('.').collect();
        Self::set_path(&mut self.root, &parts, value);
    }

    fn set_path(map: &mut Mapping, parts: &[&str], value: Value) {
        if parts.len() == 1 {
            map.insert(Value::String(parts[0].to_owned()), value);
            return;
        }
        let section = Value::String(parts[0].to_owned());
        if !matches!(map.get(&section), Some(Value::Mapping(_))) {
            map.insert(section.clone(), Value::Mapping(Mapping::new()));
        }
        if let Some(Value::Mapping(child)) = map.get_mut(&section) {
            Self::set_path(child, &parts[1..], value);
        }
    }

    fn remove_path(map: &mut Mapping, parts: &[&str]) -> bool {
        if parts.len() == 1 {
            return map.remove(parts[0]).is_some();
        }
        match map.get_mut(parts[0]) {
            Some(Value::Mapping(child)) => Self::remove_path(child, &parts[1..]),
            _ => false,
        }
    }
}

/// Serializes a document mapping to `path` with a `#`-commented header.
///
/// Shared by [`SettingsFile::save`] and the per-arena write-back.
///
/// # Errors
///
/// Returns [`Error::Save`] on write failure and [`Error::Format`] if the
/// document cannot be serialized.
pub(crate) fn write_document(path: &Path, header: &str, document: &Mapping) -> Result<()> {
    let body = serde_yaml::to_string(document).map_err(|source| Error::Format {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;
    let mut out = String::with_capacity(header.len() + body.len() + 64);
    for line in header.lines() {
        if line.is_empty() {
            out.push('#');
        } else {
            out.push_str("# ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out.push_str(&body);
    fs::write(path, out).map_err(|source| Error::Save {
        path: path.to_path_buf(),
        source,
    })
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    /// Round-trip law: for every supported key type, a get-or-set with a
    /// missing key returns the default AND leaves that default present in
    /// the file after `save()`.
    proptest! {
        #[test]
        fn prop_string_default_survives_save(
            key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}",
            value in "[a-zA-Z0-9 ]{0,24}",
        ) {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("settings.yml");
            let mut settings = SettingsFile::load(&path).unwrap();

            let returned = settings.get_set_string(&key, &value);
            prop_assert_eq!(&returned, &value);
            settings.save("round trip").unwrap();

            let mut reloaded = SettingsFile::load(&path).unwrap();
            let stored = reloaded.get_set_string(&key, "sentinel-other");
            prop_assert_eq!(stored, value);
        }
    }

    proptest! {
        #[test]
        fn prop_long_default_survives_save(
            key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}",
            value in any::<i64>(),
        ) {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("settings.yml");
            let mut settings = SettingsFile::load(&path).unwrap();

            prop_assert_eq!(settings.get_set_long(&key, value), value);
            settings.save("round trip").unwrap();

            let mut reloaded = SettingsFile::load(&path).unwrap();
            prop_assert_eq!(reloaded.get_set_long(&key, value.wrapping_add(1)), value);
        }
    }

    proptest! {
        #[test]
        fn prop_int_default_survives_save(
            key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}",
            value in any::<i32>(),
        ) {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("settings.yml");
            let mut settings = SettingsFile::load(&path).unwrap();

            prop_assert_eq!(settings.get_set_int(&key, value), value);
            settings.save("round trip").unwrap();

            let mut reloaded = SettingsFile::load(&path).unwrap();
            prop_assert_eq!(reloaded.get_set_int(&key, value.wrapping_add(1)), value);
        }
    }

    proptest! {
        #[test]
        fn prop_string_list_default_survives_save(
            key in "[a-z]{1,8}",
            values in prop::collection::vec("[a-z0-9-]{1,12}", 0..6),
        ) {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("settings.yml");
            let mut settings = SettingsFile::load(&path).unwrap();

            let defaults: Vec<&str> = values.iter().map(String::as_str).collect();
            let returned = settings.get_set_string_list(&key, &defaults);
            prop_assert_eq!(&returned, &values);
            settings.save("round trip").unwrap();

            let mut reloaded = SettingsFile::load(&path).unwrap();
            let stored = reloaded.get_set_string_list(&key, &["sentinel"]);
            prop_assert_eq!(stored, values);
        }
    }
}
