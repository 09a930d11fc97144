use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::{ConfigError, Result};
use crate::format;

/// Thread-safe in-memory key-value configuration store
///
/// Reads (`get`, `has`, `get_all`, `save`, ...) share the lock, while
/// `set`, `delete` and `load` take it exclusively.
#[derive(Debug)]
pub struct ConfigStore {
    data: RwLock<HashMap<String, String>>,
}

impl ConfigStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Merge entries parsed from a `key=value` file into the store.
    ///
    /// The write lock is held across the whole read. Lines applied before a
    /// read error stay applied.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut data = self.data.write();

        let file = File::open(path).map_err(|e| ConfigError::io(path, e))?;
        let applied = merge_lines(&mut data, BufReader::new(file), path)?;

        debug!("Loaded {} entries from {}", applied, path.display());
        Ok(())
    }

    /// Get the value for a key, or an empty string if it is absent
    pub fn get(&self, key: &str) -> String {
        self.data.read().get(key).cloned().unwrap_or_default()
    }

    /// Get the value for a key, falling back to `default`
    pub fn get_with_default(&self, key: &str, default: &str) -> String {
        match self.data.read().get(key) {
            Some(value) => value.clone(),
            None => default.to_string(),
        }
    }

    /// Set a key to the given value. Empty keys are rejected.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::InvalidArgument(
                "key cannot be empty".to_string(),
            ));
        }

        self.data.write().insert(key, value.into());
        Ok(())
    }

    /// Check whether a key is present
    pub fn has(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }

    /// Remove a key; absent keys are ignored
    pub fn delete(&self, key: &str) {
        self.data.write().remove(key);
    }

    /// Snapshot of every entry. Changes to the returned map don't reach the store.
    pub fn get_all(&self) -> HashMap<String, String> {
        self.data.read().clone()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Write every entry to `path` as `key = value` lines, truncating the file.
    ///
    /// Keys are written in sorted order. The read lock is held until the
    /// output has been flushed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = self.data.read();

        let file = File::create(path).map_err(|e| ConfigError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        let mut keys: Vec<&String> = data.keys().collect();
        keys.sort();
        for key in keys {
            format::write_entry(&mut writer, key, &data[key])
                .map_err(|e| ConfigError::io(path, e))?;
        }
        writer.flush().map_err(|e| ConfigError::io(path, e))?;

        debug!("Saved {} entries to {}", data.len(), path.display());
        Ok(())
    }
}

/// Apply every `key=value` line of `reader` to `data`, returning how many
/// entries were applied.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected. A read
/// error stops the scan and leaves earlier lines in place.
fn merge_lines<R: BufRead>(
    data: &mut HashMap<String, String>,
    mut reader: R,
    path: &Path,
) -> Result<usize> {
    let mut buf = Vec::new();
    let mut applied = 0usize;
    let mut line_num = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| ConfigError::io(path, e))?;
        if n == 0 {
            break;
        }
        line_num += 1;

        let line = String::from_utf8_lossy(&buf);
        match format::parse_line(&line) {
            Some((key, value)) => {
                data.insert(key.to_string(), value.to_string());
                applied += 1;
            }
            None => trace!("{}:{}: skipped", path.display(), line_num),
        }
    }

    Ok(applied)
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
