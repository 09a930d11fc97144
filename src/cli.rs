//! Command-line interface for kvconf
//!
//! Every subcommand works on a single `key=value` file.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kvconf::format::write_entry;
use kvconf::{ConfigError, ConfigStore};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "kvconf", version, about = "Read and edit key=value configuration files")]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the value of a key
    Get {
        file: PathBuf,
        key: String,
        /// Printed when the key is absent
        #[arg(short, long)]
        default: Option<String>,
    },
    /// Print whether a key is present
    Has { file: PathBuf, key: String },
    /// Set a key, creating the file if needed
    Set {
        file: PathBuf,
        key: String,
        value: String,
    },
    /// Remove a key
    Unset { file: PathBuf, key: String },
    /// Print every entry sorted by key
    List {
        file: PathBuf,
        /// Print a JSON object instead of key = value lines
        #[arg(long)]
        json: bool,
    },
}

/// Execute a subcommand, writing its output to `out`
pub fn run<W: Write>(command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Get { file, key, default } => {
            let store = open(&file)?;
            let value = match default {
                Some(default) => store.get_with_default(&key, &default),
                None => store.get(&key),
            };
            writeln!(out, "{}", value)?;
        }
        Commands::Has { file, key } => {
            let store = open(&file)?;
            writeln!(out, "{}", store.has(&key))?;
        }
        Commands::Set { file, key, value } => {
            let store = open_or_empty(&file)?;
            store
                .set(key.as_str(), value)
                .with_context(|| format!("Failed to set '{}'", key))?;
            store
                .save(&file)
                .with_context(|| format!("Failed to save {}", file.display()))?;
            info!("Set '{}' in {}", key, file.display());
        }
        Commands::Unset { file, key } => {
            let store = open_or_empty(&file)?;
            store.delete(&key);
            store
                .save(&file)
                .with_context(|| format!("Failed to save {}", file.display()))?;
            info!("Removed '{}' from {}", key, file.display());
        }
        Commands::List { file, json } => {
            let store = open(&file)?;
            let entries: BTreeMap<String, String> = store.get_all().into_iter().collect();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
            } else {
                for (key, value) in &entries {
                    write_entry(out, key, value)?;
                }
            }
        }
    }

    Ok(())
}

fn open(path: &Path) -> Result<ConfigStore> {
    let store = ConfigStore::new();
    store
        .load(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(store)
}

fn open_or_empty(path: &Path) -> Result<ConfigStore> {
    let store = ConfigStore::new();
    match store.load(path) {
        Ok(()) => Ok(store),
        Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist, starting empty", path.display());
            Ok(store)
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("Failed to load {}", path.display()))),
    }
}
