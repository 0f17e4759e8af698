//! Export/import of all stored page records
//!
//! The export format is a single versioned JSON envelope holding the raw
//! record of every known page key. Import validates the whole envelope
//! before writing anything, so a malformed file leaves existing data
//! untouched.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pages;
use crate::store;

/// Envelope format version; bump on incompatible changes
pub const EXPORT_VERSION: u32 = 1;
/// App tag guarding against importing some other tool's JSON
pub const APP_TAG: &str = "nivesh-dash";

/// The serialized export file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEnvelope {
    pub app: String,
    pub version: u32,
    pub exported_at_ms: f64,
    /// Storage key → raw page record
    pub pages: BTreeMap<String, Value>,
}

/// Why an import was rejected (nothing is written on any of these)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Not JSON, or not the envelope shape
    Parse(String),
    /// Envelope belongs to a different app
    WrongApp(String),
    /// Envelope written by a newer release
    NewerVersion(u32),
    /// Envelope carried no known page records
    Empty,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Parse(e) => write!(f, "not a valid export file: {e}"),
            ImportError::WrongApp(app) => write!(f, "export belongs to '{app}'"),
            ImportError::NewerVersion(v) => {
                write!(f, "export version {v} is newer than this app supports")
            }
            ImportError::Empty => f.write_str("export contains no page data"),
        }
    }
}

impl std::error::Error for ImportError {}

/// Snapshot every stored page record into an envelope. Pages that were never
/// saved (or hold corrupt JSON) are simply absent.
pub fn export_envelope() -> ExportEnvelope {
    let mut pages_map = BTreeMap::new();
    for &key in pages::ALL_KEYS {
        if let Some(json) = store::raw_get(key) {
            match serde_json::from_str::<Value>(&json) {
                Ok(value) => {
                    pages_map.insert(key.to_string(), value);
                }
                Err(e) => log::warn!("Skipping corrupt record at {key} during export: {e}"),
            }
        }
    }
    ExportEnvelope {
        app: APP_TAG.to_string(),
        version: EXPORT_VERSION,
        exported_at_ms: store::now_ms(),
        pages: pages_map,
    }
}

/// Export everything as pretty-printed JSON (the downloadable file body)
pub fn export_json() -> String {
    serde_json::to_string_pretty(&export_envelope())
        .unwrap_or_else(|_| String::from("{}"))
}

/// Import an envelope, overwriting the page keys it carries. Unknown keys
/// are skipped; pages absent from the envelope keep their current data.
/// Returns the number of pages written.
pub fn import_json(json: &str) -> Result<usize, ImportError> {
    let envelope: ExportEnvelope =
        serde_json::from_str(json).map_err(|e| ImportError::Parse(e.to_string()))?;

    if envelope.app != APP_TAG {
        return Err(ImportError::WrongApp(envelope.app));
    }
    if envelope.version > EXPORT_VERSION {
        return Err(ImportError::NewerVersion(envelope.version));
    }

    // Stage everything before writing so a bad envelope changes nothing
    let mut staged: Vec<(&str, String)> = Vec::new();
    for (key, value) in &envelope.pages {
        let Some(&known) = pages::ALL_KEYS.iter().find(|&&k| k == key.as_str()) else {
            log::warn!("Ignoring unknown page key '{key}' in import");
            continue;
        };
        let raw = serde_json::to_string(value).map_err(|e| ImportError::Parse(e.to_string()))?;
        staged.push((known, raw));
    }
    if staged.is_empty() {
        return Err(ImportError::Empty);
    }

    let count = staged.len();
    for (key, raw) in staged {
        store::raw_set(key, &raw);
    }
    log::info!("Imported {count} page records");
    Ok(count)
}
