//! Saving and restoring sessions through an injected key-value store.
//!
//! The store is a capability the embedding application provides: browser
//! storage behind a WASM boundary, a file, or [MemoryStorage] in tests. A
//! snapshot is a JSON blob tagged with [STORAGE_VERSION]; bump the version to
//! orphan blobs written by incompatible builds. Restoring anything stale or
//! unreadable wipes the store and starts over from the default session, so a
//! bad blob can never wedge the application.

use serde::{Deserialize, Serialize};

use crate::{
    errors::PersistError, field::Bitfield, layout::Layout, session::Explorer,
};

/// Snapshot format version. Bump to invalidate previously persisted state.
pub const STORAGE_VERSION: u32 = 1;

const STATE_KEY: &str = "explorer-state";

/// Key-value text storage provided by the embedding application. The core
/// arithmetic never touches this; only the save/load entry points here do.
pub trait Storage {
    /// Returns the stored text for `key`, if any.
    fn read(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str);
    /// Removes everything this application stored.
    fn clear(&mut self);
}

/// In-memory [Storage] for tests and embedded callers.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Serialized shape of a session. Separate from the live types so the stored
/// shape can evolve independently of them.
#[derive(Debug, Serialize, Deserialize)]
struct SessionDef {
    version: u32,
    example: String,
    fields: Vec<FieldDef>,
    packed: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct FieldDef {
    label: String,
    size: u32,
}

impl From<&Explorer> for SessionDef {
    fn from(session: &Explorer) -> Self {
        SessionDef {
            version: STORAGE_VERSION,
            example: session.example().to_string(),
            fields: session
                .fields()
                .iter()
                .map(|field| FieldDef {
                    label: field.label.clone(),
                    size: field.size,
                })
                .collect(),
            packed: session.packed(),
        }
    }
}

/// Encodes a version-tagged snapshot of `session`.
pub fn encode(session: &Explorer) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&SessionDef::from(session))?)
}

/// Decodes a snapshot. `None` for anything a current build cannot trust:
/// malformed JSON, a version mismatch, or a field sequence that no longer
/// compiles.
pub fn decode(blob: &str) -> Option<Explorer> {
    let def: SessionDef = serde_json::from_str(blob).ok()?;
    if def.version != STORAGE_VERSION {
        return None;
    }

    let fields: Vec<Bitfield> = def
        .fields
        .into_iter()
        .map(|field| Bitfield::new(field.label, field.size))
        .collect();
    Layout::compile(&fields).ok()?;

    Some(Explorer::from_parts(def.example, fields, def.packed))
}

/// Encodes and stores a snapshot of `session`.
pub fn save(storage: &mut dyn Storage, session: &Explorer) -> Result<(), PersistError> {
    let blob = encode(session)?;
    storage.write(STATE_KEY, &blob);
    Ok(())
}

/// Restores the last saved session. A missing snapshot starts the default
/// session; a stale or corrupt one additionally wipes the store, since the
/// blob itself may be what broke the previous run.
pub fn load(storage: &mut dyn Storage) -> Explorer {
    let Some(blob) = storage.read(STATE_KEY) else {
        return Explorer::new();
    };

    match decode(&blob) {
        Some(session) => session,
        None => {
            log::warn!("discarding unreadable session snapshot");
            storage.clear();
            Explorer::new()
        }
    }
}
