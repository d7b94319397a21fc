//! Workflow persistence: a single JSON file holding a collection of saved
//! workflows keyed by workflow id, the file-backed analogue of the editor's
//! local key-value store.

use crate::error::StoreError;
use crate::graph::Workflow;
use ahash::AHashMap;
use chrono::Utc;
use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};

/// A file-backed collection of saved workflows.
///
/// Every mutation rewrites the whole file; entries are small JSON documents
/// and the store is single-owner within a session.
#[derive(Debug)]
pub struct WorkflowStore {
    path: PathBuf,
    entries: AHashMap<String, Workflow>,
}

impl WorkflowStore {
    /// Opens a store at the given path, creating an empty one if the file
    /// does not exist yet.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = if path.exists() {
            let text = fs::read_to_string(path).map_err(|e| StoreError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            serde_json::from_str(&text).map_err(|e| StoreError::JsonParse(e.to_string()))?
        } else {
            AHashMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Saves a workflow, assigning an id on first save and stamping
    /// `lastSaved` with the current time. Returns the stored workflow with
    /// its id filled in.
    pub fn save(&mut self, mut workflow: Workflow) -> Result<Workflow, StoreError> {
        let now = Utc::now();
        let id = match workflow.id.clone() {
            Some(id) => id,
            None => self.fresh_id(now.timestamp_millis()),
        };
        workflow.id = Some(id.clone());
        workflow.last_saved = Some(now);
        self.entries.insert(id, workflow.clone());
        self.flush()?;
        Ok(workflow)
    }

    /// Loads a stored workflow by id.
    pub fn load(&self, id: &str) -> Result<Workflow, StoreError> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::WorkflowNotFound(id.to_string()))
    }

    /// Deletes a stored workflow by id.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        if self.entries.remove(id).is_none() {
            return Err(StoreError::WorkflowNotFound(id.to_string()));
        }
        self.flush()
    }

    /// All stored workflows, ordered by display name.
    pub fn list(&self) -> Vec<&Workflow> {
        self.entries
            .values()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn fresh_id(&self, millis: i64) -> String {
        let base = format!("wf-{}", millis);
        if !self.entries.contains_key(&base) {
            return base;
        }
        // Same-millisecond saves get a numeric suffix.
        let fallback = (2..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| !self.entries.contains_key(candidate));
        fallback.unwrap_or(base)
    }

    fn flush(&self) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StoreError::JsonParse(e.to_string()))?;
        fs::write(&self.path, text).map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}
