//! Sync status
//!
//!     Compares parsed entries against the remote index (id → signature) to decide what a push
//!     would do with each file. Transport is not handled here: the index is whatever the remote
//!     `/api/index` endpoint returned, already decoded.
//!
//!     A [`StatusReport`] drives a whole batch. Parse failures are recorded per file and never
//!     stop the batch; ids the remote knows about but no local file claimed are reported as
//!     missing once all files are in.

use crate::entry::Entry;
use crate::error::LoadError;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

/// What a push would do with a published entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryStatus {
    /// No id yet, the remote side will create it
    New,
    /// Has an id the remote side does not know
    Backup,
    /// Remote signature matches
    Same,
    /// Remote signature differs
    Changed,
}

impl EntryStatus {
    pub fn label(self) -> &'static str {
        match self {
            EntryStatus::New => "NEW",
            EntryStatus::Backup => "BACKUP",
            EntryStatus::Same => "SAME",
            EntryStatus::Changed => "CHANGED",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Deserialize)]
struct IndexRecord {
    id: i64,
    signature: String,
}

/// Signatures of the entries stored remotely, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteIndex {
    signatures: HashMap<i64, String>,
}

impl RemoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the index endpoint payload: `[{"id": 1, "signature": "..."}, ...]`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let records: Vec<IndexRecord> = serde_json::from_str(json)?;
        Ok(records
            .into_iter()
            .map(|record| (record.id, record.signature))
            .collect())
    }

    pub fn insert(&mut self, id: i64, signature: impl Into<String>) {
        self.signatures.insert(id, signature.into());
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.signatures.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.signatures.keys().copied()
    }

    pub fn classify(&self, entry: &Entry) -> EntryStatus {
        let Some(id) = entry.public_id() else {
            return EntryStatus::New;
        };
        match self.get(id) {
            None => EntryStatus::Backup,
            Some(remote) if remote == entry.signature() => EntryStatus::Same,
            Some(_) => EntryStatus::Changed,
        }
    }
}

impl FromIterator<(i64, String)> for RemoteIndex {
    fn from_iter<T: IntoIterator<Item = (i64, String)>>(iter: T) -> Self {
        Self {
            signatures: iter.into_iter().collect(),
        }
    }
}

/// Result for one file of a batch
#[derive(Debug)]
pub enum FileOutcome {
    /// Published for the target and classified
    Classified {
        path: PathBuf,
        status: EntryStatus,
        entry: Entry,
    },
    /// Parsed fine but not published for the target
    Unpublished { path: PathBuf },
    Failed { path: PathBuf, error: LoadError },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Classified { path, .. }
            | FileOutcome::Unpublished { path }
            | FileOutcome::Failed { path, .. } => path,
        }
    }
}

#[derive(Debug)]
pub struct StatusReport<'a> {
    index: &'a RemoteIndex,
    pending: BTreeSet<i64>,
    outcomes: Vec<FileOutcome>,
}

impl<'a> StatusReport<'a> {
    pub fn new(index: &'a RemoteIndex) -> Self {
        Self {
            index,
            pending: index.ids().collect(),
            outcomes: Vec::new(),
        }
    }

    /// Record the parse result for `path` and return how it was classified.
    pub fn record(
        &mut self,
        path: impl Into<PathBuf>,
        parsed: Result<Entry, LoadError>,
    ) -> &FileOutcome {
        let path = path.into();
        let outcome = match parsed {
            Err(error) => FileOutcome::Failed { path, error },
            Ok(entry) if !entry.is_published() => FileOutcome::Unpublished { path },
            Ok(entry) => {
                let status = self.index.classify(&entry);
                if matches!(status, EntryStatus::Same | EntryStatus::Changed) {
                    if let Some(id) = entry.public_id() {
                        self.pending.remove(&id);
                    }
                }
                FileOutcome::Classified {
                    path,
                    status,
                    entry,
                }
            }
        };
        self.outcomes.push(outcome);
        &self.outcomes[self.outcomes.len() - 1]
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    /// Remote ids not matched by any local file so far, ascending.
    pub fn missing(&self) -> impl Iterator<Item = i64> + '_ {
        self.pending.iter().copied()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o, FileOutcome::Failed { .. }))
    }
}
