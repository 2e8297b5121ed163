//! The edit pipeline: resolve → load → apply edits → save.
//!
//! Checks run in a fixed order and the first failure aborts the request:
//! workspace containment, file existence, edits JSON shape, document parse,
//! root type, then each edit item. The file is written only after every
//! edit applied, so any failure before the write leaves it untouched.

use crate::config::EditorConfig;
use crate::document::Document;
use crate::edit::EditSet;
use crate::error::EditError;
use crate::workspace::TargetResolver;
use std::path::PathBuf;
use tracing::{debug, info};

/// A file to edit and its raw JSON edit list
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub file: PathBuf,
    pub edits: String,
}

impl EditRequest {
    pub fn new(file: impl Into<PathBuf>, edits: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            edits: edits.into(),
        }
    }
}

/// Result of a successful request
#[derive(Debug, Clone)]
pub struct EditOutcome {
    /// Resolved absolute path of the edited file
    pub path: PathBuf,
    /// Number of edits applied
    pub applied: usize,
    pub document: Document,
}

pub struct Editor {
    resolver: TargetResolver,
}

impl Editor {
    pub fn new(resolver: TargetResolver) -> Self {
        Self { resolver }
    }

    /// Editor rooted at the process working directory
    pub fn from_config(config: &EditorConfig) -> Result<Self, EditError> {
        let resolver = TargetResolver::from_current_dir(config.workspace_root.clone())?;
        Ok(Self::new(resolver))
    }

    /// Run every check and apply the edits in memory without writing
    pub fn apply(&self, request: &EditRequest) -> Result<EditOutcome, EditError> {
        let path = self.resolver.resolve_existing_file(&request.file)?;
        let edits = EditSet::parse(&request.edits)?;
        debug!(path = %path.display(), edits = edits.len(), "Edit request validated");

        let mut document = Document::load(&path)?;
        let applied = edits.apply(document.root_mut())?;

        Ok(EditOutcome {
            path,
            applied,
            document,
        })
    }

    /// Apply the edits and write the document back to its file
    pub fn run(&self, request: &EditRequest) -> Result<EditOutcome, EditError> {
        let outcome = self.apply(request)?;
        outcome.document.save(&outcome.path)?;
        info!(
            path = %outcome.path.display(),
            applied = outcome.applied,
            "Edits written"
        );
        Ok(outcome)
    }
}
