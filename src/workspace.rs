//! Target path resolution and workspace containment.
//!
//! Without a workspace root, the target is resolved against the current
//! directory and accepted as is. With a root, the target is resolved against
//! the root and must stay underneath it, both after lexical normalization
//! (`..` segments) and after resolving symlinks of the existing prefix.

use crate::error::EditError;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Resolves user-supplied file paths, optionally confined to a workspace root
#[derive(Debug, Clone)]
pub struct TargetResolver {
    workspace_root: Option<PathBuf>,
    current_dir: PathBuf,
}

impl TargetResolver {
    pub fn new(workspace_root: Option<PathBuf>, current_dir: PathBuf) -> Self {
        let workspace_root = workspace_root.map(|root| resolve_path(&current_dir.join(root)));
        Self {
            workspace_root,
            current_dir,
        }
    }

    /// Build a resolver rooted at the process working directory
    pub fn from_current_dir(workspace_root: Option<PathBuf>) -> Result<Self, EditError> {
        let current_dir = std::env::current_dir()
            .map_err(|e| EditError::Config(format!("Failed to read current directory: {}", e)))?;
        Ok(Self::new(workspace_root, current_dir))
    }

    /// Resolve `file` to an absolute path, enforcing containment when a
    /// workspace root is configured. Does not touch the file itself.
    pub fn resolve(&self, file: &Path) -> Result<PathBuf, EditError> {
        let Some(root) = self.workspace_root.as_deref() else {
            let resolved = resolve_path(&self.current_dir.join(file));
            debug!(path = %resolved.display(), "Resolved target without workspace root");
            return Ok(resolved);
        };

        let outside = || EditError::OutsideWorkspace {
            path: file.to_path_buf(),
            root: root.to_path_buf(),
        };

        let lexical = normalize_lexically(&root.join(file));
        if !is_within(&lexical, root) {
            return Err(outside());
        }

        let resolved = resolve_path(&lexical);
        if !is_within(&resolved, root) {
            return Err(outside());
        }

        debug!(
            path = %resolved.display(),
            root = %root.display(),
            "Resolved target inside workspace root"
        );
        Ok(resolved)
    }

    /// Resolve `file` and require that it names an existing regular file
    pub fn resolve_existing_file(&self, file: &Path) -> Result<PathBuf, EditError> {
        let resolved = self.resolve(file)?;
        if !resolved.is_file() {
            return Err(EditError::FileNotFound(resolved));
        }
        Ok(resolved)
    }
}

/// Drop `.` segments and fold `..` into its parent, without filesystem access
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            Component::Normal(name) => normalized.push(name),
        }
    }
    normalized
}

/// Normalize lexically, then canonicalize the deepest existing ancestor and
/// re-attach the remaining segments.
pub fn resolve_path(path: &Path) -> PathBuf {
    let normalized = normalize_lexically(path);

    let mut existing = normalized.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = dunce::canonicalize(existing) {
            let mut resolved = canonical;
            resolved.extend(missing.iter().rev());
            return resolved;
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return normalized,
        }
    }
}

/// Component-wise prefix check on NFC-normalized segments
fn is_within(path: &Path, root: &Path) -> bool {
    let path: Vec<String> = path.components().map(nfc_component).collect();
    let root: Vec<String> = root.components().map(nfc_component).collect();
    path.len() >= root.len() && path.iter().zip(&root).all(|(a, b)| a == b)
}

fn nfc_component(component: Component<'_>) -> String {
    component.as_os_str().to_string_lossy().nfc().collect()
}
