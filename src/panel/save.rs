//! Persisting a generated document as `MindMap.md`

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub const MIND_MAP_FILE: &str = "MindMap.md";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no workspace folder is open")]
    NoWorkspaceOpen,

    #[error("{}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Directory that receives `MindMap.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    /// Next to the installed tool.
    ExtensionRoot(PathBuf),
    /// Root of the open workspace, if there is one.
    Workspace(Option<PathBuf>),
}

impl SaveTarget {
    /// Directory containing the running executable, falling back to `.`.
    pub fn extension_root() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        SaveTarget::ExtensionRoot(dir)
    }

    pub fn destination(&self) -> Result<PathBuf, SaveError> {
        match self {
            SaveTarget::ExtensionRoot(dir) => Ok(dir.join(MIND_MAP_FILE)),
            SaveTarget::Workspace(Some(dir)) => Ok(dir.join(MIND_MAP_FILE)),
            SaveTarget::Workspace(None) => Err(SaveError::NoWorkspaceOpen),
        }
    }
}

/// Write `text` verbatim as UTF-8 to the target's `MindMap.md`.
pub fn save_mind_map(target: &SaveTarget, text: &str) -> Result<PathBuf, SaveError> {
    let path = target.destination()?;
    std::fs::write(&path, text.as_bytes()).map_err(|source| SaveError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "saved mind map");
    Ok(path)
}
