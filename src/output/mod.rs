//! Renderers driven by the directory walk
//!
//! - `tree` - indented tree with connector glyphs and icons
//! - `graph` - `parent --> child` edge list for flow diagrams
//! - `outline` - nested markdown bullet list
//!
//! Every renderer performs its own walk; nothing is shared between them.

mod config;
mod graph;
mod outline;
mod tree;

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::tree::{DirectoryWalker, WalkError};

// Re-export public types and functions
pub use config::{Markup, SecondView};
pub use graph::{GraphRenderer, render_graph};
pub use outline::{OutlineRenderer, render_outline};
pub use tree::{
    BRANCH, DIR_ICON, FILE_ICON, LAST_BRANCH, ROOT_ICON, TreeRenderer, VERTICAL, frame_root,
    render_tree, render_tree_with,
};

impl SecondView {
    /// Render this view for the subtree under `path`.
    pub fn render(self, walker: &DirectoryWalker, path: &Path) -> Result<String, WalkError> {
        match self {
            SecondView::Graph => render_graph(walker, path, 0, ""),
            SecondView::Outline => render_outline(walker, path, 0),
        }
    }
}

/// The three renderings of one directory, each from its own walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Documents {
    pub root: String,
    pub tree: String,
    pub graph: String,
    pub outline: String,
}

impl Documents {
    pub fn render(walker: &DirectoryWalker, path: &Path) -> Result<Self, WalkError> {
        Ok(Self {
            root: root_name(path),
            tree: render_tree(walker, path, 0)?,
            graph: render_graph(walker, path, 0, "")?,
            outline: render_outline(walker, path, 0)?,
        })
    }
}

/// Basename of the walk root.
///
/// Paths ending in `..` are resolved against the filesystem first. A path
/// with no final component even then (`/`) names the root `""`.
pub fn root_name(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => Some(name.to_os_string()),
        None => path
            .canonicalize()
            .ok()
            .and_then(|resolved| resolved.file_name().map(|n| n.to_os_string())),
    };
    name.map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Print all three documents as pretty-printed JSON to stdout.
pub fn print_json(documents: &Documents) -> io::Result<()> {
    let json = serde_json::to_string_pretty(documents).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
