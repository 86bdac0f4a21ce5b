//! Indented tree renderer
//!
//! Each entry becomes one line: a `┃ ` per depth level, a connector
//! (`┣ ` for a continuing sibling, `┗ ` for the last one), an icon and the
//! entry name.

use std::path::Path;

use crate::tree::{DirectoryWalker, Entry, Position, Renderer, WalkError};

use super::config::Markup;
use super::escape_html;

pub const VERTICAL: &str = "┃ ";
pub const BRANCH: &str = "┣ ";
pub const LAST_BRANCH: &str = "┗ ";

pub const DIR_ICON: &str = "📂";
pub const FILE_ICON: &str = "📜";
pub const ROOT_ICON: &str = "📦";

/// Builds the tree view one line per entry.
pub struct TreeRenderer {
    markup: Markup,
    output: String,
}

impl TreeRenderer {
    pub fn new(markup: Markup) -> Self {
        Self {
            markup,
            output: String::new(),
        }
    }

    fn push_icon(&mut self, icon: &str) {
        match self.markup {
            Markup::Plain => self.output.push_str(icon),
            Markup::Html => {
                self.output.push_str(r#"<span class="t-icon" name="icons">"#);
                self.output.push_str(icon);
                self.output.push_str("</span>");
            }
        }
    }

    fn push_name(&mut self, name: &str) {
        match self.markup {
            Markup::Plain => self.output.push_str(name),
            Markup::Html => self.output.push_str(&escape_html(name)),
        }
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new(Markup::Plain)
    }
}

impl Renderer for TreeRenderer {
    fn visit(&mut self, entry: &Entry, position: Position<'_>) {
        for _ in 0..position.depth {
            self.output.push_str(VERTICAL);
        }
        self.output
            .push_str(if position.is_last { LAST_BRANCH } else { BRANCH });
        self.push_icon(if entry.is_dir { DIR_ICON } else { FILE_ICON });
        self.push_name(&entry.name);
        self.output.push('\n');
    }

    fn into_output(self) -> String {
        self.output
    }
}

/// Render the subtree under `path` as plain tree lines starting at `depth`.
///
/// The root itself is not part of the output; see [`frame_root`].
pub fn render_tree(walker: &DirectoryWalker, path: &Path, depth: usize) -> Result<String, WalkError> {
    render_tree_with(walker, path, depth, Markup::Plain)
}

pub fn render_tree_with(
    walker: &DirectoryWalker,
    path: &Path,
    depth: usize,
    markup: Markup,
) -> Result<String, WalkError> {
    let mut renderer = TreeRenderer::new(markup);
    walker.traverse(path, depth, None, &mut renderer)?;
    Ok(renderer.into_output())
}

/// Heading line naming the walk root, placed above the rendered tree.
pub fn frame_root(root_name: &str, markup: Markup) -> String {
    match markup {
        Markup::Plain => format!("{}{}\n", ROOT_ICON, root_name),
        Markup::Html => format!(
            r#"<b><span class="t-icon" name="icons">{}</span>{}</b>"#,
            ROOT_ICON,
            escape_html(root_name)
        ) + "\n",
    }
}
