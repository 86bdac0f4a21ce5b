//! Flow-diagram edge list renderer
//!
//! Emits one `parent --> child` statement per contained entry, suitable as
//! the body of a mermaid `graph` block. Nodes are named by basename only,
//! so two entries with the same name in different directories share a node.

use std::path::Path;

use crate::tree::{DirectoryWalker, Entry, Position, Renderer, WalkError};

const EDGE_INDENT: &str = "    ";
const ARROW: &str = " --> ";

#[derive(Default)]
pub struct GraphRenderer {
    output: String,
}

impl GraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for GraphRenderer {
    fn visit(&mut self, entry: &Entry, position: Position<'_>) {
        // Entries directly under the walk root have no visible parent node
        let Some(parent) = position.parent.filter(|p| !p.is_empty()) else {
            return;
        };
        self.output.push_str(EDGE_INDENT);
        self.output.push_str(parent);
        self.output.push_str(ARROW);
        self.output.push_str(&entry.name);
        self.output.push('\n');
    }

    fn into_output(self) -> String {
        self.output
    }
}

/// Render the containment edges under `path`.
///
/// `parent_name` names the node the root's children hang from; pass `""`
/// to leave the root out of the diagram.
pub fn render_graph(
    walker: &DirectoryWalker,
    path: &Path,
    depth: usize,
    parent_name: &str,
) -> Result<String, WalkError> {
    let mut renderer = GraphRenderer::new();
    let parent = Some(parent_name).filter(|p| !p.is_empty());
    walker.traverse(path, depth, parent, &mut renderer)?;
    Ok(renderer.into_output())
}
