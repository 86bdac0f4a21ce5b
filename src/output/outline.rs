//! Markdown outline renderer
//!
//! Outputs the tree as a nested bullet list. Each depth level adds two
//! space pairs of indentation; no icons or connectors.

use std::path::Path;

use crate::tree::{DirectoryWalker, Entry, Position, Renderer, WalkError};

const INDENT_UNIT: &str = "  ";
const BULLET: &str = "- ";

#[derive(Default)]
pub struct OutlineRenderer {
    output: String,
}

impl OutlineRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for OutlineRenderer {
    fn visit(&mut self, entry: &Entry, position: Position<'_>) {
        self.output.push_str(&INDENT_UNIT.repeat(2 * position.depth));
        self.output.push_str(BULLET);
        self.output.push_str(&entry.name);
        self.output.push('\n');
    }

    fn into_output(self) -> String {
        self.output
    }
}

pub fn render_outline(walker: &DirectoryWalker, path: &Path, depth: usize) -> Result<String, WalkError> {
    let mut renderer = OutlineRenderer::new();
    walker.traverse(path, depth, None, &mut renderer)?;
    Ok(renderer.into_output())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_nested_outline() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("a/b.txt"), "").unwrap();

        let output = render_outline(&DirectoryWalker::default(), dir.path(), 0).unwrap();
        assert_eq!(output, "- a\n    - b.txt\n");
    }

    #[test]
    fn test_indent_doubles_per_level() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("one/two")).unwrap();
        fs::write(dir.path().join("one/two/three.md"), "").unwrap();

        let output = render_outline(&DirectoryWalker::default(), dir.path(), 0).unwrap();
        assert_eq!(output, "- one\n    - two\n        - three.md\n");
    }

    #[test]
    fn test_directories_listed_before_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        let output = render_outline(&DirectoryWalker::default(), dir.path(), 0).unwrap();
        assert_eq!(output, "- src\n- readme.md\n");
    }

    #[test]
    fn test_missing_path_renders_empty() {
        let output =
            render_outline(&DirectoryWalker::default(), Path::new("/does/not/exist"), 0).unwrap();
        assert_eq!(output, "");
    }
}
