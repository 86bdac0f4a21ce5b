//! Depth-first traversal driving a renderer.
//!
//! The walk uses an explicit stack of frames instead of recursion, so deep
//! trees cannot exhaust the call stack. Entries are still visited in the
//! same pre-order a recursive walk would produce: a directory's own line
//! first, then its children in partitioned order.

use std::path::Path;
use std::rc::Rc;

use tracing::warn;

use super::config::StatErrorPolicy;
use super::entry::{Entry, FileId, Position};
use super::error::WalkError;
use super::walker::DirectoryWalker;

/// Sink for entries produced by a traversal.
pub trait Renderer {
    /// Called once per entry, in walk order.
    fn visit(&mut self, entry: &Entry, position: Position<'_>);

    fn into_output(self) -> String
    where
        Self: Sized;
}

/// Directory identities from the walk root down to the current directory.
struct Ancestry {
    id: FileId,
    parent: Option<Rc<Ancestry>>,
}

impl Ancestry {
    fn contains(&self, id: FileId) -> bool {
        let mut node = Some(self);
        while let Some(current) = node {
            if current.id == id {
                return true;
            }
            node = current.parent.as_deref();
        }
        false
    }
}

struct Frame {
    entry: Entry,
    depth: usize,
    is_last: bool,
    parent: Option<Rc<str>>,
    ancestry: Option<Rc<Ancestry>>,
}

impl DirectoryWalker {
    /// Walk the subtree under `root`, handing every entry to `renderer`.
    ///
    /// `depth` is the depth assigned to the root's direct children and
    /// `parent` the name they report as their parent.
    pub fn traverse<R: Renderer + ?Sized>(
        &self,
        root: &Path,
        depth: usize,
        parent: Option<&str>,
        renderer: &mut R,
    ) -> Result<(), WalkError> {
        let ancestry = if self.config().cycle_guard {
            FileId::of_path(root).map(|id| Rc::new(Ancestry { id, parent: None }))
        } else {
            None
        };

        let mut stack = Vec::new();
        push_children(
            &mut stack,
            self.walk(root)?,
            depth,
            parent.map(Rc::from),
            ancestry,
        );

        while let Some(frame) = stack.pop() {
            renderer.visit(
                &frame.entry,
                Position {
                    depth: frame.depth,
                    is_last: frame.is_last,
                    parent: frame.parent.as_deref(),
                },
            );

            if !frame.entry.is_dir {
                continue;
            }

            let ancestry = match (self.config().cycle_guard, frame.entry.id) {
                (true, Some(id)) => {
                    if frame.ancestry.as_ref().is_some_and(|a| a.contains(id)) {
                        warn!(path = %frame.entry.path.display(), "directory cycle, not descending");
                        continue;
                    }
                    Some(Rc::new(Ancestry {
                        id,
                        parent: frame.ancestry.clone(),
                    }))
                }
                _ => frame.ancestry.clone(),
            };

            let children = match self.walk(&frame.entry.path) {
                Ok(children) => children,
                Err(e) if self.config().on_stat_error == StatErrorPolicy::Skip => {
                    warn!(error = %e, "skipping directory contents");
                    continue;
                }
                Err(e) => return Err(e),
            };

            push_children(
                &mut stack,
                children,
                frame.depth + 1,
                Some(Rc::from(frame.entry.name.as_str())),
                ancestry,
            );
        }

        Ok(())
    }
}

/// Push one directory's children so they pop in partitioned order.
fn push_children(
    stack: &mut Vec<Frame>,
    children: Vec<Entry>,
    depth: usize,
    parent: Option<Rc<str>>,
    ancestry: Option<Rc<Ancestry>>,
) {
    let last = children.len().saturating_sub(1);
    for (index, entry) in children.into_iter().enumerate().rev() {
        stack.push(Frame {
            entry,
            depth,
            is_last: index == last,
            parent: parent.clone(),
            ancestry: ancestry.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::WalkerConfig;
    use std::fs;
    use tempfile::TempDir;

    /// Records every visit for inspection.
    #[derive(Default)]
    struct Recorder {
        visits: Vec<(String, usize, bool, Option<String>)>,
        text: String,
    }

    impl Renderer for Recorder {
        fn visit(&mut self, entry: &Entry, position: Position<'_>) {
            self.text.push_str(&entry.name);
            self.text.push('\n');
            self.visits.push((
                entry.name.clone(),
                position.depth,
                position.is_last,
                position.parent.map(str::to_string),
            ));
        }

        fn into_output(self) -> String {
            self.text
        }
    }

    #[test]
    fn test_preorder_with_depth_and_parent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/inner")).unwrap();
        fs::write(dir.path().join("a/inner/deep.txt"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();

        let mut recorder = Recorder::default();
        DirectoryWalker::default()
            .traverse(dir.path(), 0, None, &mut recorder)
            .unwrap();

        assert_eq!(
            recorder.visits,
            vec![
                ("a".to_string(), 0, false, None),
                ("inner".to_string(), 1, true, Some("a".to_string())),
                ("deep.txt".to_string(), 2, true, Some("inner".to_string())),
                ("b.txt".to_string(), 0, true, None),
            ]
        );
        assert_eq!(recorder.into_output(), "a\ninner\ndeep.txt\nb.txt\n");
    }

    #[test]
    fn test_start_depth_and_parent_are_applied_to_root_children() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("only.txt"), "").unwrap();

        let mut recorder = Recorder::default();
        DirectoryWalker::default()
            .traverse(dir.path(), 3, Some("root"), &mut recorder)
            .unwrap();

        assert_eq!(
            recorder.visits,
            vec![("only.txt".to_string(), 3, true, Some("root".to_string()))]
        );
    }

    #[test]
    fn test_missing_root_visits_nothing() {
        let mut recorder = Recorder::default();
        DirectoryWalker::default()
            .traverse(Path::new("/does/not/exist"), 0, None, &mut recorder)
            .unwrap();
        assert!(recorder.visits.is_empty());
        assert_eq!(recorder.into_output(), "");
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let dir = TempDir::new().unwrap();
        let mut path = dir.path().to_path_buf();
        for _ in 0..64 {
            path.push("d");
        }
        fs::create_dir_all(&path).unwrap();

        let mut recorder = Recorder::default();
        DirectoryWalker::default()
            .traverse(dir.path(), 0, None, &mut recorder)
            .unwrap();

        assert_eq!(recorder.visits.len(), 64);
        assert_eq!(recorder.visits.last().unwrap().1, 63);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_is_listed_but_not_descended() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/file.txt"), "").unwrap();
        symlink("..", dir.path().join("sub/up")).unwrap();

        let mut recorder = Recorder::default();
        DirectoryWalker::default()
            .traverse(dir.path(), 0, None, &mut recorder)
            .unwrap();

        let names: Vec<_> = recorder.visits.iter().map(|v| v.0.as_str()).collect();
        assert_eq!(names, vec!["sub", "up", "file.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_skipped_with_skip_policy() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("secret.txt"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits; nothing to observe there.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            eprintln!("test_unreadable_subdirectory_skipped_with_skip_policy: permissions not enforced, skipping checks");
            return;
        }

        let walker = DirectoryWalker::new(WalkerConfig {
            on_stat_error: StatErrorPolicy::Skip,
            ..Default::default()
        });
        let mut recorder = Recorder::default();
        let result = walker.traverse(dir.path(), 0, None, &mut recorder);

        let aborted = DirectoryWalker::default().traverse(dir.path(), 0, None, &mut Recorder::default());

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        result.unwrap();
        let names: Vec<_> = recorder.visits.iter().map(|v| v.0.as_str()).collect();
        assert_eq!(names, vec!["locked"]);
        assert!(matches!(aborted, Err(WalkError::ReadDir { .. })));
    }
}
